// Resources domain - articles, guides, and case studies on the resources feed

pub mod data;
pub mod feed;
pub mod models;

pub use feed::ResourcesFeed;
pub use models::{CategoryFilter, Resource, ResourceCategory, ResourceCriteria};
