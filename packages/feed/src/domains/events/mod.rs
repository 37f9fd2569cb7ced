// Events domain - community gatherings surfaced on the events feed

pub mod data;
pub mod feed;
pub mod models;

pub use feed::EventsFeed;
pub use models::{CommunityEvent, EventCriteria, EventKind, KindFilter};
