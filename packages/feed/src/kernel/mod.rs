// Infrastructure layer: DI traits and the generic feed orchestrator

pub mod feed;
pub mod traits;

pub use feed::{evaluate, Feed, FeedOptions, FeedPage, FeedQuery};
pub use traits::{BaseCatalog, StaticCatalog};
