// Indie Film Network - Feed Engine Core
//
// This crate provides the listing engine behind the community site's events
// and resources feeds: typed item models, pure filter evaluation, an
// incremental pagination window, and feed orchestration with simulated fetch
// latency and last-write-wins publication.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
