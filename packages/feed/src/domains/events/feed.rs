//! Events feed binding - the domain surface over the generic feed.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use crate::domains::events::models::{CommunityEvent, EventCriteria, KindFilter};
use crate::kernel::feed::{Feed, FeedOptions, FeedPage};
use crate::kernel::traits::BaseCatalog;

/// The community events feed.
///
/// Wraps the generic feed with the mutators the rendering layer uses:
/// kind tabs and the "find events near you" box.
pub struct EventsFeed {
    inner: Feed<EventCriteria>,
}

impl EventsFeed {
    /// Mount the feed with default criteria (all kinds, no location).
    pub async fn mount(
        catalog: &dyn BaseCatalog<CommunityEvent>,
        options: FeedOptions,
    ) -> Result<Self> {
        let inner = Feed::mount(catalog, EventCriteria::default(), options).await?;
        Ok(Self { inner })
    }

    /// Switch the kind tab.
    pub fn set_kind(&mut self, kind: KindFilter) {
        self.inner.set_criteria(|criteria| criteria.kind = kind);
    }

    /// Update the location text. Non-empty re-sorts by mock proximity.
    pub fn set_near(&mut self, near: impl Into<String>) {
        let near = near.into();
        self.inner.set_criteria(|criteria| criteria.near = near);
    }

    /// Reveal the next page of results.
    pub fn load_more(&mut self) {
        self.inner.load_more();
    }

    /// The visible slice plus paging state.
    pub fn page(&self) -> FeedPage<CommunityEvent> {
        self.inner.page()
    }

    /// Active criteria, for reflecting control state.
    pub fn criteria(&self) -> &EventCriteria {
        self.inner.criteria()
    }

    /// Subscribe to published result sets.
    pub fn watch(&self) -> watch::Receiver<Arc<Vec<CommunityEvent>>> {
        self.inner.watch()
    }
}
