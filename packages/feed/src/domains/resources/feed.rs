//! Resources feed binding - the domain surface over the generic feed.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use crate::domains::resources::models::{CategoryFilter, Resource, ResourceCriteria};
use crate::kernel::feed::{Feed, FeedOptions, FeedPage};
use crate::kernel::traits::BaseCatalog;

/// The resources feed.
///
/// Wraps the generic feed with the mutators the rendering layer uses:
/// category tabs and the search box.
pub struct ResourcesFeed {
    inner: Feed<ResourceCriteria>,
}

impl ResourcesFeed {
    /// Mount the feed with default criteria (all categories, no search).
    pub async fn mount(
        catalog: &dyn BaseCatalog<Resource>,
        options: FeedOptions,
    ) -> Result<Self> {
        let inner = Feed::mount(catalog, ResourceCriteria::default(), options).await?;
        Ok(Self { inner })
    }

    /// Switch the category tab.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.inner.set_criteria(|criteria| criteria.category = category);
    }

    /// Update the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.inner.set_criteria(|criteria| criteria.search = search);
    }

    /// Reveal the next page of results.
    pub fn load_more(&mut self) {
        self.inner.load_more();
    }

    /// The visible slice plus paging state.
    pub fn page(&self) -> FeedPage<Resource> {
        self.inner.page()
    }

    /// Active criteria, for reflecting control state.
    pub fn criteria(&self) -> &ResourceCriteria {
        self.inner.criteria()
    }

    /// Subscribe to published result sets.
    pub fn watch(&self) -> watch::Receiver<Arc<Vec<Resource>>> {
        self.inner.watch()
    }
}
