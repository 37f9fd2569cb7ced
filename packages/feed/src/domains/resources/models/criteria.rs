//! Filter criteria for the resources feed.

use crate::domains::resources::models::resource::{Resource, ResourceCategory};
use crate::kernel::feed::FeedQuery;

/// Which resource categories the feed shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every resource regardless of category.
    #[default]
    All,
    Only(ResourceCategory),
}

impl CategoryFilter {
    pub fn includes(&self, category: ResourceCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

/// User-controlled filter state for the resources feed.
#[derive(Debug, Clone, Default)]
pub struct ResourceCriteria {
    pub category: CategoryFilter,
    pub search: String,
}

impl ResourceCriteria {
    /// Case-insensitive substring match against title, description, and tags.
    fn matches_search(&self, resource: &Resource) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        resource.title.to_lowercase().contains(&needle)
            || resource.description.to_lowercase().contains(&needle)
            || resource
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

impl FeedQuery for ResourceCriteria {
    type Item = Resource;

    fn matches(&self, resource: &Resource) -> bool {
        self.category.includes(resource.category) && self.matches_search(resource)
    }
}
