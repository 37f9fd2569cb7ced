// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no feed logic. Filtering and
// pagination live in the kernel feed module and the domain criteria types.
//
// Naming convention: Base* for trait names (e.g., BaseCatalog)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Catalog Trait (Infrastructure - item feed supplier)
// =============================================================================

/// Supplies the full item set for a feed at mount time.
///
/// The feed treats the returned items as a read-only, already-validated
/// snapshot; how they were fetched or paginated upstream is not its concern.
#[async_trait]
pub trait BaseCatalog<T>: Send + Sync {
    /// Load the complete item set.
    async fn load(&self) -> Result<Vec<T>>;
}

/// In-memory catalog backed by a fixed item set.
///
/// Production feeds on the site are seeded from static data; tests inject
/// their own fixtures through the same seam.
pub struct StaticCatalog<T> {
    items: Vec<T>,
}

impl<T> StaticCatalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> BaseCatalog<T> for StaticCatalog<T> {
    async fn load(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }
}
