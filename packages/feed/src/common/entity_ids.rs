//! Typed ID definitions for feed entities.
//!
//! Type aliases per entity give compile-time safety for ID usage throughout
//! the crate: an `EventId` cannot be passed where a `ResourceId` is expected.

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for community event entities.
pub struct Event;

/// Marker type for resource entities (articles, guides, case studies).
pub struct Resource;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for community events.
pub type EventId = Id<Event>;

/// Typed ID for resources.
pub type ResourceId = Id<Resource>;
