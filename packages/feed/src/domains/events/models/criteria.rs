//! Filter criteria for the events feed.

use crate::domains::events::models::event::{CommunityEvent, EventKind};
use crate::kernel::feed::FeedQuery;

/// Which event kinds the feed shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    /// Every event regardless of kind.
    #[default]
    All,
    Only(EventKind),
}

impl KindFilter {
    pub fn includes(&self, kind: EventKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(only) => *only == kind,
        }
    }
}

/// User-controlled filter state for the events feed.
///
/// A non-empty `near` string re-sorts results by the mock proximity value;
/// it never excludes anything.
#[derive(Debug, Clone, Default)]
pub struct EventCriteria {
    pub kind: KindFilter,
    pub near: String,
}

impl FeedQuery for EventCriteria {
    type Item = CommunityEvent;

    fn matches(&self, event: &CommunityEvent) -> bool {
        self.kind.includes(event.kind)
    }

    fn order(&self, events: &mut Vec<CommunityEvent>) {
        if !self.near.trim().is_empty() {
            // Stable sort: events at the same distance keep source order
            events.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        }
    }
}
