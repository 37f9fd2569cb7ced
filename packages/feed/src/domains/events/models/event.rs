//! Community event model - gatherings surfaced on the events feed.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::common::EventId;

/// Programming track an event belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Film,
    Tech,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Film => write!(f, "film"),
            EventKind::Tech => write!(f, "tech"),
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "film" => Ok(EventKind::Film),
            "tech" => Ok(EventKind::Tech),
            _ => Err(anyhow::anyhow!("Invalid event kind: {}", s)),
        }
    }
}

/// A community event.
///
/// Immutable once seeded. Date and time are display strings as the upstream
/// data carries them (dates may be ranges like "April 18-20, 2025").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: EventId,
    pub kind: EventKind,

    // Core content
    pub title: String,
    pub description: String,

    // Schedule and place
    pub date: String,
    pub time: String,
    pub venue: String,

    // Presentation assets
    pub image: String,
    pub url: String,

    /// Mock proximity in miles used for "near you" ordering.
    /// There is no geocoding behind this value.
    pub distance_miles: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_event_kind_roundtrip() {
        assert_eq!(EventKind::from_str("film").unwrap(), EventKind::Film);
        assert_eq!(EventKind::from_str("tech").unwrap(), EventKind::Tech);
        assert_eq!(EventKind::Film.to_string(), "film");
        assert_eq!(EventKind::Tech.to_string(), "tech");
    }

    #[test]
    fn test_event_kind_rejects_unknown() {
        assert!(EventKind::from_str("music").is_err());
    }
}
