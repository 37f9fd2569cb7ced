//! Resource model - articles, guides, and case studies for the community.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::ResourceId;

/// Editorial category a resource is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    AiFilmmaking,
    Funding,
    Distribution,
    TechInnovation,
    Spotlight,
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceCategory::AiFilmmaking => write!(f, "ai-filmmaking"),
            ResourceCategory::Funding => write!(f, "funding"),
            ResourceCategory::Distribution => write!(f, "distribution"),
            ResourceCategory::TechInnovation => write!(f, "tech-innovation"),
            ResourceCategory::Spotlight => write!(f, "spotlight"),
        }
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ai-filmmaking" => Ok(ResourceCategory::AiFilmmaking),
            "funding" => Ok(ResourceCategory::Funding),
            "distribution" => Ok(ResourceCategory::Distribution),
            "tech-innovation" => Ok(ResourceCategory::TechInnovation),
            "spotlight" => Ok(ResourceCategory::Spotlight),
            _ => Err(anyhow::anyhow!("Invalid resource category: {}", s)),
        }
    }
}

/// A published resource. Immutable once seeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub category: ResourceCategory,

    // Core content
    pub title: String,
    pub description: String,

    /// Free-form topic tags; searchable alongside title and description.
    #[serde(default)]
    pub tags: Vec<String>,

    pub published_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_roundtrip() {
        for category in [
            ResourceCategory::AiFilmmaking,
            ResourceCategory::Funding,
            ResourceCategory::Distribution,
            ResourceCategory::TechInnovation,
            ResourceCategory::Spotlight,
        ] {
            let parsed = ResourceCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!(ResourceCategory::from_str("memes").is_err());
    }

    #[test]
    fn test_missing_tags_deserialize_as_empty() {
        let json = r#"{
            "id": "4f5fb2f0-9f6a-4ca8-bb44-9c98b47aef73",
            "category": "funding",
            "title": "Grant roundup",
            "description": "Quarterly grant deadlines",
            "published_on": "2025-03-01"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert!(resource.tags.is_empty());
    }
}
