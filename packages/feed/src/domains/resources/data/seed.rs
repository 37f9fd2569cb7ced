//! Seed data for the resources feed.

use chrono::NaiveDate;

use crate::common::ResourceId;
use crate::domains::resources::models::{Resource, ResourceCategory};
use crate::kernel::traits::StaticCatalog;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The resources currently published on the site.
pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::AiFilmmaking,
            title: "5 AI Tools Revolutionizing Indie Film Pre-Production".to_string(),
            description: "Discover how AI-powered tools are transforming script analysis, \
                          storyboarding, and casting processes for independent filmmakers."
                .to_string(),
            tags: tags(&["AI", "Pre-Production", "Scriptwriting"]),
            published_on: date(2025, 3, 15),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::Funding,
            title: "How to Secure Indie Film Funding in 2025".to_string(),
            description: "A comprehensive guide to the latest funding opportunities for \
                          independent filmmakers, including grants, crowdfunding, and investor \
                          strategies."
                .to_string(),
            tags: tags(&["Funding", "Finance", "Production"]),
            published_on: date(2025, 3, 10),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::Distribution,
            title: "Hybrid Distribution Models for Independent Cinema".to_string(),
            description: "Explore innovative approaches combining theatrical, streaming, and \
                          direct-to-audience distribution strategies for indie films."
                .to_string(),
            tags: tags(&["Distribution", "Streaming", "Marketing"]),
            published_on: date(2025, 3, 5),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::TechInnovation,
            title: "Virtual Production Techniques for Low-Budget Films".to_string(),
            description: "Learn how indie filmmakers are leveraging accessible virtual production \
                          tools to create stunning visuals on limited budgets."
                .to_string(),
            tags: tags(&["Virtual Production", "VFX", "Technology"]),
            published_on: date(2025, 2, 28),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::Spotlight,
            title: "Spotlight: 'Resonance' - AI-Assisted Documentary".to_string(),
            description: "Case study of how director Maya Chen used our Human/AI/Hybrid framework \
                          to create her award-winning documentary."
                .to_string(),
            tags: tags(&["Documentary", "Case Study", "Success Story"]),
            published_on: date(2025, 2, 20),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::AiFilmmaking,
            title: "AI-Powered Post-Production Workflows".to_string(),
            description: "Step-by-step guide to implementing AI tools for efficient editing, \
                          color grading, and sound design in your indie projects."
                .to_string(),
            tags: tags(&["Post-Production", "Editing", "Workflow"]),
            published_on: date(2025, 2, 15),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::Funding,
            title: "Blockchain Financing for Independent Films".to_string(),
            description: "How innovative filmmakers are using blockchain technology to secure \
                          funding and build community ownership around their projects."
                .to_string(),
            tags: tags(&["Blockchain", "Crypto", "Financing"]),
            published_on: date(2025, 2, 10),
        },
        Resource {
            id: ResourceId::new(),
            category: ResourceCategory::Distribution,
            title: "Building an Audience Before Your Film's Release".to_string(),
            description: "Strategic approaches to community building and audience development \
                          throughout your production process."
                .to_string(),
            tags: tags(&["Marketing", "Audience", "Social Media"]),
            published_on: date(2025, 2, 5),
        },
    ]
}

/// Catalog over the seeded resources.
pub fn catalog() -> StaticCatalog<Resource> {
    StaticCatalog::new(resources())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_spans_every_category() {
        let resources = resources();
        assert_eq!(resources.len(), 8);
        for category in [
            ResourceCategory::AiFilmmaking,
            ResourceCategory::Funding,
            ResourceCategory::Distribution,
            ResourceCategory::TechInnovation,
            ResourceCategory::Spotlight,
        ] {
            assert!(
                resources.iter().any(|r| r.category == category),
                "no seed resource in {category}"
            );
        }
    }

    #[test]
    fn test_seed_is_newest_first() {
        let resources = resources();
        for pair in resources.windows(2) {
            assert!(pair[0].published_on >= pair[1].published_on);
        }
    }
}
