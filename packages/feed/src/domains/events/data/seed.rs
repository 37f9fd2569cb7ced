//! Seed data for the events feed.
//!
//! The site currently runs on this static set; a real upstream feed plugs in
//! behind the same `BaseCatalog` seam without touching the feed code.

use crate::common::EventId;
use crate::domains::events::models::{CommunityEvent, EventKind};
use crate::kernel::traits::StaticCatalog;

/// The events currently surfaced on the site.
pub fn community_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: EventId::new(),
            kind: EventKind::Tech,
            title: "AI in Storytelling Workshop".to_string(),
            description: "Explore how AI tools can enhance your creative process with hands-on \
                          demonstrations for creators at all experience levels."
                .to_string(),
            date: "April 15, 2025".to_string(),
            time: "2:00 PM - 4:00 PM".to_string(),
            venue: "Atlanta, GA".to_string(),
            image: "/images/events/ai-workshop.jpg".to_string(),
            url: "https://example.com/event1".to_string(),
            distance_miles: 0.5,
        },
        CommunityEvent {
            id: EventId::new(),
            kind: EventKind::Film,
            title: "Atlanta Indie Film Festival".to_string(),
            description: "A welcoming three-day celebration featuring films from creators of all \
                          backgrounds - with plenty of opportunities to connect with like-minded \
                          people."
                .to_string(),
            date: "April 18-20, 2025".to_string(),
            time: "Various Times".to_string(),
            venue: "Plaza Theatre, Atlanta, GA".to_string(),
            image: "/images/events/film-festival.jpg".to_string(),
            url: "https://example.com/event2".to_string(),
            distance_miles: 1.2,
        },
        CommunityEvent {
            id: EventId::new(),
            kind: EventKind::Tech,
            title: "Virtual Production for Beginners".to_string(),
            description: "Learn how accessible virtual production has become for independent \
                          creators. No experience necessary - just bring your creativity!"
                .to_string(),
            date: "April 25, 2025".to_string(),
            time: "10:00 AM - 6:00 PM".to_string(),
            venue: "Georgia World Congress Center, Atlanta, GA".to_string(),
            image: "/images/events/virtual-production.jpg".to_string(),
            url: "https://example.com/event3".to_string(),
            distance_miles: 2.5,
        },
        CommunityEvent {
            id: EventId::new(),
            kind: EventKind::Film,
            title: "Documentary Storytelling Workshop".to_string(),
            description: "Discover approachable techniques for telling compelling true stories, \
                          whether you are using a smartphone or professional equipment."
                .to_string(),
            date: "April 30, 2025".to_string(),
            time: "1:00 PM - 5:00 PM".to_string(),
            venue: "Creative Media Center, Atlanta, GA".to_string(),
            image: "/images/events/documentary.jpg".to_string(),
            url: "https://example.com/event4".to_string(),
            distance_miles: 3.1,
        },
        CommunityEvent {
            id: EventId::new(),
            kind: EventKind::Tech,
            title: "AI Tools for Creative Projects".to_string(),
            description: "A hands-on exploration of how AI can help with editing, color grading, \
                          and other post-production tasks - perfect for solo creators."
                .to_string(),
            date: "May 5, 2025".to_string(),
            time: "6:30 PM - 8:30 PM".to_string(),
            venue: "Tech Hub, Atlanta, GA".to_string(),
            image: "/images/events/post-production.jpg".to_string(),
            url: "https://example.com/event5".to_string(),
            distance_miles: 4.2,
        },
        CommunityEvent {
            id: EventId::new(),
            kind: EventKind::Film,
            title: "Creative Community Mixer".to_string(),
            description: "Connect with fellow creators in a relaxed setting. Whether you are just \
                          starting out or have been creating for years, all are welcome."
                .to_string(),
            date: "May 10, 2025".to_string(),
            time: "7:00 PM - 10:00 PM".to_string(),
            venue: "Artisan Loft, Atlanta, GA".to_string(),
            image: "/images/events/networking.jpg".to_string(),
            url: "https://example.com/event6".to_string(),
            distance_miles: 0.8,
        },
    ]
}

/// Catalog over the seeded events.
pub fn catalog() -> StaticCatalog<CommunityEvent> {
    StaticCatalog::new(community_events())
}
