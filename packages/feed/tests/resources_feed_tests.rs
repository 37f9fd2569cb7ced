//! Behavioral tests for the resources feed: category tabs, free-text search,
//! and load-more paging over the seeded catalog.

use std::time::Duration;

use feed_core::domains::resources::{
    data::seed, CategoryFilter, ResourceCategory, ResourcesFeed,
};
use feed_core::kernel::feed::FeedOptions;

const LATENCY: Duration = Duration::from_millis(300);

fn options() -> FeedOptions {
    FeedOptions {
        page_size: 6,
        load_more_step: 3,
        fetch_latency: LATENCY,
    }
}

async fn mounted() -> ResourcesFeed {
    let catalog = seed::catalog();
    ResourcesFeed::mount(&catalog, options())
        .await
        .expect("mount resources feed")
}

/// Sleep past the simulated fetch so the pending recomputation publishes.
async fn settle() {
    tokio::time::sleep(LATENCY + Duration::from_millis(50)).await;
}

#[tokio::test(start_paused = true)]
async fn default_page_shows_first_six_of_eight() {
    let feed = mounted().await;
    settle().await;

    let page = feed.page();
    assert_eq!(page.filtered_len, 8);
    assert_eq!(page.items.len(), 6);
    assert!(page.has_more);
}

#[tokio::test(start_paused = true)]
async fn load_more_reveals_the_rest() {
    let mut feed = mounted().await;
    settle().await;

    feed.load_more();
    let page = feed.page();
    assert_eq!(page.items.len(), 8);
    assert!(!page.has_more);

    // Growing past the filtered count is harmless; the slice stays clamped
    feed.load_more();
    assert_eq!(feed.page().items.len(), 8);
}

#[tokio::test(start_paused = true)]
async fn category_tab_filters_exactly() {
    let mut feed = mounted().await;
    settle().await;

    feed.set_category(CategoryFilter::Only(ResourceCategory::Distribution));
    settle().await;

    let page = feed.page();
    assert_eq!(page.filtered_len, 2);
    assert!(page
        .items
        .iter()
        .all(|r| r.category == ResourceCategory::Distribution));
    assert!(!page.has_more);
}

#[tokio::test(start_paused = true)]
async fn search_matches_title_description_and_tags() {
    let mut feed = mounted().await;
    settle().await;

    // Tag-only hit
    feed.set_search("VFX");
    settle().await;
    assert_eq!(feed.page().filtered_len, 1);

    // Case-insensitive title hit
    feed.set_search("blockchain");
    settle().await;
    let page = feed.page();
    assert_eq!(page.filtered_len, 1);
    assert_eq!(
        page.items[0].title,
        "Blockchain Financing for Independent Films"
    );

    // Clearing the search restores the full set
    feed.set_search("");
    settle().await;
    assert_eq!(feed.page().filtered_len, 8);
}

#[tokio::test(start_paused = true)]
async fn category_and_search_combine_with_and() {
    let mut feed = mounted().await;
    settle().await;

    feed.set_category(CategoryFilter::Only(ResourceCategory::Funding));
    feed.set_search("grants");
    settle().await;

    let page = feed.page();
    assert_eq!(page.filtered_len, 1);
    assert_eq!(page.items[0].category, ResourceCategory::Funding);

    // Same search under a category it does not belong to finds nothing
    feed.set_category(CategoryFilter::Only(ResourceCategory::Spotlight));
    settle().await;
    assert_eq!(feed.page().filtered_len, 0);
    assert!(!feed.page().has_more);
}

#[tokio::test(start_paused = true)]
async fn criteria_change_resets_the_window() {
    let mut feed = mounted().await;
    settle().await;

    feed.load_more();
    assert_eq!(feed.page().items.len(), 8);

    feed.set_category(CategoryFilter::All);
    settle().await;

    // Back to the first page even though the filtered set is unchanged
    let page = feed.page();
    assert_eq!(page.filtered_len, 8);
    assert_eq!(page.items.len(), 6);
    assert!(page.has_more);
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_publishes_only_the_last_query() {
    let mut feed = mounted().await;
    settle().await;

    // Keystrokes arriving faster than the simulated fetch
    for query in ["b", "bl", "blo", "bloc", "block", "blockchain"] {
        feed.set_search(query);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    settle().await;

    let page = feed.page();
    assert_eq!(page.filtered_len, 1);
    assert_eq!(
        page.items[0].title,
        "Blockchain Financing for Independent Films"
    );
    assert_eq!(feed.criteria().search, "blockchain");
}
