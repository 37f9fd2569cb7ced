//! Demo driver for the feed engine.
//!
//! Mounts the seeded events and resources feeds, applies filters from the
//! command line, waits out the simulated fetch, and prints the page a
//! rendering layer would show.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use feed_core::config::Config;
use feed_core::domains::events::{self, EventKind, EventsFeed, KindFilter};
use feed_core::domains::resources::{self, CategoryFilter, ResourceCategory, ResourcesFeed};
use feed_core::domains::signups::{ContactInquiry, SubmissionDesk};

#[derive(Parser)]
#[command(name = "feed_demo")]
#[command(about = "Drive the events and resources feeds from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the events feed
    Events {
        /// Kind tab: all, film, or tech
        #[arg(long, default_value = "all")]
        kind: String,

        /// Location text; non-empty sorts by mock proximity
        #[arg(long, default_value = "")]
        near: String,

        /// Press "show more" this many times
        #[arg(long, default_value_t = 0)]
        more: u32,
    },

    /// Show the resources feed
    Resources {
        /// Category tab: all or a category slug (e.g. ai-filmmaking)
        #[arg(long, default_value = "all")]
        category: String,

        /// Search text matched against titles, descriptions, and tags
        #[arg(long, default_value = "")]
        search: String,

        /// Press "load more" this many times
        #[arg(long, default_value_t = 0)]
        more: u32,
    },

    /// Submit a contact inquiry and watch the acknowledgment clear
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Events { kind, near, more } => show_events(&config, &kind, &near, more).await,
        Commands::Resources {
            category,
            search,
            more,
        } => show_resources(&config, &category, &search, more).await,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => submit_contact(
            &config,
            ContactInquiry {
                name,
                email,
                subject,
                message,
            },
        )
        .await,
    }
}

/// Give the scheduled recomputation time to publish before reading the page.
async fn settle(config: &Config) {
    tokio::time::sleep(config.fetch_latency() + Duration::from_millis(50)).await;
}

async fn show_events(config: &Config, kind: &str, near: &str, more: u32) -> Result<()> {
    let catalog = events::data::seed::catalog();
    let mut feed = EventsFeed::mount(&catalog, config.events_options()).await?;

    if kind != "all" {
        feed.set_kind(KindFilter::Only(EventKind::from_str(kind)?));
    }
    if !near.is_empty() {
        feed.set_near(near);
    }
    for _ in 0..more {
        feed.load_more();
    }

    settle(config).await;

    let page = feed.page();
    println!("Showing {} of {} events", page.items.len(), page.filtered_len);
    for event in &page.items {
        println!(
            "  [{}] {} - {}, {} @ {} ({:.1} mi)",
            event.kind, event.title, event.date, event.time, event.venue, event.distance_miles
        );
    }
    if page.has_more {
        println!("  ... show more available");
    }

    Ok(())
}

async fn show_resources(config: &Config, category: &str, search: &str, more: u32) -> Result<()> {
    let catalog = resources::data::seed::catalog();
    let mut feed = ResourcesFeed::mount(&catalog, config.resources_options()).await?;

    if category != "all" {
        feed.set_category(CategoryFilter::Only(ResourceCategory::from_str(category)?));
    }
    if !search.is_empty() {
        feed.set_search(search);
    }
    for _ in 0..more {
        feed.load_more();
    }

    settle(config).await;

    let page = feed.page();
    println!(
        "Showing {} of {} resources",
        page.items.len(),
        page.filtered_len
    );
    for resource in &page.items {
        println!(
            "  [{}] {} ({}) - tags: {}",
            resource.category,
            resource.title,
            resource.published_on,
            resource.tags.join(", ")
        );
    }
    if page.has_more {
        println!("  ... load more available");
    }

    Ok(())
}

async fn submit_contact(config: &Config, inquiry: ContactInquiry) -> Result<()> {
    let mut desk = SubmissionDesk::new("contact", config.ack_visible());
    desk.submit(&inquiry)?;
    println!("Thanks for reaching out! (acknowledged: {})", desk.acknowledged());

    let mut ack = desk.watch();
    ack.wait_for(|showing| !showing).await?;
    println!("Acknowledgment cleared after {}s", config.ack_visible_secs);

    Ok(())
}
