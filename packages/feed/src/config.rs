use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::kernel::feed::FeedOptions;

/// Feed engine configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub events_page_size: usize,
    pub resources_page_size: usize,
    pub load_more_step: usize,
    pub fetch_latency_ms: u64,
    pub ack_visible_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            events_page_size: env::var("FEED_EVENTS_PAGE_SIZE")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .context("FEED_EVENTS_PAGE_SIZE must be a valid number")?,
            resources_page_size: env::var("FEED_RESOURCES_PAGE_SIZE")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .context("FEED_RESOURCES_PAGE_SIZE must be a valid number")?,
            load_more_step: env::var("FEED_LOAD_MORE_STEP")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("FEED_LOAD_MORE_STEP must be a valid number")?,
            fetch_latency_ms: env::var("FEED_FETCH_LATENCY_MS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .context("FEED_FETCH_LATENCY_MS must be a valid number")?,
            ack_visible_secs: env::var("FEED_ACK_VISIBLE_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("FEED_ACK_VISIBLE_SECS must be a valid number")?,
        })
    }

    /// Simulated fetch latency applied before filtered results publish.
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }

    /// How long a form acknowledgment stays visible before auto-clearing.
    pub fn ack_visible(&self) -> Duration {
        Duration::from_secs(self.ack_visible_secs)
    }

    /// Mount options for the events feed.
    pub fn events_options(&self) -> FeedOptions {
        FeedOptions {
            page_size: self.events_page_size,
            load_more_step: self.load_more_step,
            fetch_latency: self.fetch_latency(),
        }
    }

    /// Mount options for the resources feed.
    pub fn resources_options(&self) -> FeedOptions {
        FeedOptions {
            page_size: self.resources_page_size,
            load_more_step: self.load_more_step,
            fetch_latency: self.fetch_latency(),
        }
    }
}
