//! Generic feed orchestration: filter evaluation, simulated fetch latency,
//! and last-write-wins publication.
//!
//! Criteria changes flow one direction:
//!
//! ```text
//! mutator → generation bump → sleep(latency) → evaluate() → watch publish
//! ```
//!
//! There is no remote data source behind the site's feeds; the latency timer
//! stands in for one so the rendering layer exercises real async behavior.
//! A superseded recomputation is aborted outright, and the generation check
//! at the publish point discards any run that got past its sleep before the
//! abort landed. Only the result for the most recent criteria is published.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::common::PageWindow;
use crate::kernel::traits::BaseCatalog;

/// Filter criteria for a feed item type.
///
/// `matches` decides membership; `order` arranges the surviving items.
/// The default ordering keeps source order.
pub trait FeedQuery: Clone + Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    /// Whether an item belongs in the filtered result set.
    ///
    /// Must be total: every item classifies as included or excluded for any
    /// criteria value.
    fn matches(&self, item: &Self::Item) -> bool;

    /// Arrange the filtered results. Must be stable - ties keep their
    /// original relative order.
    fn order(&self, _items: &mut Vec<Self::Item>) {}
}

/// Pure filter evaluation: membership test, then ordering.
///
/// Deterministic and idempotent - identical criteria over an unchanged item
/// set yield identical ordered output.
pub fn evaluate<Q: FeedQuery>(items: &[Q::Item], query: &Q) -> Vec<Q::Item> {
    let mut matched: Vec<Q::Item> = items
        .iter()
        .filter(|item| query.matches(item))
        .cloned()
        .collect();
    query.order(&mut matched);
    matched
}

/// Tuning for a mounted feed.
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Items shown before any "load more".
    pub page_size: usize,
    /// How many items each "load more" adds.
    pub load_more_step: usize,
    /// Simulated fetch delay before filtered results publish.
    pub fetch_latency: Duration,
}

/// One render-ready page of feed output.
#[derive(Debug, Clone)]
pub struct FeedPage<T> {
    /// The visible slice: filtered results clamped to the window.
    pub items: Vec<T>,
    /// Total filtered results behind the window.
    pub filtered_len: usize,
    /// Whether the "show more" affordance applies.
    pub has_more: bool,
}

/// A mounted listing feed.
///
/// Owns the static item set, the active criteria, and the pagination window.
/// State is owned by the single context that created the feed and mutated
/// only through its methods; the spawned recompute task communicates back
/// exclusively through the watch channel.
pub struct Feed<Q: FeedQuery> {
    items: Arc<Vec<Q::Item>>,
    criteria: Q,
    window: PageWindow,
    options: FeedOptions,
    /// Generation of the most recently requested recomputation.
    latest: Arc<AtomicU64>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    tx: watch::Sender<Arc<Vec<Q::Item>>>,
    rx: watch::Receiver<Arc<Vec<Q::Item>>>,
}

impl<Q: FeedQuery> Feed<Q> {
    /// Mount a feed: load the catalog once and schedule the initial
    /// recomputation with the given criteria.
    pub async fn mount(
        catalog: &dyn BaseCatalog<Q::Item>,
        criteria: Q,
        options: FeedOptions,
    ) -> Result<Self> {
        let items = catalog.load().await?;
        tracing::debug!(items = items.len(), "feed mounted");

        let (tx, rx) = watch::channel(Arc::new(Vec::new()));
        let mut feed = Self {
            items: Arc::new(items),
            criteria,
            window: PageWindow::new(options.page_size),
            options,
            latest: Arc::new(AtomicU64::new(0)),
            generation: 0,
            pending: None,
            tx,
            rx,
        };
        feed.refresh();
        Ok(feed)
    }

    /// The active criteria, for reflecting selection state in controls.
    pub fn criteria(&self) -> &Q {
        &self.criteria
    }

    /// Mutate the criteria and schedule a recomputation.
    ///
    /// The window snaps back to the first page; the new filtered set
    /// publishes after the simulated fetch latency.
    pub fn set_criteria(&mut self, update: impl FnOnce(&mut Q)) {
        update(&mut self.criteria);
        self.window.reset();
        self.refresh();
    }

    /// Grow the visible window by the configured step.
    pub fn load_more(&mut self) {
        self.window.load_more(self.options.load_more_step);
    }

    /// Current page: the visible slice of the published filtered set.
    pub fn page(&self) -> FeedPage<Q::Item> {
        let filtered = self.rx.borrow();
        FeedPage {
            items: self.window.clamp(&filtered).to_vec(),
            filtered_len: filtered.len(),
            has_more: self.window.has_more(filtered.len()),
        }
    }

    /// Subscribe to published result sets, for render layers that want push
    /// updates rather than polling `page()`.
    pub fn watch(&self) -> watch::Receiver<Arc<Vec<Q::Item>>> {
        self.rx.clone()
    }

    /// Schedule a recomputation for the current criteria.
    ///
    /// Bumps the generation, cancels any in-flight run, and spawns the
    /// delayed evaluate-and-publish task.
    fn refresh(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        self.latest.store(generation, Ordering::SeqCst);

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let items = Arc::clone(&self.items);
        let criteria = self.criteria.clone();
        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();
        let latency = self.options.fetch_latency;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;

            let filtered = evaluate(&*items, &criteria);

            // A newer criteria change may have landed while this run slept.
            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "stale feed results discarded");
                return;
            }

            tracing::debug!(generation, results = filtered.len(), "feed results published");
            // Ignore send errors (feed dropped, no receivers left)
            let _ = tx.send(Arc::new(filtered));
        }));
    }
}

impl<Q: FeedQuery> Drop for Feed<Q> {
    fn drop(&mut self) {
        // No publishes after disposal
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
