//! Submission acknowledgment handling for the site's forms.
//!
//! A submission is logged structurally, the acknowledgment flag goes up, and
//! a timer lowers it again after the configured visibility window. A
//! resubmission inside the window restarts the timer; the last submission
//! wins. Dropping the desk cancels the pending timer.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Errors raised while recording a submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Submission payload could not be serialized: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Owns the transient "thanks for submitting" state behind one form.
pub struct SubmissionDesk {
    /// Which form this desk fronts; appears in the submission log line.
    form: &'static str,
    ack_visible: Duration,
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
    pending: Option<JoinHandle<()>>,
}

impl SubmissionDesk {
    pub fn new(form: &'static str, ack_visible: Duration) -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            form,
            ack_visible,
            tx,
            rx,
            pending: None,
        }
    }

    /// Record a submission: log it, raise the acknowledgment, and schedule
    /// the timer that lowers it again.
    pub fn submit<T: Serialize>(&mut self, payload: &T) -> Result<(), SubmitError> {
        let payload = serde_json::to_value(payload)?;
        tracing::info!(form = self.form, %payload, "form submission received");

        let _ = self.tx.send(true);

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let tx = self.tx.clone();
        let visible = self.ack_visible;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(visible).await;
            let _ = tx.send(false);
        }));

        Ok(())
    }

    /// Whether the "thanks" notice is currently showing.
    pub fn acknowledged(&self) -> bool {
        *self.rx.borrow()
    }

    /// Subscribe to acknowledgment changes.
    pub fn watch(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }
}

impl Drop for SubmissionDesk {
    fn drop(&mut self) {
        // No acknowledgment updates after disposal
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::signups::models::ContactInquiry;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "Maya Chen".to_string(),
            email: "maya@example.com".to_string(),
            subject: "Screening".to_string(),
            message: "Can I screen Resonance at the mixer?".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_acknowledgment_raises_then_clears() {
        let mut desk = SubmissionDesk::new("contact", Duration::from_secs(5));
        assert!(!desk.acknowledged());

        desk.submit(&inquiry()).unwrap();
        assert!(desk.acknowledged());

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(!desk.acknowledged());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmission_restarts_the_timer() {
        let mut desk = SubmissionDesk::new("contact", Duration::from_secs(5));

        desk.submit(&inquiry()).unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;

        desk.submit(&inquiry()).unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;

        // 6s after the first submission, but only 3s after the second
        assert!(desk.acknowledged());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!desk.acknowledged());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_clear() {
        let desk_rx;
        {
            let mut desk = SubmissionDesk::new("contact", Duration::from_secs(5));
            desk.submit(&inquiry()).unwrap();
            desk_rx = desk.watch();
        }

        tokio::time::sleep(Duration::from_secs(6)).await;
        // The clear task died with the desk; the flag stays as last published
        assert!(*desk_rx.borrow());
    }
}
