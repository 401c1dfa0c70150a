//! Submitters that need no backend.
//!
//! `TestSubmitter` records what it receives and can be told to fail, for
//! testing hosts and sessions without a network. `DelaySubmitter` waits a
//! fixed latency before succeeding, standing in for a real backend call.
//!
//! # Example
//!
//! ```rust,ignore
//! use mood_survey::{Session, TestSubmitter};
//!
//! let submitter = TestSubmitter::new().failing_times(1);
//! let mut session = Session::panas();
//! // ... answer every item ...
//! assert!(session.finalize(&submitter).await.is_err());
//! let completion = session.finalize(&submitter).await?;
//! assert_eq!(submitter.submissions().len(), 2);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{Submission, Submitter};

/// A submitter that records every submission it receives.
///
/// Clones share the same record, so a test can keep a handle while the
/// session borrows another.
#[derive(Debug, Clone, Default)]
pub struct TestSubmitter {
    received: Arc<Mutex<Vec<Submission>>>,
    failures_left: Arc<AtomicUsize>,
}

/// Error type for TestSubmitter.
#[derive(Debug, thiserror::Error)]
pub enum TestSubmitterError {
    #[error("Scripted failure ({remaining} more to come)")]
    Scripted { remaining: usize },
}

impl TestSubmitter {
    /// Create a submitter that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `times` submissions, then succeed.
    pub fn failing_times(self, times: usize) -> Self {
        self.failures_left.store(times, Ordering::SeqCst);
        self
    }

    /// Every submission received so far, failed ones included.
    pub fn submissions(&self) -> Vec<Submission> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Submitter for TestSubmitter {
    type Error = TestSubmitterError;

    async fn submit(&self, submission: &Submission) -> Result<(), Self::Error> {
        if let Ok(mut received) = self.received.lock() {
            received.push(submission.clone());
        }

        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1));
        match failed {
            Ok(previous) => Err(TestSubmitterError::Scripted {
                remaining: previous - 1,
            }),
            Err(_) => Ok(()),
        }
    }
}

/// Error returned by a `DelaySubmitter` configured to fail.
#[derive(Debug, thiserror::Error)]
#[error("Simulated submission failure after {0:?}")]
pub struct SimulatedFailure(pub Duration);

/// A submitter that sleeps for a fixed latency, then succeeds or fails.
#[derive(Debug, Clone)]
pub struct DelaySubmitter {
    delay: Duration,
    fail: bool,
}

impl DelaySubmitter {
    /// Latency used when none is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every submission fail after the delay.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelaySubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl Submitter for DelaySubmitter {
    type Error = SimulatedFailure;

    async fn submit(&self, submission: &Submission) -> Result<(), Self::Error> {
        debug!(kind = submission.kind(), delay = ?self.delay, "simulating submission");
        tokio::time::sleep(self.delay).await;
        if self.fail {
            Err(SimulatedFailure(self.delay))
        } else {
            Ok(())
        }
    }
}
