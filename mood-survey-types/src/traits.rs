use async_trait::async_trait;

use crate::Submission;

/// Trait for the collaborator that receives a finished survey.
///
/// In a deployed system this posts the submission to a backend. Success lets
/// the session complete; any error is surfaced to the host as a recoverable
/// failure and the session can retry.
///
/// Dropping the returned future cancels the submission.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// The error type for this submitter.
    type Error: Into<anyhow::Error> + Send;

    /// Deliver one submission.
    async fn submit(&self, submission: &Submission) -> Result<(), Self::Error>;
}

