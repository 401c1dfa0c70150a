use crate::RatingError;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// A response named an item the questionnaire does not contain.
    #[error("Unknown survey item: {0}")]
    UnknownItem(String),

    /// A response value was outside the 1-5 scale.
    #[error(transparent)]
    RatingOutOfRange(#[from] RatingError),

    /// A submission is in flight; the session refuses changes until it settles.
    #[error("Survey is busy submitting")]
    Busy,

    /// The survey was already submitted successfully.
    #[error("Survey is already finished")]
    Finished,

    /// Finalize was requested before every item had a rating.
    #[error("Missing responses for: {}", .0.join(", "))]
    MissingResponses(Vec<String>),

    /// A submission outcome was reported while nothing was in flight.
    #[error("No submission in flight")]
    NotSubmitting,

    /// The story form was submitted with every field blank.
    #[error("Please fill at least one field to get recommendations")]
    NothingToSubmit,

    /// The submission collaborator failed. The session keeps its responses
    /// and can retry.
    #[error("Submission failed: {0}")]
    Submission(#[source] anyhow::Error),

    /// The user cancelled the survey or an in-flight submission.
    #[error("Survey cancelled by user")]
    Cancelled,
}

impl SurveyError {
    /// Create a submission error from any error type.
    pub fn submission(err: impl Into<anyhow::Error>) -> Self {
        Self::Submission(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the caller can fix the cause and try again.
    ///
    /// Everything except a finished survey is recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Finished)
    }

    /// Check if this error came from input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownItem(_) | Self::RatingOutOfRange(_) | Self::NothingToSubmit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SurveyError::UnknownItem("Bored".to_string()).to_string(),
            "Unknown survey item: Bored"
        );
        assert_eq!(
            SurveyError::from(RatingError(0)).to_string(),
            "Rating 0 is outside the 1-5 scale"
        );
        assert_eq!(
            SurveyError::MissingResponses(vec!["Upset".into(), "Afraid".into()]).to_string(),
            "Missing responses for: Upset, Afraid"
        );
        assert_eq!(
            SurveyError::submission(anyhow::anyhow!("timeout")).to_string(),
            "Submission failed: timeout"
        );
    }

    #[test]
    fn classification() {
        assert!(SurveyError::Cancelled.is_cancelled());
        assert!(SurveyError::Busy.is_recoverable());
        assert!(!SurveyError::Finished.is_recoverable());
        assert!(SurveyError::UnknownItem("x".into()).is_validation());
        assert!(!SurveyError::Busy.is_validation());
    }
}
