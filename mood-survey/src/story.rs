//! The story preferences form, the free-text alternative to the mood survey.

use tracing::{debug, info, warn};

use crate::guard::{Abandon, InFlight};
use crate::{
    Navigation, RECOMMENDATIONS_ROUTE, StoryPreferences, Submission, Submitter, SurveyError,
};

/// Message shown when a submission fails.
const RETRY_MESSAGE: &str = "An error occurred. Please try again.";

/// One field of the story form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryField {
    Story,
    Keywords,
    Actors,
    Directors,
}

impl StoryField {
    /// All fields in form order.
    pub const ALL: [StoryField; 4] = [
        StoryField::Story,
        StoryField::Keywords,
        StoryField::Actors,
        StoryField::Directors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Story => "Story Description",
            Self::Keywords => "Keywords or Genres",
            Self::Actors => "Actors",
            Self::Directors => "Directors",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Story => {
                "Describe the type of story or theme you're looking for (e.g., 'A redemption story with unexpected twists')"
            }
            Self::Keywords => "Enter keywords or genres (e.g., 'time travel, dystopian, thriller')",
            Self::Actors => "Enter actors you like (e.g., 'Tom Hanks, Meryl Streep')",
            Self::Directors => {
                "Enter directors you like (e.g., 'Christopher Nolan, Greta Gerwig')"
            }
        }
    }
}

/// Collects story preferences and submits them.
#[derive(Debug, Clone)]
pub struct StoryForm {
    preferences: StoryPreferences,
    route: String,
    busy: bool,
    error: Option<String>,
}

impl StoryForm {
    pub fn new() -> Self {
        Self {
            preferences: StoryPreferences::default(),
            route: RECOMMENDATIONS_ROUTE.to_string(),
            busy: false,
            error: None,
        }
    }

    /// Set the route the navigation points at.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn preferences(&self) -> &StoryPreferences {
        &self.preferences
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Label of the submit button in the current state.
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Finding Movies..."
        } else {
            "Get Recommendations"
        }
    }

    /// Message to show under the form, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, field: StoryField) -> &str {
        match field {
            StoryField::Story => &self.preferences.story,
            StoryField::Keywords => &self.preferences.keywords,
            StoryField::Actors => &self.preferences.actors,
            StoryField::Directors => &self.preferences.directors,
        }
    }

    /// Set a field. Refused while a submission is in flight.
    pub fn set(&mut self, field: StoryField, value: impl Into<String>) -> Result<(), SurveyError> {
        if self.busy {
            return Err(SurveyError::Busy);
        }
        let slot = match field {
            StoryField::Story => &mut self.preferences.story,
            StoryField::Keywords => &mut self.preferences.keywords,
            StoryField::Actors => &mut self.preferences.actors,
            StoryField::Directors => &mut self.preferences.directors,
        };
        *slot = value.into();
        Ok(())
    }

    /// Submit the form.
    ///
    /// Needs at least one non-blank field. The navigation carries only the
    /// filled-in fields, then `type=story`. Dropping the future cancels the
    /// submission and leaves the form editable.
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> Result<Navigation, SurveyError> {
        if self.busy {
            return Err(SurveyError::Busy);
        }
        self.error = None;
        if !self.preferences.has_any() {
            debug!("story form submitted empty");
            self.error = Some(SurveyError::NothingToSubmit.to_string());
            return Err(SurveyError::NothingToSubmit);
        }

        let submission = Submission::Story(self.preferences.clone());
        self.busy = true;
        info!("submitting story preferences");

        let mut flight = InFlight::new(self);
        let outcome: Result<(), anyhow::Error> =
            submitter.submit(&submission).await.map_err(Into::into);
        flight.disarm();

        let form = flight.target();
        form.busy = false;
        match outcome {
            Ok(()) => {
                let navigation = Navigation::story(form.route.clone(), &form.preferences);
                info!(navigation = %navigation, "story preferences submitted");
                Ok(navigation)
            }
            Err(err) => {
                warn!(error = %err, "story submission failed");
                form.error = Some(RETRY_MESSAGE.to_string());
                Err(SurveyError::Submission(err))
            }
        }
    }
}

impl Default for StoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Abandon for StoryForm {
    fn abandon(&mut self) {
        warn!("story submission cancelled");
        self.busy = false;
    }
}
