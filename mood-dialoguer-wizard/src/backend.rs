//! Dialoguer host: drives a `Session` or `StoryForm` from terminal prompts.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use mood_survey::{
    Advance, Completion, Item, Navigation, Rating, Session, StoryField, StoryForm, Submitter,
    SurveyError,
};
use thiserror::Error;
use tracing::debug;

const PROGRESS_WIDTH: usize = 20;

/// Error type for the Dialoguer host.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The survey refused an operation or the submission failed.
    #[error(transparent)]
    Survey(SurveyError),
}

impl From<SurveyError> for DialoguerError {
    fn from(err: SurveyError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Survey(err)
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn interrupted<T>(result: Result<T, dialoguer::Error>) -> Result<T, DialoguerError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
        Err(e) => Err(DialoguerError::Dialoguer(e)),
    }
}

/// The five rating options as shown in the choice list, e.g. `"3 - Moderately"`.
pub fn rating_choices() -> Vec<String> {
    Rating::all()
        .map(|rating| format!("{} - {}", rating.value(), rating.label()))
        .collect()
}

/// A text progress bar such as `[##########----------]` for `fraction` in 0..=1.
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Dialoguer host for interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerHost {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerHost {
    /// Create a new Dialoguer host with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a host with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Walk the mood survey step by step and submit it.
    ///
    /// Ctrl+C while the submission is in flight cancels it; the session goes
    /// back to its last step with every rating kept.
    pub async fn run_mood<S: Submitter>(
        &self,
        session: &mut Session,
        submitter: &S,
    ) -> Result<Completion, DialoguerError> {
        let questionnaire = session.questionnaire();
        println!("{}", questionnaire.title);
        println!("{}", questionnaire.subtitle);
        println!("{}", questionnaire.scale_hint);

        loop {
            self.show_step(session)?;

            match self.ask_navigation(session)? {
                StepAction::Back => {
                    session.retreat();
                }
                StepAction::Next => match session.advance() {
                    Advance::Moved(change) => {
                        debug!(from = change.from, to = change.to, "moved to next step");
                        // scroll-to-top equivalent
                        println!();
                    }
                    Advance::Stayed => {
                        println!("Please rate every feeling on this step first.");
                    }
                    Advance::Finalize => return self.submit_mood(session, submitter).await,
                },
            }
        }
    }

    /// Ask for the story fields and submit them.
    pub async fn run_story<S: Submitter>(
        &self,
        form: &mut StoryForm,
        submitter: &S,
    ) -> Result<Navigation, DialoguerError> {
        println!("Find Movies by Story Elements");

        loop {
            for field in StoryField::ALL {
                let value = self.ask_text(field.label(), field.placeholder(), form.get(field))?;
                form.set(field, value)?;
            }

            println!("Finding Movies...");
            let result = tokio::select! {
                result = form.submit(submitter) => result,
                _ = tokio::signal::ctrl_c() => Err(SurveyError::Cancelled),
            };

            match result {
                Ok(navigation) => return Ok(navigation),
                Err(SurveyError::NothingToSubmit) => {
                    if let Some(message) = form.error() {
                        println!("Error: {message}");
                    }
                }
                Err(SurveyError::Submission(err)) => {
                    println!("Error: {}", form.error().unwrap_or("Submission failed"));
                    if !self.confirm_retry()? {
                        return Err(DialoguerError::Survey(SurveyError::Submission(err)));
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Show the header and ask every item on the current step.
    fn show_step(&self, session: &mut Session) -> Result<(), DialoguerError> {
        println!();
        println!(
            "Step {} of {} {}",
            session.current_step(),
            session.total_steps(),
            progress_bar(session.progress(), PROGRESS_WIDTH)
        );
        println!("{}", session.questionnaire().ask);

        for item in session.current_items().to_vec() {
            let rating = self.ask_rating(&item, session.rating(item.name()))?;
            session.record_response(item.name(), i64::from(rating.value()))?;
        }
        Ok(())
    }

    fn ask_rating(&self, item: &Item, current: Option<Rating>) -> Result<Rating, DialoguerError> {
        let choices = rating_choices();

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(item.name()).items(&choices);
        if let Some(rating) = current {
            builder = builder.default(usize::from(rating.value() - Rating::MIN));
        }

        let index = interrupted(builder.interact())?;
        let value = i64::from(Rating::MIN) + index as i64;
        Rating::new(value).map_err(|err| DialoguerError::Survey(err.into()))
    }

    fn ask_navigation(&self, session: &Session) -> Result<StepAction, DialoguerError> {
        let mut actions = vec![(session.next_label(), StepAction::Next)];
        if session.current_step() > 1 {
            actions.push(("Back", StepAction::Back));
        }
        let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();

        let builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        let index = interrupted(builder.items(&labels).default(0).interact())?;
        Ok(actions[index].1)
    }

    fn ask_text(&self, prompt: &str, hint: &str, current: &str) -> Result<String, DialoguerError> {
        println!("{hint}");

        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder.with_prompt(prompt).allow_empty(true);
        if !current.is_empty() {
            builder = builder.default(current.to_string());
        }

        interrupted(builder.interact_text())
    }

    fn confirm_retry(&self) -> Result<bool, DialoguerError> {
        let builder: Confirm;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }

        interrupted(builder.with_prompt("Try again?").default(true).interact())
    }

    async fn submit_mood<S: Submitter>(
        &self,
        session: &mut Session,
        submitter: &S,
    ) -> Result<Completion, DialoguerError> {
        loop {
            println!("Processing...");
            let result = tokio::select! {
                result = session.finalize(submitter) => result,
                _ = tokio::signal::ctrl_c() => Err(SurveyError::Cancelled),
            };

            match result {
                Ok(completion) => return Ok(completion),
                Err(SurveyError::Submission(err)) => {
                    println!("Error: {err:#}");
                    if !self.confirm_retry()? {
                        return Err(DialoguerError::Survey(SurveyError::Submission(err)));
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepAction {
    Next,
    Back,
}
