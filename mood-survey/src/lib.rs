//! # mood-survey
//!
//! PANAS mood survey engine for MoviePal. Backend-agnostic.
//!
//! A [`Session`] walks the 20 PANAS items five at a time, refuses to move past
//! a step until every item on it is rated, and on the last step scores the
//! answers and hands them to a [`Submitter`]. A successful submission yields a
//! [`Completion`]: the affect scores plus where the host should navigate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mood_survey::{Advance, DelaySubmitter, Session};
//!
//! let mut session = Session::panas();
//! for item in session.current_items().to_vec() {
//!     session.record_response(item.name(), 3)?;
//! }
//! assert!(matches!(session.advance(), Advance::Moved(_)));
//!
//! // ... answer steps 2-4, then on the last step:
//! if session.advance() == Advance::Finalize {
//!     let completion = session.finalize(&DelaySubmitter::default()).await?;
//!     println!("{}", completion.navigation);
//! }
//! ```
//!
//! ## Hosts
//!
//! Hosts are separate crates that render steps and forward input:
//! - `mood-dialoguer-wizard` - CLI wizard via dialoguer

// Re-export all types from mood-survey-types
pub use mood_survey_types::*;

mod config;
pub use config::{ConfigError, SurveyConfig};

mod guard;

mod session;
pub use session::{Advance, Completion, Session, SessionState, StepChange};

mod story;
pub use story::{StoryField, StoryForm};

// Submitters for tests and for running without a backend
mod submitter;
pub use submitter::{DelaySubmitter, SimulatedFailure, TestSubmitter, TestSubmitterError};
