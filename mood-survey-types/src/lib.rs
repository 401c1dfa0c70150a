//! Core types for the mood-survey crate.
//!
//! This crate provides the foundational types for the PANAS mood survey:
//! - `Item` and `Polarity` - The affect descriptors being rated
//! - `Rating` - A single 1-5 answer, with its display label
//! - `Responses` - Collected answers keyed by item name
//! - `Questionnaire` - The ordered item list and its pagination into steps
//! - `AffectScores` and `Navigation` - What a finished survey produces
//! - `Submission` and the `Submitter` trait - The submission collaborator seam

mod item;
pub use item::{Item, Polarity};

mod rating;
pub use rating::{Rating, RatingError};

mod responses;
pub use responses::Responses;

mod questionnaire;
pub use questionnaire::{
    DefinitionError, NEGATIVE_ITEMS, POSITIVE_ITEMS, Questionnaire, DEFAULT_ITEMS_PER_STEP,
};

mod scores;
pub use scores::AffectScores;

mod navigation;
pub use navigation::{Navigation, RECOMMENDATIONS_ROUTE};

mod submission;
pub use submission::{StoryPreferences, Submission};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::Submitter;
