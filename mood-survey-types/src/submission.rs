use serde::{Deserialize, Serialize};

use crate::AffectScores;

/// Free-text story preferences, the alternative to the mood survey.
///
/// Blank fields are treated as not filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPreferences {
    pub story: String,
    pub keywords: String,
    pub actors: String,
    pub directors: String,
}

impl StoryPreferences {
    /// The non-blank fields as `(query key, trimmed value)` pairs, in form order.
    pub fn filled(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("story", self.story.as_str()),
            ("keywords", self.keywords.as_str()),
            ("actors", self.actors.as_str()),
            ("directors", self.directors.as_str()),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.trim()))
        .filter(|(_, value)| !value.is_empty())
    }

    /// Check if at least one field has content.
    pub fn has_any(&self) -> bool {
        self.filled().next().is_some()
    }
}

/// What gets handed to a `Submitter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Submission {
    Mood(AffectScores),
    Story(StoryPreferences),
}

impl Submission {
    /// The `type` query value of the resulting navigation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mood(_) => "mood",
            Self::Story(_) => "story",
        }
    }
}
