use std::fmt;

use serde::{Deserialize, Serialize};

/// Which affect scale an item contributes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Get the polarity as a lowercase string, e.g. for query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named affect descriptor, e.g. `"Interested"` or `"Distressed"`.
///
/// Items are immutable once a `Questionnaire` is built. The name is the key
/// under which the item's rating is stored in `Responses`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    polarity: Polarity,
}

impl Item {
    /// Create a new item with the given name and polarity.
    pub fn new(name: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            name: name.into(),
            polarity,
        }
    }

    /// Create a positive-affect item.
    pub fn positive(name: impl Into<String>) -> Self {
        Self::new(name, Polarity::Positive)
    }

    /// Create a negative-affect item.
    pub fn negative(name: impl Into<String>) -> Self {
        Self::new(name, Polarity::Negative)
    }

    /// Get the item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the polarity.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn is_positive(&self) -> bool {
        self.polarity == Polarity::Positive
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
