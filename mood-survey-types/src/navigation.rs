use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AffectScores, StoryPreferences};

/// Route of the recommendations page.
pub const RECOMMENDATIONS_ROUTE: &str = "/recommendations";

/// Where the host should navigate once a survey is submitted.
///
/// The query keeps insertion order so the rendered URL is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: String,
    pub query: Vec<(String, String)>,
}

impl Navigation {
    /// Create a navigation descriptor without query parameters.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Navigation to `route` carrying mood scores.
    pub fn mood(route: impl Into<String>, scores: &AffectScores) -> Self {
        Self::new(route)
            .with_param("positive", scores.positive)
            .with_param("negative", scores.negative)
            .with_param("type", "mood")
    }

    /// Navigation to `route` carrying the filled-in story fields.
    pub fn story(route: impl Into<String>, preferences: &StoryPreferences) -> Self {
        let mut navigation = Self::new(route);
        for (key, value) in preferences.filled() {
            navigation = navigation.with_param(key, value);
        }
        navigation.with_param("type", "story")
    }

    /// Get the first value of a query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as a URL path with an encoded query string.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.route.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.route, query)
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}
