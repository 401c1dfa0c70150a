use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a value falls outside the 1-5 rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Rating {0} is outside the {min}-{max} scale", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingError(pub i64);

/// A single answer on the PANAS scale, from 1 (very slightly or not at all)
/// to 5 (extremely).
///
/// The only way to build a `Rating` is through `Rating::new` or `TryFrom`,
/// so every stored rating is within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, RatingError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingError(value))
        }
    }

    /// All ratings in ascending order, as offered by the five-option choice.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Get the label shown under the choice.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Not at all",
            2 => "A little",
            3 => "Moderately",
            4 => "Quite a bit",
            _ => "Extremely",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl From<Rating> for u32 {
    fn from(rating: Rating) -> Self {
        u32::from(rating.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_scale() {
        for value in 1..=5 {
            assert_eq!(Rating::new(value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError(0)));
        assert_eq!(Rating::new(6), Err(RatingError(6)));
        assert_eq!(Rating::new(-3), Err(RatingError(-3)));
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Rating::all().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec!["Not at all", "A little", "Moderately", "Quite a bit", "Extremely"]
        );
    }

    #[test]
    fn error_message() {
        assert_eq!(
            RatingError(9).to_string(),
            "Rating 9 is outside the 1-5 scale"
        );
    }

    #[test]
    fn deserialize_checks_range() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.value(), 4);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }
}
