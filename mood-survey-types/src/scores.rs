use serde::{Deserialize, Serialize};

use crate::{Polarity, Questionnaire, Responses};

/// Positive and negative affect of a finished survey.
///
/// Each score is the sum of the ratings of one polarity's items. For the
/// standard PANAS questionnaire both lie in `10..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectScores {
    pub positive: u32,
    pub negative: u32,
}

impl AffectScores {
    /// The score range upper bound shown next to each score.
    pub const SCALE_MAX: u32 = 50;

    /// Score `responses` against `questionnaire`.
    ///
    /// Unanswered items contribute 0.
    pub fn from_responses(questionnaire: &Questionnaire, responses: &Responses) -> Self {
        Self {
            positive: responses.sum(questionnaire.items_of(Polarity::Positive)),
            negative: responses.sum(questionnaire.items_of(Polarity::Negative)),
        }
    }

    /// Get the score for one polarity.
    pub fn get(&self, polarity: Polarity) -> u32 {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
        }
    }

    /// One-line description used on the recommendations page.
    pub fn summary(&self) -> String {
        format!(
            "Based on your current mood (Positive: {}/{max}, Negative: {}/{max})",
            self.positive,
            self.negative,
            max = Self::SCALE_MAX
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rating;

    #[test]
    fn sums_by_polarity() {
        let questionnaire = Questionnaire::panas();
        let mut responses = Responses::new();
        for (idx, item) in questionnaire.items().iter().enumerate() {
            let value = (idx % 5) as i64 + 1;
            responses.insert(item.name(), Rating::new(value).unwrap());
        }

        let scores = AffectScores::from_responses(&questionnaire, &responses);
        // 1+2+3+4+5 twice per polarity
        assert_eq!(scores.positive, 30);
        assert_eq!(scores.negative, 30);
        assert_eq!(scores.get(Polarity::Positive), 30);
    }

    #[test]
    fn missing_items_count_as_zero() {
        let questionnaire = Questionnaire::panas();
        let mut responses = Responses::new();
        responses.insert("Proud", Rating::new(4).unwrap());

        let scores = AffectScores::from_responses(&questionnaire, &responses);
        assert_eq!(
            scores,
            AffectScores {
                positive: 4,
                negative: 0
            }
        );
    }

    #[test]
    fn summary() {
        let scores = AffectScores {
            positive: 50,
            negative: 10,
        };
        assert_eq!(
            scores.summary(),
            "Based on your current mood (Positive: 50/50, Negative: 10/50)"
        );
    }
}
