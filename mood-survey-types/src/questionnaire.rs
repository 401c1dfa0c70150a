use std::collections::HashSet;

use crate::{Item, Polarity};

/// The ten positive-affect PANAS descriptors, in presentation order.
pub const POSITIVE_ITEMS: [&str; 10] = [
    "Interested",
    "Excited",
    "Strong",
    "Enthusiastic",
    "Proud",
    "Alert",
    "Inspired",
    "Determined",
    "Attentive",
    "Active",
];

/// The ten negative-affect PANAS descriptors, in presentation order.
pub const NEGATIVE_ITEMS: [&str; 10] = [
    "Distressed",
    "Upset",
    "Guilty",
    "Scared",
    "Hostile",
    "Irritable",
    "Ashamed",
    "Nervous",
    "Jittery",
    "Afraid",
];

pub const DEFAULT_ITEMS_PER_STEP: usize = 5;

/// Error type for building a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("Questionnaire has no items")]
    Empty,

    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    #[error("Items per step must be at least 1")]
    ZeroItemsPerStep,
}

/// The ordered item list of a mood survey and its pagination into steps.
///
/// Positive items come first, then negative items. That order determines
/// which items land on which step. Steps are 1-indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct Questionnaire {
    /// Heading shown above the survey.
    pub title: String,

    /// Line under the heading saying what the survey is for.
    pub subtitle: String,

    /// Instruction shown above each step.
    pub ask: String,

    /// Hint explaining the rating scale.
    pub scale_hint: String,

    items: Vec<Item>,
    items_per_step: usize,
}

impl Questionnaire {
    /// Create a questionnaire from positive and negative item names.
    ///
    /// Fails if there are no items, if any name appears twice across both
    /// lists, or if `items_per_step` is zero.
    pub fn new<P, N>(
        positive: impl IntoIterator<Item = P>,
        negative: impl IntoIterator<Item = N>,
        items_per_step: usize,
    ) -> Result<Self, DefinitionError>
    where
        P: Into<String>,
        N: Into<String>,
    {
        if items_per_step == 0 {
            return Err(DefinitionError::ZeroItemsPerStep);
        }

        let items: Vec<Item> = positive
            .into_iter()
            .map(Item::positive)
            .chain(negative.into_iter().map(Item::negative))
            .collect();

        if items.is_empty() {
            return Err(DefinitionError::Empty);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name()) {
                return Err(DefinitionError::DuplicateItem(item.name().to_string()));
            }
        }

        Ok(Self::build(items, items_per_step))
    }

    fn build(items: Vec<Item>, items_per_step: usize) -> Self {
        Self {
            title: "How Are You Feeling Today?".to_string(),
            subtitle: "Rate how you feel right now to get movie recommendations that match your mood."
                .to_string(),
            ask: "Indicate to what extent you feel this way right now".to_string(),
            scale_hint: "Rate each feeling on a scale from 1 (very slightly or not at all) to 5 (extremely)".to_string(),
            items,
            items_per_step,
        }
    }

    /// The standard 20-item PANAS questionnaire with 5 items per step.
    pub fn panas() -> Self {
        let items = POSITIVE_ITEMS
            .into_iter()
            .map(Item::positive)
            .chain(NEGATIVE_ITEMS.into_iter().map(Item::negative))
            .collect();
        Self::build(items, DEFAULT_ITEMS_PER_STEP)
    }

    /// The standard PANAS items paginated differently.
    pub fn panas_with_items_per_step(items_per_step: usize) -> Result<Self, DefinitionError> {
        Self::new(POSITIVE_ITEMS, NEGATIVE_ITEMS, items_per_step)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the line under the heading.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the per-step instruction.
    pub fn with_ask(mut self, ask: impl Into<String>) -> Self {
        self.ask = ask.into();
        self
    }

    /// All items, positive first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items of one polarity, in order.
    pub fn items_of(&self, polarity: Polarity) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.polarity() == polarity)
    }

    /// Look up an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn items_per_step(&self) -> usize {
        self.items_per_step
    }

    /// Number of steps, `ceil(items / items_per_step)`.
    pub fn total_steps(&self) -> usize {
        self.items.len().div_ceil(self.items_per_step)
    }

    /// The slice of items shown on `step` (1-indexed).
    ///
    /// Returns `None` for step 0 or steps past the end. The last step may hold
    /// fewer than `items_per_step` items.
    pub fn step_items(&self, step: usize) -> Option<&[Item]> {
        if step == 0 || step > self.total_steps() {
            return None;
        }
        let start = (step - 1) * self.items_per_step;
        let end = (start + self.items_per_step).min(self.items.len());
        Some(&self.items[start..end])
    }

    /// The step (1-indexed) on which the named item is shown.
    pub fn step_of(&self, name: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.name() == name)
            .map(|idx| idx / self.items_per_step + 1)
    }

    /// Check if the questionnaire has any items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::panas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panas_layout() {
        let q = Questionnaire::panas();
        assert_eq!(q.len(), 20);
        assert_eq!(q.items_per_step(), 5);
        assert_eq!(q.total_steps(), 4);
        assert_eq!(q.items_of(Polarity::Positive).count(), 10);
        assert_eq!(q.items_of(Polarity::Negative).count(), 10);
        assert_eq!(q.items()[0].name(), "Interested");
        assert_eq!(q.items()[10].name(), "Distressed");
    }

    #[test]
    fn steps_partition_items() {
        let q = Questionnaire::panas();
        let mut flattened = Vec::new();
        for step in 1..=q.total_steps() {
            let items = q.step_items(step).unwrap();
            assert_eq!(items.len(), 5);
            flattened.extend_from_slice(items);
        }
        assert_eq!(flattened, q.items());
    }

    #[test]
    fn out_of_range_steps() {
        let q = Questionnaire::panas();
        assert!(q.step_items(0).is_none());
        assert!(q.step_items(5).is_none());
    }

    #[test]
    fn uneven_last_step() {
        let q = Questionnaire::panas_with_items_per_step(6).unwrap();
        assert_eq!(q.total_steps(), 4);
        assert_eq!(q.step_items(4).unwrap().len(), 2);
    }

    #[test]
    fn step_of() {
        let q = Questionnaire::panas();
        assert_eq!(q.step_of("Interested"), Some(1));
        assert_eq!(q.step_of("Alert"), Some(2));
        assert_eq!(q.step_of("Distressed"), Some(3));
        assert_eq!(q.step_of("Afraid"), Some(4));
        assert_eq!(q.step_of("Bored"), None);
    }

    #[test]
    fn prompt_texts() {
        let q = Questionnaire::panas();
        assert_eq!(q.title, "How Are You Feeling Today?");
        assert_eq!(
            q.subtitle,
            "Rate how you feel right now to get movie recommendations that match your mood."
        );

        let q = q
            .with_title("Check-in")
            .with_subtitle("Quick mood check")
            .with_ask("Right now I feel");
        assert_eq!(q.title, "Check-in");
        assert_eq!(q.subtitle, "Quick mood check");
        assert_eq!(q.ask, "Right now I feel");
        assert_eq!(q.len(), 20);
    }

    #[test]
    fn rejects_duplicates() {
        let err = Questionnaire::new(["Calm", "Alert"], ["Alert"], 5).unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateItem("Alert".to_string()));
    }

    #[test]
    fn rejects_empty_and_zero_step() {
        let none: [&str; 0] = [];
        assert_eq!(
            Questionnaire::new(none, none, 5).unwrap_err(),
            DefinitionError::Empty
        );
        assert_eq!(
            Questionnaire::panas_with_items_per_step(0).unwrap_err(),
            DefinitionError::ZeroItemsPerStep
        );
    }
}
