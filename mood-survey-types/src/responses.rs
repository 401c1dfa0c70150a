use std::collections::HashMap;

use crate::{Item, Rating};

/// Collected ratings for a survey.
///
/// Keyed by item name: one rating per item, inserting again replaces the
/// previous rating. Responses never shrink during a session; going back to an
/// earlier step leaves earlier answers in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    values: HashMap<String, Rating>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert (or replace) the rating for the named item.
    ///
    /// Returns the previous rating, if any.
    pub fn insert(&mut self, name: impl Into<String>, rating: Rating) -> Option<Rating> {
        self.values.insert(name.into(), rating)
    }

    /// Get the rating for the named item.
    pub fn get(&self, name: &str) -> Option<Rating> {
        self.values.get(name).copied()
    }

    /// Check if the named item has been answered.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Check if every item in `items` has been answered.
    pub fn answers_all<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> bool {
        items.into_iter().all(|item| self.contains(item.name()))
    }

    /// Names of the items in `items` that have no rating yet, in order.
    pub fn missing<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> Vec<String> {
        items
            .into_iter()
            .filter(|item| !self.contains(item.name()))
            .map(|item| item.name().to_string())
            .collect()
    }

    /// Sum the ratings of `items`. Unanswered items count as 0.
    pub fn sum<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> u32 {
        items
            .into_iter()
            .map(|item| self.get(item.name()).map(u32::from).unwrap_or(0))
            .sum()
    }

    /// Get an iterator over all name-rating pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rating)> {
        self.values.iter().map(|(name, rating)| (name.as_str(), *rating))
    }

    /// Get the number of responses.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no responses.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for Responses {
    type Item = (String, Rating);
    type IntoIter = std::collections::hash_map::IntoIter<String, Rating>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: i64) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut responses = Responses::new();
        responses.insert("Interested", rating(4));

        assert_eq!(responses.get("Interested"), Some(rating(4)));
        assert_eq!(responses.get("Afraid"), None);
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn insert_replaces() {
        let mut responses = Responses::new();
        assert_eq!(responses.insert("Strong", rating(2)), None);
        assert_eq!(responses.insert("Strong", rating(5)), Some(rating(2)));
        assert_eq!(responses.get("Strong"), Some(rating(5)));
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn sum_defaults_missing_to_zero() {
        let items = [Item::positive("Alert"), Item::positive("Active")];
        let mut responses = Responses::new();
        responses.insert("Alert", rating(3));

        assert_eq!(responses.sum(&items), 3);
        assert!(!responses.answers_all(&items));
        assert_eq!(responses.missing(&items), vec!["Active".to_string()]);
    }

    #[test]
    fn iteration() {
        let mut responses = Responses::new();
        responses.insert("Alert", rating(3));
        responses.insert("Upset", rating(1));

        let mut borrowed: Vec<(&str, Rating)> = responses.iter().collect();
        borrowed.sort();
        assert_eq!(borrowed, vec![("Alert", rating(3)), ("Upset", rating(1))]);

        let mut owned: Vec<(String, Rating)> = responses.into_iter().collect();
        owned.sort();
        assert_eq!(
            owned,
            vec![("Alert".to_string(), rating(3)), ("Upset".to_string(), rating(1))]
        );
    }
}
