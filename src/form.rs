//! Form state and readiness check

use crate::constants::{RATING_DEFAULT, RATING_MAX, RATING_MIN, TOPICS};
use crate::types::RatingMap;

/// Everything the user has entered so far. Lives only as long as the window.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    ratings: RatingMap,
    location: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rating. Bounds are enforced by the slider, not here.
    pub fn set_rating(&mut self, topic: &str, value: u8) {
        self.ratings.set(topic, value);
    }

    /// Store the location exactly as typed (trimming only happens in `is_ready`)
    pub fn set_location(&mut self, text: impl Into<String>) {
        self.location = text.into();
    }

    pub fn rating(&self, topic: &str) -> Option<u8> {
        self.ratings.get(topic)
    }

    /// Value the slider should show: the explicit rating, or 1 if untouched
    pub fn rating_or_default(&self, topic: &str) -> u8 {
        self.rating(topic).unwrap_or(RATING_DEFAULT)
    }

    pub fn ratings(&self) -> &RatingMap {
        &self.ratings
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    pub fn is_ready(&self) -> bool {
        is_ready(self)
    }

    pub fn reset(&mut self) {
        self.ratings.clear();
        self.location.clear();
    }
}

/// True when every topic was explicitly rated within bounds and the trimmed
/// location is non-empty.
pub fn is_ready(state: &FormState) -> bool {
    state.ratings.len() == TOPICS.len()
        && state
            .ratings
            .values()
            .all(|r| (RATING_MIN..=RATING_MAX).contains(&r))
        && state.has_location()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fully_rated(location: &str) -> FormState {
        let mut form = FormState::new();
        for (i, topic) in TOPICS.iter().enumerate() {
            form.set_rating(topic, (i as u8 % RATING_MAX) + 1);
        }
        form.set_location(location);
        form
    }

    #[test]
    fn empty_form_is_not_ready() {
        assert!(!FormState::new().is_ready());
    }

    #[test]
    fn complete_form_is_ready() {
        assert!(fully_rated("Paris").is_ready());
    }

    #[test]
    fn whitespace_location_keeps_form_incomplete() {
        let form = fully_rated(" \t\n ");
        assert_eq!(form.rated_count(), TOPICS.len());
        assert!(!form.is_ready());
    }

    #[test]
    fn location_is_stored_untrimmed() {
        let mut form = FormState::new();
        form.set_location("  Paris ");
        assert_eq!(form.location(), "  Paris ");
        assert!(form.has_location());
    }

    #[test]
    fn untouched_topics_show_default_but_do_not_count() {
        let mut form = fully_rated("Paris");
        form.reset();
        form.set_location("Paris");
        for topic in TOPICS.iter().take(8) {
            form.set_rating(topic, RATING_DEFAULT);
        }

        assert_eq!(form.rating("Entrepreneurship"), None);
        assert_eq!(form.rating_or_default("Entrepreneurship"), RATING_DEFAULT);
        assert!(!form.is_ready());

        form.set_rating("Entrepreneurship", RATING_DEFAULT);
        assert!(form.is_ready());
    }

    #[test]
    fn moving_back_and_forth_ends_in_same_state() {
        let mut a = fully_rated("Paris");
        let b = a.clone();
        a.set_rating("Space", 9);
        a.set_rating("Space", 2);
        a.set_rating("Space", b.rating("Space").unwrap());

        assert_eq!(a.ratings(), b.ratings());
        assert_eq!(a.is_ready(), b.is_ready());
    }

    #[test]
    fn out_of_range_rating_blocks_readiness() {
        let mut form = fully_rated("Paris");
        form.set_rating("AI", 0);
        assert!(!form.is_ready());
        form.set_rating("AI", 11);
        assert!(!form.is_ready());
        form.set_rating("AI", 10);
        assert!(form.is_ready());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = fully_rated("Paris");
        form.reset();
        assert_eq!(form.rated_count(), 0);
        assert_eq!(form.location(), "");
    }

    proptest! {
        #[test]
        fn ready_iff_all_topics_rated_and_location_set(
            mask in proptest::collection::vec(any::<bool>(), TOPICS.len()),
            values in proptest::collection::vec(0u8..=12, TOPICS.len()),
            location in "[ a-zA-Z\t]{0,8}",
        ) {
            let mut form = FormState::new();
            for ((topic, rated), value) in TOPICS.iter().zip(&mask).zip(&values) {
                if *rated {
                    form.set_rating(topic, *value);
                }
            }
            form.set_location(location.clone());

            let all_rated = mask.iter().all(|m| *m);
            let in_range = TOPICS
                .iter()
                .zip(&mask)
                .zip(&values)
                .filter(|((_, rated), _)| **rated)
                .all(|(_, v)| (RATING_MIN..=RATING_MAX).contains(v));
            let expected = all_rated && in_range && !location.trim().is_empty();

            prop_assert_eq!(form.is_ready(), expected);
        }
    }
}
