/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::collections::HashSet;

use crate::model::record::SortRecord;
use crate::model::validate::ValidationReport;

/// An ordered, immutable sequence of [`SortRecord`] values: the full data of
/// one card-sorting study.
///
/// A `Dataset` is constructed once per analysis call and never mutated. All
/// analysis operations require it to pass [`Dataset::validate`] and refuse to
/// produce output otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<SortRecord>,
}

impl Dataset {
    /// Wrap the given records. No invariants are checked here; call
    /// [`Dataset::validate`] before analysis.
    pub fn new(records: Vec<SortRecord>) -> Self {
        Self { records }
    }

    /// All records in their original order.
    pub fn records(&self) -> &[SortRecord] {
        &self.records
    }

    /// Whether the dataset holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The number of distinct users, `M`.
    pub fn num_users(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.user_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// The number of distinct cards, `N`.
    pub fn num_cards(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.card_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// All records belonging to `user_id`, in dataset row order.
    pub fn rows_for_user(&self, user_id: u32) -> impl Iterator<Item = &SortRecord> {
        self.records.iter().filter(move |r| r.user_id == user_id)
    }

    /// The category labels of `user_id`, ordered by `card_id`.
    ///
    /// On a validated dataset this yields exactly one label per card, which
    /// is the layout the per-user distance builder compares elementwise.
    pub fn category_labels_for_user(&self, user_id: u32) -> Vec<&str> {
        let mut pairs: Vec<(u32, &str)> = self
            .rows_for_user(user_id)
            .map(|r| (r.card_id, r.category_label.as_str()))
            .collect();
        pairs.sort_unstable_by_key(|&(card_id, _)| card_id);
        pairs.into_iter().map(|(_, label)| label).collect()
    }

    /// The card labels ordered by `card_id`, taken from user 1's rows.
    ///
    /// On a validated dataset the card label is a pure function of the card
    /// id, so any user's rows cover the whole deck; user 1 is used so the
    /// order is deterministic. These are the dendrogram leaf labels.
    pub fn card_labels_in_id_order(&self) -> Vec<&str> {
        let mut pairs: Vec<(u32, &str)> = self
            .rows_for_user(1)
            .map(|r| (r.card_id, r.card_label.as_str()))
            .collect();
        pairs.sort_unstable_by_key(|&(card_id, _)| card_id);
        pairs.into_iter().map(|(_, label)| label).collect()
    }

    /// Whether any record carries the given card label.
    pub fn contains_card_label(&self, label: &str) -> bool {
        self.records.iter().any(|r| r.card_label == label)
    }

    /// Check every dataset invariant and return the structured report.
    ///
    /// Each violation is also logged at WARN. Malformed data is an expected
    /// outcome, never a panic or an error value.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport::check(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{animals_dataset, record};
    use crate::Dataset;

    #[test]
    fn counts_distinct_users_and_cards() {
        let dataset = animals_dataset();
        assert_eq!(dataset.num_users(), 5);
        assert_eq!(dataset.num_cards(), 5);
    }

    #[test]
    fn category_labels_are_ordered_by_card_id() {
        // Rows arrive with card 2 before card 1.
        let dataset = Dataset::new(vec![
            record(2, "Cat", 1, "pets", 1),
            record(1, "Dog", 1, "pets", 1),
            record(3, "Spoon", 2, "tools", 1),
        ]);
        assert_eq!(
            dataset.category_labels_for_user(1),
            vec!["pets", "pets", "tools"]
        );
        assert_eq!(
            dataset.card_labels_in_id_order(),
            vec!["Dog", "Cat", "Spoon"]
        );
    }

    #[test]
    fn rows_for_user_preserves_dataset_order() {
        let dataset = animals_dataset();
        let cards: Vec<&str> = dataset
            .rows_for_user(1)
            .map(|r| r.card_label.as_str())
            .collect();
        assert_eq!(cards, vec!["Dog", "Tiger", "Cat", "Hammer", "Spoon"]);
    }

    #[test]
    fn contains_card_label_scans_all_records() {
        let dataset = animals_dataset();
        assert!(dataset.contains_card_label("Tiger"));
        assert!(!dataset.contains_card_label("Zebra"));
    }
}
