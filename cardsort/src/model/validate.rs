/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Structural validation of a [`Dataset`].
//!
//! The whole dataset is accepted or rejected; there is no partial
//! processing. A rejected dataset yields one [`Violation`] per broken
//! invariant, each logged at WARN, and every analysis operation then
//! returns a null result instead of running.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use crate::model::dataset::Dataset;

/// A single broken dataset invariant. The `Display` text is the diagnostic
/// surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Violation {
    /// The dataset holds no records; every analysis assumes at least one
    /// user and one card.
    #[error("dataset contains no records")]
    EmptyDataset,

    /// Distinct user ids, in order of first appearance, must be exactly
    /// `1..=M` with no gaps.
    #[error("user ids must form the dense sequence 1..={expected}, found {found:?}")]
    NonDenseUserIds { expected: usize, found: Vec<u32> },

    /// Distinct card ids, in order of first appearance, must be exactly
    /// `1..=N` with no gaps.
    #[error("card ids must form the dense sequence 1..={expected}, found {found:?}")]
    NonDenseCardIds { expected: usize, found: Vec<u32> },

    /// A card id appeared with two different labels.
    #[error("card {card_id} has conflicting labels {first:?} and {second:?}")]
    ConflictingCardLabel {
        card_id: u32,
        first: String,
        second: String,
    },

    /// A user categorized the same card more than once.
    #[error("user {user_id} categorized card {card_id} more than once")]
    DuplicateCategorization { user_id: u32, card_id: u32 },

    /// A user's row count differs from the card count.
    #[error("user {user_id} has {rows} rows, expected {expected} (one per card)")]
    WrongRowCount {
        user_id: u32,
        rows: usize,
        expected: usize,
    },
}

/// The outcome of validating a [`Dataset`]: empty means valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Run every invariant check over `dataset`, logging each violation.
    pub(crate) fn check(dataset: &Dataset) -> Self {
        let violations = collect_violations(dataset);
        for violation in &violations {
            warn!("invalid dataset: {violation}");
        }
        Self { violations }
    }

    /// Whether the dataset satisfied every invariant.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations found, in detection order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// Check that `dataset` satisfies every structural invariant.
///
/// Diagnostics are logged at WARN; the boolean is the go/no-go signal the
/// analysis operations consult.
pub fn validate(dataset: &Dataset) -> bool {
    dataset.validate().is_valid()
}

fn collect_violations(dataset: &Dataset) -> Vec<Violation> {
    if dataset.is_empty() {
        return vec![Violation::EmptyDataset];
    }

    let mut violations = Vec::new();

    let user_ids = distinct_in_first_appearance_order(dataset, |r| r.user_id);
    if !is_dense_from_one(&user_ids) {
        violations.push(Violation::NonDenseUserIds {
            expected: user_ids.len(),
            found: user_ids.clone(),
        });
    }

    let card_ids = distinct_in_first_appearance_order(dataset, |r| r.card_id);
    if !is_dense_from_one(&card_ids) {
        violations.push(Violation::NonDenseCardIds {
            expected: card_ids.len(),
            found: card_ids.clone(),
        });
    }

    // Card label must be a pure function of card id.
    let mut labels: HashMap<u32, &str> = HashMap::new();
    for record in dataset.records() {
        match labels.entry(record.card_id) {
            Entry::Vacant(slot) => {
                slot.insert(&record.card_label);
            }
            Entry::Occupied(slot) => {
                if *slot.get() != record.card_label {
                    violations.push(Violation::ConflictingCardLabel {
                        card_id: record.card_id,
                        first: (*slot.get()).to_owned(),
                        second: record.card_label.clone(),
                    });
                }
            }
        }
    }

    // Every user categorizes every card exactly once.
    let cards = card_ids.len();
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    for record in dataset.records() {
        if !seen.insert((record.user_id, record.card_id)) {
            violations.push(Violation::DuplicateCategorization {
                user_id: record.user_id,
                card_id: record.card_id,
            });
        }
    }
    for &user_id in &user_ids {
        let rows = dataset.rows_for_user(user_id).count();
        if rows != cards {
            violations.push(Violation::WrongRowCount {
                user_id,
                rows,
                expected: cards,
            });
        }
    }

    violations
}

fn distinct_in_first_appearance_order<F>(dataset: &Dataset, key: F) -> Vec<u32>
where
    F: Fn(&crate::SortRecord) -> u32,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for record in dataset.records() {
        let id = key(record);
        if seen.insert(id) {
            out.push(id);
        }
    }
    out
}

fn is_dense_from_one(ids: &[u32]) -> bool {
    ids.iter()
        .enumerate()
        .all(|(index, &id)| id as usize == index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{animals_dataset, record};
    use crate::Dataset;

    #[test]
    fn accepts_a_well_formed_dataset() {
        let report = animals_dataset().validate();
        assert!(report.is_valid(), "violations: {:?}", report.violations());
        assert!(validate(&animals_dataset()));
    }

    #[test]
    fn rejects_an_empty_dataset() {
        let report = Dataset::new(Vec::new()).validate();
        assert_eq!(report.violations(), &[Violation::EmptyDataset]);
    }

    #[test]
    fn rejects_a_card_id_gap() {
        // Card ids {1, 2, 4}: gap at 3.
        let dataset = Dataset::new(vec![
            record(1, "Dog", 1, "pets", 1),
            record(2, "Cat", 1, "pets", 1),
            record(4, "Spoon", 2, "tools", 1),
        ]);
        let report = dataset.validate();
        assert!(!report.is_valid());
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::NonDenseCardIds { expected: 3, .. }
        )));
        assert!(!validate(&dataset));
    }

    #[test]
    fn rejects_a_duplicate_categorization_row() {
        let dataset = Dataset::new(vec![
            record(1, "Dog", 1, "pets", 1),
            record(2, "Cat", 1, "pets", 1),
            record(1, "Dog", 2, "friends", 1),
        ]);
        let report = dataset.validate();
        assert!(!report.is_valid());
        assert!(report
            .violations()
            .iter()
            .any(|v| *v == Violation::DuplicateCategorization { user_id: 1, card_id: 1 }));
        // The duplicate also breaks the one-row-per-card count.
        assert!(report
            .violations()
            .iter()
            .any(|v| matches!(v, Violation::WrongRowCount { user_id: 1, rows: 3, expected: 2 })));
    }

    #[test]
    fn rejects_non_dense_user_ids() {
        let dataset = Dataset::new(vec![
            record(1, "Dog", 1, "pets", 1),
            record(1, "Dog", 1, "pets", 3),
        ]);
        let report = dataset.validate();
        assert!(report.violations().iter().any(|v| matches!(
            v,
            Violation::NonDenseUserIds { expected: 2, .. }
        )));
    }

    #[test]
    fn rejects_conflicting_card_labels() {
        let dataset = Dataset::new(vec![
            record(1, "Dog", 1, "pets", 1),
            record(2, "Cat", 1, "pets", 1),
            record(1, "Hound", 1, "pets", 2),
            record(2, "Cat", 1, "pets", 2),
        ]);
        let report = dataset.validate();
        assert!(report.violations().iter().any(|v| {
            *v == Violation::ConflictingCardLabel {
                card_id: 1,
                first: "Dog".to_owned(),
                second: "Hound".to_owned(),
            }
        }));
    }

    #[test]
    fn diagnostics_are_descriptive() {
        assert_eq!(
            Violation::WrongRowCount { user_id: 2, rows: 4, expected: 5 }.to_string(),
            "user 2 has 4 rows, expected 5 (one per card)"
        );
        assert_eq!(
            Violation::NonDenseCardIds { expected: 3, found: vec![1, 2, 4] }.to_string(),
            "card ids must form the dense sequence 1..=3, found [1, 2, 4]"
        );
    }
}
