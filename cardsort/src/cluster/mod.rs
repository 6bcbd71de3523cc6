/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Resolution of user-assigned category labels for a queried group of cards.
//!
//! A user "matches" a query when every queried card, restricted to cards
//! that exist in the dataset, sits in exactly one of that user's categories.
//! The resolver reports the category label together with the full member
//! list of that category, which may be a superset of the query.

use serde::Serialize;
use tracing::{info, warn};

use crate::model::{Dataset, SortRecord};

/// Behavior switches for [`get_cluster_labels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Emit an informational log line per user (matched or not).
    pub emit_log: bool,
    /// Materialize and return the result table. When false the operation
    /// only logs and returns `None`.
    pub build_table: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            emit_log: true,
            build_table: true,
        }
    }
}

/// One qualifying user: the category label they used for the queried cards
/// and every card they filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterRow {
    /// The qualifying user.
    pub user_id: u32,
    /// The label that user gave the category holding the queried cards.
    pub category_label: String,
    /// Every card label in that category, in dataset row order. May be a
    /// superset of the query.
    pub cards: Vec<String>,
}

/// The result table of [`get_cluster_labels`]: one row per qualifying user,
/// in ascending user id order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClusterTable {
    rows: Vec<ClusterRow>,
}

impl ClusterTable {
    /// The rows, in ascending user id order.
    pub fn rows(&self) -> &[ClusterRow] {
        &self.rows
    }

    /// The matched category labels, in user order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.category_label.as_str()).collect()
    }

    /// The number of qualifying users.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no user qualified.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the table, returning its rows.
    pub fn into_rows(self) -> Vec<ClusterRow> {
        self.rows
    }
}

/// Resolve the category label one user gave to the queried cards.
///
/// `user_rows` must be the rows of a single user; `query` the filtered card
/// labels of interest. Restricting the rows to the queried labels, exactly
/// one distinct category label means the user grouped those cards together
/// and that label is returned. Zero hits and a split across several
/// categories are both no-consensus outcomes and return `None`.
pub fn resolve_for_user<'a>(user_rows: &[&'a SortRecord], query: &[&str]) -> Option<&'a str> {
    let mut shared: Option<&str> = None;
    for row in user_rows {
        if !query.iter().any(|&label| label == row.card_label) {
            continue;
        }
        match shared {
            None => shared = Some(&row.category_label),
            Some(previous) if previous != row.category_label => return None,
            Some(_) => {}
        }
    }
    shared
}

/// Retrieve, per user, the label given to a category that holds exactly the
/// queried cards (tolerating unknown and duplicate query labels).
///
/// Unknown labels are dropped from the query with a diagnostic before any
/// per-user work; if nothing is left the operation aborts with `None`. The
/// dataset must pass validation, otherwise `None` is returned with the
/// cause logged by the validator. Rows are accumulated in ascending user id
/// order; with `options.build_table == false` the table is not materialized
/// and `None` is returned after logging.
pub fn get_cluster_labels<S: AsRef<str>>(
    dataset: &Dataset,
    query: &[S],
    options: &ResolveOptions,
) -> Option<ClusterTable> {
    if !dataset.validate().is_valid() {
        return None;
    }

    // Filter first, then iterate the immutable filtered set.
    let filtered = filter_query(dataset, query);
    if filtered.is_empty() {
        warn!("no queried label occurs in the dataset; nothing to resolve");
        return None;
    }

    let mut rows = Vec::new();
    for user_id in 1..=dataset.num_users() as u32 {
        let user_rows: Vec<&SortRecord> = dataset.rows_for_user(user_id).collect();
        match resolve_for_user(&user_rows, &filtered) {
            Some(label) => {
                if options.emit_log {
                    info!("user {user_id} labeled card(s): {label}");
                }
                if options.build_table {
                    rows.push(ClusterRow {
                        user_id,
                        category_label: label.to_owned(),
                        cards: cards_for_label(&user_rows, label),
                    });
                }
            }
            None => {
                if options.emit_log {
                    info!("user {user_id} did not cluster cards together.");
                }
            }
        }
    }

    options.build_table.then(|| ClusterTable { rows })
}

/// Keep only query labels that occur in the dataset, deduplicated in first
/// appearance order. Dropped labels are reported with a diagnostic.
fn filter_query<'a, S: AsRef<str>>(dataset: &Dataset, query: &'a [S]) -> Vec<&'a str> {
    let mut kept: Vec<&str> = Vec::new();
    for label in query {
        let label = label.as_ref();
        if kept.contains(&label) {
            continue;
        }
        if dataset.contains_card_label(label) {
            kept.push(label);
        } else {
            warn!("{label:?} is not a card label in this dataset; removed from query");
        }
    }
    kept
}

/// Every card label the user filed under `category_label`, in dataset row
/// order.
fn cards_for_label(user_rows: &[&SortRecord], category_label: &str) -> Vec<String> {
    user_rows
        .iter()
        .filter(|r| r.category_label == category_label)
        .map(|r| r.card_label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{animals_dataset, record};
    use crate::Dataset;

    fn user_rows(dataset: &Dataset, user_id: u32) -> Vec<&SortRecord> {
        dataset.rows_for_user(user_id).collect()
    }

    #[test]
    fn resolve_for_user_returns_the_shared_label() {
        let dataset = animals_dataset();
        let rows = user_rows(&dataset, 1);
        assert_eq!(
            resolve_for_user(&rows, &["Cat", "Tiger", "Dog"]),
            Some("pets")
        );
    }

    #[test]
    fn resolve_for_user_returns_none_on_a_split() {
        let dataset = animals_dataset();
        // User 3 files Tiger apart from Dog and Cat.
        let rows = user_rows(&dataset, 3);
        assert_eq!(resolve_for_user(&rows, &["Cat", "Tiger", "Dog"]), None);
    }

    #[test]
    fn resolve_for_user_returns_none_when_nothing_matches() {
        let dataset = animals_dataset();
        let rows = user_rows(&dataset, 1);
        assert_eq!(resolve_for_user(&rows, &["Zebra"]), None);
    }

    #[test]
    fn unknown_labels_are_dropped_and_duplicates_collapsed() {
        let dataset = animals_dataset();
        let filtered = filter_query(&dataset, &["Cat", "Zebra", "Cat", "Dog"]);
        assert_eq!(filtered, vec!["Cat", "Dog"]);
    }

    #[test]
    fn fully_unknown_query_returns_none() {
        let dataset = animals_dataset();
        let table = get_cluster_labels(&dataset, &["Zebra", "Lion"], &ResolveOptions::default());
        assert!(table.is_none());
    }

    #[test]
    fn qualifying_users_are_reported_in_order_with_full_card_lists() {
        let dataset = animals_dataset();
        let table =
            get_cluster_labels(&dataset, &["Cat", "Tiger", "Dog"], &ResolveOptions::default())
                .unwrap();
        assert_eq!(table.labels(), vec!["pets", "animals", "Animals"]);

        let rows = table.rows();
        assert_eq!(rows[0].user_id, 1);
        assert_eq!(rows[0].cards, vec!["Dog", "Tiger", "Cat"]);
        // User 2's rows arrive Cat, Tiger, Dog in the dataset.
        assert_eq!(rows[1].user_id, 2);
        assert_eq!(rows[1].cards, vec!["Cat", "Tiger", "Dog"]);
        assert_eq!(rows[2].user_id, 5);
        assert_eq!(rows[2].cards, vec!["Dog", "Tiger", "Cat"]);
    }

    #[test]
    fn the_category_may_exceed_the_query() {
        let dataset = animals_dataset();
        // User 1 and user 5 file both Hammer and Spoon together; user 4
        // does too. Querying just Spoon surfaces the whole category.
        let table = get_cluster_labels(&dataset, &["Spoon"], &ResolveOptions::default()).unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.user_id, 1);
        assert_eq!(row.category_label, "tools");
        assert_eq!(row.cards, vec!["Hammer", "Spoon"]);
    }

    #[test]
    fn build_table_false_returns_none() {
        let dataset = animals_dataset();
        let options = ResolveOptions {
            emit_log: false,
            build_table: false,
        };
        assert!(get_cluster_labels(&dataset, &["Cat"], &options).is_none());
    }

    #[test]
    fn invalid_dataset_returns_none() {
        let dataset = Dataset::new(vec![
            record(1, "Dog", 1, "pets", 1),
            record(1, "Dog", 1, "pets", 1),
        ]);
        assert!(
            get_cluster_labels(&dataset, &["Dog"], &ResolveOptions::default()).is_none()
        );
    }
}
