/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Binary co-occurrence distances and their aggregation across users.
//!
//! For one user, two cards are at distance 0 when they share a category and
//! 1 otherwise. Summing those 0/1 matrices over all users gives the
//! aggregate: an entry of 0 means every user grouped the pair together, an
//! entry of `M` means no user ever did.

use tracing::debug;

use crate::matrix::{CondensedMatrix, SquareMatrix};
use crate::model::Dataset;

/// Build one user's distance matrix from their category labels ordered by
/// card id.
///
/// The result is symmetric with a zero diagonal; entry `(i, j)` is 0 when
/// `labels[i] == labels[j]` and 1 otherwise. The elementwise comparison is
/// O(N^2) in the card count, which is inherent to pairwise co-occurrence
/// and the known scaling limit of this analysis.
pub fn per_user_distances(labels: &[&str]) -> SquareMatrix<u8> {
    let n = labels.len();
    let mut matrix = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if labels[i] != labels[j] {
                matrix.set_symmetric(i, j, 1);
            }
        }
    }
    matrix
}

/// Compute the condensed aggregate distance matrix for `dataset`.
///
/// Users are processed in ascending user id order; each per-user matrix is
/// folded into a running sum and discarded. The sum is then flattened to its
/// strict upper triangle, row-major. Returns `None` when the dataset fails
/// validation (the validator logs the cause).
///
/// The operation is deterministic: the same dataset always yields a
/// bit-identical condensed array.
pub fn get_distance_matrix(dataset: &Dataset) -> Option<CondensedMatrix> {
    if !dataset.validate().is_valid() {
        return None;
    }

    let cards = dataset.num_cards();
    let users = dataset.num_users();
    let mut sum = SquareMatrix::<u32>::zeros(cards);
    for user_id in 1..=users as u32 {
        debug!("computing distance matrix for user {user_id}");
        let labels = dataset.category_labels_for_user(user_id);
        let user_matrix = per_user_distances(&labels);
        for (total, &entry) in sum.as_mut_slice().iter_mut().zip(user_matrix.as_slice()) {
            *total += u32::from(entry);
        }
    }

    Some(CondensedMatrix::from_square(&sum))
}
