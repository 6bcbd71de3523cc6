/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! # cardsort
//!
//! Consensus analysis for open card-sorting studies. Participants sort a fixed
//! deck of cards into categories of their own naming; this crate turns those
//! per-user grouping decisions into an aggregate dissimilarity metric over the
//! deck, resolves the labels users gave to a queried group of cards, and
//! orchestrates a hierarchical-clustering dendrogram over the aggregate.
//!
//! The only distance semantics supported is binary co-occurrence (two cards
//! either share a category for a user or they do not). This is not a general
//! clustering library.
#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

pub mod cluster;
pub mod dendrogram;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod model;

// Top level exports.
pub use cluster::{get_cluster_labels, resolve_for_user, ClusterRow, ClusterTable, ResolveOptions};
pub use dendrogram::{
    create_dendrogram, CountMode, Dendrogram, DendrogramParams, DendrogramRenderer, LinkageMethod,
    MergeStep, TextRenderer,
};
pub use distance::{get_distance_matrix, per_user_distances};
pub use error::{AnalysisError, AnalysisErrorKind, AnalysisResult};
pub use matrix::{CondensedMatrix, SquareMatrix};
pub use model::{validate, Dataset, SortRecord, ValidationReport, Violation};

/// Crate version, as recorded in the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod test_util;
