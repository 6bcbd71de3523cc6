/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Dendrogram orchestration over the aggregate distance matrix.
//!
//! Matrix-to-tree linkage is delegated to the `kodama` crate and drawing to
//! a [`DendrogramRenderer`] implementation; this module owns argument
//! validation, count-mode scaling, color-threshold defaulting and leaf
//! label extraction.

pub(crate) mod params;
pub(crate) mod render;

use tracing::warn;

pub use params::{CountMode, DendrogramParams, LinkageMethod};
pub use render::{DendrogramRenderer, RenderError, TextRenderer};

use crate::distance::get_distance_matrix;
use crate::error::{AnalysisError, AnalysisResult};
use crate::matrix::CondensedMatrix;
use crate::model::Dataset;

/// Fraction of the axis maximum at which the color threshold defaults.
const DEFAULT_THRESHOLD_FRACTION: f64 = 0.75;

/// One agglomerative merge. Cluster indices follow the usual convention:
/// `0..leaves` are the leaves and the merge recorded by step `k` creates
/// cluster `leaves + k`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeStep {
    /// Index of the first merged cluster.
    pub left: usize,
    /// Index of the second merged cluster.
    pub right: usize,
    /// Dissimilarity at which the merge happened, on the displayed scale.
    pub dissimilarity: f64,
    /// Number of leaves in the merged cluster.
    pub size: usize,
}

/// A computed hierarchical clustering, ready for rendering: the merge steps
/// on the displayed scale, the leaf labels (card labels of user 1 ordered by
/// card id), the effective color threshold and the axis maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Dendrogram {
    steps: Vec<MergeStep>,
    leaf_labels: Vec<String>,
    color_threshold: f64,
    axis_max: f64,
    count_mode: CountMode,
    linkage: LinkageMethod,
}

impl Dendrogram {
    /// The merge steps, ordered by non-decreasing dissimilarity.
    pub fn steps(&self) -> &[MergeStep] {
        &self.steps
    }

    /// Leaf labels indexed by leaf (card id minus one).
    pub fn leaf_labels(&self) -> &[String] {
        &self.leaf_labels
    }

    /// The effective color threshold after defaulting.
    pub fn color_threshold(&self) -> f64 {
        self.color_threshold
    }

    /// The largest value on the dissimilarity axis (1.0 in fraction mode,
    /// the matrix maximum in absolute mode).
    pub fn axis_max(&self) -> f64 {
        self.axis_max
    }

    /// The count mode the dendrogram was computed with.
    pub fn count_mode(&self) -> CountMode {
        self.count_mode
    }

    /// The linkage method the merge steps came from.
    pub fn linkage(&self) -> LinkageMethod {
        self.linkage
    }

    /// Leaves in rendering order: a depth-first traversal of the merge
    /// tree, left child first.
    pub fn leaf_order(&self) -> Vec<usize> {
        let leaves = self.leaf_labels.len();
        if self.steps.is_empty() {
            return (0..leaves).collect();
        }
        let mut order = Vec::with_capacity(leaves);
        self.collect_leaves(leaves + self.steps.len() - 1, &mut order);
        order
    }

    fn collect_leaves(&self, cluster: usize, out: &mut Vec<usize>) {
        let leaves = self.leaf_labels.len();
        if cluster < leaves {
            out.push(cluster);
        } else {
            let step = &self.steps[cluster - leaves];
            self.collect_leaves(step.left, out);
            self.collect_leaves(step.right, out);
        }
    }

    /// Group id per leaf after cutting the tree at the color threshold:
    /// leaves connected through merges at or below the threshold share a
    /// group. Groups are numbered from 1 in order of their lowest leaf.
    pub fn threshold_groups(&self) -> Vec<usize> {
        let leaves = self.leaf_labels.len();
        let mut parent: Vec<usize> = (0..leaves).collect();

        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }

        // Representative leaf for every cluster index the steps refer to.
        let mut reps: Vec<usize> = (0..leaves).collect();
        for step in &self.steps {
            let (a, b) = (reps[step.left], reps[step.right]);
            reps.push(a);
            if step.dissimilarity <= self.color_threshold {
                let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
                parent[rb] = ra;
            }
        }

        let mut ids: std::collections::HashMap<usize, usize> = std::collections::HashMap::new();
        let mut groups = vec![0; leaves];
        for leaf in 0..leaves {
            let root = find(&mut parent, leaf);
            let next = ids.len() + 1;
            groups[leaf] = *ids.entry(root).or_insert(next);
        }
        groups
    }
}

/// Compute and render the hierarchical clustering of `dataset`.
///
/// A precomputed condensed matrix can be supplied to skip aggregation; its
/// card count must match the dataset. Invalid arguments (a mis-sized
/// precomputed matrix, a non-finite or negative threshold) abort with an
/// error before any computation. A dataset that fails validation is not an
/// error: the operation logs and returns `Ok(None)` so pipelines can
/// check-and-skip.
///
/// On success the computed [`Dendrogram`] is handed to `renderer` and also
/// returned to the caller.
pub fn create_dendrogram<R: DendrogramRenderer>(
    dataset: &Dataset,
    distance_matrix: Option<&CondensedMatrix>,
    params: &DendrogramParams,
    renderer: &mut R,
) -> AnalysisResult<Option<Dendrogram>> {
    if let Some(threshold) = params.color_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AnalysisError::InvalidArgument(format!(
                "color threshold must be finite and non-negative, got {threshold}"
            )));
        }
    }

    if !dataset.validate().is_valid() {
        warn!("dataset failed validation; no dendrogram produced");
        return Ok(None);
    }

    let cards = dataset.num_cards();
    let computed;
    let condensed = match distance_matrix {
        Some(matrix) => {
            if matrix.cards() != cards {
                return Err(AnalysisError::InvalidArgument(format!(
                    "precomputed distance matrix covers {} cards, dataset has {cards}",
                    matrix.cards()
                )));
            }
            matrix
        }
        None => match get_distance_matrix(dataset) {
            Some(matrix) => {
                computed = matrix;
                &computed
            }
            None => return Ok(None),
        },
    };

    let max = f64::from(condensed.max());
    let (mut dissimilarities, axis_max) = match params.count_mode {
        CountMode::Fraction => {
            let scaled = if max > 0.0 {
                condensed.values().iter().map(|&v| f64::from(v) / max).collect()
            } else {
                condensed.to_f64()
            };
            (scaled, 1.0)
        }
        CountMode::Absolute => (condensed.to_f64(), max),
    };
    let color_threshold = params.color_threshold.unwrap_or(match params.count_mode {
        CountMode::Fraction => DEFAULT_THRESHOLD_FRACTION,
        CountMode::Absolute => DEFAULT_THRESHOLD_FRACTION * max,
    });

    // Delegate the matrix-to-tree step. A single leaf has no merges.
    let steps = if cards < 2 {
        Vec::new()
    } else {
        kodama::linkage(&mut dissimilarities, cards, params.linkage.into())
            .steps()
            .iter()
            .map(|step| MergeStep {
                left: step.cluster1,
                right: step.cluster2,
                dissimilarity: step.dissimilarity,
                size: step.size,
            })
            .collect()
    };

    let dendrogram = Dendrogram {
        steps,
        leaf_labels: dataset
            .card_labels_in_id_order()
            .into_iter()
            .map(str::to_owned)
            .collect(),
        color_threshold,
        axis_max,
        count_mode: params.count_mode,
        linkage: params.linkage,
    };

    renderer.render(&dendrogram)?;
    Ok(Some(dendrogram))
}
