/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! The rendering seam for dendrograms.
//!
//! Drawing is an external capability: the orchestration computes a
//! [`Dendrogram`](super::Dendrogram) and hands it to whatever
//! [`DendrogramRenderer`] the caller supplies. The [`TextRenderer`] shipped
//! here writes an indented merge tree to any `io::Write`.

use std::io;

use thiserror::Error;

use super::Dendrogram;

/// Returned when a renderer fails to produce its output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Writing the rendered output failed.
    #[error("failed to write dendrogram output")]
    Io(#[from] io::Error),
}

/// The opaque "render dendrogram" capability.
///
/// Implementations receive the fully computed clustering (merge steps on the
/// displayed scale, leaf labels, color threshold, axis maximum) and own all
/// drawing decisions.
pub trait DendrogramRenderer {
    fn render(&mut self, dendrogram: &Dendrogram) -> Result<(), RenderError>;
}

/// Renders the merge tree as indented text, one leaf or merge per line.
///
/// Leaves are annotated with their threshold-cut group so the grouping the
/// color threshold would produce is visible without graphics:
///
/// ```text
/// +- 1.00
///    +- Blue  [g2]
///    +- 0.00
///       +- Red  [g1]
///       +- Orange  [g1]
/// ```
#[derive(Debug)]
pub struct TextRenderer<W> {
    writer: W,
}

impl<W: io::Write> TextRenderer<W> {
    /// Render into the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_cluster(
        &mut self,
        dendrogram: &Dendrogram,
        groups: &[usize],
        cluster: usize,
        depth: usize,
    ) -> io::Result<()> {
        let leaves = dendrogram.leaf_labels().len();
        let indent = "   ".repeat(depth);
        if cluster < leaves {
            writeln!(
                self.writer,
                "{indent}+- {}  [g{}]",
                dendrogram.leaf_labels()[cluster],
                groups[cluster]
            )
        } else {
            let step = &dendrogram.steps()[cluster - leaves];
            writeln!(self.writer, "{indent}+- {:.2}", step.dissimilarity)?;
            self.write_cluster(dendrogram, groups, step.left, depth + 1)?;
            self.write_cluster(dendrogram, groups, step.right, depth + 1)
        }
    }
}

impl<W: io::Write> DendrogramRenderer for TextRenderer<W> {
    fn render(&mut self, dendrogram: &Dendrogram) -> Result<(), RenderError> {
        writeln!(
            self.writer,
            "dendrogram: {} linkage, {} counts, color threshold {:.2}, axis 0..{:.2}",
            dendrogram.linkage(),
            dendrogram.count_mode(),
            dendrogram.color_threshold(),
            dendrogram.axis_max(),
        )?;

        let leaves = dendrogram.leaf_labels().len();
        let groups = dendrogram.threshold_groups();
        if dendrogram.steps().is_empty() {
            for leaf in 0..leaves {
                self.write_cluster(dendrogram, &groups, leaf, 0)?;
            }
        } else {
            let root = leaves + dendrogram.steps().len() - 1;
            self.write_cluster(dendrogram, &groups, root, 0)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
