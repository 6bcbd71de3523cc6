/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
use std::io;
use std::path::PathBuf;

use cardsort::{
    create_dendrogram, AnalysisError, CountMode, DendrogramParams, LinkageMethod, TextRenderer,
};
use cardsort_tools::utils::{init_subscriber, load_dataset, CliError, CliResult};
use clap::Parser;

/// Render the hierarchical clustering of a card-sort export as a text
/// dendrogram.
#[derive(Debug, Parser)]
#[command(name = "render_dendrogram")]
struct Args {
    /// Path to the five-column CSV export.
    #[arg(long)]
    data: PathBuf,

    /// Axis scaling: "fraction" or "absolute".
    #[arg(long, default_value = "fraction")]
    count: String,

    /// Linkage method: "average", "complete" or "single".
    #[arg(long, default_value = "average")]
    linkage: String,

    /// Color threshold on the chosen scale (default: 0.75 of the axis).
    #[arg(long)]
    color_threshold: Option<f64>,
}

fn main() -> CliResult<()> {
    init_subscriber();
    let args = Args::parse();

    // Unrecognized mode strings are rejected here, before any computation.
    let params = DendrogramParams {
        count_mode: args.count.parse::<CountMode>().map_err(AnalysisError::from)?,
        linkage: args
            .linkage
            .parse::<LinkageMethod>()
            .map_err(AnalysisError::from)?,
        color_threshold: args.color_threshold,
    };

    let dataset = load_dataset(&args.data)?;
    let mut renderer = TextRenderer::new(io::stdout().lock());
    create_dendrogram(&dataset, None, &params, &mut renderer)?
        .ok_or(CliError::InvalidDataset)?;
    Ok(())
}
