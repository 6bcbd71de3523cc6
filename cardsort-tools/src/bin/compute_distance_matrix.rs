/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
use std::fs;
use std::path::PathBuf;

use cardsort::get_distance_matrix;
use cardsort_tools::utils::{init_subscriber, load_dataset, CliError, CliResult};
use clap::Parser;
use serde_json::json;
use tracing::info;

/// Compute the condensed aggregate distance matrix of a card-sort export.
#[derive(Debug, Parser)]
#[command(name = "compute_distance_matrix")]
struct Args {
    /// Path to the five-column CSV export.
    #[arg(long)]
    data: PathBuf,

    /// Write the JSON result here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    init_subscriber();
    let args = Args::parse();

    let dataset = load_dataset(&args.data)?;
    let condensed = get_distance_matrix(&dataset).ok_or(CliError::InvalidDataset)?;

    info!(
        "condensed {} cards into {} entries",
        condensed.cards(),
        condensed.len()
    );

    let payload = json!({
        "cards": condensed.cards(),
        "users": dataset.num_users(),
        "values": condensed.values(),
    });
    let rendered = serde_json::to_string_pretty(&payload)?;
    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
