/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
use std::path::PathBuf;

use cardsort::{get_cluster_labels, ResolveOptions};
use cardsort_tools::utils::{init_subscriber, load_dataset, CliError, CliResult};
use clap::Parser;

/// Retrieve the labels users gave to a category holding the queried cards.
#[derive(Debug, Parser)]
#[command(name = "cluster_labels")]
struct Args {
    /// Path to the five-column CSV export.
    #[arg(long)]
    data: PathBuf,

    /// Card labels of the group of interest.
    #[arg(long, num_args = 1.., required = true)]
    cards: Vec<String>,

    /// Suppress the per-user log lines.
    #[arg(long)]
    quiet: bool,
}

fn main() -> CliResult<()> {
    init_subscriber();
    let args = Args::parse();

    let dataset = load_dataset(&args.data)?;
    let options = ResolveOptions {
        emit_log: !args.quiet,
        build_table: true,
    };
    let table = get_cluster_labels(&dataset, &args.cards, &options).ok_or(CliError::NoResult)?;

    println!("{}", serde_json::to_string_pretty(table.rows())?);
    Ok(())
}
