/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
use std::path::PathBuf;

use cardsort_tools::utils::{
    generate_sorts, init_subscriber, write_dataset, CliResult, SyntheticSortConfig,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a synthetic card-sort CSV export.
#[derive(Debug, Parser)]
#[command(name = "generate_synthetic_sorts")]
struct Args {
    /// Number of cards in the deck.
    #[arg(long, default_value_t = 30)]
    cards: u32,

    /// Number of participants.
    #[arg(long, default_value_t = 15)]
    users: u32,

    /// Upper bound on categories per participant.
    #[arg(long, default_value_t = 8)]
    max_categories: u32,

    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the CSV.
    #[arg(long)]
    output: PathBuf,
}

fn main() -> CliResult<()> {
    init_subscriber();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = SyntheticSortConfig {
        cards: args.cards,
        users: args.users,
        max_categories: args.max_categories,
    };
    let dataset = generate_sorts(&mut rng, &config);
    write_dataset(&args.output, &dataset)?;
    Ok(())
}
