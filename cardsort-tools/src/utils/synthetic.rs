/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Synthetic open-sort generator for demos and scale experiments.

use cardsort::{Dataset, SortRecord};
use rand::Rng;
use tracing::info;

/// Shape of a generated study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticSortConfig {
    /// Number of cards in the deck.
    pub cards: u32,
    /// Number of participants.
    pub users: u32,
    /// Upper bound on the number of categories any one user creates.
    pub max_categories: u32,
}

impl Default for SyntheticSortConfig {
    fn default() -> Self {
        Self {
            cards: 30,
            users: 15,
            max_categories: 8,
        }
    }
}

/// Generate a study in which every user sorts the whole deck into a random
/// number of categories. The output always satisfies the dataset
/// invariants, so it can feed any analysis directly.
pub fn generate_sorts<R: Rng>(rng: &mut R, config: &SyntheticSortConfig) -> Dataset {
    let card_labels: Vec<String> = (1..=config.cards).map(|id| format!("card-{id}")).collect();

    let mut records = Vec::with_capacity((config.users * config.cards) as usize);
    for user_id in 1..=config.users {
        let categories = rng.gen_range(1..=config.max_categories.min(config.cards).max(1));
        for card_id in 1..=config.cards {
            let category = rng.gen_range(1..=categories);
            records.push(SortRecord::new(
                card_id,
                card_labels[(card_id - 1) as usize].clone(),
                i64::from(category),
                format!("group-{category}"),
                user_id,
            ));
        }
    }

    info!(
        "generated {} rows ({} users x {} cards)",
        records.len(),
        config.users,
        config.cards
    );
    Dataset::new(records)
}
