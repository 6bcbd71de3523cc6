/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Shared fixtures for the unit tests.

use crate::{Dataset, SortRecord};

/// Shorthand constructor used throughout the tests.
pub fn record(
    card_id: u32,
    card_label: &str,
    category_id: i64,
    category_label: &str,
    user_id: u32,
) -> SortRecord {
    SortRecord::new(card_id, card_label, category_id, category_label, user_id)
}

/// Five users sorting five cards (Dog, Tiger, Cat, Hammer, Spoon).
///
/// Users 1, 2 and 5 group the three animals under one category ("pets",
/// "animals" and "Animals" respectively), user 3 splits them across two
/// categories, and user 4 keeps Cat apart from Dog and Tiger.
pub fn animals_dataset() -> Dataset {
    let mut records = Vec::new();

    // user 1: pets / tools
    records.push(record(1, "Dog", 1, "pets", 1));
    records.push(record(2, "Tiger", 1, "pets", 1));
    records.push(record(3, "Cat", 1, "pets", 1));
    records.push(record(4, "Hammer", 2, "tools", 1));
    records.push(record(5, "Spoon", 2, "tools", 1));

    // user 2: animals / hardware / kitchen
    records.push(record(3, "Cat", 1, "animals", 2));
    records.push(record(2, "Tiger", 1, "animals", 2));
    records.push(record(1, "Dog", 1, "animals", 2));
    records.push(record(4, "Hammer", 2, "hardware", 2));
    records.push(record(5, "Spoon", 3, "kitchen", 2));

    // user 3: splits the animals
    records.push(record(1, "Dog", 1, "domestic", 3));
    records.push(record(3, "Cat", 1, "domestic", 3));
    records.push(record(2, "Tiger", 2, "wild", 3));
    records.push(record(4, "Hammer", 3, "objects", 3));
    records.push(record(5, "Spoon", 3, "objects", 3));

    // user 4: keeps Cat away from Dog and Tiger
    records.push(record(1, "Dog", 1, "strong", 4));
    records.push(record(2, "Tiger", 1, "strong", 4));
    records.push(record(3, "Cat", 2, "cute", 4));
    records.push(record(4, "Hammer", 3, "tools", 4));
    records.push(record(5, "Spoon", 3, "tools", 4));

    // user 5: Animals / Things
    records.push(record(1, "Dog", 1, "Animals", 5));
    records.push(record(2, "Tiger", 1, "Animals", 5));
    records.push(record(3, "Cat", 1, "Animals", 5));
    records.push(record(4, "Hammer", 2, "Things", 5));
    records.push(record(5, "Spoon", 2, "Things", 5));

    Dataset::new(records)
}

/// Three cards, two users: user 1 separates card 3 from cards 1 and 2,
/// user 2 groups all three together. Condensed aggregate is `[0, 1, 1]`.
pub fn tiny_dataset() -> Dataset {
    Dataset::new(vec![
        record(1, "Red", 1, "warm", 1),
        record(2, "Orange", 1, "warm", 1),
        record(3, "Blue", 2, "cold", 1),
        record(1, "Red", 1, "colors", 2),
        record(2, "Orange", 1, "colors", 2),
        record(3, "Blue", 1, "colors", 2),
    ])
}
