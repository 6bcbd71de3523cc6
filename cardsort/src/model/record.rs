/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use serde::{Deserialize, Serialize};

/// One categorization event: a single user placing a single card into one of
/// their categories.
///
/// The field names match the five-column tabular export this crate analyzes
/// (`card_id,card_label,category_id,category_label,user_id`), so a row maps
/// onto this struct directly at the I/O boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRecord {
    /// Card identifier, dense `1..N` across the study.
    pub card_id: u32,
    /// Human-readable card label, unique per `card_id`.
    pub card_label: String,
    /// Category identifier, scoped to the user who created the category.
    pub category_id: i64,
    /// The name the user gave the category.
    pub category_label: String,
    /// Participant identifier, dense `1..M` across the study.
    pub user_id: u32,
}

impl SortRecord {
    /// Construct a record from owned parts.
    pub fn new(
        card_id: u32,
        card_label: impl Into<String>,
        category_id: i64,
        category_label: impl Into<String>,
        user_id: u32,
    ) -> Self {
        Self {
            card_id,
            card_label: card_label.into(),
            category_id,
            category_label: category_label.into(),
            user_id,
        }
    }
}
