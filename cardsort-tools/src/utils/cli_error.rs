/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Error type for the command line binaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Reading or parsing the CSV export failed.
    #[error("failed to read sort data from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Writing a CSV file failed.
    #[error("failed to write sort data to {path}")]
    Store {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The dataset was parseable but failed structural validation. The
    /// validator logged the diagnostics.
    #[error("dataset failed validation; see diagnostics above")]
    InvalidDataset,

    /// The query produced no result (no known labels, or table building
    /// disabled).
    #[error("no cluster label table produced; see diagnostics above")]
    NoResult,

    /// A rejected argument or a render failure from the analysis library.
    #[error(transparent)]
    Analysis(#[from] cardsort::AnalysisError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
