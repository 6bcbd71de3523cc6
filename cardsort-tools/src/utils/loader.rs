/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! CSV boundary for the five-column card-sort export
//! (`card_id,card_label,category_id,category_label,user_id`).
//!
//! The loader only turns rows into records; structural invariants are the
//! analysis library's validator's job.

use std::path::Path;

use cardsort::{Dataset, SortRecord};
use tracing::info;

use crate::utils::{CliError, CliResult};

/// Load a dataset from a CSV export at `path`.
///
/// Rows that do not deserialize (missing columns, non-integer ids) are a
/// [`CliError::Load`], not a validation outcome.
pub fn load_dataset(path: &Path) -> CliResult<Dataset> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<SortRecord>() {
        records.push(row.map_err(|source| CliError::Load {
            path: path.to_path_buf(),
            source,
        })?);
    }

    info!("loaded {} rows from {}", records.len(), path.display());
    Ok(Dataset::new(records))
}

/// Write `dataset` as a CSV export at `path`, one row per record.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> CliResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| CliError::Store {
        path: path.to_path_buf(),
        source,
    })?;

    for record in dataset.records() {
        writer.serialize(record).map_err(|source| CliError::Store {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush()?;

    info!(
        "wrote {} rows to {}",
        dataset.records().len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cardsort::validate;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::utils::init_test_subscriber;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_a_well_formed_export() {
        let _guard = init_test_subscriber();
        let file = write_csv(
            "card_id,card_label,category_id,category_label,user_id\n\
             1,Dog,1,pets,1\n\
             2,Cat,1,pets,1\n\
             1,Dog,1,animals,2\n\
             2,Cat,1,animals,2\n",
        );

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.records().len(), 4);
        assert_eq!(dataset.num_users(), 2);
        assert_eq!(dataset.num_cards(), 2);
        assert!(validate(&dataset));
        assert_eq!(dataset.records()[1].card_label, "Cat");
    }

    #[test]
    fn rejects_a_missing_column() {
        let _guard = init_test_subscriber();
        let file = write_csv(
            "card_id,card_label,category_id,user_id\n\
             1,Dog,1,1\n",
        );
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Load { .. }));
    }

    #[test]
    fn round_trips_through_write_and_load() {
        let _guard = init_test_subscriber();
        let source = write_csv(
            "card_id,card_label,category_id,category_label,user_id\n\
             1,Dog,1,pets,1\n\
             2,Cat,1,pets,1\n",
        );
        let dataset = load_dataset(source.path()).unwrap();

        let target = NamedTempFile::new().unwrap();
        write_dataset(target.path(), &dataset).unwrap();
        let reloaded = load_dataset(target.path()).unwrap();
        assert_eq!(dataset, reloaded);
    }
}
