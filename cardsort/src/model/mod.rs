/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

pub(crate) mod dataset;
pub(crate) mod record;
pub(crate) mod validate;

pub use dataset::Dataset;
pub use record::SortRecord;
pub use validate::{validate, ValidationReport, Violation};
