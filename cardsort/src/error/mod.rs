/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

pub(crate) mod analysis_error;
pub use analysis_error::{AnalysisError, AnalysisErrorKind, AnalysisResult};
