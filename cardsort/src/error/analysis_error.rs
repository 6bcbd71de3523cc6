/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use thiserror::Error;

use crate::dendrogram::params::{ParseCountModeError, ParseLinkageMethodError};
use crate::dendrogram::render::RenderError;
use crate::matrix::TryFromCondensedError;

/// Convenience alias for a `Result<T, AnalysisError>`.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type shared by the fallible analysis operations.
///
/// Data-quality problems (a dataset that fails validation, a query with no
/// known labels) are deliberately NOT errors: those operations return `None`
/// so batch pipelines can check-and-skip. `AnalysisError` is reserved for
/// programming errors that should abort the call, plus failures of the
/// rendering capability.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// An argument was rejected before any computation ran.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The dendrogram render capability reported a failure.
    #[error("dendrogram rendering failed")]
    Render(#[from] RenderError),
}

impl AnalysisError {
    /// Return the kind of the error, for callers that branch on the origin
    /// without formatting the message.
    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            AnalysisError::InvalidArgument(_) => AnalysisErrorKind::InvalidArgument,
            AnalysisError::Render(_) => AnalysisErrorKind::Render,
        }
    }
}

/// Kinds used to tag an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisErrorKind {
    /// A rejected argument. A programming error, not a data-quality issue.
    InvalidArgument,
    /// A failure inside the render capability.
    Render,
}

impl From<ParseCountModeError> for AnalysisError {
    fn from(err: ParseCountModeError) -> Self {
        AnalysisError::InvalidArgument(err.to_string())
    }
}

impl From<ParseLinkageMethodError> for AnalysisError {
    fn from(err: ParseLinkageMethodError) -> Self {
        AnalysisError::InvalidArgument(err.to_string())
    }
}

impl From<TryFromCondensedError> for AnalysisError {
    fn from(err: TryFromCondensedError) -> Self {
        AnalysisError::InvalidArgument(err.to_string())
    }
}
