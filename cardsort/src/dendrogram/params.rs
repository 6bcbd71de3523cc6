/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::str::FromStr;

/// How aggregate dissimilarity is displayed on the dendrogram axis.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CountMode {
    /// Dissimilarity as a fraction between 0 and 1 of the user count.
    Fraction,
    /// Dissimilarity as absolute counts from 0 to the user count.
    Absolute,
}

impl CountMode {
    /// Returns the string representation of the count mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            CountMode::Fraction => "fraction",
            CountMode::Absolute => "absolute",
        }
    }
}

impl std::fmt::Display for CountMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum ParseCountModeError {
    InvalidFormat(String),
}

impl std::fmt::Display for ParseCountModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(str) => write!(
                f,
                "Invalid count mode {:?}. Expected one of: fraction, absolute",
                str
            ),
        }
    }
}

impl std::error::Error for ParseCountModeError {}

impl FromStr for CountMode {
    type Err = ParseCountModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            x if x == CountMode::Fraction.as_str() => Ok(CountMode::Fraction),
            x if x == CountMode::Absolute.as_str() => Ok(CountMode::Absolute),
            _ => Err(ParseCountModeError::InvalidFormat(String::from(s))),
        }
    }
}

/// The rule used by the linkage capability to merge cluster pairs.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LinkageMethod {
    /// Unweighted average distance between all elements of two clusters
    /// (UPGMA).
    Average,
    /// Distance between the two farthest elements of two clusters.
    Complete,
    /// Distance between the two closest elements of two clusters.
    Single,
}

impl LinkageMethod {
    /// Returns the string representation of the linkage method.
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkageMethod::Average => "average",
            LinkageMethod::Complete => "complete",
            LinkageMethod::Single => "single",
        }
    }
}

impl std::fmt::Display for LinkageMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LinkageMethod> for kodama::Method {
    fn from(method: LinkageMethod) -> kodama::Method {
        match method {
            LinkageMethod::Average => kodama::Method::Average,
            LinkageMethod::Complete => kodama::Method::Complete,
            LinkageMethod::Single => kodama::Method::Single,
        }
    }
}

#[derive(Debug)]
pub enum ParseLinkageMethodError {
    InvalidFormat(String),
}

impl std::fmt::Display for ParseLinkageMethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(str) => write!(
                f,
                "Invalid linkage method {:?}. Expected one of: average, complete, single",
                str
            ),
        }
    }
}

impl std::error::Error for ParseLinkageMethodError {}

impl FromStr for LinkageMethod {
    type Err = ParseLinkageMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            x if x == LinkageMethod::Average.as_str() => Ok(LinkageMethod::Average),
            x if x == LinkageMethod::Complete.as_str() => Ok(LinkageMethod::Complete),
            x if x == LinkageMethod::Single.as_str() => Ok(LinkageMethod::Single),
            _ => Err(ParseLinkageMethodError::InvalidFormat(String::from(s))),
        }
    }
}

/// Arguments of [`create_dendrogram`](crate::create_dendrogram).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DendrogramParams {
    /// Axis scaling for the displayed dissimilarity.
    pub count_mode: CountMode,
    /// Merge rule handed to the linkage capability.
    pub linkage: LinkageMethod,
    /// Dissimilarity cutoff below which branches form distinct colored
    /// groups. Defaults to 0.75 on the fraction scale, or 0.75 times the
    /// matrix maximum in absolute mode.
    pub color_threshold: Option<f64>,
}

impl Default for DendrogramParams {
    fn default() -> Self {
        Self {
            count_mode: CountMode::Fraction,
            linkage: LinkageMethod::Average,
            color_threshold: None,
        }
    }
}
