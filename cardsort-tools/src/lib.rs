/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Command line tooling around the `cardsort` analysis library: dataset
//! loading from the five-column CSV export, synthetic study generation and
//! the tracing subscriber shared by the binaries.

pub mod utils;
