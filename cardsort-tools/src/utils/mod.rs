/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
pub mod cli_error;
pub use cli_error::*;

pub mod loader;
pub use loader::*;

pub mod synthetic;
pub use synthetic::*;

pub mod tracing;
pub use self::tracing::{init_subscriber, init_test_subscriber};

pub type CliResult<T> = Result<T, CliError>;
