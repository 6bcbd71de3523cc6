/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use tracing;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Install the default subscriber for the binaries, respecting the
/// `RUST_LOG` environment variable ("info" when unset).
///
/// Diagnostics go to `stderr` so the JSON the binaries print on `stdout`
/// stays machine readable.
pub fn init_subscriber() {
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Create a subscriber for tests.
///
/// The returned `Guard` installs the subscriber locally, so test threads
/// get non-conflicting subscribers and output is captured per test.
pub fn init_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let fmt_layer = fmt::layer().with_target(true).with_test_writer();

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .set_default()
}
