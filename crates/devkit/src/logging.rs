//! Diagnostics are written to stderr so they never interleave with command
//! output on stdout.
//!
//! The filter comes from `--verbosity` (or `DEVKIT_LOG`) and accepts any
//! `EnvFilter` directive, e.g. `debug` or `devkit_survey=debug`.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

pub fn init(verbosity: &str, with_ansi: bool) {
    let filter =
        EnvFilter::try_new(verbosity).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(with_ansi)
                .with_writer(io::stderr),
        )
        .init();
}
