// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Diagnostic logging to stderr.

#[cfg(test)]
mod logging_test;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
///
/// `tar_no_std` reports the archive's directory entries and end-of-archive
/// blocks through `log` at warn/error level; both are normal for a packed
/// directory, so its records are dropped.
pub const DEFAULT_FILTER: &str = "info,tar_no_std=off";

/// `RUST_LOG` if set, otherwise [`DEFAULT_FILTER`].
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Stdout is left to command output.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .init();
}
