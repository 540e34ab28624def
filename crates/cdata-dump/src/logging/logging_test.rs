// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the default log filter.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io;
use std::sync::{Arc, Mutex};

use super::*;

/// Writer collecting formatted log lines for inspection.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(emit: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, emit);
    captured.text()
}

#[test]
fn default_filter_parses() {
    assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
}

#[test]
fn default_filter_drops_tar_parser_records() {
    let text = capture(|| {
        tracing::warn!(target: "tar_no_std::archive", "Skipping entry of type DIRTYPE");
        tracing::error!(target: "tar_no_std::archive", "Unparsable size");
    });
    assert!(text.is_empty(), "{text}");
}

#[test]
fn default_filter_keeps_own_info() {
    let text = capture(|| {
        tracing::info!(target: "cdata_dump", files = 3, "listed embedded resources");
        tracing::debug!(target: "cdata_dump", "hidden at info level");
    });
    assert!(text.contains("listed embedded resources"), "{text}");
    assert!(!text.contains("hidden at info level"), "{text}");
}
