// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! cdata-dump: inspect the resource archive embedded in `cdata-blob`.
//!
//! Reads the archive exactly as a foreign caller would, through the
//! boundary accessors, and prints what it finds. Logs and error messages go
//! to stderr so stdout carries only listings and resource bytes.

mod command;
mod logging;

use std::process::ExitCode;

use command::Command;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(err) => return ExitCode::from(command::report_usage(&err, &mut std::io::stderr())),
    };

    tracing::debug!(?command, version = cdata_blob::VERSION, "cdata-dump starting");

    let result = command.run(&mut std::io::stdout().lock());
    ExitCode::from(command::report(&result, &mut std::io::stderr()))
}
