// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Command-line parsing and the commands themselves.


use std::fmt;
use std::io::{self, Write};

use cdata_blob::ffi::{binary_cdata_tar_end, binary_cdata_tar_len, binary_cdata_tar_start};
use cdata_blob::{ArchiveError, TarSource};

pub const USAGE: &str = "\
usage: cdata-dump <command>

commands:
  info         print the bounds of the embedded archive
  list         list embedded resources with their sizes
  cat <path>   write one resource to stdout
  help         show this message";

/// Exit status for a failed command.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for an invalid command line.
pub const EXIT_USAGE: u8 = 2;

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Info,
    List,
    Cat(String),
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingPath,
    UnexpectedArgument(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(name) => write!(f, "unknown command `{name}`"),
            Self::MissingPath => write!(f, "`cat` needs a resource path"),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument `{arg}`"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure while running a command.
#[derive(Debug)]
pub enum CommandError {
    Archive(ArchiveError),
    NotFound(String),
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive(err) => write!(f, "{err}"),
            Self::NotFound(path) => write!(f, "no resource named `{path}`"),
            Self::Io(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ArchiveError> for CommandError {
    fn from(err: ArchiveError) -> Self {
        Self::Archive(err)
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Self, ParseError> {
        let mut args = args.iter().map(String::as_str);
        let command = match args.next() {
            None | Some("help" | "-h" | "--help") => Self::Help,
            Some("info") => Self::Info,
            Some("list") => Self::List,
            Some("cat") => Self::Cat(args.next().ok_or(ParseError::MissingPath)?.to_owned()),
            Some(other) => return Err(ParseError::UnknownCommand(other.to_owned())),
        };
        if let Some(extra) = args.next() {
            return Err(ParseError::UnexpectedArgument(extra.to_owned()));
        }
        Ok(command)
    }

    /// Execute the command, writing results to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<(), CommandError> {
        match self {
            Self::Help => writeln!(out, "{USAGE}")?,
            Self::Info => {
                writeln!(out, "start  {:p}", binary_cdata_tar_start())?;
                writeln!(out, "end    {:p}", binary_cdata_tar_end())?;
                writeln!(out, "length {}", binary_cdata_tar_len())?;
            }
            Self::List => {
                let source = TarSource::embedded()?;
                let mut total = 0;
                for entry in source.entries() {
                    writeln!(out, "{:>10}  {}", entry.size(), entry.path())?;
                    total += 1;
                }
                tracing::info!(files = total, "listed embedded resources");
            }
            Self::Cat(path) => {
                let source = TarSource::embedded()?;
                let entry = source
                    .find(path)
                    .ok_or_else(|| CommandError::NotFound(path.clone()))?;
                tracing::debug!(path = entry.path(), size = entry.size(), "writing resource");
                out.write_all(entry.data())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Report an invalid command line on `err_out`; returns [`EXIT_USAGE`].
pub fn report_usage(err: &ParseError, err_out: &mut impl Write) -> u8 {
    // Nowhere left to report a failing stderr.
    let _ = writeln!(err_out, "error: {err}\n{USAGE}");
    EXIT_USAGE
}

/// Report the outcome of [`Command::run`] on `err_out`; returns the exit status.
pub fn report(result: &Result<(), CommandError>, err_out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        // Reader went away (`cdata-dump cat x | head`), output was accepted.
        Err(CommandError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            let _ = writeln!(err_out, "error: {err}");
            EXIT_FAILURE
        }
    }
}
