// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # cdata-blob
//!
//! Resource archive embedded at link time, exposed through accessor
//! functions.
//!
//! The build script packs the workspace `cdata/` directory into a USTAR
//! archive and the linker places it between `_binary_cdata_tar_start` and
//! `_binary_cdata_tar_end`. Hosts that can call functions but cannot take the
//! address of a raw linker symbol use the C ABI exports in [`ffi`]; Rust code
//! uses [`resource_start`], [`resource_end`], [`Blob`] and [`TarSource`].
//!
//! The archive is part of the process image: nothing is allocated, copied or
//! freed, and no initialization is needed before the first call.
//!
//! ## `no_std` Support
//!
//! With `default-features = false` the crate is `no_std`. The `std` feature
//! is automatically enabled during testing.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;


pub mod archive;
pub mod blob;
pub mod ffi;
pub mod region;
mod symbols;
pub mod types;

pub use archive::{ArchiveError, ChainedSource, Entry, ResourceSource, TarSource};
pub use blob::{Blob, resource_end, resource_region, resource_start};
pub use region::{Region, RegionError};
pub use types::Addr;

/// Crate version.
///
/// Uses the version stamped into `CDATA_VERSION` at build time when available,
/// falling back to "unknown" otherwise.
pub const VERSION: &str = match option_env!("CDATA_VERSION") {
    Some(v) => v,
    None => "unknown",
};
