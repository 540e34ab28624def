// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! C ABI entry points for the embedded archive.
//!
//! Foreign runtimes can bind functions but not raw linker symbols, so the
//! archive bounds are re-exported as plain unmangled functions. The matching
//! declarations live in `include/cdata_blob.h`.
//!
//! All three functions are pure and thread-safe; they never unwind.


use crate::blob;

/// First byte of the embedded archive.
#[unsafe(no_mangle)]
pub extern "C" fn binary_cdata_tar_start() -> *const u8 {
    blob::resource_start()
}

/// One past the last byte of the embedded archive.
#[unsafe(no_mangle)]
pub extern "C" fn binary_cdata_tar_end() -> *const u8 {
    blob::resource_end()
}

/// Size of the embedded archive in bytes.
#[unsafe(no_mangle)]
pub extern "C" fn binary_cdata_tar_len() -> usize {
    blob::resource_region().len()
}
