// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Integration tests for the embedded archive.
//!
//! Reads the blob through the public accessors and compares it with the
//! archive the build script wrote and with the files of the resource
//! directory it was built from (`cdata/` or `$CDATA_DIR`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use cdata_blob::ffi::{binary_cdata_tar_end, binary_cdata_tar_len, binary_cdata_tar_start};
use cdata_blob::{Blob, ResourceSource, TarSource, resource_end, resource_start};

fn cdata_dir() -> PathBuf {
    PathBuf::from(env!("CDATA_SOURCE_DIR"))
}

/// Read the blob the way a foreign caller would: two addresses, then bytes.
fn read_through_accessors() -> &'static [u8] {
    let start = binary_cdata_tar_start();
    let end = binary_cdata_tar_end();
    let len = end.addr() - start.addr();
    unsafe { std::slice::from_raw_parts(start, len) }
}

#[test]
fn accessor_bytes_equal_packed_archive() {
    let packed = std::fs::read(env!("CDATA_ARCHIVE")).expect("archive written by build.rs");
    assert_eq!(read_through_accessors(), packed.as_slice());
}

#[test]
fn ffi_and_rust_accessors_agree() {
    assert_eq!(binary_cdata_tar_start(), resource_start());
    assert_eq!(binary_cdata_tar_end(), resource_end());
    assert_eq!(binary_cdata_tar_len(), Blob::embedded().len());
}

#[test]
fn every_file_on_disk_round_trips() {
    let source = TarSource::embedded().expect("embedded archive should load");
    let mut pending = vec![cdata_dir()];
    let mut checked = 0;

    while let Some(dir) = pending.pop() {
        for dirent in std::fs::read_dir(&dir).unwrap() {
            let path = dirent.unwrap().path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let relative = path.strip_prefix(cdata_dir()).unwrap();
            let key = relative.to_str().unwrap().replace('\\', "/");
            let expected = std::fs::read(&path).unwrap();
            assert_eq!(
                source.resolve(&key),
                Some(expected.as_slice()),
                "resource {key} differs from disk"
            );
            checked += 1;
        }
    }

    assert_eq!(checked, source.file_count());
}

#[test]
fn bounds_never_change() {
    let first = (resource_start(), resource_end());
    let blob = Blob::embedded();
    let second = (resource_start(), resource_end());
    assert_eq!(first, second);
    assert_eq!(blob.as_bytes().as_ptr(), first.0);
}

#[test]
fn source_dir_is_absolute() {
    let dir = cdata_dir();
    assert!(dir.is_absolute(), "{}", dir.display());
    assert!(dir.is_dir(), "{}", dir.display());
}
