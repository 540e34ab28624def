// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the blob accessors.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

/// Archive as written by the build script.
static PACKED: &[u8] = include_bytes!(env!("CDATA_ARCHIVE"));

static SAMPLE: [u8; 6] = *b"cdata!";

// =============================================================================
// Boundary accessors
// =============================================================================

#[test]
fn start_is_not_null() {
    assert!(!resource_start().is_null());
    assert!(!resource_end().is_null());
}

#[test]
fn end_not_below_start() {
    assert!(resource_end().addr() >= resource_start().addr());
}

#[test]
fn bounds_are_stable_across_calls() {
    let start = resource_start();
    let end = resource_end();
    for _ in 0..1000 {
        assert_eq!(resource_start(), start);
        assert_eq!(resource_end(), end);
    }
}

#[test]
fn region_matches_accessors() {
    let region = resource_region();
    assert_eq!(region.start(), Addr::from_ptr(resource_start()));
    assert_eq!(region.end(), Addr::from_ptr(resource_end()));
    assert_eq!(
        region.len(),
        resource_end().addr() - resource_start().addr()
    );
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "none"
))]
#[test]
fn start_symbol_is_aligned() {
    assert_eq!(Addr::from_ptr(resource_start()).is_aligned(16), Some(true));
}

// =============================================================================
// Embedded contents
// =============================================================================

#[test]
fn embedded_matches_packed_archive() {
    let blob = Blob::embedded();
    assert_eq!(blob.len(), PACKED.len());
    assert_eq!(blob.as_bytes(), PACKED);
}

#[test]
fn embedded_is_a_ustar_archive() {
    let blob = Blob::embedded();
    // USTAR magic lives at offset 257 of the first header block
    assert_eq!(blob.get(257..262), Some(&b"ustar"[..]));
    assert_eq!(blob.len() % 512, 0);
}

#[test]
fn embedded_blob_debug_shows_region() {
    let text = format!("{:?}", Blob::embedded());
    assert!(text.starts_with("Blob { region: Region {"), "{text}");
}

// =============================================================================
// Explicit bounds
// =============================================================================

#[test]
fn from_bounds_wraps_static_range() {
    let range = SAMPLE.as_ptr_range();
    let blob = unsafe { Blob::from_bounds(range.start, range.end) }.unwrap();
    assert_eq!(blob.as_bytes(), b"cdata!");
    assert_eq!(blob.region(), Region::of_slice(&SAMPLE));
}

#[test]
fn from_bounds_rejects_inverted_range() {
    let range = SAMPLE.as_ptr_range();
    let err = unsafe { Blob::from_bounds(range.end, range.start) }.unwrap_err();
    assert!(matches!(err, RegionError::Inverted { .. }));
}

#[test]
fn from_bounds_accepts_empty_range() {
    let start = SAMPLE.as_ptr();
    let blob = unsafe { Blob::from_bounds(start, start) }.unwrap();
    assert!(blob.is_empty());
}

// =============================================================================
// Slicing
// =============================================================================

#[test]
fn get_slices_relative_to_start() {
    let blob = Blob::from_static(&SAMPLE);
    assert_eq!(blob.get(0..5), Some(&b"cdata"[..]));
    assert_eq!(blob.get(4..8), None);
}

#[test]
fn bytes_in_maps_subregion() {
    let blob = Blob::from_static(&SAMPLE);
    let sub = blob.region().subregion(1, 3).unwrap();
    assert_eq!(blob.bytes_in(sub), Some(&b"dat"[..]));
}

#[test]
fn bytes_in_rejects_foreign_region() {
    let blob = Blob::from_static(&SAMPLE);
    let outside = Region::from_len(blob.region().end(), 1).unwrap();
    assert_eq!(blob.bytes_in(outside), None);
}
