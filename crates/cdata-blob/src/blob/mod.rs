// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! The embedded blob and its boundary accessors.
//!
//! [`resource_start`] and [`resource_end`] report the addresses of the linker
//! symbols around the embedded archive. They read no memory, keep no state,
//! and return the same values for the whole life of the process, so they can
//! be called from any thread without synchronization.
//!
//! [`Blob`] pairs those bounds with a `'static` slice for Rust callers.

#[cfg(test)]
mod blob_test;

use core::fmt;
use core::ops::Range;

use crate::region::{Region, RegionError};
use crate::symbols;
use crate::types::Addr;

/// Address of the first byte of the embedded blob.
#[inline]
#[must_use]
pub fn resource_start() -> *const u8 {
    symbols::start()
}

/// Address one past the last byte of the embedded blob.
#[inline]
#[must_use]
pub fn resource_end() -> *const u8 {
    symbols::end()
}

/// Both bounds of the embedded blob as a [`Region`].
#[inline]
#[must_use]
pub fn resource_region() -> Region {
    Blob::embedded().region()
}

/// A byte range that lives for the rest of the process.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Blob {
    bytes: &'static [u8],
}

impl Blob {
    /// The blob placed between the `_binary_cdata_tar_*` symbols.
    #[must_use]
    pub fn embedded() -> Self {
        let start = resource_start();
        let len = resource_end().addr().saturating_sub(start.addr());
        // SAFETY: the linker lays the archive out contiguously in read-only
        // data between the two symbols; it is never written and never freed.
        let bytes = unsafe { core::slice::from_raw_parts(start, len) };
        Self { bytes }
    }

    /// Wrap a static slice.
    #[inline]
    #[must_use]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self { bytes }
    }

    /// Wrap the memory between two other boundary symbols.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Inverted`] if `end` lies below `start`.
    ///
    /// # Safety
    ///
    /// `start..end` must be readable, must not be mutated, and must stay
    /// mapped for the rest of the process. `start` must be non-null.
    pub unsafe fn from_bounds(start: *const u8, end: *const u8) -> Result<Self, RegionError> {
        let region = Region::new(Addr::from_ptr(start), Addr::from_ptr(end))?;
        // SAFETY: caller guarantees the range is valid for 'static reads.
        let bytes = unsafe { core::slice::from_raw_parts(start, region.len()) };
        Ok(Self { bytes })
    }

    /// The blob contents.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Length in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the blob holds no bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Addresses occupied by the blob.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Region {
        Region::of_slice(self.bytes)
    }

    /// Bytes at `range`, relative to the start of the blob.
    #[inline]
    #[must_use]
    pub fn get(&self, range: Range<usize>) -> Option<&'static [u8]> {
        self.bytes.get(range)
    }

    /// Bytes covered by `region`, if it lies inside the blob.
    #[must_use]
    pub fn bytes_in(&self, region: Region) -> Option<&'static [u8]> {
        let own = self.region();
        if !own.encloses(&region) {
            return None;
        }
        let offset = region.start().diff(own.start());
        self.get(offset..offset + region.len())
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("region", &self.region())
            .finish_non_exhaustive()
    }
}
