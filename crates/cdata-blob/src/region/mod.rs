// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Validated address ranges.
//!
//! A [`Region`] is the half-open range `[start, end)` between two addresses.
//! Construction enforces `start <= end`, so `len()` is always `end - start`
//! and never wraps.


use core::fmt;

use crate::types::Addr;

/// Error constructing or slicing a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// End address lies below the start address.
    Inverted {
        /// Requested start.
        start: Addr,
        /// Requested end.
        end: Addr,
    },
    /// `start + len` does not fit in the address space.
    Overflow,
    /// Subregion extends past the end of its parent.
    OutOfBounds {
        /// Requested offset into the parent.
        offset: usize,
        /// Requested length.
        len: usize,
        /// Length of the parent region.
        available: usize,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { start, end } => {
                write!(f, "region end {end} lies below start {start}")
            }
            Self::Overflow => write!(f, "region length overflows the address space"),
            Self::OutOfBounds {
                offset,
                len,
                available,
            } => write!(
                f,
                "subregion {offset}+{len} exceeds region of {available} bytes"
            ),
        }
    }
}

impl core::error::Error for RegionError {}

/// A contiguous, half-open address range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    start: Addr,
    end: Addr,
}

impl Region {
    /// Create a region from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Inverted`] if `end < start`.
    pub const fn new(start: Addr, end: Addr) -> Result<Self, RegionError> {
        if end.as_usize() < start.as_usize() {
            return Err(RegionError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a region of `len` bytes starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Overflow`] if the end address does not fit.
    pub const fn from_len(start: Addr, len: usize) -> Result<Self, RegionError> {
        match start.checked_add(len) {
            Some(end) => Ok(Self { start, end }),
            None => Err(RegionError::Overflow),
        }
    }

    /// The region occupied by a slice.
    #[must_use]
    pub fn of_slice<T>(slice: &[T]) -> Self {
        let range = slice.as_ptr_range();
        Self {
            start: Addr::from_ptr(range.start),
            end: Addr::from_ptr(range.end),
        }
    }

    /// Whether `other` lies entirely inside this region.
    #[inline]
    #[must_use]
    pub const fn encloses(&self, other: &Self) -> bool {
        other.start.as_usize() >= self.start.as_usize()
            && other.end.as_usize() <= self.end.as_usize()
    }

    /// First address of the region.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Addr {
        self.start
    }

    /// Address one past the last byte of the region.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Addr {
        self.end
    }

    /// Number of bytes in the region.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.diff(self.start)
    }

    /// Whether the region holds no bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `addr` falls inside `[start, end)`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, addr: Addr) -> bool {
        addr.as_usize() >= self.start.as_usize() && addr.as_usize() < self.end.as_usize()
    }

    /// Byte offset of `addr` from the start, if it lies inside the region.
    #[must_use]
    pub const fn offset_of(&self, addr: Addr) -> Option<usize> {
        if self.contains(addr) {
            Some(addr.diff(self.start))
        } else {
            None
        }
    }

    /// Carve `len` bytes at `offset` out of this region.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::OutOfBounds`] if the subregion does not fit.
    pub const fn subregion(&self, offset: usize, len: usize) -> Result<Self, RegionError> {
        let available = self.len();
        let fits = match offset.checked_add(len) {
            Some(last) => last <= available,
            None => false,
        };
        if !fits {
            return Err(RegionError::OutOfBounds {
                offset,
                len,
                available,
            });
        }
        let start = self.start.add(offset);
        Ok(Self {
            start,
            end: start.add(len),
        })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}) ({} bytes)", self.start, self.end, self.len())
    }
}
