// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Read-only view of the embedded archive.
//!
//! The blob is a USTAR tar of the `cdata/` directory. This module resolves
//! resource paths to byte slices inside the blob without copying.
//!
//! ## Path Rules
//!
//! `tar -C cdata .` stores names as `./config/app.properties`. Entries are
//! exposed without the leading `./`, and lookups accept `config/app.properties`,
//! `./config/app.properties` or `/config/app.properties` alike. Directory
//! entries and names that are not UTF-8 are skipped.


use core::fmt;

use tar_no_std::{ArchiveEntry, TarArchiveRef};

use crate::blob::Blob;
use crate::region::Region;

/// Longest path a USTAR header can carry (155-byte prefix, 100-byte name, `/`).
pub const MAX_PATH_LEN: usize = 256;

/// Error opening an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveError {
    /// Archive data is not a sequence of 512-byte tar blocks.
    Corrupt {
        /// Length of the rejected data.
        len: usize,
    },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupt { len } => write!(f, "corrupt tar archive ({len} bytes)"),
        }
    }
}

impl core::error::Error for ArchiveError {}

/// Something that maps resource paths to bytes.
pub trait ResourceSource {
    /// Look up a resource by path.
    fn resolve(&self, path: &str) -> Option<&[u8]>;
}

/// One regular file in the archive.
#[derive(Clone, Copy)]
pub struct Entry {
    path: [u8; MAX_PATH_LEN],
    path_len: usize,
    data: &'static [u8],
}

impl Entry {
    fn from_archive(entry: &ArchiveEntry<'static>) -> Option<Self> {
        let filename = entry.filename();
        let name = normalize_path(filename.as_str().ok()?);
        if name.is_empty() || name.ends_with('/') {
            return None;
        }
        let mut path = [0u8; MAX_PATH_LEN];
        path.get_mut(..name.len())?.copy_from_slice(name.as_bytes());
        Some(Self {
            path,
            path_len: name.len(),
            data: entry.data(),
        })
    }

    /// Path relative to the archive root, without a leading `./`.
    #[must_use]
    pub fn path(&self) -> &str {
        core::str::from_utf8(&self.path[..self.path_len]).unwrap_or_default()
    }

    /// File contents.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// File size in bytes.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Addresses of the file contents inside the blob.
    #[must_use]
    pub fn region(&self) -> Region {
        Region::of_slice(self.data)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("path", &self.path())
            .field("size", &self.size())
            .finish()
    }
}

/// Resources stored in a USTAR archive.
pub struct TarSource {
    archive: TarArchiveRef<'static>,
}

impl TarSource {
    /// Open the archive embedded in this binary.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Corrupt`] if the blob is not a tar archive.
    pub fn embedded() -> Result<Self, ArchiveError> {
        Self::new(Blob::embedded().as_bytes())
    }

    /// Open an archive from static bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Corrupt`] if `data` is not a tar archive.
    pub fn new(data: &'static [u8]) -> Result<Self, ArchiveError> {
        let archive =
            TarArchiveRef::new(data).map_err(|_| ArchiveError::Corrupt { len: data.len() })?;
        Ok(Self { archive })
    }

    /// Iterate over the regular files in archive order.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.archive
            .entries()
            .filter_map(|entry| Entry::from_archive(&entry))
    }

    /// Find a file by path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<Entry> {
        let wanted = normalize_query(path);
        self.entries().find(|entry| entry.path() == wanted)
    }

    /// Number of regular files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries().count()
    }
}

impl ResourceSource for TarSource {
    fn resolve(&self, path: &str) -> Option<&[u8]> {
        self.find(path).map(|entry| entry.data())
    }
}

/// Two sources, tried in order.
///
/// Lets an on-disk or test overlay shadow resources from the embedded archive.
pub struct ChainedSource<A, B> {
    first: A,
    second: B,
}

impl<A, B> ChainedSource<A, B> {
    /// Chain `first` in front of `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: ResourceSource, B: ResourceSource> ResourceSource for ChainedSource<A, B> {
    fn resolve(&self, path: &str) -> Option<&[u8]> {
        self.first
            .resolve(path)
            .or_else(|| self.second.resolve(path))
    }
}

/// Strip the `./` prefix `tar -C dir .` puts on every name.
fn normalize_path(name: &str) -> &str {
    name.strip_prefix("./").unwrap_or(name)
}

/// Normalise a lookup path: drop a leading `./` or `/`.
fn normalize_query(path: &str) -> &str {
    path.strip_prefix("./")
        .or_else(|| path.strip_prefix('/'))
        .unwrap_or(path)
}
