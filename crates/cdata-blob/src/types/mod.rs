// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Core type definitions for cdata-blob.
//!
//! Addresses handed across the C ABI are plain integers on the other side;
//! the [`Addr`] newtype keeps them from being mixed with lengths and offsets
//! on this side.

mod address;


pub use address::Addr;
