// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Linker symbols delimiting the embedded cdata archive.
//!
//! On ELF targets the archive produced by `build.rs` is pulled into
//! `.rodata.cdata` with `.incbin` and bracketed by `_binary_cdata_tar_start`
//! and `_binary_cdata_tar_end`, the names `objcopy -I binary` would give it.
//! The symbols are global, so C code linked into the same image can also
//! reference them directly.
//!
//! Other object formats use different section and symbol-prefix conventions;
//! there the archive is embedded as a plain static and the bounds are derived
//! from it.

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "none"
))]
mod bounds {
    core::arch::global_asm!(
        ".pushsection .rodata.cdata, \"a\"",
        ".balign 16",
        ".global _binary_cdata_tar_start",
        "_binary_cdata_tar_start:",
        concat!(".incbin \"", env!("CDATA_ARCHIVE"), "\""),
        ".global _binary_cdata_tar_end",
        "_binary_cdata_tar_end:",
        ".popsection",
    );

    // Only the addresses are meaningful; the end symbol names no byte.
    #[allow(non_upper_case_globals)]
    unsafe extern "C" {
        static _binary_cdata_tar_start: u8;
        static _binary_cdata_tar_end: u8;
    }

    #[inline]
    pub fn start() -> *const u8 {
        &raw const _binary_cdata_tar_start
    }

    #[inline]
    pub fn end() -> *const u8 {
        &raw const _binary_cdata_tar_end
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "none"
)))]
mod bounds {
    static CDATA_TAR: &[u8] = include_bytes!(env!("CDATA_ARCHIVE"));

    #[inline]
    pub fn start() -> *const u8 {
        CDATA_TAR.as_ptr()
    }

    #[inline]
    pub fn end() -> *const u8 {
        CDATA_TAR.as_ptr_range().end
    }
}

pub(crate) use bounds::{end, start};
