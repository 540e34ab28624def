// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Build script for cdata-blob.
//!
//! - Packs the resource directory into `cdata.tar` (USTAR)
//! - Hands the archive path to the crate as `CDATA_ARCHIVE`, where it is
//!   embedded between the `_binary_cdata_tar_{start,end}` linker symbols
//! - Hands the absolute resource directory to the crate as `CDATA_SOURCE_DIR`
//! - Compiles `csrc/header_check.c` against `include/cdata_blob.h`
//!
//! `CDATA_DIR` selects another resource directory. A relative `CDATA_DIR` is
//! resolved against the workspace root, where `cargo` is normally invoked.

use std::path::{Path, PathBuf};

/// Targets where `symbols.rs` emits real `_binary_cdata_tar_*` symbols.
const ELF_TARGET_OS: [&str; 6] = ["linux", "android", "freebsd", "netbsd", "openbsd", "none"];

fn main() {
    let Ok(out_dir) = std::env::var("OUT_DIR") else {
        eprintln!("error: OUT_DIR not set");
        std::process::exit(1);
    };
    let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") else {
        eprintln!("error: CARGO_MANIFEST_DIR not set");
        std::process::exit(1);
    };
    let tar_path = format!("{out_dir}/cdata.tar");

    // Workspace root is two levels above this crate
    let workspace_root = Path::new(&manifest_dir).join("../..");
    let bundled_dir = workspace_root.join("cdata");
    let cdata_dir = std::env::var_os("CDATA_DIR").map_or_else(
        || bundled_dir.clone(),
        |dir| resolve_dir(&workspace_root, Path::new(&dir)),
    );

    if !cdata_dir.is_dir() {
        eprintln!("error: resource directory {} does not exist", cdata_dir.display());
        std::process::exit(1);
    }
    let cdata_dir = cdata_dir.canonicalize().unwrap_or(cdata_dir);
    let Some(cdata_dir_str) = cdata_dir.to_str() else {
        eprintln!("error: resource directory path is not UTF-8");
        std::process::exit(1);
    };

    // Use --format=ustar for compatibility with tar-no-std crate
    let Ok(status) = std::process::Command::new("tar")
        .args(["--format=ustar", "-cf", &tar_path, "-C", cdata_dir_str, "."])
        .status()
    else {
        eprintln!("error: failed to run tar command");
        std::process::exit(1);
    };

    if !status.success() {
        eprintln!("error: tar command failed");
        std::process::exit(1);
    }

    println!("cargo::rustc-env=CDATA_ARCHIVE={tar_path}");
    println!("cargo::rustc-env=CDATA_SOURCE_DIR={cdata_dir_str}");

    // Tests that depend on the sample files only run against cdata/ itself
    println!("cargo::rustc-check-cfg=cfg(cdata_bundled)");
    if same_dir(&cdata_dir, &bundled_dir) {
        println!("cargo::rustc-cfg=cdata_bundled");
    }

    compile_header_check();

    // Rerun if cdata/ contents or its location change
    println!("cargo::rerun-if-changed={cdata_dir_str}/");
    println!("cargo::rerun-if-env-changed=CDATA_DIR");
    println!("cargo::rerun-if-changed=build.rs");
}

/// Make `dir` absolute, treating relative paths as workspace-relative.
fn resolve_dir(workspace_root: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        workspace_root.join(dir)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Build the C translation unit that calls the exports through the header.
fn compile_header_check() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    let mut build = cc::Build::new();
    build
        .file("csrc/header_check.c")
        .include("include")
        .warnings(true)
        .warnings_into_errors(true);
    if ELF_TARGET_OS.contains(&target_os.as_str()) {
        build.define("CDATA_LINKER_SYMBOLS", None);
    }

    if let Err(err) = build.try_compile("cdata_header_check") {
        eprintln!("error: failed to compile header check: {err}");
        std::process::exit(1);
    }

    println!("cargo::rerun-if-changed=csrc/header_check.c");
    println!("cargo::rerun-if-changed=include/cdata_blob.h");
}
