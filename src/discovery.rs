// src/discovery.rs
//! Buildroot walking: turns an installed tree into install-relative paths.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` and returns the install-relative path (`/usr/...`) of every
/// file and directory beneath it, in walk order.
///
/// Directories are included deliberately: the path rules target directories
/// like `.../site-packages/tests`. Walk errors are counted and reported to
/// stderr when `verbose` is set; they never abort the scan.
#[must_use]
pub fn file_list(root: &Path, verbose: bool) -> Vec<String> {
    let walker = WalkDir::new(root).min_depth(1).follow_links(false);

    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
                paths.push(install_relative(rel));
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && verbose {
        eprintln!("WARN: Encountered {errors} errors during buildroot walk");
    }
    paths
}

/// Normalizes a buildroot-relative path to an absolute install path with
/// forward slashes (cross-platform pattern matching).
fn install_relative(rel: &Path) -> String {
    let mut path = PathBuf::from("/");
    path.push(rel);
    path.to_string_lossy().replace('\\', "/")
}
