// src/egginfo.rs
//! Egg-info metadata inspection.
//!
//! An egg-info path is either a deprecated distutils flat file or a
//! directory bundle that may carry a machine-readable requires.txt. The
//! classification is transient: discovered during one file's check and
//! discarded when that check completes.

use crate::probe::Probe;
use crate::types::Package;
use std::path::PathBuf;

/// Suffix that marks a path as egg-style metadata.
pub const EGG_INFO_SUFFIX: &str = "egg-info";

/// Requirement listing nested inside a directory-bundle egg-info.
pub const REQUIRES_FILE: &str = "requires.txt";

/// What kind of egg-info metadata a path turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EggInfoKind {
    /// Deprecated distutils flat-file metadata. Carries no machine-readable
    /// requirement list, so reconciliation never applies.
    LegacyFlatFile,
    /// Directory-bundle metadata; `requires` is the resolved requires.txt
    /// path when one exists.
    DirectoryBundle { requires: Option<PathBuf> },
}

/// Returns `true` if `path` names egg-style metadata.
#[must_use]
pub fn is_egg_info(path: &str) -> bool {
    path.ends_with(EGG_INFO_SUFFIX)
}

/// Classifies the egg-info metadata at `path` by probing under the package
/// root.
///
/// Probe failures degrade to absence: a bundle whose requires.txt cannot be
/// confirmed is treated as having none, never as an error.
#[must_use]
pub fn inspect(probe: &dyn Probe, pkg: &Package, path: &str) -> EggInfoKind {
    let resolved = pkg.resolve(path);

    if probe.file_presence(&resolved).is_found() {
        return EggInfoKind::LegacyFlatFile;
    }

    if !probe.dir_presence(&resolved).is_found() {
        return EggInfoKind::DirectoryBundle { requires: None };
    }

    let requires = resolved.join(REQUIRES_FILE);
    if probe.file_presence(&requires).is_found() {
        EggInfoKind::DirectoryBundle {
            requires: Some(requires),
        }
    } else {
        EggInfoKind::DirectoryBundle { requires: None }
    }
}
