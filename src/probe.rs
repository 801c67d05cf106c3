// src/probe.rs
//! Filesystem probing with degrade-to-absent semantics.
//!
//! A probe failure (permission, deletion race) must never abort a check
//! run. Callers that only care about presence collapse `Unreadable` to
//! "not found"; the variant exists so tests can tell the two apart.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Tri-state result of a filesystem probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Found,
    NotFound,
    /// The probe itself failed. Treated as `NotFound` by all callers.
    Unreadable,
}

impl Presence {
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }
}

/// Capability-scoped filesystem access used by the metadata inspector.
pub trait Probe {
    /// Presence of a regular file at `path`.
    fn file_presence(&self, path: &Path) -> Presence;

    /// Presence of a directory at `path`.
    fn dir_presence(&self, path: &Path) -> Presence;

    /// Full text of the file at `path`, or `None` when missing or
    /// unreadable.
    fn read_text(&self, path: &Path) -> Option<String>;
}

/// Probe backed by the real filesystem.
pub struct FsProbe;

impl Probe for FsProbe {
    fn file_presence(&self, path: &Path) -> Presence {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Presence::Found,
            Ok(_) => Presence::NotFound,
            Err(e) if e.kind() == ErrorKind::NotFound => Presence::NotFound,
            Err(_) => Presence::Unreadable,
        }
    }

    fn dir_presence(&self, path: &Path) -> Presence {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Presence::Found,
            Ok(_) => Presence::NotFound,
            Err(e) if e.kind() == ErrorKind::NotFound => Presence::NotFound,
            Err(_) => Presence::Unreadable,
        }
    }

    fn read_text(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }
}
