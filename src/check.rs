// src/check.rs
//! The per-file check driver.
//!
//! One `Checker` processes a package's file list sequentially; the rule
//! tables are the only shared state and are immutable. Nothing in here is
//! fatal: a file that cannot be probed simply yields fewer diagnostics.

use std::path::Path;

use crate::config::Config;
use crate::egginfo::{self, EggInfoKind};
use crate::probe::Probe;
use crate::reconcile;
use crate::requires;
use crate::rules;
use crate::types::{Diagnostic, Package, Severity};

/// Deprecated distutils flat-file metadata.
pub const EGG_INFO_DISTUTILS_STYLE: &str = "python-egg-info-distutils-style";

/// Egg-info requirement with no counterpart in the declared requirements.
pub const EGGINFO_REQUIRE_NOT_IN_SPEC: &str = "python-egginfo-require-not-in-spec";

/// Drives all checks for one package.
pub struct Checker<'a> {
    probe: &'a dyn Probe,
    config: &'a Config,
}

impl<'a> Checker<'a> {
    #[must_use]
    pub fn new(probe: &'a dyn Probe, config: &'a Config) -> Self {
        Self { probe, config }
    }

    /// Runs every check for one file list entry, appending findings to
    /// `out` in emission order.
    pub fn check_file(&self, pkg: &Package, path: &str, out: &mut Vec<Diagnostic>) {
        if egginfo::is_egg_info(path) {
            self.check_egg_info(pkg, path, out);
        }

        for (severity, code) in rules::classify(path) {
            self.emit(Diagnostic::new(severity, code, &pkg.name, path), out);
        }
    }

    /// Folds `check_file` over the package's file list, in list order.
    #[must_use]
    pub fn check_package(&self, pkg: &Package) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for file in &pkg.files {
            self.check_file(pkg, file, &mut out);
        }
        out
    }

    /// Classifies the egg-info metadata and, for directory bundles with a
    /// requires.txt, cascades into requirement reconciliation.
    fn check_egg_info(&self, pkg: &Package, path: &str, out: &mut Vec<Diagnostic>) {
        match egginfo::inspect(self.probe, pkg, path) {
            EggInfoKind::LegacyFlatFile => {
                // Distutils metadata has no requirement list to reconcile.
                self.emit(
                    Diagnostic::new(Severity::Error, EGG_INFO_DISTUTILS_STYLE, &pkg.name, path),
                    out,
                );
            }
            EggInfoKind::DirectoryBundle {
                requires: Some(requires_path),
            } => {
                self.compare_requires(pkg, &requires_path, out);
            }
            // No requirement listing: legitimately nothing to reconcile.
            EggInfoKind::DirectoryBundle { requires: None } => {}
        }
    }

    /// Warns for each egg-info requirement name that occurs nowhere in the
    /// package's declared requirements.
    fn compare_requires(&self, pkg: &Package, requires_path: &Path, out: &mut Vec<Diagnostic>) {
        let Some(text) = self.probe.read_text(requires_path) else {
            return;
        };

        let from_egg = requires::egg_requires(&text);
        let from_pkg = requires::declared_requires(&pkg.requires);
        let listing = requires_path.to_string_lossy();

        for name in reconcile::undeclared(&from_egg, &from_pkg) {
            self.emit(
                Diagnostic::new(
                    Severity::Warning,
                    EGGINFO_REQUIRE_NOT_IN_SPEC,
                    &pkg.name,
                    &listing,
                )
                .with_detail(name),
                out,
            );
        }
    }

    fn emit(&self, diag: Diagnostic, out: &mut Vec<Diagnostic>) {
        if self.config.is_suppressed(diag.code) {
            return;
        }
        out.push(diag);
    }
}
