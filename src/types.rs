// src/types.rs
//! Core data types shared across the checker.

use serde::Serialize;
use std::path::PathBuf;

/// Severity of an emitted diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Likely packaging mistake. Exceptions are plausible, so the finding
    /// is advisory.
    Warning,
    /// Never acceptable: clobbers the shared site-packages namespace or
    /// uses a dead metadata format.
    Error,
}

impl Severity {
    /// Prefix word for the report line (error/warn).
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
        }
    }
}

/// A dependency the package itself declares it needs, as structured input
/// from the package's own authoritative metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredRequire {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl DeclaredRequire {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }
}

/// The unit under test: an installed file tree plus the package's declared
/// requirement records. Read-only once a check run begins.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    /// Buildroot under which install-relative paths resolve to real files.
    pub root: PathBuf,
    /// Install-relative absolute paths (`/usr/lib/.../site-packages/...`),
    /// in the order the host enumerated them.
    pub files: Vec<String>,
    pub requires: Vec<DeclaredRequire>,
}

impl Package {
    /// Resolves an install-relative path against the package's buildroot.
    #[must_use]
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.root.join(file.trim_start_matches('/'))
    }
}

/// A single finding, attributed to a package and path. Append-only output;
/// the checker never retracts one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub package: String,
    pub path: String,
    /// Extra context, e.g. the offending requirement name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, package: &str, path: &str) -> Self {
        Self {
            severity,
            code,
            package: package.to_string(),
            path: path.to_string(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
