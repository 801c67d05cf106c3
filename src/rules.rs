// src/rules.rs
//! Static path rule tables and the path classifier.
//!
//! Two fixed tables. Per-distribution rules warn about leftover test/doc/src
//! trees inside one distribution's own subtree. Root-level rules error on
//! the same names directly under site-packages, where they collide across
//! every installed distribution.

use crate::types::Severity;
use regex::Regex;
use std::sync::LazyLock;

/// One path rule: anchored pattern, severity, stable diagnostic code.
#[derive(Debug, Clone, Copy)]
pub struct PathRule {
    pub pattern: &'static str,
    pub severity: Severity,
    pub code: &'static str,
}

/// Paths that shouldn't be in any package, but might need to be under
/// sufficiently special circumstances.
pub const PACKAGE_RULES: &[PathRule] = &[
    PathRule {
        pattern: r"^/usr/lib[^/]*/python[^/]*/site-packages/[^/]+/tests?$",
        severity: Severity::Warning,
        code: "python-tests-in-package",
    },
    PathRule {
        pattern: r"^/usr/lib[^/]*/python[^/]*/site-packages/[^/]+/docs?$",
        severity: Severity::Warning,
        code: "python-doc-in-package",
    },
    PathRule {
        pattern: r"^/usr/lib[^/]*/python[^/]*/site-packages/[^/]+/src$",
        severity: Severity::Warning,
        code: "python-src-in-package",
    },
];

/// Paths that shouldn't be in any package, ever, because they clobber the
/// global name space.
pub const SITE_PACKAGES_RULES: &[PathRule] = &[
    PathRule {
        pattern: r"^/usr/lib[^/]*/python[^/]*/site-packages/tests?$",
        severity: Severity::Error,
        code: "python-tests-in-site-packages",
    },
    PathRule {
        pattern: r"^/usr/lib[^/]*/python[^/]*/site-packages/docs?$",
        severity: Severity::Error,
        code: "python-doc-in-site-packages",
    },
    PathRule {
        pattern: r"^/usr/lib[^/]*/python[^/]*/site-packages/src$",
        severity: Severity::Error,
        code: "python-src-in-site-packages",
    },
];

struct CompiledRule {
    re: Regex,
    severity: Severity,
    code: &'static str,
}

// Both tables compiled once, in emission order: per-distribution warnings
// first, then root-level errors. Matching is order-independent (every
// matching rule fires); the fixed order only pins the diagnostic stream.
static COMPILED: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    PACKAGE_RULES
        .iter()
        .chain(SITE_PACKAGES_RULES)
        .map(|rule| CompiledRule {
            re: Regex::new(rule.pattern).unwrap_or_else(|_| panic!("Invalid Regex")),
            severity: rule.severity,
            code: rule.code,
        })
        .collect()
});

/// Returns `(severity, code)` for every rule matching `path`, in table
/// order. An unmatched path yields an empty vec. No side effects.
#[must_use]
pub fn classify(path: &str) -> Vec<(Severity, &'static str)> {
    COMPILED
        .iter()
        .filter(|rule| rule.re.is_match(path))
        .map(|rule| (rule.severity, rule.code))
        .collect()
}
