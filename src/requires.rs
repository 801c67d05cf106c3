// src/requires.rs
//! Requirement parsing and the two extraction paths feeding reconciliation.
//!
//! Both egg-info requires.txt text and the package's own declared records
//! normalize to the same shape: lowercase names with versions, extras, and
//! markers stripped. Comparison only ever happens post-normalization.

use crate::types::DeclaredRequire;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// A single parsed requirement: name plus the raw constraint tail, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequire {
    pub name: String,
    pub constraint: Option<String>,
}

/// Requirement text that cannot carry a requirement name.
#[derive(Debug, Error)]
#[error("unparsable requirement line: {line:?}")]
pub struct ParseError {
    pub line: String,
}

// Name, optional bracketed extras, then any free-form constraint/marker tail.
static REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[[^\]]*\])?\s*(.*)$")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Parses free-form requirement text, one requirement per line.
///
/// Tolerates version constraints (`>=1.0`), extras (`[security]`), and
/// environment markers (`; python_version < "3"`). Blank lines and `#`
/// comments are skipped.
///
/// # Errors
/// Returns `ParseError` for the first line that cannot start a requirement
/// name (e.g. a bare `>=1.0` or an editable `-e .` entry).
pub fn parse(text: &str) -> Result<Vec<ParsedRequire>, ParseError> {
    let mut out = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let caps = REQUIRE_RE.captures(trimmed).ok_or_else(|| ParseError {
            line: trimmed.to_string(),
        })?;
        let tail = caps.get(2).map_or("", |m| m.as_str()).trim();
        out.push(ParsedRequire {
            name: caps[1].to_string(),
            constraint: if tail.is_empty() {
                None
            } else {
                Some(tail.to_string())
            },
        });
    }
    Ok(out)
}

/// Lowercased, constraint-free names from egg-info requires.txt text.
///
/// Lines starting with `[` are conditional section headers, e.g.
/// `[:python_version < '3']`. The parser cannot express markers, so headers
/// are dropped and every following name is treated as unconditionally
/// required. Over-approximation: a conditional requirement missing from the
/// declared list is still reported.
///
/// Malformed text yields an empty list rather than a failure; there is
/// nothing to reconcile in that case.
#[must_use]
pub fn egg_requires(text: &str) -> Vec<String> {
    let body: String = text
        .lines()
        .filter(|line| !line.starts_with('['))
        .collect::<Vec<_>>()
        .join("\n");

    match parse(&body) {
        Ok(parsed) => parsed.into_iter().map(|r| r.name.to_lowercase()).collect(),
        Err(_) => Vec::new(),
    }
}

/// Lowercased names from the package's own declared requirement records.
#[must_use]
pub fn declared_requires(requires: &[DeclaredRequire]) -> Vec<String> {
    requires.iter().map(|r| r.name.to_lowercase()).collect()
}
