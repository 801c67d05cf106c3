// src/reporting.rs
//! Console and JSON rendering of diagnostics.

use crate::types::{Diagnostic, Severity};
use anyhow::Result;
use colored::Colorize;

/// Prints diagnostics to stdout with severity coloring, then a summary.
pub fn print_console(diags: &[Diagnostic]) {
    for diag in diags {
        let header = format!("{}: {}", diag.severity.prefix(), diag.code);
        match diag.severity {
            Severity::Error => println!("{}", header.red().bold()),
            Severity::Warning => println!("{}", header.yellow()),
        }
        println!("  {} {}: {}", "-->".blue(), diag.package, diag.path);
        if let Some(ref detail) = diag.detail {
            println!("   {} {}", "=".blue(), detail);
        }
        println!();
    }
    print_summary(diags);
}

fn print_summary(diags: &[Diagnostic]) {
    if diags.is_empty() {
        println!("{}", "All clear. Layout and requirements are consistent.".green().bold());
        return;
    }

    let errors = diags
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diags.len() - errors;
    println!(
        "{}",
        format!("Found {errors} errors, {warnings} warnings.").red().bold()
    );
}

/// Serializes diagnostics to pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(diags: &[Diagnostic]) -> Result<String> {
    Ok(serde_json::to_string_pretty(diags)?)
}
