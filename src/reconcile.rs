// src/reconcile.rs
//! Requirement reconciliation: egg-info requires vs declared requires.

/// Names in `egg` with no counterpart in `declared`, in `egg` order.
///
/// A declared requirement satisfies an egg name when it *contains* the name
/// as a substring, not when it equals it: declared strings may embed extras
/// (`foo[security]`) or markers around the bare name, and exact match would
/// spuriously flag those. Known limitation of the containment heuristic: a
/// short name is satisfied by any unrelated superstring (`py` by `pytest`).
/// Kept as-is for diagnostic compatibility.
///
/// Asymmetric on purpose: declared names absent from `egg` are never
/// reported, since packages may declare broader requirements than the egg
/// metadata captured.
#[must_use]
pub fn undeclared(egg: &[String], declared: &[String]) -> Vec<String> {
    egg.iter()
        .filter(|name| !declared.iter().any(|d| d.contains(name.as_str())))
        .cloned()
        .collect()
}
