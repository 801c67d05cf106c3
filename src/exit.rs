// src/exit.rs
//! Standardized process exit codes for sitelint.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SitelintExit {
    /// Scan completed and emitted no diagnostics.
    Clean = 0,
    /// Operational failure (IO, config, bad arguments).
    Error = 1,
    /// Scan completed and emitted at least one diagnostic.
    Findings = 2,
}

impl SitelintExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SitelintExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
