pub mod check;
pub mod config;
pub mod discovery;
pub mod egginfo;
pub mod error;
pub mod exit;
pub mod probe;
pub mod reconcile;
pub mod reporting;
pub mod requires;
pub mod rules;
pub mod types;
