// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitelintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SitelintError>;

// Allow `?` on std::io::Error by converting to SitelintError::Io with unknown path.
impl From<std::io::Error> for SitelintError {
    fn from(source: std::io::Error) -> Self {
        SitelintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
