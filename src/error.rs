//! Error types for report conversion.

use thiserror::Error;

/// Errors that can occur while converting a status report.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid category heading \"{0}\"")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
