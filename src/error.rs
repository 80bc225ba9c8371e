//! Error types for the mime-db crate.

use std::io;
use thiserror::Error;

/// The main error type for the mime-db crate.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Source error: the bytes are neither a gzip stream nor text
    #[error("Source error: {0}")]
    Source(String),
}

/// Specialized Result type for mime-db operations.
pub type Result<T> = std::result::Result<T, Error>;
