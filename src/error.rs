//! Error types for the library

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Extension decoding, encoding, or printing failed.
    #[error("Extension error: {0}")]
    Extension(#[from] crate::ext::ExtensionError),
    /// Input could not be interpreted (bad base64, missing argument).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A file could not be read.
    #[error("IO error: {0}")]
    Io(String),
}
