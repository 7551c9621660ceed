//! X.509 Certificate Extensions

pub mod extension;
pub mod basic_constraints;
pub mod extended_key_usage;
pub mod print;

pub use extension::Extension;
pub use basic_constraints::BasicConstraints;
pub use extended_key_usage::{ExtendedKeyUsage, KeyPurpose, ANY_EXTENDED_KEY_USAGE};
pub use print::{print_extension, render};

use thiserror::Error;

/// Errors raised while decoding, encoding, or printing extensions.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// The underlying ASN.1 library rejected the encoding.
    #[error("ASN.1 error: {0}")]
    Asn1(#[from] der::Error),

    /// Decoding was requested on an empty buffer; the decoder was
    /// never invoked.
    #[error("Input buffer is empty")]
    EmptyInput,

    /// A path length constraint does not fit in 32 bits. The value is
    /// attacker-controlled, so this is a decode failure rather than an
    /// internal invariant.
    #[error("Path length constraint {0} exceeds the 32-bit range")]
    PathLenOutOfRange(u64),

    /// The output sink rejected writes while printing.
    #[error("Output sink error")]
    Sink(#[from] core::fmt::Error),
}

/// Result alias for extension operations.
pub type Result<T> = std::result::Result<T, ExtensionError>;
