//! certext - X.509 Certificate Extension Toolkit
//!
//! A small library for working with X.509 certificate extensions:
//! creating generic extension objects, printing them in human-readable
//! form, and decoding/encoding the standard Basic Constraints and
//! Extended Key Usage extensions.
//!
//! All ASN.1/DER parsing and serialization is delegated to the [`der`]
//! crate; this crate defines the RFC 5280 structures and wraps the
//! results in owned, ownership-safe types.
//!
//! # Example
//!
//! ```rust
//! use certext::ext::BasicConstraints;
//!
//! // Decode a DER-encoded Basic Constraints value
//! let encoded = [0x30, 0x06, 0x01, 0x01, 0xFF, 0x02, 0x01, 0x03];
//! let bc = BasicConstraints::from_der(&encoded).unwrap();
//!
//! assert!(bc.ca);
//! assert_eq!(bc.path_len, Some(3));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ext;

pub mod error;

pub use error::Error;
pub use ext::{BasicConstraints, ExtendedKeyUsage, Extension, KeyPurpose};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
