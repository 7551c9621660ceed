//! Basic Constraints extension (RFC 5280 section 4.2.1.9)

use const_oid::db::rfc5280::ID_CE_BASIC_CONSTRAINTS;
use const_oid::{AssociatedOid, ObjectIdentifier};
use der::{Decode, Encode, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Extension, ExtensionError, Result};

/// Wire form, decoded by the `der` crate.
///
/// ```text
/// BasicConstraints ::= SEQUENCE {
///     cA                      BOOLEAN DEFAULT FALSE,
///     pathLenConstraint       INTEGER (0..MAX) OPTIONAL }
/// ```
///
/// The path length is decoded as `u64` so that every value up to
/// `i32::MAX` survives intact and larger ones can be reported exactly.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct BasicConstraintsRaw {
    #[asn1(default = "Default::default")]
    ca: bool,

    path_len_constraint: Option<u64>,
}

/// A decoded Basic Constraints value.
///
/// The optional path length replaces the C-style "has" flag plus value
/// pair: absence is `None`, presence is `Some(v)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BasicConstraints {
    /// Whether the certificate may act as a certificate authority.
    pub ca: bool,

    /// Maximum number of intermediate certificates that may follow
    /// this one in a valid chain, if constrained.
    pub path_len: Option<u32>,
}

impl AssociatedOid for BasicConstraints {
    const OID: ObjectIdentifier = ID_CE_BASIC_CONSTRAINTS;
}

impl BasicConstraints {
    /// Constraints for a CA certificate.
    pub fn ca_constraint(path_len: Option<u32>) -> Self {
        Self { ca: true, path_len }
    }

    /// Constraints for an end-entity certificate.
    pub fn end_entity() -> Self {
        Self { ca: false, path_len: None }
    }

    /// Decode a DER-encoded Basic Constraints value.
    ///
    /// Malformed or truncated input yields [`ExtensionError::Asn1`].
    /// A path length above `i32::MAX` yields
    /// [`ExtensionError::PathLenOutOfRange`].
    pub fn from_der(encoded: &[u8]) -> Result<Self> {
        let raw = BasicConstraintsRaw::from_der(encoded)?;

        let path_len = match raw.path_len_constraint {
            Some(len) => {
                if len > i32::MAX as u64 {
                    return Err(ExtensionError::PathLenOutOfRange(len));
                }
                Some(len as u32)
            }
            None => None,
        };

        Ok(Self { ca: raw.ca, path_len })
    }

    /// Encode this value to DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let raw = BasicConstraintsRaw {
            ca: self.ca,
            path_len_constraint: self.path_len.map(u64::from),
        };

        Ok(raw.to_der()?)
    }

    /// Wrap this value in a critical extension envelope.
    ///
    /// RFC 5280 requires Basic Constraints to be critical in CA
    /// certificates; we mark it critical unconditionally.
    pub fn to_extension(&self) -> Result<Extension> {
        Ok(Extension::new(Self::OID, self.to_der()?)?.with_critical(true))
    }
}

impl fmt::Display for BasicConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CA:{}", if self.ca { "TRUE" } else { "FALSE" })?;
        if let Some(len) = self.path_len {
            write!(f, ", pathlen:{len}")?;
        }
        Ok(())
    }
}
