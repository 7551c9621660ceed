//! Extended Key Usage extension (RFC 5280 section 4.2.1.12)

use const_oid::db::rfc5280::{
    ID_CE_EXT_KEY_USAGE, ID_KP_CLIENT_AUTH, ID_KP_CODE_SIGNING, ID_KP_EMAIL_PROTECTION,
    ID_KP_OCSP_SIGNING, ID_KP_SERVER_AUTH, ID_KP_TIME_STAMPING,
};
use const_oid::{AssociatedOid, ObjectIdentifier};
use der::{Decode, Encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Extension, ExtensionError, Result};

/// anyExtendedKeyUsage
pub const ANY_EXTENDED_KEY_USAGE: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("2.5.29.37.0");

/// A key purpose listed in an Extended Key Usage extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPurpose {
    /// TLS server authentication
    ServerAuth,
    /// TLS client authentication
    ClientAuth,
    /// Code signing
    CodeSigning,
    /// Email protection (S/MIME)
    EmailProtection,
    /// Trusted timestamping
    TimeStamping,
    /// OCSP response signing
    OcspSigning,
    /// anyExtendedKeyUsage
    Any,
    /// A purpose this crate has no name for
    Other(ObjectIdentifier),
}

impl KeyPurpose {
    /// Map an object identifier to a key purpose.
    pub fn from_oid(oid: ObjectIdentifier) -> Self {
        if oid == ID_KP_SERVER_AUTH {
            Self::ServerAuth
        } else if oid == ID_KP_CLIENT_AUTH {
            Self::ClientAuth
        } else if oid == ID_KP_CODE_SIGNING {
            Self::CodeSigning
        } else if oid == ID_KP_EMAIL_PROTECTION {
            Self::EmailProtection
        } else if oid == ID_KP_TIME_STAMPING {
            Self::TimeStamping
        } else if oid == ID_KP_OCSP_SIGNING {
            Self::OcspSigning
        } else if oid == ANY_EXTENDED_KEY_USAGE {
            Self::Any
        } else {
            Self::Other(oid)
        }
    }

    /// The object identifier for this purpose.
    pub fn oid(&self) -> ObjectIdentifier {
        match self {
            Self::ServerAuth => ID_KP_SERVER_AUTH,
            Self::ClientAuth => ID_KP_CLIENT_AUTH,
            Self::CodeSigning => ID_KP_CODE_SIGNING,
            Self::EmailProtection => ID_KP_EMAIL_PROTECTION,
            Self::TimeStamping => ID_KP_TIME_STAMPING,
            Self::OcspSigning => ID_KP_OCSP_SIGNING,
            Self::Any => ANY_EXTENDED_KEY_USAGE,
            Self::Other(oid) => *oid,
        }
    }
}

// Serialized as the dotted OID string, so well-known and unknown
// purposes share one representation.
impl Serialize for KeyPurpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.oid())
    }
}

impl<'de> Deserialize<'de> for KeyPurpose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let oid = ObjectIdentifier::new(&s).map_err(serde::de::Error::custom)?;
        Ok(Self::from_oid(oid))
    }
}

impl fmt::Display for KeyPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerAuth => f.write_str("TLS Web Server Authentication"),
            Self::ClientAuth => f.write_str("TLS Web Client Authentication"),
            Self::CodeSigning => f.write_str("Code Signing"),
            Self::EmailProtection => f.write_str("E-mail Protection"),
            Self::TimeStamping => f.write_str("Time Stamping"),
            Self::OcspSigning => f.write_str("OCSP Signing"),
            Self::Any => f.write_str("Any Extended Key Usage"),
            Self::Other(oid) => write!(f, "{oid}"),
        }
    }
}

/// A decoded Extended Key Usage extension: the list of purposes the
/// certificate key may be used for.
///
/// ```text
/// ExtKeyUsageSyntax ::= SEQUENCE SIZE (1..MAX) OF KeyPurposeId
/// KeyPurposeId ::= OBJECT IDENTIFIER
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedKeyUsage {
    purposes: Vec<KeyPurpose>,
}

impl AssociatedOid for ExtendedKeyUsage {
    const OID: ObjectIdentifier = ID_CE_EXT_KEY_USAGE;
}

impl ExtendedKeyUsage {
    /// Build an Extended Key Usage from a list of purposes.
    pub fn new(purposes: Vec<KeyPurpose>) -> Self {
        Self { purposes }
    }

    /// The listed purposes, in encoded order.
    pub fn purposes(&self) -> &[KeyPurpose] {
        &self.purposes
    }

    /// Whether a purpose is listed.
    pub fn contains(&self, purpose: KeyPurpose) -> bool {
        self.purposes.contains(&purpose)
    }

    /// Decode a DER-encoded Extended Key Usage value.
    ///
    /// An empty buffer yields [`ExtensionError::EmptyInput`] without
    /// invoking the decoder; this is distinguishable from a decode
    /// failure on non-empty input, which yields
    /// [`ExtensionError::Asn1`].
    pub fn from_der(encoded: &[u8]) -> Result<Self> {
        if encoded.is_empty() {
            return Err(ExtensionError::EmptyInput);
        }

        let oids = Vec::<ObjectIdentifier>::from_der(encoded)?;

        Ok(Self {
            purposes: oids.into_iter().map(KeyPurpose::from_oid).collect(),
        })
    }

    /// Encode this value to DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let oids: Vec<ObjectIdentifier> = self.purposes.iter().map(KeyPurpose::oid).collect();

        Ok(oids.to_der()?)
    }

    /// Wrap this value in a non-critical extension envelope.
    pub fn to_extension(&self) -> Result<Extension> {
        Extension::new(Self::OID, self.to_der()?)
    }
}

impl fmt::Display for ExtendedKeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, purpose) in self.purposes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{purpose}")?;
        }
        Ok(())
    }
}
