//! Generic X.509 extension objects

use der::asn1::{ObjectIdentifier, OctetString};
use der::{Decode, Encode, Sequence};

use super::Result;

/// An X.509 certificate extension: an identifier plus an encoded value.
///
/// ```text
/// Extension  ::=  SEQUENCE  {
///     extnID      OBJECT IDENTIFIER,
///     critical    BOOLEAN DEFAULT FALSE,
///     extnValue   OCTET STRING }
/// ```
///
/// The value is an owned buffer; releasing an `Extension` is just
/// dropping it. No raw pointers are exposed.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct Extension {
    extn_id: ObjectIdentifier,

    #[asn1(default = "Default::default")]
    critical: bool,

    extn_value: OctetString,
}

impl Extension {
    /// Create a non-critical extension from an identifier and an
    /// octet-string value.
    ///
    /// Fails if the value cannot be represented as an ASN.1
    /// OCTET STRING (length limits of the underlying library).
    pub fn new(oid: ObjectIdentifier, value: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            extn_id: oid,
            critical: false,
            extn_value: OctetString::new(value.into())?,
        })
    }

    /// Return a copy of this extension with the criticality flag set.
    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    /// The extension identifier.
    pub fn oid(&self) -> ObjectIdentifier {
        self.extn_id
    }

    /// Whether the extension is marked critical.
    pub fn is_critical(&self) -> bool {
        self.critical
    }

    /// The raw encoded extension value.
    pub fn value(&self) -> &[u8] {
        self.extn_value.as_bytes()
    }

    /// Decode an extension envelope from DER.
    pub fn from_der(encoded: &[u8]) -> Result<Self> {
        Ok(<Self as Decode>::from_der(encoded)?)
    }

    /// Encode this extension envelope to DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(Encode::to_der(self)?)
    }
}
