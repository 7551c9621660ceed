//! Human-readable printing of extension values

use const_oid::AssociatedOid;
use std::fmt;

use super::{BasicConstraints, ExtendedKeyUsage, Extension, Result};

/// Write a human-readable rendering of an extension's value to an
/// output sink, using default formatting and no indentation.
///
/// Basic Constraints and Extended Key Usage values are decoded and
/// rendered by name; any other extension falls back to a lowercase hex
/// dump of the raw value.
pub fn print_extension<W: fmt::Write>(out: &mut W, ext: &Extension) -> Result<()> {
    let oid = ext.oid();

    if oid == BasicConstraints::OID {
        let bc = BasicConstraints::from_der(ext.value())?;
        write!(out, "{bc}")?;
    } else if oid == ExtendedKeyUsage::OID {
        let eku = ExtendedKeyUsage::from_der(ext.value())?;
        write!(out, "{eku}")?;
    } else {
        write!(out, "{}", hex::encode(ext.value()))?;
    }

    Ok(())
}

/// Render an extension's value to a fresh string.
pub fn render(ext: &Extension) -> Result<String> {
    let mut out = String::new();
    print_extension(&mut out, ext)?;
    Ok(out)
}
