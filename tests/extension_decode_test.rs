//! End-to-end extension decode tests
//!
//! These tests exercise the full path a consumer takes: build a typed
//! extension value, wrap it in an envelope, serialize to DER, then
//! decode and print it back.

use certext::ext::{render, BasicConstraints, ExtendedKeyUsage, Extension, ExtensionError, KeyPurpose};

#[test]
fn test_basic_constraints_full_cycle() {
    let bc = BasicConstraints::ca_constraint(Some(1));

    let ext = bc.to_extension().unwrap();
    let wire = ext.to_der().unwrap();

    // Known-good encoding, octet by octet
    let expected = vec![
        0x30, 0x12, // SEQUENCE, 18 bytes (extension envelope)
        0x06, 0x03, 0x55, 0x1D, 0x13, // OID 2.5.29.19
        0x01, 0x01, 0xFF, // critical = TRUE
        0x04, 0x08, // OCTET STRING, 8 bytes
        0x30, 0x06, // SEQUENCE, 6 bytes (Basic Constraints)
        0x01, 0x01, 0xFF, // cA = TRUE
        0x02, 0x01, 0x01, // pathLenConstraint = 1
    ];
    assert_eq!(wire, expected);

    let decoded_ext = Extension::from_der(&wire).unwrap();
    assert!(decoded_ext.is_critical());

    let decoded = BasicConstraints::from_der(decoded_ext.value()).unwrap();
    assert_eq!(decoded, bc);

    assert_eq!(render(&decoded_ext).unwrap(), "CA:TRUE, pathlen:1");
}

#[test]
fn test_extended_key_usage_full_cycle() {
    let eku = ExtendedKeyUsage::new(vec![KeyPurpose::ServerAuth, KeyPurpose::ClientAuth]);

    let ext = eku.to_extension().unwrap();
    assert!(!ext.is_critical());

    let wire = ext.to_der().unwrap();
    let decoded_ext = Extension::from_der(&wire).unwrap();
    let decoded = ExtendedKeyUsage::from_der(decoded_ext.value()).unwrap();

    assert_eq!(decoded, eku);
    assert_eq!(
        render(&decoded_ext).unwrap(),
        "TLS Web Server Authentication, TLS Web Client Authentication"
    );
}

#[test]
fn test_failure_modes_are_distinguishable() {
    // Empty input never reaches the decoder
    let empty = ExtendedKeyUsage::from_der(&[]).unwrap_err();
    assert!(matches!(empty, ExtensionError::EmptyInput));

    // Non-empty garbage is a decode-attempt failure
    let garbage = ExtendedKeyUsage::from_der(&[0xFF, 0x00, 0x01]).unwrap_err();
    assert!(matches!(garbage, ExtensionError::Asn1(_)));

    // Oversized path lengths are rejected, not asserted on
    let oversized = [
        0x30, 0x0C, 0x01, 0x01, 0xFF, 0x02, 0x07, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    let err = BasicConstraints::from_der(&oversized).unwrap_err();
    assert!(matches!(err, ExtensionError::PathLenOutOfRange(_)));
}

#[test]
fn test_errors_box_as_std_error() {
    // ExtensionError must satisfy std::error::Error, including the
    // Asn1 variant's source chain into the der crate's error type.
    let err = BasicConstraints::from_der(&[0x30]).unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(err);

    assert!(std::error::Error::source(boxed.as_ref()).is_some());
    assert!(!boxed.to_string().is_empty());
}

#[test]
fn test_decoding_real_certificate_extensions() {
    // Basic Constraints and EKU values as found in a typical web PKI
    // leaf certificate: CA:FALSE, serverAuth + clientAuth.
    let bc_value = [0x30, 0x00];
    let eku_value = [
        0x30, 0x14, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01, 0x06, 0x08,
        0x2B, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x02,
    ];

    let bc = BasicConstraints::from_der(&bc_value).unwrap();
    assert!(!bc.ca);
    assert_eq!(bc.path_len, None);

    let eku = ExtendedKeyUsage::from_der(&eku_value).unwrap();
    assert!(eku.contains(KeyPurpose::ServerAuth));
    assert!(eku.contains(KeyPurpose::ClientAuth));

    println!("leaf constraints: {bc}");
    println!("leaf key usage:   {eku}");
}
