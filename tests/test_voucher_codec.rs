//! # tests/test_voucher_codec.rs
//!
//! Tests für die kanonische Voucher-Kodierung: Determinismus und
//! Feld-Sensitivität des Digests, das Dekodieren fehlgeformter
//! Wire-Signaturen und die dezimale JSON-Darstellung der 256-Bit-Felder.


use market_lib::services::codec::{
    canonical_voucher_digest, decode_signature, voucher_from_json, voucher_to_json,
    WIRE_SIGNATURE_LEN,
};
use market_lib::{MarketCoreError, U256};
use test_utils::authorizer_voucher;

#[test]
fn test_digest_is_deterministic() {
    let a = canonical_voucher_digest(&U256::from(7u64), "ipfs://QmX", &U256::from(500u64));
    let b = canonical_voucher_digest(&U256::from(7u64), "ipfs://QmX", &U256::from(500u64));
    assert_eq!(a, b, "Identical terms must produce an identical digest");
}

#[test]
fn test_digest_is_sensitive_to_every_field() {
    let base = canonical_voucher_digest(&U256::from(7u64), "ipfs://QmX", &U256::from(500u64));

    let other_id = canonical_voucher_digest(&U256::from(8u64), "ipfs://QmX", &U256::from(500u64));
    assert_ne!(base, other_id, "A different asset ID must change the digest");

    let other_uri = canonical_voucher_digest(&U256::from(7u64), "ipfs://QmY", &U256::from(500u64));
    assert_ne!(base, other_uri, "A different metadata URI must change the digest");

    let other_price =
        canonical_voucher_digest(&U256::from(7u64), "ipfs://QmX", &U256::from(501u64));
    assert_ne!(base, other_price, "A different min price must change the digest");
}

#[test]
fn test_uri_length_prefix_prevents_field_shifting() {
    // Ohne Längen-Präfix würden diese beiden Kombinationen denselben
    // Byte-Strom ergeben, sobald die URI-Bytes in den Preis hineinragen.
    let a = canonical_voucher_digest(&U256::from(1u64), "ab", &U256::from(99u64));
    let b = canonical_voucher_digest(&U256::from(1u64), "a", &U256::from(99u64));
    assert_ne!(a, b);
}

#[test]
fn test_decode_rejects_malformed_signatures() {
    // Kein gültiges Hex.
    let result = decode_signature("zz-not-hex");
    assert!(matches!(result, Err(MarketCoreError::InvalidSignature)));

    // Gültiges Hex, aber falsche Länge.
    let too_short = hex::encode(vec![0u8; WIRE_SIGNATURE_LEN - 1]);
    let result = decode_signature(&too_short);
    assert!(matches!(result, Err(MarketCoreError::InvalidSignature)));

    // Richtige Länge, aber die ersten 32 Bytes sind kein gültiger Kurvenpunkt.
    let mut bytes = vec![0u8; WIRE_SIGNATURE_LEN];
    bytes[..32].copy_from_slice(&[0xFF; 32]);
    let result = decode_signature(&hex::encode(bytes));
    assert!(matches!(result, Err(MarketCoreError::InvalidSignature)));
}

#[test]
fn test_decode_accepts_well_formed_signature() {
    let voucher = authorizer_voucher(7, "ipfs://QmX", 500);
    assert!(decode_signature(&voucher.signature).is_ok());
}

#[test]
fn test_json_uses_decimal_strings_for_u256_fields() {
    let voucher = authorizer_voucher(7, "ipfs://QmX", 500);
    let json = voucher_to_json(&voucher).unwrap();

    // Die 256-Bit-Felder reisen als Dezimal-Strings, nicht als JSON-Zahlen.
    assert!(json.contains("\"asset_id\": \"7\""), "JSON was: {}", json);
    assert!(json.contains("\"min_price\": \"500\""), "JSON was: {}", json);

    let restored = voucher_from_json(&json).unwrap();
    assert_eq!(restored.asset_id, U256::from(7u64));
    assert_eq!(restored.min_price, U256::from(500u64));
    assert_eq!(restored.metadata_uri, voucher.metadata_uri);
    assert_eq!(restored.signature, voucher.signature);
}

#[test]
fn test_json_round_trips_values_beyond_u64() {
    let huge = U256::from_dec_str("115792089237316195423570985008687907853269984665640564039457")
        .unwrap();
    let mut voucher = authorizer_voucher(1, "ipfs://QmX", 1);
    voucher.min_price = huge;

    let json = voucher_to_json(&voucher).unwrap();
    let restored = voucher_from_json(&json).unwrap();
    assert_eq!(restored.min_price, huge);
}

#[test]
fn test_json_rejects_non_decimal_amounts() {
    let json = r#"{
        "asset_id": "not-a-number",
        "metadata_uri": "ipfs://QmX",
        "min_price": "500",
        "signature": ""
    }"#;
    assert!(voucher_from_json(json).is_err());
}
