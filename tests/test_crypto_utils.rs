// cargo test --test test_crypto_utils

//! # tests/test_crypto_utils.rs
//!
//! Tests der kryptographischen Grundbausteine: Keccak-256, Ed25519-Signaturen
//! und die did:key-Identitätskodierung.

use market_lib::crypto_utils::{
    create_identity, generate_ed25519_keypair_for_tests, keccak256, pubkey_from_identity,
    sign_ed25519, validate_identity, verify_ed25519,
};

#[test]
fn test_keccak256_known_vector() {
    // Der bekannte Keccak-256-Digest der leeren Eingabe.
    let digest = keccak256(b"");
    assert_eq!(
        hex::encode(digest),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
}

#[test]
fn test_keccak256_differs_from_sha3() {
    // Keccak-256 und NIST-SHA3-256 unterscheiden sich im Padding; der
    // SHA3-256-Digest der leeren Eingabe beginnt mit a7ffc6f8.
    let digest = keccak256(b"");
    assert_ne!(
        hex::encode(digest),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
}

#[test]
fn test_deterministic_test_keypairs() {
    let (pk_a, _) = generate_ed25519_keypair_for_tests(Some("seed"));
    let (pk_b, _) = generate_ed25519_keypair_for_tests(Some("seed"));
    let (pk_c, _) = generate_ed25519_keypair_for_tests(Some("other"));

    assert_eq!(pk_a, pk_b, "The same seed must yield the same keypair");
    assert_ne!(pk_a, pk_c, "Different seeds must yield different keypairs");
}

#[test]
fn test_sign_and_verify_round_trip() {
    let (public_key, signing_key) = generate_ed25519_keypair_for_tests(Some("signer"));
    let message = b"settlement digest";

    let signature = sign_ed25519(&signing_key, message);
    assert!(verify_ed25519(&public_key, message, &signature));
    assert!(!verify_ed25519(&public_key, b"another message", &signature));

    let (other_key, _) = generate_ed25519_keypair_for_tests(Some("other"));
    assert!(!verify_ed25519(&other_key, message, &signature));
}

#[test]
fn test_identity_encoding_round_trip() {
    let (public_key, _) = generate_ed25519_keypair_for_tests(Some("identity"));
    let identity = create_identity(&public_key);

    assert!(identity.starts_with("did:key:z"));
    assert!(validate_identity(&identity));

    let restored = pubkey_from_identity(&identity).unwrap();
    assert_eq!(restored, public_key);
}

#[test]
fn test_validate_identity_rejects_malformed_input() {
    assert!(!validate_identity(""));
    assert!(!validate_identity("did:key:"));
    assert!(!validate_identity("did:web:example.com"));
    // Gültiges Präfix, aber kein gültiges bs58-Payload.
    assert!(!validate_identity("did:key:z0OIl"));
}
