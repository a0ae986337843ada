// Zufallszahlengenerierung
use rand::rngs::OsRng;
use rand::RngCore;

// Kryptografische Hashes (Keccak-256)
use sha3::{Digest, Keccak256, Sha3_512};

// Ed25519 Signaturen
use ed25519_dalek::{
    Signature, SignatureError, Signer, SigningKey, Verifier, VerifyingKey as EdPublicKey,
};

use std::convert::TryInto;

use thiserror::Error;

/// Computes the Keccak-256 hash of the input.
///
/// Keccak-256 is the digest the voucher authorization protocol signs over;
/// using it keeps the canonical digest compatible with the original wire
/// surface of the system.
///
/// # Arguments
///
/// * `input` - The data to hash. Accepts anything that can be referenced as a byte slice.
///
/// # Returns
///
/// The raw 32-byte Keccak-256 digest.
pub fn keccak256(input: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(input.as_ref());
    hasher.finalize().into()
}

/// Erzeugt ein frisches, zufälliges Ed25519-Schlüsselpaar.
///
/// # Returns
/// Ein Tupel, das den öffentlichen und den privaten Ed25519-Schlüssel enthält.
pub fn generate_ed25519_keypair() -> (EdPublicKey, SigningKey) {
    let mut csprng = OsRng;
    let mut key_bytes = [0u8; 32];
    csprng.fill_bytes(&mut key_bytes);

    let signing_key = SigningKey::from_bytes(&key_bytes);
    (signing_key.verifying_key(), signing_key)
}

/// Erzeugt ein zufälliges oder deterministisches Ed25519-Schlüsselpaar für Testzwecke.
///
/// # Warnung
/// **Diese Funktion ist NICHT für den produktiven Einsatz geeignet!**
/// Der deterministische Pfad verwendet eine einfache Hash-Funktion und ist nicht
/// gegen Brute-Force-Angriffe gehärtet. Er dient ausschließlich dazu, in Tests
/// reproduzierbare Schlüsselpaare zu erzeugen.
///
/// # Arguments
/// * `seed` - Ein optionaler String.
///   - `None`: Erzeugt ein vollständig zufälliges, neues Schlüsselpaar.
///   - `Some(seed_str)`: Erzeugt ein deterministisches Schlüsselpaar aus dem Seed-String.
///
/// # Returns
/// Ein Tupel, das den öffentlichen und den privaten Ed25519-Schlüssel enthält.
pub fn generate_ed25519_keypair_for_tests(seed: Option<&str>) -> (EdPublicKey, SigningKey) {
    if let Some(seed_str) = seed {
        // Deterministischer Pfad: Seed hashen, um einen 32-Byte-Schlüssel zu erzeugen.
        let mut hasher = Sha3_512::new();
        hasher.update(seed_str.as_bytes());
        let hash_result = hasher.finalize();
        let key_bytes: [u8; 32] = hash_result[..32]
            .try_into()
            .expect("Hash output must be 64 bytes");

        let signing_key = SigningKey::from_bytes(&key_bytes);
        (signing_key.verifying_key(), signing_key)
    } else {
        generate_ed25519_keypair()
    }
}

/// Signs a message with an Ed25519 signing key.
///
/// # Arguments
///
/// * `signing_key` - The Ed25519 signing key.
/// * `message` - The message to be signed.
///
/// # Returns
///
/// The signature.
pub fn sign_ed25519(signing_key: &SigningKey, message: &[u8]) -> Signature {
    signing_key.sign(message)
}

/// Verifies an Ed25519 signature.
///
/// # Arguments
///
/// * `public_key` - The Ed25519 public key.
/// * `message` - The message to be verified.
/// * `signature` - The signature to be verified.
///
/// # Returns
///
/// `true` if the signature is valid, `false` otherwise.
pub fn verify_ed25519(public_key: &EdPublicKey, message: &[u8], signature: &Signature) -> bool {
    public_key.verify(message, signature).is_ok()
}

/// Fehlertyp für die Verarbeitung von Identitäten (did:key-Strings).
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Das Identitätsformat ist ungültig (z.B. fehlendes 'did:key:z').
    #[error("Invalid identity format (must be 'did:key:z...').")]
    InvalidFormat,
    /// Die Base58-Dekodierung ist fehlgeschlagen.
    #[error("Base58 decoding failed: {0}")]
    DecodingFailed(#[from] bs58::decode::Error),
    /// Die dekodierten Schlüsselbytes tragen einen ungültigen Multicodec-Prefix.
    #[error("Decoded key has invalid multicodec prefix (expected 0xed01 for Ed25519).")]
    InvalidMulticodec,
    /// Der dekodierte Public Key hat eine ungültige Länge.
    #[error("Decoded public key has invalid length (expected 32, got {0}).")]
    InvalidLength(usize),
    /// Die Konvertierung in einen Ed25519 Public Key ist fehlgeschlagen.
    #[error("Public key conversion failed: {0}")]
    ConversionFailed(#[from] SignatureError),
}

// Multicodec-Prefix für Ed25519 Public Keys: 0xed01
const ED25519_MULTICODEC_PREFIX: [u8; 2] = [0xed, 0x01];
const DID_KEY_PREFIX: &str = "did:key:z";

/// Erzeugt eine Identität nach dem W3C did:key-Standard aus einem Ed25519 Public Key.
///
/// Das Format ist: `did:key:z[base58(0xed01 || public_key)]`. Diese Strings
/// sind die universellen Identitäten des Marktplatzes: Autorisierer, Verkäufer
/// und Käufer werden alle über ihren did:key referenziert.
///
/// # Arguments
///
/// * `public_key` - The Ed25519 public key.
///
/// # Returns
///
/// The identity string.
pub fn create_identity(public_key: &EdPublicKey) -> String {
    let mut bytes_to_encode = Vec::with_capacity(34);
    bytes_to_encode.extend_from_slice(&ED25519_MULTICODEC_PREFIX);
    bytes_to_encode.extend_from_slice(&public_key.to_bytes());

    format!("{}{}", DID_KEY_PREFIX, bs58::encode(bytes_to_encode).into_string())
}

/// Extrahiert den Ed25519 Public Key aus einem did:key-Identitätsstring.
///
/// # Arguments
///
/// * `identity` - Der von `create_identity` erzeugte Identitätsstring.
///
/// # Returns
///
/// Ein `Result` mit dem `EdPublicKey` oder einem `IdentityError`.
pub fn pubkey_from_identity(identity: &str) -> Result<EdPublicKey, IdentityError> {
    let base58_payload = identity
        .strip_prefix(DID_KEY_PREFIX)
        .ok_or(IdentityError::InvalidFormat)?;

    let decoded_bytes = bs58::decode(base58_payload).into_vec()?;

    if !decoded_bytes.starts_with(&ED25519_MULTICODEC_PREFIX) {
        return Err(IdentityError::InvalidMulticodec);
    }

    let key_bytes = &decoded_bytes[ED25519_MULTICODEC_PREFIX.len()..];
    let actual_len = key_bytes.len();

    let key_bytes_array: [u8; 32] = key_bytes
        .try_into()
        .map_err(|_| IdentityError::InvalidLength(actual_len))?;

    Ok(EdPublicKey::from_bytes(&key_bytes_array)?)
}

/// Validates an identity string.
///
/// # Returns
///
/// `true` if the identity is a well-formed did:key, `false` otherwise.
pub fn validate_identity(identity: &str) -> bool {
    pubkey_from_identity(identity).is_ok()
}
