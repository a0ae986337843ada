//! # codec.rs
//!
//! Die kanonische Kodierung eines Mint-Vouchers und ihr kryptographischer
//! Digest. Die Kodierung ist eine reine, deterministische Funktion der
//! Voucher-Terme `(asset_id, metadata_uri, min_price)`:
//!
//! `keccak256( asset_id (32 Byte BE) || len(uri) (4 Byte BE) || uri (UTF-8) || min_price (32 Byte BE) )`
//!
//! Das Längen-Präfix der URI verhindert, dass sich zwei unterschiedliche
//! Term-Tripel auf denselben Byte-Strom abbilden lassen. Daneben stellt das
//! Modul die Hex-Kodierung der Wire-Signatur sowie die JSON-Helfer für den
//! Voucher-Transport bereit.

use crate::error::MarketCoreError;
use crate::models::voucher::SignedVoucher;
use crate::services::crypto_utils::keccak256;
use ed25519_dalek::{Signature, VerifyingKey};
use primitive_types::U256;

/// Die Länge der Wire-Signatur in Bytes: Public Key (32) || Ed25519-Signatur (64).
pub const WIRE_SIGNATURE_LEN: usize = 96;

/// Berechnet den kanonischen Digest der Voucher-Terme.
///
/// Rein und deterministisch: Dieselben Terme erzeugen immer denselben Digest;
/// jede Abweichung in einem der drei Felder erzeugt einen anderen. Über diesen
/// Digest wird signiert und verifiziert.
///
/// # Arguments
/// * `asset_id` - Die Identität des Assets innerhalb seiner Collection.
/// * `metadata_uri` - Der Metadaten-Locator des Assets.
/// * `min_price` - Der Mindestpreis in der Basiseinheit.
///
/// # Returns
/// Der 32-Byte Keccak-256-Digest.
pub fn canonical_voucher_digest(
    asset_id: &U256,
    metadata_uri: &str,
    min_price: &U256,
) -> [u8; 32] {
    let uri_bytes = metadata_uri.as_bytes();
    let mut buf = Vec::with_capacity(32 + 4 + uri_bytes.len() + 32);
    buf.extend_from_slice(&asset_id.to_big_endian());
    buf.extend_from_slice(&(uri_bytes.len() as u32).to_be_bytes());
    buf.extend_from_slice(uri_bytes);
    buf.extend_from_slice(&min_price.to_big_endian());
    keccak256(&buf)
}

/// Kodiert die Wire-Signatur: `hex( verifying_key (32) || signature (64) )`.
///
/// Der Public Key reist mit der Signatur, damit [`crate::services::verifier::recover_signer`]
/// die Signierer-Identität als reine Funktion von Digest und Signatur
/// zurückgewinnen kann. Fälschungssicher bleibt das Verfahren dadurch, dass
/// die zurückgewonnene Identität stets mit dem erwarteten Autorisierer
/// verglichen wird.
pub fn encode_signature(verifying_key: &VerifyingKey, signature: &Signature) -> String {
    let mut bytes = Vec::with_capacity(WIRE_SIGNATURE_LEN);
    bytes.extend_from_slice(&verifying_key.to_bytes());
    bytes.extend_from_slice(&signature.to_bytes());
    hex::encode(bytes)
}

/// Dekodiert eine Wire-Signatur in Public Key und Ed25519-Signatur.
///
/// Jede Fehlform (ungültiges Hex, falsche Länge, kein gültiger Kurvenpunkt)
/// wird einheitlich als [`MarketCoreError::InvalidSignature`] gemeldet.
pub fn decode_signature(
    signature_hex: &str,
) -> Result<(VerifyingKey, Signature), MarketCoreError> {
    let bytes = hex::decode(signature_hex).map_err(|_| MarketCoreError::InvalidSignature)?;
    if bytes.len() != WIRE_SIGNATURE_LEN {
        return Err(MarketCoreError::InvalidSignature);
    }

    let key_bytes: [u8; 32] = bytes[..32]
        .try_into()
        .map_err(|_| MarketCoreError::InvalidSignature)?;
    let sig_bytes: [u8; 64] = bytes[32..]
        .try_into()
        .map_err(|_| MarketCoreError::InvalidSignature)?;

    let verifying_key =
        VerifyingKey::from_bytes(&key_bytes).map_err(|_| MarketCoreError::InvalidSignature)?;
    let signature = Signature::from_bytes(&sig_bytes);

    Ok((verifying_key, signature))
}

/// Nimmt einen JSON-String entgegen und deserialisiert ihn in einen `SignedVoucher`.
pub fn voucher_from_json(json_str: &str) -> Result<SignedVoucher, MarketCoreError> {
    let voucher: SignedVoucher = serde_json::from_str(json_str)?;
    Ok(voucher)
}

/// Serialisiert einen `SignedVoucher` in einen formatierten JSON-String.
pub fn voucher_to_json(voucher: &SignedVoucher) -> Result<String, MarketCoreError> {
    let json_str = serde_json::to_string_pretty(voucher)?;
    Ok(json_str)
}
