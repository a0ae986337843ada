//! # verifier.rs
//!
//! Die Verifikation eines Vouchers zum Zeitpunkt der Einlösung. Das Modul
//! gewinnt die Signierer-Identität aus der Wire-Signatur zurück und
//! vergleicht sie mit dem designierten Autorisierer der Collection.
//!
//! [`verify_voucher`] liefert bewusst ein `bool` und keinen Fehler: Für den
//! aufrufenden Mint-Pfad ist jede Fehlform (beschädigte Signatur, manipulierte
//! Terme, fremder Signierer) gleichbedeutend mit einer harten Ablehnung, nie
//! mit einem Wiederholungsversuch.

use crate::error::MarketCoreError;
use crate::models::voucher::SignedVoucher;
use crate::services::codec::{canonical_voucher_digest, decode_signature};
use crate::services::crypto_utils::{create_identity, verify_ed25519};

/// Gewinnt die Signierer-Identität aus einem Digest und einer Wire-Signatur zurück.
///
/// Reine Funktion: Dekodiert die Signatur, prüft sie gegen den Digest und
/// liefert die did:key-Identität des mitreisenden Public Keys. Eine Signatur,
/// die nicht zum Digest passt, liefert [`MarketCoreError::InvalidSignature`] —
/// ein Angreifer kann zwar einen eigenen Schlüssel einbetten, die so
/// zurückgewonnene Identität wird aber nie dem erwarteten Autorisierer
/// entsprechen.
///
/// # Arguments
/// * `digest` - Der kanonische 32-Byte-Digest der Voucher-Terme.
/// * `signature_hex` - Die Hex-kodierte Wire-Signatur.
///
/// # Returns
/// Ein `Result` mit der Identität des Signierers.
pub fn recover_signer(digest: &[u8; 32], signature_hex: &str) -> Result<String, MarketCoreError> {
    let (verifying_key, signature) = decode_signature(signature_hex)?;

    if !verify_ed25519(&verifying_key, digest, &signature) {
        return Err(MarketCoreError::InvalidSignature);
    }

    Ok(create_identity(&verifying_key))
}

/// Prüft, ob ein Voucher vom erwarteten Autorisierer signiert wurde.
///
/// Berechnet den kanonischen Digest der Voucher-Terme neu, gewinnt die
/// Signierer-Identität zurück und vergleicht sie mit `expected_authorizer`.
///
/// # Returns
/// `true` genau dann, wenn die Signatur gültig ist und der Signierer der
/// erwartete Autorisierer ist. Jede Fehlform liefert `false`, nie einen Fehler.
pub fn verify_voucher(voucher: &SignedVoucher, expected_authorizer: &str) -> bool {
    let digest = canonical_voucher_digest(
        &voucher.asset_id,
        &voucher.metadata_uri,
        &voucher.min_price,
    );

    match recover_signer(&digest, &voucher.signature) {
        Ok(signer) => signer == expected_authorizer,
        Err(_) => false,
    }
}
