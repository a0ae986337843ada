//! # signer.rs
//!
//! Die off-chain Erstellung eines signierten Mint-Vouchers durch den
//! Autorisierer einer Collection. Die Funktionen hier sind rein und lokal:
//! Sie reichen nichts an ein Ledger weiter und sind beliebig oft mit
//! denselben Eingaben aufrufbar (derselbe Digest kann erneut signiert
//! werden und erzeugt eine gültige, aber eigenständige Signatur).

use crate::error::MarketCoreError;
use crate::models::voucher::SignedVoucher;
use crate::services::amounts::to_base_units;
use crate::services::codec::{canonical_voucher_digest, encode_signature};
use crate::services::crypto_utils::sign_ed25519;
use ed25519_dalek::SigningKey;
use primitive_types::U256;
use rust_decimal::Decimal;

/// Signiert Voucher-Terme, deren Mindestpreis bereits in der Basiseinheit vorliegt.
///
/// # Arguments
/// * `asset_id` - Die Identität des zu autorisierenden Assets.
/// * `metadata_uri` - Der Metadaten-Locator des Assets.
/// * `min_price` - Der Mindestpreis in der Basiseinheit.
/// * `signing_key` - Der private Ed25519-Schlüssel des Autorisierers.
///
/// # Returns
/// Der vollständig signierte Voucher.
pub fn sign_voucher_terms(
    asset_id: U256,
    metadata_uri: &str,
    min_price: U256,
    signing_key: &SigningKey,
) -> SignedVoucher {
    let digest = canonical_voucher_digest(&asset_id, metadata_uri, &min_price);
    let signature = sign_ed25519(signing_key, &digest);

    SignedVoucher {
        asset_id,
        metadata_uri: metadata_uri.to_string(),
        min_price,
        signature: encode_signature(&signing_key.verifying_key(), &signature),
    }
}

/// Erstellt einen signierten Mint-Voucher aus einem menschenlesbaren Mindestpreis.
///
/// Konvertiert den Preis deterministisch in die Basiseinheit (Fixpunkt-
/// Skalierung ohne Rundungsverlust jenseits der Basiseinheit-Granularität),
/// berechnet den kanonischen Digest und signiert ihn mit dem Schlüssel des
/// Autorisierers. Es findet keinerlei Netzwerk- oder Ledger-Interaktion statt.
///
/// # Arguments
/// * `asset_id` - Die Identität des zu autorisierenden Assets.
/// * `metadata_uri` - Der Metadaten-Locator des Assets.
/// * `min_price_display` - Der Mindestpreis in der Anzeige-Denomination (z.B. "1.5").
/// * `signing_key` - Der private Ed25519-Schlüssel des Autorisierers.
///
/// # Returns
/// Ein `Result` mit dem signierten Voucher oder einem `MarketCoreError`,
/// falls der Preis nicht darstellbar ist.
pub fn create_signed_voucher(
    asset_id: U256,
    metadata_uri: &str,
    min_price_display: &Decimal,
    signing_key: &SigningKey,
) -> Result<SignedVoucher, MarketCoreError> {
    let min_price = to_base_units(min_price_display)?;
    Ok(sign_voucher_terms(asset_id, metadata_uri, min_price, signing_key))
}
