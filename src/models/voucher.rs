//! # voucher.rs
//!
//! Definiert die Datenstruktur eines signierten Mint-Vouchers. Ein Voucher ist
//! die off-chain erstellte, einmalig einlösbare Autorisierung, ein bestimmtes
//! Asset zu einem Mindestpreis zu minten. Die Struktur bildet das Wire-Format
//! exakt ab und verwendet `serde` für die Serialisierung und Deserialisierung.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Ein vollständig signierter Mint-Voucher.
///
/// Die Terme `(asset_id, metadata_uri, min_price)` sind nach der Signatur
/// unveränderlich: Jede Abweichung führt zu einem anderen kanonischen Digest,
/// und die Signatur verifiziert nicht mehr. Ein Voucher ist pro `asset_id`
/// einmalig einlösbar; nach dem Mint ist er dauerhaft verbraucht.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignedVoucher {
    /// Die Identität des Assets innerhalb seiner Collection.
    /// Im Wire-Format als Dezimal-String kodiert (256 Bit, vorzeichenlos).
    #[serde(with = "serde_u256_dec")]
    pub asset_id: U256,
    /// Der Locator der Asset-Metadaten (z.B. eine `ipfs://`-URI), UTF-8.
    pub metadata_uri: String,
    /// Der Mindestpreis in der kleinsten Währungseinheit (Basiseinheit).
    /// Im Wire-Format als Dezimal-String kodiert (256 Bit, vorzeichenlos).
    #[serde(with = "serde_u256_dec")]
    pub min_price: U256,
    /// Die Hex-kodierte Signatur über den kanonischen Digest der Terme:
    /// `verifying_key (32 Byte) || Ed25519-Signatur (64 Byte)`.
    pub signature: String,
}

/// Serde-Helfer: kodiert eine `U256` im Wire-Format als Dezimal-String.
///
/// Das Wire-Format verlangt Dezimal-Strings, damit 256-Bit-Beträge auch von
/// Konsumenten ohne Big-Integer-Unterstützung verlustfrei transportiert
/// werden können.
pub(crate) mod serde_u256_dec {
    use primitive_types::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_dec_str(&s)
            .map_err(|e| de::Error::custom(format!("invalid decimal U256 '{}': {:?}", s, e)))
    }
}
