//! # listing.rs
//!
//! Definiert die Datenstrukturen des Listing-Lebenszyklus: das `Listing`
//! selbst, die geschlossene Zahlungsart (`PaymentKind`) und die vom Käufer
//! beim Kauf übergebene Zahlung (`Payment`).

use crate::models::voucher::serde_u256_dec;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Die Zahlungsart eines Listings als geschlossene, getaggte Variante.
///
/// Die Settlement-Logik matcht hierauf erschöpfend; eine Unterscheidung über
/// Strings oder Zahlencodes findet bewusst nicht statt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum PaymentKind {
    /// Bezahlung in nativer Währung; der Betrag wird dem Kauf beigefügt.
    Native,
    /// Bezahlung in einem Fungible Token, identifiziert über seine Ledger-ID.
    /// Der Käufer muss dem Marktplatz vorab eine ausreichende Allowance einräumen.
    Fungible {
        /// Die Identität des Token-Vertrags, über den bezahlt wird.
        token: String,
    },
}

/// Die vom Käufer an `buy` übergebene Zahlung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payment {
    /// Ein beigefügter nativer Betrag. Muss dem Listing-Preis exakt entsprechen;
    /// es wird kein Wechselgeld herausgegeben.
    Native {
        /// Der beigefügte Betrag in der Basiseinheit.
        attached: U256,
    },
    /// Eine implizite Fungible-Token-Autorisierung: Der Marktplatz konsumiert
    /// den Kaufpreis aus der zuvor eingeräumten Allowance des Käufers.
    Fungible,
}

/// Ein Verkaufsangebot für ein bereits existierendes Asset zu einem Festpreis.
///
/// Invarianten: `price > 0`; `active` ist ab der Erstellung wahr und kippt
/// durch genau ein terminales Ereignis (Verkauf oder Stornierung) unumkehrbar
/// auf falsch. Listing-IDs beginnen bei 1, steigen strikt monoton und werden
/// auch nach einer Stornierung nie wiederverwendet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Die eindeutige, monoton steigende ID dieses Listings.
    pub listing_id: u64,
    /// Die Identität der Asset-Collection, zu der das Asset gehört.
    pub asset_contract: String,
    /// Die Identität des Assets innerhalb der Collection.
    #[serde(with = "serde_u256_dec")]
    pub asset_id: U256,
    /// Die Identität des Verkäufers. Nur er darf das Listing stornieren.
    pub seller: String,
    /// Der Festpreis in der Basiseinheit.
    #[serde(with = "serde_u256_dec")]
    pub price: U256,
    /// Die Zahlungsart, in der dieses Listing beglichen wird.
    pub payment: PaymentKind,
    /// Ob das Listing noch kaufbar ist. Kippt atomar mit der Abwicklung.
    pub active: bool,
}
