//! # event.rs
//!
//! Definiert das `SettlementEvent`: den unveränderlichen, append-only
//! protokollierten Ausgang einer erfolgreichen Kauf-Abwicklung. Die Events
//! sind über ihre Ledger-Sequenznummer total geordnet und bilden die
//! Grundlage für Historien-Abfragen.

use crate::models::voucher::serde_u256_dec;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Der protokollierte Ausgang einer erfolgreichen Abwicklung.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SettlementEvent {
    /// Die strikt monoton steigende Ledger-Sequenznummer, beginnend bei 1.
    pub sequence: u64,
    /// Die ID des abgewickelten Listings.
    pub listing_id: u64,
    /// Die Identität des Käufers.
    pub buyer: String,
    /// Der bezahlte Preis in der Basiseinheit.
    #[serde(with = "serde_u256_dec")]
    pub price: U256,
    /// Der Zeitpunkt der Abwicklung im ISO 8601-Format (UTC, Mikrosekunden).
    pub settled_at: String,
}
