//! # queries.rs
//!
//! Die rein lesenden Abfragen des Marktplatzes. Sie nehmen den geteilten
//! Lese-Lock, laufen nebenläufig zu beliebig vielen anderen Lesern und sehen
//! nie einen halb-committeten Zustand.

use crate::error::MarketCoreError;
use crate::market::Marketplace;
use crate::models::event::SettlementEvent;
use primitive_types::U256;

impl Marketplace {
    /// Liefert den aktuellen Eigentümer eines Assets.
    pub fn owner_of(
        &self,
        collection_id: &str,
        asset_id: U256,
    ) -> Result<String, MarketCoreError> {
        let state = self.read();
        let collection = state
            .collections
            .get(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;
        Ok(collection.owner_of(&asset_id)?.to_string())
    }

    /// Liefert die beim Mint festgeschriebene Metadaten-URI eines Assets.
    pub fn metadata_uri(
        &self,
        collection_id: &str,
        asset_id: U256,
    ) -> Result<String, MarketCoreError> {
        let state = self.read();
        let collection = state
            .collections
            .get(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;
        Ok(collection.metadata_uri(&asset_id)?.to_string())
    }

    /// Liefert alle Asset-IDs, die eine Identität in einer Collection hält.
    ///
    /// Direkter Index-Lookup; es findet kein Scan über alle denkbaren
    /// Asset-IDs statt.
    pub fn assets_of(
        &self,
        collection_id: &str,
        owner: &str,
    ) -> Result<Vec<U256>, MarketCoreError> {
        let state = self.read();
        let collection = state
            .collections
            .get(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;
        Ok(collection.assets_of(owner))
    }

    /// Ob der Voucher für diese Asset-ID bereits verbraucht wurde.
    pub fn is_voucher_consumed(
        &self,
        collection_id: &str,
        asset_id: U256,
    ) -> Result<bool, MarketCoreError> {
        let state = self.read();
        let collection = state
            .collections
            .get(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;
        Ok(collection.is_voucher_consumed(&asset_id))
    }

    /// Liefert das Fungible-Token-Guthaben eines Eigentümers.
    pub fn balance_of(&self, token_id: &str, owner: &str) -> Result<U256, MarketCoreError> {
        let state = self.read();
        let token = state
            .tokens
            .get(token_id)
            .ok_or_else(|| MarketCoreError::UnknownToken(token_id.to_string()))?;
        Ok(token.balance_of(owner))
    }

    /// Liefert die verbleibende Allowance eines (Eigentümer, Spender)-Paares.
    pub fn allowance(
        &self,
        token_id: &str,
        owner: &str,
        spender: &str,
    ) -> Result<U256, MarketCoreError> {
        let state = self.read();
        let token = state
            .tokens
            .get(token_id)
            .ok_or_else(|| MarketCoreError::UnknownToken(token_id.to_string()))?;
        Ok(token.allowance(owner, spender))
    }

    /// Liefert das durch Abwicklungen gutgeschriebene native Guthaben.
    pub fn native_balance_of(&self, owner: &str) -> U256 {
        self.read()
            .native_balances
            .get(owner)
            .copied()
            .unwrap_or_default()
    }

    /// Liefert alle Settlement-Events mit Sequenznummern im Bereich `[from, to]`.
    ///
    /// Endlicher, neu startbarer Scan über das committete Protokoll;
    /// mutiert nichts.
    pub fn query_events(&self, from_sequence: u64, to_sequence: u64) -> Vec<SettlementEvent> {
        self.read().events.query(from_sequence, to_sequence)
    }

    /// Die Sequenznummer des zuletzt protokollierten Settlement-Events.
    pub fn latest_event_sequence(&self) -> u64 {
        self.read().events.latest_sequence()
    }
}
