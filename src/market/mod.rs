//! # src/market/mod.rs
//!
//! Definiert die `Marketplace`-Fassade: den einzigen, global geordneten
//! Ledger, in dem der gesamte autoritative Zustand lebt (Asset-Eigentum,
//! Token-Guthaben und Allowances, Listings, Settlement-Events).
//!
//! Alle mutierenden Operationen halten für ihre gesamte Dauer einen
//! exklusiven Schreib-Lock und wirken dadurch als eine unteilbare
//! Transaktion: Zwei nebenläufige Mutationen auf demselben Datensatz werden
//! total serialisiert, und jede Operation prüft sämtliche Vorbedingungen,
//! bevor sie den ersten Effekt anwendet. Lesende Abfragen laufen nebenläufig
//! über einen geteilten Lese-Lock und sehen nie einen halb-committeten Zustand.

pub mod assets;
pub mod events;
mod lazy_mint;
mod queries;
mod registry;
mod settlement;
pub mod tokens;

use crate::error::MarketCoreError;
use crate::market::assets::AssetCollection;
use crate::market::events::EventIndex;
use crate::market::tokens::TokenLedger;
use crate::models::listing::Listing;
use primitive_types::U256;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Der gesamte autoritative Ledger-Zustand hinter dem Lock.
pub(crate) struct LedgerState {
    /// Alle registrierten Asset-Collections, je Collection-Identität.
    pub collections: HashMap<String, AssetCollection>,
    /// Alle registrierten Fungible Tokens, je Token-Identität.
    pub tokens: HashMap<String, TokenLedger>,
    /// Alle je angelegten Listings, nach Listing-ID.
    pub listings: BTreeMap<u64, Listing>,
    /// Der Zähler der zuletzt vergebenen Listing-ID. IDs beginnen bei 1 und
    /// werden auch nach einer Stornierung nie wiederverwendet.
    pub listing_counter: u64,
    /// Native Guthaben, die durch Abwicklungen gutgeschrieben wurden.
    pub native_balances: HashMap<String, U256>,
    /// Das append-only Protokoll der Settlement-Ausgänge.
    pub events: EventIndex,
}

/// Die zentrale Verwaltungsstruktur des Marktplatzes.
///
/// Hält den Ledger-Zustand hinter einem `RwLock` und bietet die Operationen
/// des Listing-Lebenszyklus, der Kauf-Abwicklung und des Lazy-Mint-Pfads an.
/// Die Struktur ist `Sync`: Ein `Arc<Marketplace>` kann von beliebig vielen
/// Threads gleichzeitig verwendet werden.
pub struct Marketplace {
    /// Die eigene Identität des Marktplatzes. Käufer räumen Allowances
    /// dieser Identität ein, damit die Abwicklung den Kaufpreis konsumieren darf.
    market_id: String,
    state: RwLock<LedgerState>,
}

impl Marketplace {
    /// Erstellt einen neuen, leeren Marktplatz-Ledger.
    ///
    /// # Arguments
    /// * `market_id` - Die Identität, unter der der Marktplatz als
    ///   Allowance-Spender auftritt.
    pub fn new(market_id: impl Into<String>) -> Self {
        Self {
            market_id: market_id.into(),
            state: RwLock::new(LedgerState {
                collections: HashMap::new(),
                tokens: HashMap::new(),
                listings: BTreeMap::new(),
                listing_counter: 0,
                native_balances: HashMap::new(),
                events: EventIndex::new(),
            }),
        }
    }

    /// Die Identität des Marktplatzes (der Allowance-Spender der Abwicklung).
    pub fn market_id(&self) -> &str {
        &self.market_id
    }

    /// Registriert eine neue Asset-Collection mit ihrem designierten Autorisierer.
    ///
    /// Der Autorisierer ist die einzige Identität, deren Voucher-Signaturen
    /// für diese Collection zum Minten berechtigen.
    pub fn register_collection(
        &self,
        collection_id: &str,
        authorizer: &str,
    ) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        if state.collections.contains_key(collection_id) {
            return Err(MarketCoreError::CollectionAlreadyRegistered(
                collection_id.to_string(),
            ));
        }
        state.collections.insert(
            collection_id.to_string(),
            AssetCollection::new(authorizer.to_string()),
        );
        Ok(())
    }

    /// Registriert einen neuen Fungible Token als Zahlungsmittel.
    pub fn register_token(&self, token_id: &str) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        if state.tokens.contains_key(token_id) {
            return Err(MarketCoreError::TokenAlreadyRegistered(token_id.to_string()));
        }
        state.tokens.insert(token_id.to_string(), TokenLedger::new());
        Ok(())
    }

    /// Mintet ein Asset direkt an einen Eigentümer (Provisionierungspfad).
    ///
    /// Dient dem Anlegen bereits existierender Bestände; der reguläre Weg für
    /// neue Assets ist der Voucher-autorisierte Lazy-Mint-Pfad.
    pub fn mint_asset(
        &self,
        collection_id: &str,
        asset_id: U256,
        owner: &str,
        metadata_uri: &str,
    ) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        let collection = state
            .collections
            .get_mut(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;
        collection.mint(asset_id, owner, metadata_uri)
    }

    /// Schreibt einem Eigentümer Fungible-Token-Guthaben gut (Provisionierungspfad).
    pub fn credit_token(
        &self,
        token_id: &str,
        owner: &str,
        amount: U256,
    ) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        let token = state
            .tokens
            .get_mut(token_id)
            .ok_or_else(|| MarketCoreError::UnknownToken(token_id.to_string()))?;
        token.credit(owner, amount)
    }

    /// Räumt einem Spender eine Allowance auf dem Guthaben des Eigentümers ein.
    ///
    /// Eine erneute Freigabe überschreibt den bisherigen Wert (explizite
    /// Re-Approval-Semantik); konsumiert wird die Allowance ausschließlich
    /// durch die Abwicklung selbst.
    pub fn approve(
        &self,
        token_id: &str,
        owner: &str,
        spender: &str,
        amount: U256,
    ) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        let token = state
            .tokens
            .get_mut(token_id)
            .ok_or_else(|| MarketCoreError::UnknownToken(token_id.to_string()))?;
        token.approve(owner, spender, amount);
        Ok(())
    }

    /// Erlaubt einem Operator, alle Assets des Aufrufers zu transferieren.
    pub fn approve_operator(
        &self,
        collection_id: &str,
        caller: &str,
        operator: &str,
    ) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        let collection = state
            .collections
            .get_mut(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;
        collection.approve_operator(caller, operator);
        Ok(())
    }

    /// Transferiert ein Asset direkt zwischen zwei Identitäten.
    ///
    /// Der Aufrufer muss der aktuelle Eigentümer oder ein freigegebener
    /// Operator sein; andernfalls schlägt die Operation mit
    /// [`MarketCoreError::NotOwner`] fehl, ohne einen Effekt zu hinterlassen.
    pub fn transfer_asset(
        &self,
        caller: &str,
        collection_id: &str,
        asset_id: U256,
        to: &str,
    ) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        let collection = state
            .collections
            .get_mut(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;

        let owner = collection.owner_of(&asset_id)?.to_string();
        if caller != owner && !collection.is_operator(&owner, caller) {
            return Err(MarketCoreError::NotOwner(caller.to_string()));
        }
        collection.transfer(asset_id, to)
    }

    /// Nimmt den geteilten Lese-Lock auf den Ledger-Zustand.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().expect("ledger lock poisoned")
    }

    /// Nimmt den exklusiven Schreib-Lock auf den Ledger-Zustand.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().expect("ledger lock poisoned")
    }
}
