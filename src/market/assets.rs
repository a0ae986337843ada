//! # assets.rs
//!
//! Die Eigentumsverwaltung einer einzelnen Asset-Collection: Wer besitzt
//! welches Asset, welche Metadaten gehören dazu, welche Voucher sind bereits
//! verbraucht. Zusätzlich pflegt die Collection einen Index von Identität zu
//! gehaltenen Asset-IDs, der bei jedem Transfer mitgeführt wird — Bestands-
//! abfragen sind damit ein direkter Lookup statt eines linearen Scans über
//! alle denkbaren Asset-IDs.

use crate::error::MarketCoreError;
use primitive_types::U256;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Der Eigentums-Zustand einer Asset-Collection.
pub struct AssetCollection {
    /// Die Identität des designierten Autorisierers ("Minter") dieser
    /// Collection. Nur seine Voucher-Signaturen berechtigen zum Minten.
    pub authorizer: String,
    /// Asset-ID → aktueller Eigentümer.
    owners: HashMap<U256, String>,
    /// Asset-ID → Metadaten-URI, festgeschrieben beim Mint.
    metadata: HashMap<U256, String>,
    /// Explizit verbrauchte Voucher-Asset-IDs. Wird zusätzlich zur
    /// Existenzprüfung geführt: Selbst wenn ein Asset später zerstört werden
    /// könnte, bleibt sein Voucher dauerhaft unbrauchbar.
    consumed_vouchers: HashSet<U256>,
    /// Eigentümer → gehaltene Asset-IDs, bei jedem Transfer aktualisiert.
    owned_index: HashMap<String, BTreeSet<U256>>,
    /// Eigentümer → Operatoren, die alle seine Assets transferieren dürfen.
    operators: HashMap<String, HashSet<String>>,
}

impl AssetCollection {
    /// Erstellt eine leere Collection mit ihrem designierten Autorisierer.
    pub(crate) fn new(authorizer: String) -> Self {
        Self {
            authorizer,
            owners: HashMap::new(),
            metadata: HashMap::new(),
            consumed_vouchers: HashSet::new(),
            owned_index: HashMap::new(),
            operators: HashMap::new(),
        }
    }

    /// Liefert den aktuellen Eigentümer eines Assets.
    pub fn owner_of(&self, asset_id: &U256) -> Result<&str, MarketCoreError> {
        self.owners
            .get(asset_id)
            .map(String::as_str)
            .ok_or(MarketCoreError::UnknownAsset(*asset_id))
    }

    /// Ob das Asset existiert (gemintet wurde).
    pub fn exists(&self, asset_id: &U256) -> bool {
        self.owners.contains_key(asset_id)
    }

    /// Liefert die beim Mint festgeschriebene Metadaten-URI eines Assets.
    pub fn metadata_uri(&self, asset_id: &U256) -> Result<&str, MarketCoreError> {
        self.metadata
            .get(asset_id)
            .map(String::as_str)
            .ok_or(MarketCoreError::UnknownAsset(*asset_id))
    }

    /// Liefert alle von einer Identität gehaltenen Asset-IDs, aufsteigend sortiert.
    pub fn assets_of(&self, owner: &str) -> Vec<U256> {
        self.owned_index
            .get(owner)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Ob der Voucher für diese Asset-ID bereits verbraucht wurde.
    pub fn is_voucher_consumed(&self, asset_id: &U256) -> bool {
        self.consumed_vouchers.contains(asset_id)
    }

    /// Markiert den Voucher für diese Asset-ID dauerhaft als verbraucht.
    pub(crate) fn mark_voucher_consumed(&mut self, asset_id: U256) {
        self.consumed_vouchers.insert(asset_id);
    }

    /// Erzeugt ein neues Asset mit Eigentümer und Metadaten.
    ///
    /// Schlägt mit [`MarketCoreError::AlreadyMinted`] fehl, wenn die Asset-ID
    /// bereits existiert.
    pub(crate) fn mint(
        &mut self,
        asset_id: U256,
        to: &str,
        metadata_uri: &str,
    ) -> Result<(), MarketCoreError> {
        if self.exists(&asset_id) {
            return Err(MarketCoreError::AlreadyMinted(asset_id));
        }
        self.owners.insert(asset_id, to.to_string());
        self.metadata.insert(asset_id, metadata_uri.to_string());
        self.owned_index
            .entry(to.to_string())
            .or_default()
            .insert(asset_id);
        Ok(())
    }

    /// Überträgt das Eigentum eines Assets und führt den Bestands-Index nach.
    ///
    /// Autorisierung (Eigentümer- bzw. Operator-Prüfung oder die delegierte
    /// Autorität der atomaren Abwicklung) liegt beim Aufrufer.
    pub(crate) fn transfer(&mut self, asset_id: U256, to: &str) -> Result<(), MarketCoreError> {
        if !self.exists(&asset_id) {
            return Err(MarketCoreError::UnknownAsset(asset_id));
        }
        let previous_owner = self
            .owners
            .insert(asset_id, to.to_string())
            .expect("existence was checked above");

        if let Some(ids) = self.owned_index.get_mut(&previous_owner) {
            ids.remove(&asset_id);
        }
        self.owned_index
            .entry(to.to_string())
            .or_default()
            .insert(asset_id);
        Ok(())
    }

    /// Erlaubt einem Operator, alle Assets des Eigentümers zu transferieren.
    pub(crate) fn approve_operator(&mut self, owner: &str, operator: &str) {
        self.operators
            .entry(owner.to_string())
            .or_default()
            .insert(operator.to_string());
    }

    /// Ob der Operator für alle Assets des Eigentümers freigegeben ist.
    pub(crate) fn is_operator(&self, owner: &str, operator: &str) -> bool {
        self.operators
            .get(owner)
            .is_some_and(|ops| ops.contains(operator))
    }
}
