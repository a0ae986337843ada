//! # deployment.rs
//!
//! Definiert den `DeploymentRecord`: die beim Provisionieren einmalig
//! geschriebene Zuordnung von logischen Vertragsnamen zu deployten
//! Identitäten. Alle anderen Komponenten lesen diese Zuordnung beim Start;
//! sie ist der Bootstrap-Input des Systems.

use crate::error::MarketCoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Die persistierte Zuordnung von logischem Vertragsnamen zu deployter Identität.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DeploymentRecord {
    /// Die Zuordnung, z.B. `"nft" -> "nft-main"`, `"marketplace" -> "market-1"`.
    /// `BTreeMap`, damit die Serialisierung deterministisch sortiert ist.
    pub contracts: BTreeMap<String, String>,
}

impl DeploymentRecord {
    /// Erstellt einen leeren Record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hinterlegt die deployte Identität für einen logischen Namen.
    pub fn register(&mut self, name: impl Into<String>, identity: impl Into<String>) {
        self.contracts.insert(name.into(), identity.into());
    }

    /// Liefert die deployte Identität für einen logischen Namen.
    pub fn identity_of(&self, name: &str) -> Result<&str, MarketCoreError> {
        self.contracts
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| MarketCoreError::UnknownContract(name.to_string()))
    }

    /// Nimmt einen JSON-String entgegen und deserialisiert ihn in einen Record.
    pub fn from_json(json_str: &str) -> Result<Self, MarketCoreError> {
        let record = serde_json::from_str(json_str)?;
        Ok(record)
    }

    /// Serialisiert den Record in einen formatierten JSON-String.
    pub fn to_json(&self) -> Result<String, MarketCoreError> {
        let json_str = serde_json::to_string_pretty(self)?;
        Ok(json_str)
    }

    /// Lädt einen Record aus einer JSON-Datei.
    pub fn load(path: &Path) -> Result<Self, MarketCoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Schreibt den Record als JSON-Datei. Wird genau einmal beim
    /// Provisionieren aufgerufen; nachgelagerte Komponenten lesen nur.
    pub fn save(&self, path: &Path) -> Result<(), MarketCoreError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
