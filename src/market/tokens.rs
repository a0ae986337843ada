//! # tokens.rs
//!
//! Der Allowance-Ledger eines Fungible Tokens: Guthaben je Eigentümer und
//! freigegebene Beträge je (Eigentümer, Spender)-Paar. Eine Allowance sinkt
//! ausschließlich durch Konsum in einer Abwicklung und steigt ausschließlich
//! durch eine explizite Re-Approval; sie wird nie negativ.

use crate::error::MarketCoreError;
use primitive_types::U256;
use std::collections::HashMap;

/// Guthaben und Allowances eines einzelnen Fungible Tokens.
pub struct TokenLedger {
    /// Eigentümer → Guthaben in der Basiseinheit.
    balances: HashMap<String, U256>,
    /// (Eigentümer, Spender) → freigegebener Restbetrag.
    allowances: HashMap<(String, String), U256>,
}

impl TokenLedger {
    /// Erstellt einen leeren Token-Ledger.
    pub(crate) fn new() -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Liefert das Guthaben eines Eigentümers (null, falls unbekannt).
    pub fn balance_of(&self, owner: &str) -> U256 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    /// Liefert die verbleibende Allowance eines (Eigentümer, Spender)-Paares.
    pub fn allowance(&self, owner: &str, spender: &str) -> U256 {
        self.allowances
            .get(&(owner.to_string(), spender.to_string()))
            .copied()
            .unwrap_or_default()
    }

    /// Schreibt einem Eigentümer Guthaben gut.
    pub(crate) fn credit(&mut self, owner: &str, amount: U256) -> Result<(), MarketCoreError> {
        let balance = self.balances.entry(owner.to_string()).or_default();
        *balance = balance.checked_add(amount).ok_or_else(|| {
            MarketCoreError::AmountOutOfRange(format!("balance overflow for '{}'", owner))
        })?;
        Ok(())
    }

    /// Setzt die Allowance eines Spenders auf den angegebenen Betrag.
    ///
    /// Überschreibende Semantik: Der neue Wert ersetzt den alten vollständig.
    pub(crate) fn approve(&mut self, owner: &str, spender: &str, amount: U256) {
        self.allowances
            .insert((owner.to_string(), spender.to_string()), amount);
    }

    /// Bewegt `amount` vom Eigentümer zum Empfänger im Auftrag des Spenders.
    ///
    /// Konsumiert exakt `amount` aus der Allowance. Schlägt eine der beiden
    /// Prüfungen fehl, bleibt der Ledger unverändert — eine Allowance wird
    /// nie teilweise konsumiert.
    pub(crate) fn transfer_from(
        &mut self,
        owner: &str,
        spender: &str,
        to: &str,
        amount: U256,
    ) -> Result<(), MarketCoreError> {
        let allowance_key = (owner.to_string(), spender.to_string());
        let available = self.allowance(owner, spender);
        if available < amount {
            return Err(MarketCoreError::InsufficientAllowance {
                required: amount,
                available,
            });
        }

        let balance = self.balance_of(owner);
        if balance < amount {
            return Err(MarketCoreError::InsufficientPayment {
                required: amount,
                provided: balance,
            });
        }

        // Alle Prüfungen bestanden; ab hier kann nichts mehr fehlschlagen.
        self.allowances.insert(allowance_key, available - amount);
        self.balances.insert(owner.to_string(), balance - amount);
        let recipient = self.balances.entry(to.to_string()).or_default();
        *recipient = recipient.saturating_add(amount);
        Ok(())
    }
}
