//! # settlement.rs
//!
//! Die atomare Kauf-Abwicklung: Zahlungsprüfung, Asset-Transfer und das
//! Schließen des Listings als eine unteilbare Einheit. Entweder werden alle
//! Effekte sichtbar oder keiner — das ist die zentrale Korrektheits-
//! eigenschaft dieses Moduls.
//!
//! Der Ablauf folgt strikt "alle Prüfungen vor dem ersten Effekt", in der
//! Reihenfolge der geringsten Kosten:
//!
//! 1. Listing laden; inaktiv oder unbekannt → Abbruch. Da Laden und Kippen
//!    des `active`-Flags unter demselben Schreib-Lock liegen, können zwei
//!    nebenläufige Käufe nie beide ein aktives Listing beobachten — das ist
//!    der primäre Schutz gegen Doppelkäufe.
//! 2. Zahlungszweig prüfen (nativ: exakter Betrag; fungible: Allowance und
//!    Guthaben decken den Preis).
//! 3. Prüfen, dass der Verkäufer das Asset noch besitzt (es kann außerhalb
//!    des Listings transferiert worden sein).
//! 4. Erst jetzt: Zahlung bewegen, Asset übertragen, `active` kippen,
//!    Settlement-Event anhängen.

use crate::error::MarketCoreError;
use crate::market::Marketplace;
use crate::models::event::SettlementEvent;
use crate::models::listing::{Payment, PaymentKind};

impl Marketplace {
    /// Kauft ein aktives Listing und wickelt es atomar ab.
    ///
    /// # Arguments
    /// * `buyer` - Die Identität des Käufers.
    /// * `listing_id` - Die ID des zu kaufenden Listings.
    /// * `payment` - Die Zahlung: ein beigefügter nativer Betrag oder die
    ///   implizite Fungible-Token-Autorisierung über die Allowance.
    ///
    /// # Returns
    /// Das protokollierte [`SettlementEvent`] der Abwicklung.
    ///
    /// # Errors
    /// Jede verletzte Vorbedingung bricht die Abwicklung ab, bevor irgendein
    /// Effekt angewendet wurde; ein teilweiser Zustand (Zahlung bewegt, Asset
    /// nicht übertragen — oder umgekehrt) ist nie beobachtbar.
    pub fn buy(
        &self,
        buyer: &str,
        listing_id: u64,
        payment: Payment,
    ) -> Result<SettlementEvent, MarketCoreError> {
        let mut state = self.write();

        // Schritt 1: Listing laden und den Doppelkauf-Schutz anwenden.
        let listing = state
            .listings
            .get(&listing_id)
            .ok_or(MarketCoreError::ListingNotFound(listing_id))?
            .clone();
        if !listing.active {
            return Err(MarketCoreError::ListingInactive(listing_id));
        }

        // Schritt 2: Zahlungszweig prüfen — erschöpfendes Match über die
        // geschlossene Zahlungsart, noch ohne jeden Effekt.
        match (&listing.payment, &payment) {
            (PaymentKind::Native, Payment::Native { attached }) => {
                // Exakter Betrag, kein Wechselgeld.
                if *attached != listing.price {
                    return Err(MarketCoreError::InsufficientPayment {
                        required: listing.price,
                        provided: *attached,
                    });
                }
            }
            (PaymentKind::Fungible { token }, Payment::Fungible) => {
                let ledger = state
                    .tokens
                    .get(token)
                    .ok_or_else(|| MarketCoreError::UnknownToken(token.clone()))?;
                let available = ledger.allowance(buyer, &self.market_id);
                if available < listing.price {
                    return Err(MarketCoreError::InsufficientAllowance {
                        required: listing.price,
                        available,
                    });
                }
                let balance = ledger.balance_of(buyer);
                if balance < listing.price {
                    return Err(MarketCoreError::InsufficientPayment {
                        required: listing.price,
                        provided: balance,
                    });
                }
            }
            _ => return Err(MarketCoreError::PaymentKindMismatch),
        }

        // Schritt 3: Der Verkäufer muss das Asset noch besitzen.
        let collection = state
            .collections
            .get(&listing.asset_contract)
            .ok_or_else(|| MarketCoreError::UnknownCollection(listing.asset_contract.clone()))?;
        if collection.owner_of(&listing.asset_id)? != listing.seller {
            return Err(MarketCoreError::NotOwner(listing.seller.clone()));
        }

        // Schritt 4: Alle Prüfungen bestanden — Effekte anwenden. Unter dem
        // gehaltenen Schreib-Lock ist dieser Block unteilbar.
        match &listing.payment {
            PaymentKind::Native => {
                let proceeds = state.native_balances.entry(listing.seller.clone()).or_default();
                *proceeds = proceeds.saturating_add(listing.price);
            }
            PaymentKind::Fungible { token } => {
                state
                    .tokens
                    .get_mut(token)
                    .expect("token presence was checked above")
                    .transfer_from(buyer, &self.market_id, &listing.seller, listing.price)?;
            }
        }

        state
            .collections
            .get_mut(&listing.asset_contract)
            .expect("collection presence was checked above")
            .transfer(listing.asset_id, buyer)?;

        state
            .listings
            .get_mut(&listing_id)
            .expect("listing presence was checked above")
            .active = false;

        Ok(state.events.append(listing_id, buyer, listing.price))
    }
}
