//! # registry.rs
//!
//! Der Listing-Lebenszyklus: Anlegen, Stornieren und Abfragen von
//! Verkaufsangeboten. Die Registry ist der alleinige Eigentümer des
//! `active`-Flags; nur die atomare Abwicklung in
//! [`Marketplace::buy`](crate::market::Marketplace::buy) erhält die
//! delegierte Autorität, es im Zuge eines Verkaufs zu kippen.

use crate::error::MarketCoreError;
use crate::market::Marketplace;
use crate::models::listing::{Listing, PaymentKind};
use primitive_types::U256;

impl Marketplace {
    /// Legt ein neues Listing an und vergibt die nächste Listing-ID.
    ///
    /// Vorbedingungen: Der Aufrufer ist der aktuelle Eigentümer des Assets,
    /// der Preis ist strikt größer als null, und bei Fungible-Zahlung ist der
    /// Token registriert. Die Prüfungen laufen in der Reihenfolge der
    /// geringsten Kosten; vor der ersten fehlgeschlagenen Prüfung wird kein
    /// Zustand verändert.
    ///
    /// # Returns
    /// Die strikt monoton steigende ID des neuen Listings (beginnend bei 1).
    pub fn create_listing(
        &self,
        caller: &str,
        asset_contract: &str,
        asset_id: U256,
        price: U256,
        payment: PaymentKind,
    ) -> Result<u64, MarketCoreError> {
        if price.is_zero() {
            return Err(MarketCoreError::InvalidPrice);
        }

        let mut state = self.write();

        if let PaymentKind::Fungible { token } = &payment {
            if !state.tokens.contains_key(token) {
                return Err(MarketCoreError::UnknownToken(token.clone()));
            }
        }

        let collection = state
            .collections
            .get(asset_contract)
            .ok_or_else(|| MarketCoreError::UnknownCollection(asset_contract.to_string()))?;
        if collection.owner_of(&asset_id)? != caller {
            return Err(MarketCoreError::NotOwner(caller.to_string()));
        }

        state.listing_counter += 1;
        let listing_id = state.listing_counter;
        state.listings.insert(
            listing_id,
            Listing {
                listing_id,
                asset_contract: asset_contract.to_string(),
                asset_id,
                seller: caller.to_string(),
                price,
                payment,
                active: true,
            },
        );
        Ok(listing_id)
    }

    /// Storniert ein aktives Listing.
    ///
    /// Nur der Verkäufer darf stornieren. Das `active`-Flag kippt unumkehrbar
    /// auf falsch; die Listing-ID wird nie wiederverwendet.
    pub fn cancel_listing(&self, caller: &str, listing_id: u64) -> Result<(), MarketCoreError> {
        let mut state = self.write();
        let listing = state
            .listings
            .get_mut(&listing_id)
            .ok_or(MarketCoreError::ListingNotFound(listing_id))?;

        if listing.seller != caller {
            return Err(MarketCoreError::NotSeller(caller.to_string()));
        }
        if !listing.active {
            return Err(MarketCoreError::ListingInactive(listing_id));
        }

        listing.active = false;
        Ok(())
    }

    /// Liefert eine Momentaufnahme eines Listings.
    ///
    /// Rein lesend; nach der Abwicklung oder Stornierung liefert jeder
    /// weitere Aufruf denselben terminalen Zustand mit `active == false`.
    pub fn get_listing(&self, listing_id: u64) -> Result<Listing, MarketCoreError> {
        self.read()
            .listings
            .get(&listing_id)
            .cloned()
            .ok_or(MarketCoreError::ListingNotFound(listing_id))
    }
}
