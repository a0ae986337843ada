//! # lazy_mint.rs
//!
//! Der Lazy-Mint-Pfad: Ein Asset wird erst bei seinem ersten Verkauf
//! materialisiert, autorisiert durch einen off-chain signierten Voucher des
//! Collection-Autorisierers. Der Pfad teilt die Zahlungsvalidierung der
//! Abwicklung (nativ, Betrag ≥ Mindestpreis), konsultiert aber keine
//! Listings — der Voucher selbst ist das Angebot.
//!
//! Einmaligkeit wird doppelt durchgesetzt: über die Existenz des Assets und
//! über eine explizite Menge verbrauchter Voucher. Die Existenzprüfung allein
//! wäre ein Stellvertreter-Kriterium — würde ein Asset später zerstört,
//! ließe sich sein Voucher erneut einlösen. Die verbrauchte Menge schließt
//! diese Wiedereinspielung dauerhaft aus.

use crate::error::MarketCoreError;
use crate::market::Marketplace;
use crate::models::voucher::SignedVoucher;
use crate::services::verifier::verify_voucher;
use primitive_types::U256;

impl Marketplace {
    /// Mintet ein Asset auf Basis eines signierten Vouchers direkt an den Käufer.
    ///
    /// Vorbedingungen, in der Reihenfolge der geringsten Kosten geprüft und
    /// sämtlich vor dem ersten Effekt:
    /// 1. Die Voucher-Signatur verifiziert gegen den Autorisierer der Collection.
    /// 2. Der beigefügte native Betrag deckt den Mindestpreis (`>=`).
    /// 3. Der Voucher wurde noch nicht verbraucht und das Asset existiert noch nicht.
    ///
    /// Effekt: Das Asset entsteht im Eigentum des Käufers, die Metadaten-URI
    /// wird festgeschrieben, der Erlös dem Autorisierer gutgeschrieben und der
    /// Voucher dauerhaft entwertet — ein erneutes Vorlegen desselben Vouchers
    /// schlägt mit [`MarketCoreError::AlreadyMinted`] fehl.
    ///
    /// # Returns
    /// Die Asset-ID des gemintenen Assets.
    pub fn mint_on_purchase(
        &self,
        buyer: &str,
        collection_id: &str,
        voucher: &SignedVoucher,
        attached: U256,
    ) -> Result<U256, MarketCoreError> {
        let mut state = self.write();
        let collection = state
            .collections
            .get_mut(collection_id)
            .ok_or_else(|| MarketCoreError::UnknownCollection(collection_id.to_string()))?;

        if !verify_voucher(voucher, &collection.authorizer) {
            return Err(MarketCoreError::InvalidSignature);
        }

        if attached < voucher.min_price {
            return Err(MarketCoreError::InsufficientPayment {
                required: voucher.min_price,
                provided: attached,
            });
        }

        if collection.is_voucher_consumed(&voucher.asset_id) || collection.exists(&voucher.asset_id)
        {
            return Err(MarketCoreError::AlreadyMinted(voucher.asset_id));
        }

        // Alle Prüfungen bestanden — Effekte anwenden.
        collection.mint(voucher.asset_id, buyer, &voucher.metadata_uri)?;
        collection.mark_voucher_consumed(voucher.asset_id);
        let authorizer = collection.authorizer.clone();

        let proceeds = state.native_balances.entry(authorizer).or_default();
        *proceeds = proceeds.saturating_add(attached);

        Ok(voucher.asset_id)
    }
}
