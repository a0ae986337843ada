//! # tests/test_concurrent_purchase.rs
//!
//! Der Wettlauf zweier Käufer um dasselbe Listing. Da Laden und Kippen des
//! `active`-Flags unter demselben Schreib-Lock liegen, muss unabhängig vom
//! Thread-Scheduling genau ein Käufer gewinnen.


use market_lib::{MarketCoreError, Marketplace, Payment, PaymentKind, U256};
use std::sync::Arc;
use std::thread;
use test_utils::{setup_marketplace, ACTORS, COLLECTION_ID, SELLER_ASSET_ID};

#[test]
fn test_exactly_one_of_two_racing_buyers_wins() {
    // Mehrere Durchläufe, um unterschiedliche Verschränkungen zu provozieren.
    for _ in 0..20 {
        let market = Arc::new(setup_marketplace());
        let listing_id = market
            .create_listing(
                &ACTORS.seller.identity,
                COLLECTION_ID,
                U256::from(SELLER_ASSET_ID),
                U256::from(1000u64),
                PaymentKind::Native,
            )
            .unwrap();

        let spawn_buyer = |market: Arc<Marketplace>, buyer: String| {
            thread::spawn(move || {
                market.buy(
                    &buyer,
                    listing_id,
                    Payment::Native {
                        attached: U256::from(1000u64),
                    },
                )
            })
        };

        let first = spawn_buyer(Arc::clone(&market), ACTORS.buyer.identity.clone());
        let second = spawn_buyer(Arc::clone(&market), ACTORS.rival.identity.clone());

        let results = [
            first.join().expect("buyer thread panicked"),
            second.join().expect("rival thread panicked"),
        ];

        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1, "Exactly one buyer must win the race");

        let loss = results
            .iter()
            .find(|r| r.is_err())
            .expect("one result must be an error");
        assert!(matches!(
            loss,
            Err(MarketCoreError::ListingInactive(id)) if *id == listing_id
        ));

        // Der Gewinner besitzt das Asset, der Verkäufer wurde genau einmal
        // bezahlt, und es existiert genau ein Settlement-Event.
        let winner_event = results
            .iter()
            .find_map(|r| r.as_ref().ok())
            .expect("one result must be a settlement event");
        assert_eq!(
            market
                .owner_of(COLLECTION_ID, U256::from(SELLER_ASSET_ID))
                .unwrap(),
            winner_event.buyer
        );
        assert_eq!(
            market.native_balance_of(&ACTORS.seller.identity),
            U256::from(1000u64)
        );
        assert_eq!(market.latest_event_sequence(), 1);
        assert!(!market.get_listing(listing_id).unwrap().active);
    }
}
