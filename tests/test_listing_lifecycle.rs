//! # tests/test_listing_lifecycle.rs
//!
//! Tests des Listing-Lebenszyklus: Anlegen mit allen Vorbedingungen,
//! Stornieren, ID-Vergabe und die terminale Natur des `active`-Flags.


use market_lib::{MarketCoreError, PaymentKind, U256};
use test_utils::{setup_marketplace, ACTORS, COLLECTION_ID, SELLER_ASSET_ID, TOKEN_ID};

#[test]
fn test_create_listing_happy_path() {
    let market = setup_marketplace();

    let listing_id = market
        .create_listing(
            &ACTORS.seller.identity,
            COLLECTION_ID,
            U256::from(SELLER_ASSET_ID),
            U256::from(1000u64),
            PaymentKind::Native,
        )
        .unwrap();
    assert_eq!(listing_id, 1, "Listing IDs start at 1");

    let listing = market.get_listing(listing_id).unwrap();
    assert!(listing.active);
    assert_eq!(listing.seller, ACTORS.seller.identity);
    assert_eq!(listing.asset_id, U256::from(SELLER_ASSET_ID));
    assert_eq!(listing.price, U256::from(1000u64));
    assert_eq!(listing.payment, PaymentKind::Native);
}

#[test]
fn test_create_listing_rejects_non_owner() {
    let market = setup_marketplace();

    let result = market.create_listing(
        &ACTORS.mallory.identity,
        COLLECTION_ID,
        U256::from(SELLER_ASSET_ID),
        U256::from(1000u64),
        PaymentKind::Native,
    );
    assert!(matches!(
        result,
        Err(MarketCoreError::NotOwner(caller)) if caller == ACTORS.mallory.identity
    ));
}

#[test]
fn test_create_listing_rejects_zero_price() {
    let market = setup_marketplace();

    let result = market.create_listing(
        &ACTORS.seller.identity,
        COLLECTION_ID,
        U256::from(SELLER_ASSET_ID),
        U256::zero(),
        PaymentKind::Native,
    );
    assert!(matches!(result, Err(MarketCoreError::InvalidPrice)));
}

#[test]
fn test_create_listing_rejects_unknown_token() {
    let market = setup_marketplace();

    let result = market.create_listing(
        &ACTORS.seller.identity,
        COLLECTION_ID,
        U256::from(SELLER_ASSET_ID),
        U256::from(1000u64),
        PaymentKind::Fungible {
            token: "no-such-token".to_string(),
        },
    );
    assert!(matches!(result, Err(MarketCoreError::UnknownToken(_))));
}

#[test]
fn test_create_listing_rejects_unknown_asset() {
    let market = setup_marketplace();

    let result = market.create_listing(
        &ACTORS.seller.identity,
        COLLECTION_ID,
        U256::from(9999u64),
        U256::from(1000u64),
        PaymentKind::Native,
    );
    assert!(matches!(result, Err(MarketCoreError::UnknownAsset(_))));
}

#[test]
fn test_cancel_listing_only_by_seller() {
    let market = setup_marketplace();
    let listing_id = market
        .create_listing(
            &ACTORS.seller.identity,
            COLLECTION_ID,
            U256::from(SELLER_ASSET_ID),
            U256::from(1000u64),
            PaymentKind::Native,
        )
        .unwrap();

    let result = market.cancel_listing(&ACTORS.mallory.identity, listing_id);
    assert!(matches!(result, Err(MarketCoreError::NotSeller(_))));
    assert!(market.get_listing(listing_id).unwrap().active);

    market
        .cancel_listing(&ACTORS.seller.identity, listing_id)
        .unwrap();
    assert!(!market.get_listing(listing_id).unwrap().active);
}

#[test]
fn test_cancel_is_terminal() {
    let market = setup_marketplace();
    let listing_id = market
        .create_listing(
            &ACTORS.seller.identity,
            COLLECTION_ID,
            U256::from(SELLER_ASSET_ID),
            U256::from(1000u64),
            PaymentKind::Native,
        )
        .unwrap();

    market
        .cancel_listing(&ACTORS.seller.identity, listing_id)
        .unwrap();

    // Erneutes Stornieren schlägt fehl; der Zustand bleibt terminal.
    let again = market.cancel_listing(&ACTORS.seller.identity, listing_id);
    assert!(matches!(
        again,
        Err(MarketCoreError::ListingInactive(id)) if id == listing_id
    ));
}

#[test]
fn test_cancel_unknown_listing() {
    let market = setup_marketplace();
    let result = market.cancel_listing(&ACTORS.seller.identity, 77);
    assert!(matches!(
        result,
        Err(MarketCoreError::ListingNotFound(77))
    ));
}

#[test]
fn test_listing_ids_are_never_reused() {
    let market = setup_marketplace();
    let first = market
        .create_listing(
            &ACTORS.seller.identity,
            COLLECTION_ID,
            U256::from(SELLER_ASSET_ID),
            U256::from(1000u64),
            PaymentKind::Native,
        )
        .unwrap();
    market
        .cancel_listing(&ACTORS.seller.identity, first)
        .unwrap();

    // Dasselbe Asset erneut listen: Die ID muss strikt weiterzählen.
    let second = market
        .create_listing(
            &ACTORS.seller.identity,
            COLLECTION_ID,
            U256::from(SELLER_ASSET_ID),
            U256::from(2000u64),
            PaymentKind::Fungible {
                token: TOKEN_ID.to_string(),
            },
        )
        .unwrap();
    assert_eq!(second, first + 1);

    // Beide Listings bleiben abfragbar; das stornierte terminal inaktiv.
    assert!(!market.get_listing(first).unwrap().active);
    assert!(market.get_listing(second).unwrap().active);
}

#[test]
fn test_get_listing_is_idempotent_after_cancel() {
    let market = setup_marketplace();
    let listing_id = market
        .create_listing(
            &ACTORS.seller.identity,
            COLLECTION_ID,
            U256::from(SELLER_ASSET_ID),
            U256::from(1000u64),
            PaymentKind::Native,
        )
        .unwrap();
    market
        .cancel_listing(&ACTORS.seller.identity, listing_id)
        .unwrap();

    let a = market.get_listing(listing_id).unwrap();
    let b = market.get_listing(listing_id).unwrap();
    assert_eq!(a, b, "Repeated queries must observe the same terminal state");
}
