//! # market_core
//!
//! Die Kernlogik eines dezentralen Marktplatzes für nicht-fungible Assets.
//! Diese Bibliothek stellt zwei Erwerbspfade bereit: das "Lazy Minting" über
//! off-chain signierte Voucher sowie das direkte Listen und Kaufen bereits
//! geminteter Assets gegen native Währung oder einen Fungible Token.
//!
//! Der gesamte autoritative Zustand (Listings, Allowances, Asset-Eigentum)
//! lebt in einem einzigen, global geordneten Ledger (`Marketplace`). Alle
//! mutierenden Operationen werden dort total serialisiert und wirken
//! atomar: Entweder sind alle Effekte einer Abwicklung sichtbar oder keiner.

// Deklariert die Hauptmodule der Bibliothek und macht sie öffentlich.
pub mod error;
pub mod market;
pub mod models;
pub mod services;

// Re-exportiert die wichtigsten öffentlichen Typen für eine einfachere Nutzung.
// Anstatt `market_lib::models::listing::Listing` können Benutzer nun
// `market_lib::Listing` schreiben.

// Fehler
pub use error::MarketCoreError;

// Modelle
pub use models::deployment::DeploymentRecord;
pub use models::event::SettlementEvent;
pub use models::listing::{Listing, Payment, PaymentKind};
pub use models::voucher::SignedVoucher;

// Services
pub use services::amounts;
pub use services::codec;
pub use services::crypto_utils;
pub use services::signer::create_signed_voucher;
pub use services::verifier::{recover_signer, verify_voucher};

// Ledger
pub use market::Marketplace;

// Der 256-Bit-Integer-Typ, in dem alle On-Ledger-Beträge und Asset-IDs geführt werden.
pub use primitive_types::U256;
