//! # src/error.rs
//!
//! Definiert den zentralen Fehlertyp für die gesamte market_core-Bibliothek.
//! Verwendet `thiserror` zur einfachen Erstellung von aussagekräftigen Fehlern
//! und zur automatischen Konvertierung von untergeordneten Fehlertypen.
//!
//! Alle Fehler sind terminal: Kein Aufruf darf intern automatisch wiederholt
//! werden, da das erneute Ausführen einer zahlungsbewegenden Operation eine
//! doppelte Ausführung riskieren würde. Der Aufrufer erhält immer eine
//! spezifische Fehlerart, nie einen generischen Fehlschlag.

use crate::services::crypto_utils::IdentityError;
use primitive_types::U256;
use thiserror::Error;

/// Der zentrale Fehlertyp für alle Operationen in der `market_core`-Bibliothek.
///
/// Dieser Enum fasst die Fehler aller Module (Registry, Settlement, Voucher,
/// Krypto, Serialisierung) an einem Ort zusammen und bildet die einheitliche
/// Fehler-API der Bibliothek.
#[derive(Error, Debug)]
pub enum MarketCoreError {
    /// Die Voucher-Signatur ist ungültig, beschädigt oder stammt nicht vom
    /// designierten Autorisierer der Collection.
    #[error("Invalid voucher signature or signer is not the collection authorizer.")]
    InvalidSignature,

    /// Das Asset wurde bereits gemintet; der Voucher ist damit dauerhaft verbraucht.
    #[error("Asset {0} has already been minted; the voucher is spent.")]
    AlreadyMinted(U256),

    /// Der angebotene bzw. beigefügte Betrag deckt den geforderten Preis nicht.
    #[error("Insufficient payment: required {required}, provided {provided}.")]
    InsufficientPayment { required: U256, provided: U256 },

    /// Die dem Marktplatz eingeräumte Allowance reicht für den Kaufpreis nicht aus.
    #[error("Insufficient allowance: required {required}, available {available}.")]
    InsufficientAllowance { required: U256, available: U256 },

    /// Das Listing wurde nie angelegt.
    #[error("Listing {0} does not exist.")]
    ListingNotFound(u64),

    /// Das Listing existiert, ist aber bereits verkauft oder storniert worden.
    #[error("Listing {0} is no longer active.")]
    ListingInactive(u64),

    /// Der Aufrufer (oder der hinterlegte Verkäufer) ist nicht der aktuelle
    /// Eigentümer des Assets.
    #[error("'{0}' is not the current owner of the asset.")]
    NotOwner(String),

    /// Nur der Verkäufer darf sein eigenes Listing stornieren.
    #[error("'{0}' is not the seller of this listing.")]
    NotSeller(String),

    /// Listing-Preise müssen strikt größer als null sein.
    #[error("Listing price must be greater than zero.")]
    InvalidPrice,

    /// Die Zahlungsart des Kaufs passt nicht zur Zahlungsart des Listings
    /// (z.B. native Zahlung für ein Fungible-Token-Listing).
    #[error("Payment method does not match the listing's payment kind.")]
    PaymentKindMismatch,

    /// Das angefragte Asset existiert in dieser Collection nicht.
    #[error("Asset {0} does not exist in this collection.")]
    UnknownAsset(U256),

    /// Die angegebene Asset-Collection ist im Ledger nicht registriert.
    #[error("Unknown asset collection '{0}'.")]
    UnknownCollection(String),

    /// Der angegebene Fungible Token ist im Ledger nicht registriert.
    #[error("Unknown fungible token '{0}'.")]
    UnknownToken(String),

    /// Beim Provisionieren: Die Collection-Identität ist bereits vergeben.
    #[error("Asset collection '{0}' is already registered.")]
    CollectionAlreadyRegistered(String),

    /// Beim Provisionieren: Die Token-Identität ist bereits vergeben.
    #[error("Fungible token '{0}' is already registered.")]
    TokenAlreadyRegistered(String),

    /// Unter dem logischen Namen ist kein deployter Vertrag hinterlegt.
    #[error("No deployed contract registered under the name '{0}'.")]
    UnknownContract(String),

    /// Ein Betrag hat mehr Nachkommastellen, als die Basiseinheit darstellen kann.
    #[error("Amount precision exceeded: allowed {allowed} decimal places, found {found}.")]
    AmountPrecisionExceeded { allowed: u32, found: u32 },

    /// Ein Betrag liegt außerhalb des darstellbaren Bereichs (z.B. negativ).
    #[error("Amount is out of the representable range: {0}")]
    AmountOutOfRange(String),

    /// Ein Fehler bei der Verarbeitung einer Identität (did:key) oder eines Public Keys.
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Ein Fehler bei der Verarbeitung von JSON (Serialisierung oder Deserialisierung).
    #[error("JSON processing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ein Fehler bei der Konvertierung oder Berechnung von Beträgen.
    #[error("Amount conversion error: {0}")]
    AmountConversion(#[from] rust_decimal::Error),

    /// Ein Fehler bei I/O-Operationen (z.B. beim Laden eines Deployment-Records).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
