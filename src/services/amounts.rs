// src/services/amounts.rs

//! # amounts.rs
//!
//! Enthält zentrale Hilfsfunktionen zur konsistenten Validierung und
//! Konvertierung von Beträgen zwischen der menschenlesbaren Denomination
//! (z.B. "1.5") und der On-Ledger-Basiseinheit (256-Bit-Integer mit
//! 18 Nachkommastellen). Die hier definierten Funktionen stellen sicher,
//! dass die Skalierung deterministisch ist und über die Granularität der
//! Basiseinheit hinaus kein Rundungsverlust auftritt.

use crate::error::MarketCoreError;
use primitive_types::U256;
use rust_decimal::Decimal;

/// Die Anzahl der Nachkommastellen der Basiseinheit (1 Einheit = 10^18 Basiseinheiten).
pub const BASE_UNIT_DECIMALS: u32 = 18;

/// **Prinzip: Strenge Validierung am Eingang.**
///
/// Stellt sicher, dass ein `Decimal`-Wert die von der Basiseinheit darstellbare
/// Anzahl an Nachkommastellen nicht überschreitet. Schlägt fehl, wenn die
/// Präzision der Eingabe zu hoch ist.
///
/// # Arguments
/// * `amount` - Der zu prüfende `Decimal`-Wert.
/// * `allowed_places` - Die maximal erlaubte Anzahl an Nachkommastellen.
///
/// # Returns
/// Ein `Result`, das bei Erfolg leer ist oder einen `MarketCoreError` enthält.
pub fn validate_precision(amount: &Decimal, allowed_places: u32) -> Result<(), MarketCoreError> {
    // `normalize` entfernt rein darstellungsbedingte Nullen ("1.50" hat
    // logisch nur eine relevante Nachkommastelle).
    if amount.normalize().scale() > allowed_places {
        Err(MarketCoreError::AmountPrecisionExceeded {
            allowed: allowed_places,
            found: amount.normalize().scale(),
        })
    } else {
        Ok(())
    }
}

/// Konvertiert einen menschenlesbaren Betrag deterministisch in die Basiseinheit.
///
/// Beispiel: `1.5` → `1_500_000_000_000_000_000`. Negative Beträge und
/// Beträge mit mehr als [`BASE_UNIT_DECIMALS`] Nachkommastellen werden
/// abgelehnt; jenseits der Basiseinheit-Granularität geht nie Präzision verloren.
///
/// # Arguments
/// * `amount` - Der zu konvertierende Betrag in der Anzeige-Denomination.
///
/// # Returns
/// Ein `Result` mit dem Betrag in der Basiseinheit als `U256`.
pub fn to_base_units(amount: &Decimal) -> Result<U256, MarketCoreError> {
    if amount.is_sign_negative() {
        return Err(MarketCoreError::AmountOutOfRange(format!(
            "amount must not be negative: {}",
            amount
        )));
    }
    validate_precision(amount, BASE_UNIT_DECIMALS)?;

    // Ganzzahl-Pfad statt Decimal-Multiplikation: mantissa * 10^(18 - scale)
    // vermeidet einen Decimal-Überlauf bei großen Beträgen.
    let normalized = amount.normalize();
    let mantissa = normalized.mantissa();
    debug_assert!(mantissa >= 0, "sign was checked above");
    let remaining_places = BASE_UNIT_DECIMALS - normalized.scale();

    let base = U256::from(mantissa as u128);
    let factor = U256::from(10u64)
        .checked_pow(U256::from(remaining_places))
        .ok_or_else(|| MarketCoreError::AmountOutOfRange("scaling factor overflow".to_string()))?;
    base.checked_mul(factor)
        .ok_or_else(|| MarketCoreError::AmountOutOfRange(format!("amount too large: {}", amount)))
}

/// Konvertiert einen Betrag aus der Basiseinheit zurück in die Anzeige-Denomination.
///
/// Gegenstück zu [`to_base_units`], z.B. für CLI-Ausgaben. Beträge, die den
/// darstellbaren Bereich von `Decimal` übersteigen, werden abgelehnt.
///
/// # Arguments
/// * `amount` - Der Betrag in der Basiseinheit.
///
/// # Returns
/// Ein `Result` mit dem normalisierten `Decimal`-Wert.
pub fn from_base_units(amount: &U256) -> Result<Decimal, MarketCoreError> {
    if amount.bits() > 127 {
        return Err(MarketCoreError::AmountOutOfRange(format!(
            "amount exceeds the displayable range: {}",
            amount
        )));
    }
    let raw = amount.as_u128() as i128;
    let decimal = Decimal::try_from_i128_with_scale(raw, BASE_UNIT_DECIMALS)?;
    Ok(decimal.normalize())
}
