//! # utils.rs
//!
//! Enthält allgemeine Hilfsfunktionen, z.B. für Zeitstempel.

use chrono::Utc;

/// Returns the current timestamp in ISO 8601 format in UTC with microsecond precision.
///
/// # Returns
///
/// A string representing the timestamp in ISO 8601 format (YYYY-MM-DDTHH:MM:SS.ffffffZ).
pub fn get_current_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
