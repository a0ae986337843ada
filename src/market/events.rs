//! # events.rs
//!
//! Das append-only Protokoll der Settlement-Ausgänge. Events erhalten beim
//! Anhängen eine strikt monoton steigende Sequenznummer (beginnend bei 1)
//! und werden nie verändert oder entfernt. Historien-Abfragen sind ein
//! endlicher, an jedem Punkt neu startbarer Scan über einen Sequenzbereich;
//! eine Hintergrund-Indizierung findet bewusst nicht statt.

use crate::models::event::SettlementEvent;
use crate::services::utils::get_current_timestamp;
use primitive_types::U256;

/// Das geordnete, append-only Protokoll aller Settlement-Events.
pub struct EventIndex {
    events: Vec<SettlementEvent>,
}

impl EventIndex {
    /// Erstellt ein leeres Protokoll.
    pub(crate) fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Hängt den Ausgang einer Abwicklung an und vergibt die nächste Sequenznummer.
    pub(crate) fn append(&mut self, listing_id: u64, buyer: &str, price: U256) -> SettlementEvent {
        let event = SettlementEvent {
            sequence: self.events.len() as u64 + 1,
            listing_id,
            buyer: buyer.to_string(),
            price,
            settled_at: get_current_timestamp(),
        };
        self.events.push(event.clone());
        event
    }

    /// Die Sequenznummer des zuletzt angehängten Events (0, falls leer).
    pub fn latest_sequence(&self) -> u64 {
        self.events.len() as u64
    }

    /// Liefert alle Events mit Sequenznummern im Bereich `[from, to]`.
    ///
    /// Der Bereich wird auf das vorhandene Protokoll geklemmt; ein leerer
    /// oder vollständig außerhalb liegender Bereich liefert eine leere Liste.
    /// Die Abfrage mutiert nichts und kann von jedem Punkt aus wiederholt werden.
    pub fn query(&self, from_sequence: u64, to_sequence: u64) -> Vec<SettlementEvent> {
        let from = from_sequence.max(1);
        let to = to_sequence.min(self.latest_sequence());
        if from > to {
            return Vec::new();
        }
        self.events[(from - 1) as usize..to as usize].to_vec()
    }
}
