//! Id-Vergabe und Zeitstempel.

use chrono::Local;

/// Vergibt eindeutige, millisekunden-basierte Ids.
///
/// Die Id-Form bleibt zeitabgeleitet (Wanduhr-Millisekunden), Kollisionen
/// innerhalb desselben Ticks werden aber durch einen monotonen Bump auf
/// `last + 1` ausgeschlossen.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Erstellt einen Generator ohne Vorgeschichte.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Übernimmt bereits vergebene Ids (nach dem Laden der Kollektionen),
    /// damit neue Ids garantiert darüber liegen.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// Vergibt die nächste eindeutige Id.
    pub fn next(&mut self) -> u64 {
        let now_ms = Local::now().timestamp_millis().max(0) as u64;
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}

/// Menschenlesbarer Erstellungszeitpunkt in Lokalzeit.
pub fn human_timestamp() -> String {
    Local::now().format("%-d.%-m.%Y, %H:%M:%S").to_string()
}
