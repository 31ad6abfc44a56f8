//! Domänentypen für Karten-Punkte (POIs).

use serde::{Deserialize, Serialize};

use super::spatial::GeoPos;

/// Feste Kategorie-Menge für Anzeige und Filter.
///
/// Punkte speichern ihre Kategorie wörtlich als String; unbekannte Werte
/// fallen für Anzeige und Filter auf `Other` zurück, bleiben im Datensatz
/// aber unverändert erhalten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Restaurant,
    Attraction,
    Shopping,
    Transport,
    Other,
}

impl Category {
    /// Alle Kategorien in Anzeige-Reihenfolge.
    pub const ALL: [Category; 5] = [
        Category::Restaurant,
        Category::Attraction,
        Category::Shopping,
        Category::Transport,
        Category::Other,
    ];

    /// Ordnet einen gespeicherten Kategorie-String der festen Menge zu.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "restaurant" => Category::Restaurant,
            "attraction" => Category::Attraction,
            "shopping" => Category::Shopping,
            "transport" => Category::Transport,
            _ => Category::Other,
        }
    }

    /// Kanonischer String-Wert für Speicherung und Vergleich.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Attraction => "attraction",
            Category::Shopping => "shopping",
            Category::Transport => "transport",
            Category::Other => "other",
        }
    }

    /// Anzeige-Icon der Kategorie.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Restaurant => "🍽️",
            Category::Attraction => "🏛️",
            Category::Shopping => "🛍️",
            Category::Transport => "🚇",
            Category::Other => "📍",
        }
    }
}

/// Eingebetteter Bild-Anhang eines Punktes (Base64-Payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Ursprünglicher Dateiname
    pub name: String,
    /// Base64-kodierter Bildinhalt
    pub data: String,
}

/// Roh-Anhang aus dem Formular, vor dem Encode-Schritt.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Ursprünglicher Dateiname
    pub name: String,
    /// Unkodierter Bildinhalt
    pub bytes: Vec<u8>,
}

/// Persistierter Karten-Punkt.
///
/// Die Feldnamen entsprechen dem JSON-Format des Backing-Stores und der
/// Export-Dateien; `category` bleibt wörtlich erhalten (siehe [`Category`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// Eindeutige Id (millisekunden-basiert, monoton vergeben)
    pub id: u64,
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
    /// Kategorie-String (wörtlich gespeichert)
    pub category: String,
    /// Kurzes Label
    pub tag: String,
    /// Freitext-Kommentar
    pub comment: String,
    /// Ersteller
    pub username: String,
    /// Menschenlesbarer Erstellungszeitpunkt, nach Erstellung unveränderlich
    pub timestamp: String,
    /// Bild-Anhänge; bei Edits wird nur angehängt, nie ersetzt
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<Picture>,
}

impl MapPoint {
    /// Kategorie-Projektion für Anzeige und Filter.
    pub fn category_kind(&self) -> Category {
        Category::from_stored(&self.category)
    }

    /// Geographische Position des Punktes.
    pub fn position(&self) -> GeoPos {
        GeoPos::new(self.lat, self.lng)
    }
}

/// Formulardaten für einen neuen Punkt; Id und Zeitstempel vergibt der
/// EntityStore.
#[derive(Debug, Clone)]
pub struct PointDraft {
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    pub tag: String,
    pub comment: String,
    /// Leer → Default-Benutzername
    pub username: String,
    /// Bereits kodierte Anhänge (Encode-Schritt liegt vor dem Append)
    pub pictures: Vec<Picture>,
}

/// Änderungs-Patch für einen bestehenden Punkt.
///
/// Kategorie/Tag/Kommentar ersetzen den Bestand, `new_pictures` werden an
/// die vorhandenen Anhänge angehängt.
#[derive(Debug, Clone, Default)]
pub struct PointPatch {
    pub category: String,
    pub tag: String,
    pub comment: String,
    pub new_pictures: Vec<Picture>,
}
