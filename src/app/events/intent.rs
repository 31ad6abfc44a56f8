use std::path::PathBuf;

use super::super::state::CategoryFilter;
use crate::core::{Attachment, GeoPos};

/// Formulardaten für einen neuen Punkt.
#[derive(Debug, Clone)]
pub struct PointForm {
    pub category: String,
    pub tag: String,
    pub comment: String,
    /// Leer → Default-Benutzername
    pub username: String,
    /// Roh-Anhänge; kodiert wird erst beim Submit
    pub attachments: Vec<Attachment>,
}

/// Formulardaten für die Bearbeitung eines bestehenden Punktes.
#[derive(Debug, Clone)]
pub struct PointEditForm {
    pub category: String,
    pub tag: String,
    pub comment: String,
    /// Neue Anhänge; werden an die bestehenden angehängt
    pub attachments: Vec<Attachment>,
}

/// Formulardaten für den Abschluss einer Routen-Konstruktion.
#[derive(Debug, Clone)]
pub struct RouteForm {
    pub name: String,
    pub description: String,
    /// Leer → Default-Benutzername
    pub username: String,
}

/// App-Intent-Events.
/// Intents sind Eingaben aus View/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärklick auf die Karte (Ort wählen bzw. Routen-Vertex setzen)
    MapClicked { coord: GeoPos },
    /// Sekundärklick auf die Karte (Routen-Vertex entfernen)
    MapSecondaryClicked { coord: GeoPos },
    /// Punkt-Formular abgeschickt
    PointFormSubmitted { form: PointForm },
    /// Punkt-Formular abgebrochen
    PointFormCancelled,
    /// Löschen eines Punktes angefordert (Bestätigung folgt)
    DeletePointRequested { id: u64 },
    /// Löschen einer Route angefordert (Bestätigung folgt)
    DeleteRouteRequested { id: u64 },
    /// Lösch-Bestätigung
    DeleteConfirmed,
    /// Lösch-Abbruch
    DeleteCancelled,
    /// Punkt-Editor öffnen
    EditPointRequested { id: u64 },
    /// Editor für einen einzelnen Routen-Vertex öffnen (nur Umbenennen)
    EditRoutePointRequested { route_id: u64, index: usize },
    /// Punkt-Editor abgeschickt
    PointEditSubmitted { edit: PointEditForm },
    /// Routen-Vertex-Umbenennung abgeschickt
    RoutePointRenameSubmitted { name: String },
    /// Editor geschlossen ohne Änderung
    EditCancelled,
    /// Routen-Konstruktion starten
    StartRouteRequested,
    /// Routen-Konstruktion abschließen und speichern
    FinishRouteRequested { form: RouteForm },
    /// Routen-Konstruktion verwerfen
    CancelRouteRequested,
    /// Sichtbarkeit einer Route umschalten
    ToggleRouteVisibilityRequested { id: u64 },
    /// Name/Beschreibung einer Route ändern
    RouteDetailsSubmitted {
        id: u64,
        name: String,
        description: String,
    },
    /// Kategorie-Filter ändern
    CategoryFilterChanged { filter: CategoryFilter },
    /// Export der Punkt-Kollektion anfordern
    ExportRequested,
    /// Import-Datei wurde gewählt
    ImportFileSelected { path: PathBuf },
    /// Kollektionen neu aus dem Backing-Store laden
    RefreshRequested,
    /// Blockierende Meldung bestätigt
    NoticeAcknowledged,
}
