use std::path::PathBuf;

use super::super::state::{CategoryFilter, DeleteTarget, EditTarget};
use super::intent::{PointEditForm, PointForm, RouteForm};
use crate::core::GeoPos;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Ort für einen neuen Punkt vormerken (Formular öffnet)
    SelectLocation { coord: GeoPos },
    /// Punkt aus dem Formular übernehmen und persistieren
    SubmitPoint { form: PointForm },
    /// Punkt-Formular schließen und Ort verwerfen
    CancelPointForm,
    /// Lösch-Bestätigung anfordern
    RequestDelete { target: DeleteTarget },
    /// Bestätigtes Löschen ausführen
    ExecuteDelete,
    /// Lösch-Anfrage verwerfen
    DismissDelete,
    /// Editor für Punkt oder Routen-Vertex öffnen
    OpenEditor { target: EditTarget },
    /// Punkt-Änderungen übernehmen
    ApplyPointEdit { edit: PointEditForm },
    /// Routen-Vertex umbenennen
    ApplyRoutePointRename { name: String },
    /// Editor schließen
    CloseEditor,
    /// Routen-Konstruktion starten
    StartRoute,
    /// Vertex an der Klick-Position anfügen
    AddRouteVertex { coord: GeoPos },
    /// Nächstgelegenen Vertex entfernen
    RemoveRouteVertex { coord: GeoPos },
    /// Konstruktion abschließen und Route speichern
    FinishRoute { form: RouteForm },
    /// Konstruktion verwerfen
    CancelRoute,
    /// Sichtbarkeit einer Route umschalten
    ToggleRouteVisibility { id: u64 },
    /// Name/Beschreibung einer Route ändern
    UpdateRouteDetails {
        id: u64,
        name: String,
        description: String,
    },
    /// Kategorie-Filter setzen
    SetCategoryFilter { filter: CategoryFilter },
    /// Punkt-Kollektion exportieren
    ExportPoints,
    /// Punkt-Dokument importieren und mergen
    ImportPoints { path: PathBuf },
    /// Kollektionen neu laden
    ReloadFromStore,
    /// Blockierende Meldung schließen
    AcknowledgeNotice,
}
