//! Application State — zentrale Datenhaltung.

use std::collections::HashSet;

use super::route_builder::RouteBuilder;
use super::CommandLog;
use crate::core::{Category, MapPoint};
use crate::shared::AnnotatorOptions;
use crate::store::{self, EntityStore, PointStore, RouteStore};

/// Aktiver Kategorie-Filter der Punkt-Liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Alle Punkte anzeigen
    #[default]
    All,
    /// Nur Punkte einer Kategorie anzeigen
    Category(Category),
}

impl CategoryFilter {
    /// Gibt `true` zurück, wenn der Punkt den Filter passiert.
    ///
    /// Verglichen wird die Kategorie-Projektion: unbekannte Strings landen
    /// wie in der Anzeige unter `Other`.
    pub fn matches(&self, point: &MapPoint) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => point.category_kind() == *category,
        }
    }
}

/// Ziel einer angeforderten Lösch-Operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Point(u64),
    Route(u64),
}

/// Ziel des geöffneten Editors — getaggte Variante statt
/// typ-inspizierter Mischwerte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Bestehender Punkt
    Point { id: u64 },
    /// Einzelner Vertex einer abgeschlossenen Route (nur Umbenennen)
    RoutePoint { route_id: u64, index: usize },
}

/// Blockierende Meldung; muss bestätigt werden, bevor weitere Intents
/// verarbeitet werden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    /// Erstellt eine Meldung.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// View-bezogener Anwendungszustand (Formulare, Dialoge, Meldungen).
#[derive(Debug, Default)]
pub struct UiState {
    /// Vorgemerkter Ort für einen neuen Punkt
    pub selected_location: Option<crate::core::GeoPos>,
    /// Ob das Punkt-Formular angezeigt wird
    pub show_point_form: bool,
    /// Offene Lösch-Anfrage (wartet auf Bestätigung)
    pub pending_delete: Option<DeleteTarget>,
    /// Ziel des geöffneten Editors
    pub edit_target: Option<EditTarget>,
    /// Blockierende Meldung
    pub notice: Option<Notice>,
    /// Temporäre, nicht-blockierende Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alles geschlossen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeigt eine blockierende Meldung an.
    pub fn block_with(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::new(message));
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Autoritative Kollektionen samt Persistenz
    pub entities: EntityStore,
    /// Zustandsmaschine der Routen-Konstruktion
    pub route_builder: RouteBuilder,
    /// Aktiver Kategorie-Filter
    pub filter: CategoryFilter,
    /// Sichtbar geschaltete Routen — transient, nicht persistiert,
    /// zurückgesetzt bei jedem Reload
    pub visible_route_ids: HashSet<u64>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: AnnotatorOptions,
}

impl AppState {
    /// Erstellt den App-State mit den konfigurierten Backends.
    pub fn new(options: AnnotatorOptions) -> Self {
        let (point_store, route_store) = store::open_backends(&options);
        Self::with_stores(options, point_store, route_store)
    }

    /// Erstellt den App-State mit explizit übergebenen Backends (Tests).
    pub fn with_stores(
        options: AnnotatorOptions,
        point_store: Box<dyn PointStore>,
        route_store: Box<dyn RouteStore>,
    ) -> Self {
        let entities = EntityStore::open(point_store, route_store, &options.default_username);
        Self {
            entities,
            route_builder: RouteBuilder::new(),
            filter: CategoryFilter::All,
            visible_route_ids: HashSet::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Reine Projektion der Punkt-Liste durch den aktiven Filter;
    /// mutiert den Bestand nie.
    pub fn list_visible_points(&self) -> Vec<&MapPoint> {
        self.entities
            .points()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Gibt `true` zurück, wenn die Route aktuell sichtbar geschaltet ist.
    pub fn is_route_visible(&self, id: u64) -> bool {
        self.visible_route_ids.contains(&id)
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.entities.point_count()
    }

    /// Gibt die Anzahl der Routen zurück (für UI-Anzeige).
    pub fn route_count(&self) -> usize {
        self.entities.route_count()
    }
}
