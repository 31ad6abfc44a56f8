//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.
//! Benutzer-sichtbare Fehlschläge landen als blockierende Meldung im
//! UiState; nur Degradierungen werden geloggt.

pub mod import_export;
pub mod points;
pub mod route_building;
pub mod routes;
pub mod view;
