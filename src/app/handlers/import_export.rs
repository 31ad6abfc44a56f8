//! Handler für Export und Import der Punkt-Kollektion.

use std::path::Path;

use crate::app::AppState;
use crate::core::MapPoint;
use crate::io;

/// Exportiert das wörtliche Punkt-Array in das Datenverzeichnis.
pub fn export_points(state: &mut AppState) {
    let points: Vec<MapPoint> = state.entities.points().cloned().collect();

    match io::write_export(&points, &state.options.data_dir) {
        Ok(path) => {
            state.ui.status_message = Some(format!("Export geschrieben: {}", path.display()));
        }
        Err(e) => {
            log::error!("Export fehlgeschlagen: {:#}", e);
            state.ui.block_with(format!("Export fehlgeschlagen: {e}"));
        }
    }
}

/// Importiert ein Punkt-Dokument und vereinigt es mit dem Bestand.
///
/// Format-Fehler und Persistenzfehler blockieren als Meldung; auch das
/// Import-Ergebnis wird als zu bestätigende Meldung gezeigt.
pub fn import_points(state: &mut AppState, path: &Path) {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Import-Datei nicht lesbar: {}: {}", path.display(), e);
            state.ui.block_with("Import-Datei nicht lesbar");
            return;
        }
    };

    let incoming = match io::parse_points_document(&text) {
        Ok(incoming) => incoming,
        Err(e) => {
            state.ui.block_with(e.to_string());
            return;
        }
    };

    match state.entities.import_points(incoming) {
        Ok(added) => {
            log::info!("Import abgeschlossen: {} neue Punkte", added);
            state.ui.block_with(format!("{added} neue Punkte importiert"));
        }
        Err(e) => state.ui.block_with(e.to_string()),
    }
}
