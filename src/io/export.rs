//! Export der Punkt-Kollektion als JSON-Dokument.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;

use crate::core::MapPoint;

/// Serialisiert das wörtliche Punkt-Array, pretty-printed.
pub fn export_points(points: &[MapPoint]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(points).context("Punkt-Array nicht serialisierbar")
}

/// Dateiname des Exports, benannt nach dem Datum.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("hk-map-points-{}.json", date.format("%Y-%m-%d"))
}

/// Schreibt den Export in das Zielverzeichnis und gibt den Pfad zurück.
pub fn write_export(points: &[MapPoint], dir: &Path) -> anyhow::Result<PathBuf> {
    let content = export_points(points)?;
    let path = dir.join(export_file_name(chrono::Local::now().date_naive()));

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Export-Verzeichnis nicht anlegbar: {}", dir.display()))?;
    std::fs::write(&path, content)
        .with_context(|| format!("Export nicht schreibbar: {}", path.display()))?;

    log::info!("Export geschrieben: {}", path.display());
    Ok(path)
}
