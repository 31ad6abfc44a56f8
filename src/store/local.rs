//! Lokales Backend: JSON-Slots im Datenverzeichnis.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{PointStore, RouteStore};
use crate::core::{MapPoint, Route};
use crate::shared::options::{POINTS_SLOT, ROUTES_SLOT};

/// Key-Value-Slots auf der Platte: eine JSON-Datei pro Kollektion
/// (`hkMapPoints.json`, `hkMapRoutes.json`), jeweils mit
/// Ganz-Kollektion-Lese/Ersetz-Semantik.
#[derive(Debug, Clone)]
pub struct LocalStore {
    points_path: PathBuf,
    routes_path: PathBuf,
}

impl LocalStore {
    /// Erstellt einen Store über dem Datenverzeichnis.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            points_path: data_dir.join(format!("{POINTS_SLOT}.json")),
            routes_path: data_dir.join(format!("{ROUTES_SLOT}.json")),
        }
    }

    /// Liest einen Slot; fehlende Datei zählt als leere Kollektion.
    fn read_slot<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Slot nicht lesbar: {}", path.display()))
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("Slot-Inhalt fehlerhaft: {}", path.display()))
    }

    /// Schreibt einen Slot komplett neu (legt das Verzeichnis bei Bedarf an).
    fn write_slot<T: serde::Serialize>(path: &Path, records: &[T]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Datenverzeichnis nicht anlegbar: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(path, content)
            .with_context(|| format!("Slot nicht schreibbar: {}", path.display()))
    }
}

impl PointStore for LocalStore {
    fn load(&self) -> anyhow::Result<Vec<MapPoint>> {
        Self::read_slot(&self.points_path)
    }

    fn replace_all(&self, points: &[MapPoint]) -> anyhow::Result<()> {
        Self::write_slot(&self.points_path, points)
    }
}

impl RouteStore for LocalStore {
    fn load(&self) -> anyhow::Result<Vec<Route>> {
        Self::read_slot(&self.routes_path)
    }

    fn replace_all(&self, routes: &[Route]) -> anyhow::Result<()> {
        Self::write_slot(&self.routes_path, routes)
    }
}
