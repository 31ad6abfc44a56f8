//! Zentrale Konfiguration des Annotation-Cores.
//!
//! `AnnotatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Hit-Schwelle in Metern: Klick innerhalb dieses Radius trifft einen
/// existierenden Punkt bzw. Routen-Vertex.
pub const HIT_THRESHOLD_METERS: f64 = 20.0;

// ── Punkte ──────────────────────────────────────────────────────────

/// Default-Benutzername, wenn das Formular keinen liefert.
pub const DEFAULT_USERNAME: &str = "Anonymous";

// ── Backing-Store ───────────────────────────────────────────────────

/// Slot-Name der Punkt-Kollektion (Dateiname ohne Endung).
pub const POINTS_SLOT: &str = "hkMapPoints";
/// Slot-Name der Routen-Kollektion.
pub const ROUTES_SLOT: &str = "hkMapRoutes";
/// Default-Basis-URL des Share-Servers.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/api";
/// Default-Port des Share-Servers.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Speichermodus des Backings — per Konfiguration wählbar, nie beide
/// gleichzeitig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// JSON-Slots im lokalen Datenverzeichnis
    #[default]
    Local,
    /// REST-Facade des Share-Servers (Punkte), Routen bleiben lokal
    Remote,
}

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `hk_map_annotator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorOptions {
    /// Hit-Schwelle für Punkt- und Vertex-Treffer in Metern
    pub hit_threshold_m: f64,
    /// Benutzername für neue Punkte/Routen, wenn das Formular keinen liefert
    pub default_username: String,
    /// Lokal oder über den Share-Server persistieren
    pub storage_mode: StorageMode,
    /// Basis-URL des Share-Servers (nur im Remote-Modus relevant)
    pub server_url: String,
    /// Port, auf dem die Server-Binary lauscht
    pub server_port: u16,
    /// Verzeichnis für die JSON-Slots und Export-Dateien
    pub data_dir: PathBuf,
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self {
            hit_threshold_m: HIT_THRESHOLD_METERS,
            default_username: DEFAULT_USERNAME.to_string(),
            storage_mode: StorageMode::Local,
            server_url: DEFAULT_SERVER_URL.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl AnnotatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("hk_map_annotator"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("hk_map_annotator.toml")
    }
}
