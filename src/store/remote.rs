//! Remote-Backend: REST-Client gegen die Share-Server-Facade.

use anyhow::Context;
use serde_json::Value;

use super::{LocalStore, PointStore};
use crate::core::MapPoint;

/// Punkt-Backend über die REST-Facade (`/api/points`).
///
/// Alle Aufrufe sind synchron-äquivalent: genau ein Versuch, der Aufrufer
/// wartet auf das Ergebnis. Lese-Fehler degradieren zum lokalen Cache;
/// Schreibfehler gehen an den EntityStore, der die In-Memory-Mutation
/// zurückrollt.
pub struct RemoteStore {
    base_url: String,
    client: reqwest::blocking::Client,
    /// Lokaler Cache als Lese-Fallback bei Netzfehlern
    fallback: LocalStore,
}

impl RemoteStore {
    /// Erstellt einen Client gegen die Basis-URL (z.B.
    /// `http://localhost:3000/api`).
    pub fn new(base_url: &str, fallback: LocalStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            fallback,
        }
    }

    fn points_url(&self) -> String {
        format!("{}/points", self.base_url)
    }

    /// POST-Body: Punkt-Felder ohne `id` und `timestamp` — beides vergibt
    /// der Server.
    fn submission_body(point: &MapPoint) -> anyhow::Result<Value> {
        let mut value = serde_json::to_value(point)?;
        if let Some(object) = value.as_object_mut() {
            object.remove("id");
            object.remove("timestamp");
        }
        Ok(value)
    }
}

impl PointStore for RemoteStore {
    fn load(&self) -> anyhow::Result<Vec<MapPoint>> {
        let response = self
            .client
            .get(self.points_url())
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<Vec<MapPoint>>());

        match response {
            Ok(points) => Ok(points),
            Err(e) => {
                log::warn!("Server nicht erreichbar, nutze lokalen Cache: {}", e);
                self.fallback.load()
            }
        }
    }

    /// Die REST-Facade kennt kein Ganz-Kollektion-Ersetzen; der Aufruf
    /// wird übersprungen. Importe und Merges wirken im Remote-Modus nur
    /// auf den lokalen Bestand.
    fn replace_all(&self, _points: &[MapPoint]) -> anyhow::Result<()> {
        log::debug!("replace_all im Remote-Modus übersprungen");
        Ok(())
    }

    fn store_new(&self, point: &MapPoint, _collection: &[MapPoint]) -> anyhow::Result<MapPoint> {
        let body = Self::submission_body(point)?;
        let stored = self
            .client
            .post(self.points_url())
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<MapPoint>())
            .context("Punkt konnte nicht zum Server gespeichert werden")?;
        Ok(stored)
    }

    /// Die REST-Facade hat keinen Update-Endpunkt; Änderungen bleiben bis
    /// zum nächsten Reload lokal.
    fn store_update(&self, point: &MapPoint, _collection: &[MapPoint]) -> anyhow::Result<()> {
        log::warn!("Server kennt kein Update, Punkt {} bleibt lokal geändert", point.id);
        Ok(())
    }

    fn delete(&self, id: u64, _collection: &[MapPoint]) -> anyhow::Result<()> {
        self.client
            .delete(format!("{}/{}", self.points_url(), id))
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Punkt {id} konnte nicht auf dem Server gelöscht werden"))?;
        Ok(())
    }
}
