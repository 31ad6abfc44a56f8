//! Share-Server: zustandslose REST-Facade über einer JSON-Datei.
//!
//! Jeder Request liest die Datendatei komplett und schreibt sie komplett
//! zurück; es gibt kein Locking — konkurrierende Schreiber können sich
//! gegenseitig überschreiben (dokumentierte Limitierung des dünnen
//! Shares).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::core::{human_timestamp, MapPoint, Picture};

/// Facade über der geteilten Punkt-Datei.
#[derive(Debug, Clone)]
pub struct ShareServer {
    data_file: PathBuf,
}

impl ShareServer {
    /// Erstellt die Facade über der Datendatei.
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Liest die komplette Punkt-Liste; fehlende Datei zählt als leer.
    fn load_points(&self) -> anyhow::Result<Vec<MapPoint>> {
        let content = match std::fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Datendatei nicht lesbar: {}", self.data_file.display()))
            }
        };
        serde_json::from_str(&content).context("Datendatei fehlerhaft")
    }

    /// Schreibt die komplette Punkt-Liste zurück.
    fn save_points(&self, points: &[MapPoint]) -> anyhow::Result<()> {
        if let Some(parent) = self.data_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(points)?;
        std::fs::write(&self.data_file, content)
            .with_context(|| format!("Datendatei nicht schreibbar: {}", self.data_file.display()))
    }

    /// Baut den Router mit permissivem CORS.
    pub fn router(self) -> Router {
        Router::new()
            .route("/api/points", get(list_points).post(create_point))
            .route("/api/points/{id}", delete(delete_point))
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(self))
    }
}

/// POST-Body: Punkt-Felder ohne `id` und `timestamp` — beides vergibt
/// der Server.
#[derive(Debug, Deserialize)]
struct PointSubmission {
    lat: f64,
    lng: f64,
    category: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    pictures: Vec<Picture>,
}

type ApiError = (StatusCode, Json<Value>);

fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

async fn list_points(
    State(server): State<Arc<ShareServer>>,
) -> Result<Json<Vec<MapPoint>>, ApiError> {
    match server.load_points() {
        Ok(points) => Ok(Json(points)),
        Err(e) => {
            log::error!("Punkte nicht ladbar: {:#}", e);
            Err(internal_error("Failed to load points"))
        }
    }
}

async fn create_point(
    State(server): State<Arc<ShareServer>>,
    Json(body): Json<PointSubmission>,
) -> Result<Json<MapPoint>, ApiError> {
    let mut points = server.load_points().map_err(|e| {
        log::error!("Punkte nicht ladbar: {:#}", e);
        internal_error("Failed to add point")
    })?;

    // Id wie im lokalen Modus: Wanduhr-Millisekunden
    let point = MapPoint {
        id: Local::now().timestamp_millis().max(0) as u64,
        lat: body.lat,
        lng: body.lng,
        category: body.category,
        tag: body.tag,
        comment: body.comment,
        username: body.username,
        timestamp: human_timestamp(),
        pictures: body.pictures,
    };

    points.push(point.clone());
    server.save_points(&points).map_err(|e| {
        log::error!("Punkte nicht schreibbar: {:#}", e);
        internal_error("Failed to add point")
    })?;

    Ok(Json(point))
}

async fn delete_point(
    State(server): State<Arc<ShareServer>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    let mut points = server.load_points().map_err(|e| {
        log::error!("Punkte nicht ladbar: {:#}", e);
        internal_error("Failed to delete point")
    })?;

    points.retain(|p| p.id != id);
    server.save_points(&points).map_err(|e| {
        log::error!("Punkte nicht schreibbar: {:#}", e);
        internal_error("Failed to delete point")
    })?;

    Ok(Json(json!({ "success": true })))
}

/// Bindet den Listener und fährt die Facade hoch.
pub async fn serve(port: u16, data_file: PathBuf) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Port {port} nicht bindbar"))?;

    log::info!("HK Map Share Server läuft auf http://localhost:{port}");
    axum::serve(listener, ShareServer::new(data_file).router())
        .await
        .context("Server beendet mit Fehler")
}
