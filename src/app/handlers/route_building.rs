//! Handler für die Routen-Konstruktion (Start, Klicks, Abbruch).

use crate::app::AppState;
use crate::core::GeoPos;

/// Startet eine Konstruktions-Session.
pub fn start(state: &mut AppState) {
    if state.route_builder.start() {
        log::info!("Routen-Konstruktion gestartet");
    } else {
        log::debug!("Routen-Konstruktion läuft bereits");
    }
}

/// Fügt an der Klick-Position einen Vertex an (Waypoint-Snap, Duplikat
/// oder neuer Routen-Vertex).
pub fn add_vertex(state: &mut AppState, coord: GeoPos) {
    let threshold = state.options.hit_threshold_m;
    match state
        .route_builder
        .primary_click(coord, &state.entities, threshold)
    {
        Some(vertex) => log::debug!(
            "Vertex angefügt: {} ({:?})",
            vertex.name,
            vertex.kind
        ),
        None => log::warn!("Vertex-Klick ohne aktive Konstruktions-Session"),
    }
}

/// Entfernt den nächstgelegenen Vertex an der Klick-Position.
pub fn remove_vertex(state: &mut AppState, coord: GeoPos) {
    let threshold = state.options.hit_threshold_m;
    match state.route_builder.secondary_click(coord, threshold) {
        Some(vertex) => log::debug!("Vertex entfernt: {}", vertex.name),
        None => log::debug!("Kein Vertex innerhalb der Schwelle"),
    }
}

/// Verwirft die laufende Konstruktion samt Preview-Markern.
pub fn cancel(state: &mut AppState) {
    state.route_builder.cancel();
    log::info!("Routen-Konstruktion abgebrochen");
}
