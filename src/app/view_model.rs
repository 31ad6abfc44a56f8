//! Baut den View-Snapshot aus dem aktuellen AppState.
//!
//! Die View rendert ausschließlich aus diesem Snapshot; sie mutiert nie
//! direkt Entitäten.

use super::route_builder::PreviewMarkerView;
use super::state::{AppState, CategoryFilter};
use crate::core::{GeoPos, RoutePointKind};

/// Sichtbarer Punkt samt Anzeige-Daten.
#[derive(Debug, Clone, PartialEq)]
pub struct PointView {
    pub id: u64,
    pub pos: GeoPos,
    /// Kategorie-Icon (Fallback 📍 bei unbekannter Kategorie)
    pub icon: &'static str,
    pub tag: String,
    pub comment: String,
    pub username: String,
    pub timestamp: String,
    pub picture_count: usize,
}

/// Marker eines sichtbaren Routen-Vertex (nur Nicht-Waypoints —
/// Waypoints sind bereits als eigene Punkt-Marker sichtbar).
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMarkerView {
    pub index: usize,
    pub pos: GeoPos,
    pub name: String,
}

/// Routen-Zeile samt abgeleiteten Visuals.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub username: String,
    pub visible: bool,
    /// Polyline-Koordinaten; leer solange die Route unsichtbar ist
    pub polyline: Vec<GeoPos>,
    /// Vertex-Marker; leer solange die Route unsichtbar ist
    pub vertex_markers: Vec<RouteMarkerView>,
}

/// Live-Vorschau der laufenden Routen-Konstruktion.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildPreviewView {
    pub polyline: Vec<GeoPos>,
    pub markers: Vec<PreviewMarkerView>,
}

/// Kompletter View-Snapshot eines Frames.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    /// Punkte nach Filter-Projektion, Reihenfolge erhalten
    pub points: Vec<PointView>,
    /// Anzahl der gefilterten Punkte (Sidebar-Zähler)
    pub point_count: usize,
    pub routes: Vec<RouteView>,
    /// Vorschau, nur während einer Konstruktions-Session
    pub build_preview: Option<BuildPreviewView>,
    /// Blockierende Meldung
    pub notice: Option<String>,
    /// Nicht-blockierende Statusnachricht
    pub status_message: Option<String>,
    pub filter: CategoryFilter,
}

/// Baut den Snapshot aus dem aktuellen Zustand.
pub fn build(state: &AppState) -> ViewSnapshot {
    let points: Vec<PointView> = state
        .list_visible_points()
        .into_iter()
        .map(|p| PointView {
            id: p.id,
            pos: p.position(),
            icon: p.category_kind().icon(),
            tag: p.tag.clone(),
            comment: p.comment.clone(),
            username: p.username.clone(),
            timestamp: p.timestamp.clone(),
            picture_count: p.pictures.len(),
        })
        .collect();

    let routes = state
        .entities
        .routes()
        .map(|route| {
            let visible = state.is_route_visible(route.id);
            let polyline = if visible { route.polyline() } else { Vec::new() };
            let vertex_markers = if visible {
                route
                    .points
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.kind != RoutePointKind::Waypoint)
                    .map(|(index, p)| RouteMarkerView {
                        index,
                        pos: p.position(),
                        name: p.name.clone(),
                    })
                    .collect()
            } else {
                Vec::new()
            };

            RouteView {
                id: route.id,
                name: route.name.clone(),
                description: route.description.clone(),
                username: route.username.clone(),
                visible,
                polyline,
                vertex_markers,
            }
        })
        .collect();

    let build_preview = state.route_builder.is_building().then(|| BuildPreviewView {
        polyline: state.route_builder.polyline(),
        markers: state.route_builder.preview_markers(),
    });

    ViewSnapshot {
        point_count: points.len(),
        points,
        routes,
        build_preview,
        notice: state.ui.notice.as_ref().map(|n| n.message.clone()),
        status_message: state.ui.status_message.clone(),
        filter: state.filter,
    }
}
