//! Route-Builder: Zustandsmaschine der interaktiven Routen-Konstruktion.
//!
//! `Idle → Building → Idle`. Pro View-Instanz existiert höchstens eine
//! Session; `start()` während Building ist ein idempotentes No-op.
//! Preview-Marker leben ausschließlich in der Session und werden beim
//! Abschluss oder Abbruch komplett zerstört.

use indexmap::IndexMap;

use crate::core::{
    AnnotationError, GeoPos, RoutePoint, RoutePointKind, MIN_ROUTE_POINTS,
};
use crate::store::EntityStore;

/// Vertex in Konstruktion, mit session-stabiler Id.
///
/// Die stabile Id entkoppelt die Marker-Zuordnung von der Position in der
/// Sequenz: der Anzeige-Index wird aus der Sequenz abgeleitet statt in
/// Markern mitgeführt und bei Entfernungen dekrementiert.
#[derive(Debug, Clone)]
struct BuildVertex {
    vertex_id: u64,
    point: RoutePoint,
}

/// Abgeleitete Sicht auf einen Preview-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewMarkerView {
    /// Aktueller Index des Vertex in der Sequenz
    pub index: usize,
    /// Transienter Marker-Handle
    pub handle: u64,
    /// Position des Vertex
    pub pos: GeoPos,
    /// Vertex-Name
    pub name: String,
}

/// Transiente Konstruktions-Session; wird nie persistiert.
#[derive(Debug, Default)]
struct RouteBuildSession {
    vertices: Vec<BuildVertex>,
    /// vertex_id → Marker-Handle; Einträge nur für neu gesetzte Vertices
    markers: IndexMap<u64, u64>,
    next_vertex_id: u64,
    next_marker_handle: u64,
}

impl RouteBuildSession {
    fn push_vertex(&mut self, point: RoutePoint, with_marker: bool) {
        let vertex_id = self.next_vertex_id;
        self.next_vertex_id += 1;

        if with_marker {
            let handle = self.next_marker_handle;
            self.next_marker_handle += 1;
            self.markers.insert(vertex_id, handle);
        }

        self.vertices.push(BuildVertex { vertex_id, point });
    }

    /// Nächstgelegener Vertex innerhalb der Schwelle, optional auf eine
    /// Vertex-Art eingeschränkt.
    fn nearest_vertex(
        &self,
        coord: GeoPos,
        threshold_m: f64,
        kind: Option<RoutePointKind>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, vertex) in self.vertices.iter().enumerate() {
            if let Some(kind) = kind {
                if vertex.point.kind != kind {
                    continue;
                }
            }
            let distance = vertex.point.position().distance_m(&coord);
            if distance < threshold_m && best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Zustandsmaschine der Routen-Konstruktion.
#[derive(Debug, Default)]
pub struct RouteBuilder {
    session: Option<RouteBuildSession>,
}

impl RouteBuilder {
    /// Erstellt einen Builder im Idle-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn eine Session aktiv ist.
    pub fn is_building(&self) -> bool {
        self.session.is_some()
    }

    /// Startet eine neue Session.
    ///
    /// Gibt `false` zurück, wenn bereits eine Session läuft — der Aufruf
    /// ist dann ein No-op statt einer zweiten Session.
    pub fn start(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(RouteBuildSession::default());
        true
    }

    /// Verarbeitet einen Primärklick während der Konstruktion.
    ///
    /// Auflösungsreihenfolge:
    /// 1. Existierender Punkt innerhalb der Schwelle → Waypoint-Vertex.
    /// 2. Bereits gesetzter Routen-Vertex innerhalb der Schwelle →
    ///    Duplikat-Referenz ans Ende (ermöglicht Rundkurse).
    /// 3. Sonst neuer Vertex `"Route Point N"` mit genau einem neuen
    ///    Preview-Marker.
    ///
    /// Gibt den angefügten Vertex zurück, `None` außerhalb einer Session.
    pub fn primary_click(
        &mut self,
        coord: GeoPos,
        entities: &EntityStore,
        threshold_m: f64,
    ) -> Option<RoutePoint> {
        let snapped = entities
            .hit_test_points(coord, threshold_m)
            .map(RoutePoint::waypoint);
        let session = self.session.as_mut()?;

        if let Some(waypoint) = snapped {
            session.push_vertex(waypoint, false);
        } else if let Some(index) =
            session.nearest_vertex(coord, threshold_m, Some(RoutePointKind::Routepoint))
        {
            // Duplikat-Referenz: gleiche Koordinaten und Name, kein Marker
            let duplicate = session.vertices[index].point.clone();
            session.push_vertex(duplicate, false);
        } else {
            let position = session.vertices.len() + 1;
            session.push_vertex(RoutePoint::authored(coord, position), true);
        }

        session.vertices.last().map(|v| v.point.clone())
    }

    /// Verarbeitet einen Sekundärklick: entfernt den nächstgelegenen
    /// Vertex innerhalb der Schwelle samt zugehörigem Preview-Marker.
    ///
    /// No-op, wenn kein Vertex in Reichweite liegt. Die Indizes der
    /// verbleibenden Marker rücken automatisch nach, weil sie aus der
    /// Sequenz abgeleitet werden.
    pub fn secondary_click(&mut self, coord: GeoPos, threshold_m: f64) -> Option<RoutePoint> {
        let session = self.session.as_mut()?;
        let index = session.nearest_vertex(coord, threshold_m, None)?;

        let removed = session.vertices.remove(index);
        session.markers.shift_remove(&removed.vertex_id);
        Some(removed.point)
    }

    /// Gibt die Anzahl der Vertices der aktiven Session zurück.
    pub fn vertex_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.vertices.len())
    }

    /// Vertices der aktiven Session in Einfüge-Reihenfolge.
    pub fn vertices(&self) -> impl Iterator<Item = &RoutePoint> {
        self.session
            .iter()
            .flat_map(|s| s.vertices.iter().map(|v| &v.point))
    }

    /// Polyline über alle aktuellen Vertex-Koordinaten.
    pub fn polyline(&self) -> Vec<GeoPos> {
        self.vertices().map(|p| p.position()).collect()
    }

    /// Preview-Marker mit aus der Sequenz abgeleiteten Indizes.
    pub fn preview_markers(&self) -> Vec<PreviewMarkerView> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };

        session
            .vertices
            .iter()
            .enumerate()
            .filter_map(|(index, vertex)| {
                session.markers.get(&vertex.vertex_id).map(|&handle| PreviewMarkerView {
                    index,
                    handle,
                    pos: vertex.point.position(),
                    name: vertex.point.name.clone(),
                })
            })
            .collect()
    }

    /// Validiert die Session und liefert die Vertex-Sequenz für
    /// `EntityStore::add_route`.
    ///
    /// Schlägt mit `InvalidRoute` fehl, solange weniger als zwei Vertices
    /// gesetzt sind; die Session bleibt dann bestehen. Erst `complete()`
    /// zerstört Session und Preview-Marker.
    pub fn finish(&self) -> Result<Vec<RoutePoint>, AnnotationError> {
        let len = self.vertex_count();
        if len < MIN_ROUTE_POINTS {
            return Err(AnnotationError::InvalidRoute { len });
        }
        Ok(self.vertices().cloned().collect())
    }

    /// Zerstört die Session nach erfolgreichem Speichern.
    pub fn complete(&mut self) {
        self.session = None;
    }

    /// Verwirft Vertices und Preview-Marker bedingungslos.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
