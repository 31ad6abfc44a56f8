//! Die zentrale In-Memory-Kollektion für Punkte und Routen.

use indexmap::IndexMap;

use super::point::MapPoint;
use super::route::Route;
use super::spatial::{GeoPos, SpatialIndex, SpatialMatch};

/// Geordnete, autoritative Kollektionen aller Annotationen.
///
/// `IndexMap` liefert O(1)-Zugriff per Id und erhält gleichzeitig die
/// Einfüge-Reihenfolge — Export und Merge bleiben damit deterministisch.
/// Der Spatial-Index wird bei jeder Punkt-Mutation neu aufgebaut.
#[derive(Debug, Clone, Default)]
pub struct AnnotationMap {
    points: IndexMap<u64, MapPoint>,
    routes: IndexMap<u64, Route>,
    spatial_index: SpatialIndex,
}

impl AnnotationMap {
    /// Erstellt leere Kollektionen.
    pub fn new() -> Self {
        Self {
            points: IndexMap::new(),
            routes: IndexMap::new(),
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Erstellt die Kollektionen aus geladenen Beständen.
    pub fn from_collections(points: Vec<MapPoint>, routes: Vec<Route>) -> Self {
        let mut map = Self::new();
        map.restore_points(points);
        map.restore_routes(routes);
        map
    }

    // ── Punkte ──────────────────────────────────────────────────────

    /// Punkt per Id.
    pub fn point(&self, id: u64) -> Option<&MapPoint> {
        self.points.get(&id)
    }

    /// Alle Punkte in Einfüge-Reihenfolge.
    pub fn points(&self) -> impl Iterator<Item = &MapPoint> {
        self.points.values()
    }

    /// Kopie der Punkt-Kollektion (Persistenz-Snapshot).
    pub fn points_vec(&self) -> Vec<MapPoint> {
        self.points.values().cloned().collect()
    }

    /// Fügt einen Punkt ein oder ersetzt ihn (Position in der Reihenfolge
    /// bleibt bei Ersetzung erhalten).
    pub fn insert_point(&mut self, point: MapPoint) {
        self.points.insert(point.id, point);
        self.rebuild_spatial_index();
    }

    /// Entfernt einen Punkt. Routen bleiben unberührt: Waypoint-Vertices
    /// tragen denormalisierte Kopien von Position und Name.
    pub fn remove_point(&mut self, id: u64) -> Option<MapPoint> {
        let removed = self.points.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_spatial_index();
        }
        removed
    }

    /// Ersetzt die komplette Punkt-Kollektion (Laden, Import, Rollback).
    pub fn restore_points(&mut self, points: Vec<MapPoint>) {
        self.points = points.into_iter().map(|p| (p.id, p)).collect();
        self.rebuild_spatial_index();
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    // ── Routen ──────────────────────────────────────────────────────

    /// Route per Id.
    pub fn route(&self, id: u64) -> Option<&Route> {
        self.routes.get(&id)
    }

    /// Alle Routen in Einfüge-Reihenfolge.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Kopie der Routen-Kollektion (Persistenz-Snapshot).
    pub fn routes_vec(&self) -> Vec<Route> {
        self.routes.values().cloned().collect()
    }

    /// Fügt eine Route ein oder ersetzt sie.
    pub fn insert_route(&mut self, route: Route) {
        self.routes.insert(route.id, route);
    }

    /// Entfernt eine Route.
    pub fn remove_route(&mut self, id: u64) -> Option<Route> {
        self.routes.shift_remove(&id)
    }

    /// Ersetzt die komplette Routen-Kollektion.
    pub fn restore_routes(&mut self, routes: Vec<Route>) {
        self.routes = routes.into_iter().map(|r| (r.id, r)).collect();
    }

    /// Gibt die Anzahl der Routen zurück.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    // ── Spatial ─────────────────────────────────────────────────────

    /// Baut den persistenten Spatial-Index aus den aktuellen Punkten neu auf.
    fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_points(&self.points);
    }

    /// Findet den nächsten Punkt zur Position.
    pub fn nearest_point(&self, query: GeoPos) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Hit-Test gegen alle Punkte: nächster Punkt innerhalb der Schwelle.
    pub fn hit_test_points(&self, query: GeoPos, threshold_m: f64) -> Option<&MapPoint> {
        let hit = self.spatial_index.hit_test(query, threshold_m)?;
        self.points.get(&hit.point_id)
    }
}
