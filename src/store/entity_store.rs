//! Der autoritative EntityStore: Kollektionen plus Persistenz-Vertrag.
//!
//! Jede mutierende Operation persistiert vor der Rückkehr. Schlägt das
//! Schreiben fehl, wird die In-Memory-Kollektion auf den Stand vor der
//! Operation zurückgerollt — Speicher und Backing-Store bleiben konsistent.

use crate::core::{
    human_timestamp, merge_points, AnnotationError, AnnotationMap, GeoPos, IdGenerator, MapPoint,
    PointDraft, PointPatch, Route, RouteDraft, RoutePatch, MIN_ROUTE_POINTS,
};
use crate::store::{PointStore, RouteStore};

/// In-Memory-Kollektionen mit angeschlossenen Backing-Stores.
pub struct EntityStore {
    map: AnnotationMap,
    ids: IdGenerator,
    default_username: String,
    point_store: Box<dyn PointStore>,
    route_store: Box<dyn RouteStore>,
}

impl EntityStore {
    /// Öffnet den Store und lädt beide Kollektionen.
    ///
    /// Lese-Fehler degradieren zu leeren Kollektionen — das Laden schlägt
    /// nie hart fehl.
    pub fn open(
        point_store: Box<dyn PointStore>,
        route_store: Box<dyn RouteStore>,
        default_username: &str,
    ) -> Self {
        let mut store = Self {
            map: AnnotationMap::new(),
            ids: IdGenerator::new(),
            default_username: default_username.to_string(),
            point_store,
            route_store,
        };
        store.reload();
        store
    }

    /// Liest beide Kollektionen neu aus dem Backing-Store
    /// (Refresh-Pfad im Remote-Modus).
    pub fn reload(&mut self) {
        let points = self.point_store.load().unwrap_or_else(|e| {
            log::warn!("Punkte nicht ladbar, starte mit leerer Kollektion: {:#}", e);
            Vec::new()
        });
        let routes = self.route_store.load().unwrap_or_else(|e| {
            log::warn!("Routen nicht ladbar, starte mit leerer Kollektion: {:#}", e);
            Vec::new()
        });

        for point in &points {
            self.ids.observe(point.id);
        }
        for route in &routes {
            self.ids.observe(route.id);
        }

        log::info!(
            "Kollektionen geladen: {} Punkte, {} Routen",
            points.len(),
            routes.len()
        );
        self.map = AnnotationMap::from_collections(points, routes);
    }

    // ── Lesezugriffe ────────────────────────────────────────────────

    /// Punkt per Id.
    pub fn point(&self, id: u64) -> Option<&MapPoint> {
        self.map.point(id)
    }

    /// Alle Punkte in Einfüge-Reihenfolge.
    pub fn points(&self) -> impl Iterator<Item = &MapPoint> {
        self.map.points()
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn point_count(&self) -> usize {
        self.map.point_count()
    }

    /// Route per Id.
    pub fn route(&self, id: u64) -> Option<&Route> {
        self.map.route(id)
    }

    /// Alle Routen in Einfüge-Reihenfolge.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.map.routes()
    }

    /// Gibt die Anzahl der Routen zurück.
    pub fn route_count(&self) -> usize {
        self.map.route_count()
    }

    /// Hit-Test gegen alle persistierten Punkte.
    pub fn hit_test_points(&self, query: GeoPos, threshold_m: f64) -> Option<&MapPoint> {
        self.map.hit_test_points(query, threshold_m)
    }

    // ── Punkt-Mutationen ────────────────────────────────────────────

    /// Fügt einen neuen Punkt hinzu, persistiert und gibt den
    /// gespeicherten Datensatz zurück.
    pub fn add_point(&mut self, draft: PointDraft) -> Result<MapPoint, AnnotationError> {
        let id = self.ids.next();
        let record = MapPoint {
            id,
            lat: draft.lat,
            lng: draft.lng,
            category: draft.category,
            tag: draft.tag,
            comment: draft.comment,
            username: self.username_or_default(draft.username),
            timestamp: human_timestamp(),
            pictures: draft.pictures,
        };

        self.map.insert_point(record.clone());
        match self
            .point_store
            .store_new(&record, &self.map.points_vec())
        {
            Ok(stored) => {
                // Remote-Backends vergeben eigene Id/Zeitstempel
                if stored != record {
                    self.map.remove_point(record.id);
                    self.ids.observe(stored.id);
                    self.map.insert_point(stored.clone());
                }
                Ok(stored)
            }
            Err(e) => {
                self.map.remove_point(record.id);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    /// Ändert einen bestehenden Punkt: Kategorie/Tag/Kommentar werden
    /// ersetzt, neue Bilder angehängt.
    ///
    /// Ein Patch, dessen Ziel inzwischen gelöscht wurde, wird verworfen
    /// (`NotFound`) — kein Zombie-Write.
    pub fn update_point(&mut self, id: u64, patch: PointPatch) -> Result<MapPoint, AnnotationError> {
        let Some(current) = self.map.point(id).cloned() else {
            return Err(AnnotationError::NotFound { id });
        };

        let mut updated = current.clone();
        updated.category = patch.category;
        updated.tag = patch.tag;
        updated.comment = patch.comment;
        updated.pictures.extend(patch.new_pictures);

        self.map.insert_point(updated.clone());
        match self
            .point_store
            .store_update(&updated, &self.map.points_vec())
        {
            Ok(()) => Ok(updated),
            Err(e) => {
                self.map.insert_point(current);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    /// Entfernt einen Punkt. Routen mit Waypoint-Verweisen bleiben gültig
    /// (denormalisierte Kopien).
    pub fn remove_point(&mut self, id: u64) -> Result<MapPoint, AnnotationError> {
        if self.map.point(id).is_none() {
            return Err(AnnotationError::NotFound { id });
        }

        let before = self.map.points_vec();
        let removed = self
            .map
            .remove_point(id)
            .ok_or(AnnotationError::NotFound { id })?;

        match self.point_store.delete(id, &self.map.points_vec()) {
            Ok(()) => Ok(removed),
            Err(e) => {
                self.map.restore_points(before);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    /// Vereinigt importierte Punkte mit dem Bestand (id-basiert,
    /// ordnungserhaltend) und persistiert das Ergebnis. Gibt die Anzahl
    /// neu übernommener Punkte zurück.
    pub fn import_points(&mut self, incoming: Vec<MapPoint>) -> Result<usize, AnnotationError> {
        let before = self.map.points_vec();
        let merged = merge_points(&before, &incoming);
        let added = merged.len() - before.len();

        for point in &merged {
            self.ids.observe(point.id);
        }

        self.map.restore_points(merged);
        match self.point_store.replace_all(&self.map.points_vec()) {
            Ok(()) => Ok(added),
            Err(e) => {
                self.map.restore_points(before);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    // ── Routen-Mutationen ───────────────────────────────────────────

    /// Fügt eine abgeschlossene Route hinzu und persistiert sie.
    pub fn add_route(&mut self, draft: RouteDraft) -> Result<Route, AnnotationError> {
        if draft.points.len() < MIN_ROUTE_POINTS {
            return Err(AnnotationError::InvalidRoute {
                len: draft.points.len(),
            });
        }

        let id = self.ids.next();
        let record = Route {
            id,
            name: draft.name,
            description: draft.description,
            username: self.username_or_default(draft.username),
            timestamp: human_timestamp(),
            points: draft.points,
        };

        self.map.insert_route(record.clone());
        match self.route_store.replace_all(&self.map.routes_vec()) {
            Ok(()) => Ok(record),
            Err(e) => {
                self.map.remove_route(record.id);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    /// Ändert Name und Beschreibung einer bestehenden Route.
    pub fn update_route(&mut self, id: u64, patch: RoutePatch) -> Result<Route, AnnotationError> {
        let Some(current) = self.map.route(id).cloned() else {
            return Err(AnnotationError::NotFound { id });
        };

        let mut updated = current.clone();
        updated.name = patch.name;
        updated.description = patch.description;

        self.map.insert_route(updated.clone());
        match self.route_store.replace_all(&self.map.routes_vec()) {
            Ok(()) => Ok(updated),
            Err(e) => {
                self.map.insert_route(current);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    /// Benennt einen einzelnen Routen-Vertex um — die einzige erlaubte
    /// Änderung an der Vertex-Sequenz nach dem Abschluss.
    pub fn rename_route_point(
        &mut self,
        route_id: u64,
        index: usize,
        name: &str,
    ) -> Result<(), AnnotationError> {
        let Some(current) = self.map.route(route_id).cloned() else {
            return Err(AnnotationError::NotFound { id: route_id });
        };
        if index >= current.points.len() {
            return Err(AnnotationError::NotFound { id: route_id });
        }

        let mut updated = current.clone();
        updated.points[index].name = name.to_string();

        self.map.insert_route(updated);
        match self.route_store.replace_all(&self.map.routes_vec()) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.map.insert_route(current);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    /// Entfernt eine Route.
    pub fn remove_route(&mut self, id: u64) -> Result<Route, AnnotationError> {
        if self.map.route(id).is_none() {
            return Err(AnnotationError::NotFound { id });
        }

        let before = self.map.routes_vec();
        let removed = self
            .map
            .remove_route(id)
            .ok_or(AnnotationError::NotFound { id })?;

        match self.route_store.replace_all(&self.map.routes_vec()) {
            Ok(()) => Ok(removed),
            Err(e) => {
                self.map.restore_routes(before);
                Err(AnnotationError::Persistence(e))
            }
        }
    }

    fn username_or_default(&self, username: String) -> String {
        if username.trim().is_empty() {
            self.default_username.clone()
        } else {
            username
        }
    }
}
