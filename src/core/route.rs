//! Domänentypen für Routen und ihre geordneten Vertex-Sequenzen.

use serde::{Deserialize, Serialize};

use super::point::MapPoint;
use super::spatial::GeoPos;

/// Mindestanzahl an Vertices einer abgeschlossenen Route.
pub const MIN_ROUTE_POINTS: usize = 2;

/// Art eines Routen-Vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePointKind {
    /// Verweist auf einen existierenden Punkt (`point_id` gesetzt)
    Waypoint,
    /// Eigens für diese Route gesetzter Vertex, ohne Punkt-Referenz
    Routepoint,
}

/// Element der geordneten Vertex-Sequenz einer Route.
///
/// Waypoints tragen eine denormalisierte Kopie von Position und Name des
/// referenzierten Punktes; ein später gelöschter Punkt macht bestehende
/// Routen deshalb nicht kaputt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
    /// Anzeigename (Default `"Route Point N"`, wird nie neu nummeriert)
    pub name: String,
    /// Art des Vertex
    #[serde(rename = "type")]
    pub kind: RoutePointKind,
    /// Id des referenzierten Punktes, nur bei `kind = Waypoint`
    #[serde(
        rename = "pointId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub point_id: Option<u64>,
}

impl RoutePoint {
    /// Erstellt einen Waypoint-Vertex aus einem existierenden Punkt.
    pub fn waypoint(point: &MapPoint) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            name: point.tag.clone(),
            kind: RoutePointKind::Waypoint,
            point_id: Some(point.id),
        }
    }

    /// Erstellt einen neu gesetzten Routen-Vertex.
    ///
    /// `position` ist die 1-basierte Position zum Erstellungszeitpunkt.
    pub fn authored(coord: GeoPos, position: usize) -> Self {
        Self {
            lat: coord.lat,
            lng: coord.lng,
            name: format!("Route Point {position}"),
            kind: RoutePointKind::Routepoint,
            point_id: None,
        }
    }

    /// Geographische Position des Vertex.
    pub fn position(&self) -> GeoPos {
        GeoPos::new(self.lat, self.lng)
    }
}

/// Persistierte Route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Eindeutige Id (gleiches Schema wie Punkte)
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Beschreibung
    pub description: String,
    /// Ersteller
    pub username: String,
    /// Menschenlesbarer Erstellungszeitpunkt
    pub timestamp: String,
    /// Geordnete Vertex-Sequenz, nach Abschluss mindestens 2 Elemente
    pub points: Vec<RoutePoint>,
}

impl Route {
    /// Polyline-Koordinaten in Traversierungs-Reihenfolge.
    pub fn polyline(&self) -> Vec<GeoPos> {
        self.points.iter().map(|p| p.position()).collect()
    }
}

/// Abschluss-Daten einer Routen-Konstruktion; Id und Zeitstempel vergibt
/// der EntityStore.
#[derive(Debug, Clone)]
pub struct RouteDraft {
    pub name: String,
    pub description: String,
    /// Leer → Default-Benutzername
    pub username: String,
    pub points: Vec<RoutePoint>,
}

/// Änderungs-Patch für Name/Beschreibung einer bestehenden Route.
///
/// Strukturelle Änderungen an `points` gibt es nach dem Abschluss nicht
/// mehr; einzelne Vertices lassen sich nur noch umbenennen.
#[derive(Debug, Clone, Default)]
pub struct RoutePatch {
    pub name: String,
    pub description: String,
}
