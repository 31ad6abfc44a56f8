//! Spatial-Index (KD-Tree) für schnelle Punkt-Abfragen in Metern.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};
use serde::{Deserialize, Serialize};

use super::point::MapPoint;

/// Kartenzentrum (Hongkong) als Referenz der lokal-flachen Projektion.
pub const MAP_CENTER_LAT: f64 = 22.3193;
/// Längengrad des Kartenzentrums.
pub const MAP_CENTER_LNG: f64 = 114.1694;

/// Erdradius in Metern.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographische Position in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPos {
    /// Erstellt eine Position aus Breiten- und Längengrad.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Projiziert auf lokal-flache Meter-Koordinaten um das Kartenzentrum.
    ///
    /// Auf Stadt-Skala genügt die äquirektangulare Näherung; Großkreis-
    /// Mathematik braucht der Hit-Test nicht.
    pub fn to_local_m(&self) -> Vec2 {
        let (x, y) = self.to_local_m_f64();
        Vec2::new(x as f32, y as f32)
    }

    fn to_local_m_f64(&self) -> (f64, f64) {
        let x =
            (self.lng - MAP_CENTER_LNG).to_radians() * MAP_CENTER_LAT.to_radians().cos() * EARTH_RADIUS_M;
        let y = (self.lat - MAP_CENTER_LAT).to_radians() * EARTH_RADIUS_M;
        (x, y)
    }

    /// Lokal-flache Distanz in Metern.
    pub fn distance_m(&self, other: &GeoPos) -> f64 {
        let (ax, ay) = self.to_local_m_f64();
        let (bx, by) = other.to_local_m_f64();
        let dx = bx - ax;
        let dy = by - ay;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Id des gefundenen Punktes
    pub point_id: u64,
    /// Distanz zum Suchpunkt in Metern
    pub distance_m: f64,
}

/// Read-only Spatial-Index über allen persistierten Punkten.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<u64>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Punkten.
    pub fn from_points(points: &IndexMap<u64, MapPoint>) -> Self {
        let mut point_ids: Vec<u64> = points.keys().copied().collect();
        point_ids.sort_unstable();

        let entries: Vec<[f64; 2]> = point_ids
            .iter()
            .filter_map(|id| {
                points.get(id).map(|point| {
                    let local = point.position().to_local_m();
                    [local.x as f64, local.y as f64]
                })
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, point_ids }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Position.
    pub fn nearest(&self, query: GeoPos) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let local = query.to_local_m();
        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[local.x as f64, local.y as f64]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance_m: result.distance.sqrt(),
        })
    }

    /// Findet alle Punkte innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: GeoPos, radius_m: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius_m.is_sign_negative() {
            return Vec::new();
        }

        let local = query.to_local_m();
        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[local.x as f64, local.y as f64], radius_m * radius_m)
            .into_iter()
            .filter_map(|entry| {
                let point_id = *self.point_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    point_id,
                    distance_m: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        results
    }

    /// Hit-Test: nächster Punkt innerhalb der Schwelle.
    ///
    /// Nearest-Match statt dem Legacy-Verhalten "letzter Treffer gewinnt";
    /// bei dichten Marker-Clustern ist das die vorhersagbarere Auflösung.
    pub fn hit_test(&self, query: GeoPos, threshold_m: f64) -> Option<SpatialMatch> {
        self.nearest(query)
            .filter(|candidate| candidate.distance_m < threshold_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> IndexMap<u64, MapPoint> {
        let mut points = IndexMap::new();
        for (id, lat, lng) in [
            (1u64, 22.3193, 114.1694),
            (2u64, 22.3200, 114.1694),
            (3u64, 22.3300, 114.1800),
        ] {
            points.insert(
                id,
                MapPoint {
                    id,
                    lat,
                    lng,
                    category: "other".to_string(),
                    tag: format!("P{id}"),
                    comment: String::new(),
                    username: "Anonymous".to_string(),
                    timestamp: "1.1.2025, 12:00:00".to_string(),
                    pictures: Vec::new(),
                },
            );
        }
        points
    }

    #[test]
    fn distance_is_plausible_at_city_scale() {
        use approx::assert_relative_eq;

        // 0.001° Breitengrad entsprechen ~111 m
        let a = GeoPos::new(22.3193, 114.1694);
        let b = GeoPos::new(22.3203, 114.1694);

        assert_relative_eq!(a.distance_m(&b), 111.2, max_relative = 0.01);
    }

    #[test]
    fn nearest_returns_expected_point() {
        let index = SpatialIndex::from_points(&sample_points());
        let nearest = index
            .nearest(GeoPos::new(22.3201, 114.1694))
            .expect("Treffer erwartet");

        assert_eq!(nearest.point_id, 2);
        assert!(nearest.distance_m < 20.0);
    }

    #[test]
    fn hit_test_respects_threshold() {
        let index = SpatialIndex::from_points(&sample_points());

        // ~11 m neben Punkt 2 → Treffer
        let hit = index.hit_test(GeoPos::new(22.3201, 114.1694), 20.0);
        assert_eq!(hit.map(|m| m.point_id), Some(2));

        // ~111 m neben Punkt 2 → kein Treffer
        let miss = index.hit_test(GeoPos::new(22.3210, 114.1694), 20.0);
        assert!(miss.is_none());
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_points(&sample_points());
        let matches = index.within_radius(GeoPos::new(22.3193, 114.1694), 100.0);

        let ids: Vec<u64> = matches.into_iter().map(|m| m.point_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(GeoPos::new(22.3193, 114.1694)).is_none());
    }
}
