//! Import-Merge: id-basierte, ordnungserhaltende Vereinigung.

use std::collections::HashSet;

use super::point::MapPoint;
use super::route::Route;

/// Vereinigt eine importierte Punkt-Liste mit dem Bestand.
///
/// Bereits bekannte Ids werden verworfen — der Bestand gewinnt immer und
/// wird nie von einem importierten Datensatz gleicher Id überschrieben.
/// Die relative Reihenfolge beider Listen bleibt erhalten; die Operation
/// ist idempotent.
pub fn merge_points(existing: &[MapPoint], incoming: &[MapPoint]) -> Vec<MapPoint> {
    let known: HashSet<u64> = existing.iter().map(|p| p.id).collect();

    let mut merged = existing.to_vec();
    merged.extend(incoming.iter().filter(|p| !known.contains(&p.id)).cloned());
    merged
}

/// Vereinigt eine importierte Routen-Liste mit dem Bestand.
/// Gleicher Algorithmus wie [`merge_points`].
pub fn merge_routes(existing: &[Route], incoming: &[Route]) -> Vec<Route> {
    let known: HashSet<u64> = existing.iter().map(|r| r.id).collect();

    let mut merged = existing.to_vec();
    merged.extend(incoming.iter().filter(|r| !known.contains(&r.id)).cloned());
    merged
}
