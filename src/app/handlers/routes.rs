//! Handler für persistierte Routen: Abschluss, Metadaten, Sichtbarkeit.

use crate::app::events::RouteForm;
use crate::app::AppState;
use crate::core::{RouteDraft, RoutePatch};

/// Schließt die Konstruktion ab und speichert die Route.
///
/// Bei `InvalidRoute` oder Persistenzfehlern bleibt die Session samt
/// Preview-Markern bestehen; erst der Erfolg zerstört sie.
pub fn finish(state: &mut AppState, form: RouteForm) {
    let points = match state.route_builder.finish() {
        Ok(points) => points,
        Err(e) => {
            state.ui.block_with(e.to_string());
            return;
        }
    };

    let draft = RouteDraft {
        name: form.name,
        description: form.description,
        username: form.username,
        points,
    };

    match state.entities.add_route(draft) {
        Ok(route) => {
            state.route_builder.complete();
            // Frisch gespeicherte Routen sind direkt sichtbar geschaltet
            state.visible_route_ids.insert(route.id);
            log::info!(
                "Route {} gespeichert: {} ({} Punkte)",
                route.id,
                route.name,
                route.points.len()
            );
        }
        Err(e) => state.ui.block_with(e.to_string()),
    }
}

/// Schaltet die abgeleiteten Visuals einer Route an oder aus.
/// Der Zustand ist transient und übersteht keinen Reload.
pub fn toggle_visibility(state: &mut AppState, id: u64) {
    if state.entities.route(id).is_none() {
        log::warn!("Sichtbarkeits-Toggle für unbekannte Route {}", id);
        return;
    }

    if !state.visible_route_ids.remove(&id) {
        state.visible_route_ids.insert(id);
    }
}

/// Ändert Name und Beschreibung einer bestehenden Route.
pub fn update_details(state: &mut AppState, id: u64, name: String, description: String) {
    let patch = RoutePatch { name, description };
    match state.entities.update_route(id, patch) {
        Ok(route) => log::info!("Route {} aktualisiert: {}", route.id, route.name),
        Err(e) => state.ui.block_with(e.to_string()),
    }
}
