//! Handler für Punkt-Operationen: Anlegen, Bearbeiten, Löschen.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::app::events::{PointEditForm, PointForm};
use crate::app::state::{DeleteTarget, EditTarget};
use crate::app::AppState;
use crate::core::{Attachment, GeoPos, Picture, PointDraft, PointPatch};

/// Merkt den geklickten Ort vor und öffnet das Punkt-Formular.
pub fn select_location(state: &mut AppState, coord: GeoPos) {
    state.ui.selected_location = Some(coord);
    state.ui.show_point_form = true;
}

/// Übernimmt das abgeschickte Punkt-Formular.
///
/// Erst werden ALLE Anhänge kodiert, dann läuft Anfügen + Persistieren
/// als eine logische Einheit — ein teilweise bebilderter Punkt wird nie
/// persistiert.
pub fn submit_point(state: &mut AppState, form: PointForm) {
    let Some(coord) = state.ui.selected_location else {
        log::warn!("Punkt-Formular ohne vorgemerkten Ort abgeschickt");
        return;
    };

    let pictures = encode_attachments(&form.attachments);
    let draft = PointDraft {
        lat: coord.lat,
        lng: coord.lng,
        category: form.category,
        tag: form.tag,
        comment: form.comment,
        username: form.username,
        pictures,
    };

    match state.entities.add_point(draft) {
        Ok(point) => {
            log::info!("Punkt {} angelegt: {}", point.id, point.tag);
            state.ui.selected_location = None;
            state.ui.show_point_form = false;
        }
        Err(e) => state.ui.block_with(e.to_string()),
    }
}

/// Schließt das Punkt-Formular und verwirft den vorgemerkten Ort.
pub fn cancel_form(state: &mut AppState) {
    state.ui.selected_location = None;
    state.ui.show_point_form = false;
}

/// Merkt eine Lösch-Anfrage vor; ausgeführt wird erst nach Bestätigung.
pub fn request_delete(state: &mut AppState, target: DeleteTarget) {
    state.ui.pending_delete = Some(target);
}

/// Führt die bestätigte Lösch-Anfrage aus.
pub fn execute_delete(state: &mut AppState) {
    let Some(target) = state.ui.pending_delete.take() else {
        log::warn!("Lösch-Bestätigung ohne offene Anfrage");
        return;
    };

    let result = match target {
        DeleteTarget::Point(id) => state.entities.remove_point(id).map(|p| {
            log::info!("Punkt {} gelöscht: {}", p.id, p.tag);
        }),
        DeleteTarget::Route(id) => state.entities.remove_route(id).map(|r| {
            state.visible_route_ids.remove(&r.id);
            log::info!("Route {} gelöscht: {}", r.id, r.name);
        }),
    };

    if let Err(e) = result {
        state.ui.block_with(e.to_string());
    }
}

/// Verwirft die offene Lösch-Anfrage.
pub fn dismiss_delete(state: &mut AppState) {
    state.ui.pending_delete = None;
}

/// Öffnet den Editor für einen Punkt oder Routen-Vertex.
pub fn open_editor(state: &mut AppState, target: EditTarget) {
    let exists = match target {
        EditTarget::Point { id } => state.entities.point(id).is_some(),
        EditTarget::RoutePoint { route_id, index } => state
            .entities
            .route(route_id)
            .is_some_and(|r| index < r.points.len()),
    };

    if exists {
        state.ui.edit_target = Some(target);
    } else {
        log::warn!("Editor-Ziel existiert nicht mehr: {:?}", target);
    }
}

/// Übernimmt die Punkt-Änderungen des Editors.
pub fn apply_point_edit(state: &mut AppState, edit: PointEditForm) {
    let Some(EditTarget::Point { id }) = state.ui.edit_target else {
        log::warn!("Punkt-Edit ohne passendes Editor-Ziel");
        return;
    };

    let patch = PointPatch {
        category: edit.category,
        tag: edit.tag,
        comment: edit.comment,
        new_pictures: encode_attachments(&edit.attachments),
    };

    match state.entities.update_point(id, patch) {
        Ok(point) => {
            log::info!("Punkt {} aktualisiert", point.id);
            state.ui.edit_target = None;
        }
        Err(e) => state.ui.block_with(e.to_string()),
    }
}

/// Benennt den Vertex des geöffneten Routen-Vertex-Editors um.
pub fn apply_route_point_rename(state: &mut AppState, name: &str) {
    let Some(EditTarget::RoutePoint { route_id, index }) = state.ui.edit_target else {
        log::warn!("Vertex-Umbenennung ohne passendes Editor-Ziel");
        return;
    };

    match state.entities.rename_route_point(route_id, index, name) {
        Ok(()) => {
            log::info!("Route {}: Vertex {} umbenannt", route_id, index);
            state.ui.edit_target = None;
        }
        Err(e) => state.ui.block_with(e.to_string()),
    }
}

/// Schließt den Editor ohne Änderung.
pub fn close_editor(state: &mut AppState) {
    state.ui.edit_target = None;
}

/// Kodiert alle Anhänge als Base64-Payloads.
fn encode_attachments(attachments: &[Attachment]) -> Vec<Picture> {
    attachments
        .iter()
        .map(|a| Picture {
            name: a.name.clone(),
            data: STANDARD.encode(&a.bytes),
        })
        .collect()
}
