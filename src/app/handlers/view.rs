//! Handler für Filter, Reload und Meldungen.

use crate::app::state::CategoryFilter;
use crate::app::AppState;

/// Setzt den Kategorie-Filter der Punkt-Liste.
pub fn set_filter(state: &mut AppState, filter: CategoryFilter) {
    state.filter = filter;
    log::debug!("Kategorie-Filter: {:?}", filter);
}

/// Lädt beide Kollektionen neu aus dem Backing-Store.
///
/// Die transiente Routen-Sichtbarkeit wird dabei zurückgesetzt.
pub fn reload(state: &mut AppState) {
    state.entities.reload();
    state.visible_route_ids.clear();
}

/// Bestätigt die blockierende Meldung.
pub fn acknowledge_notice(state: &mut AppState) {
    state.ui.notice = None;
}
