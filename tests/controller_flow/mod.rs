//! Gemeinsame Helfer der Controller-Flow-Tests.

mod import_and_filter;
mod points;
mod route_building;

use hk_map_annotator::{AnnotatorOptions, AppState, MemoryStore, PointForm};

/// App-State über einem frischen In-Memory-Backend.
pub fn make_state() -> (AppState, MemoryStore) {
    let backend = MemoryStore::new();
    let state = AppState::with_stores(
        AnnotatorOptions::default(),
        Box::new(backend.clone()),
        Box::new(backend.clone()),
    );
    (state, backend)
}

/// Punkt-Formular ohne Anhänge.
pub fn point_form(category: &str, tag: &str) -> PointForm {
    PointForm {
        category: category.to_string(),
        tag: tag.to_string(),
        comment: String::new(),
        username: String::new(),
        attachments: Vec::new(),
    }
}
