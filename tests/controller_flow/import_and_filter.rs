//! Export/Import-Roundtrip, Merge-Verhalten und Kategorie-Filter.

use hk_map_annotator::{
    AppController, AppIntent, Category, CategoryFilter, GeoPos, MapPoint,
};

use super::{make_state, point_form};

fn add_point(
    controller: &mut AppController,
    state: &mut hk_map_annotator::AppState,
    coord: GeoPos,
    category: &str,
    tag: &str,
) {
    controller
        .handle_intent(state, AppIntent::MapClicked { coord })
        .unwrap();
    controller
        .handle_intent(
            state,
            AppIntent::PointFormSubmitted {
                form: point_form(category, tag),
            },
        )
        .unwrap();
}

#[test]
fn test_filter_is_a_pure_order_preserving_projection() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    add_point(&mut controller, &mut state, GeoPos::new(22.31, 114.16), "restaurant", "A");
    add_point(&mut controller, &mut state, GeoPos::new(22.32, 114.17), "shopping", "B");
    add_point(&mut controller, &mut state, GeoPos::new(22.33, 114.18), "restaurant", "C");

    controller
        .handle_intent(
            &mut state,
            AppIntent::CategoryFilterChanged {
                filter: CategoryFilter::Category(Category::Restaurant),
            },
        )
        .unwrap();

    let visible: Vec<&str> = state
        .list_visible_points()
        .iter()
        .map(|p| p.tag.as_str())
        .collect();
    assert_eq!(visible, vec!["A", "C"]);

    let snapshot = controller.build_view_snapshot(&state);
    assert_eq!(snapshot.point_count, 2);
    assert_eq!(snapshot.points[0].icon, "🍽️");

    // Projektion mutiert den Bestand nie
    controller
        .handle_intent(
            &mut state,
            AppIntent::CategoryFilterChanged {
                filter: CategoryFilter::All,
            },
        )
        .unwrap();
    assert_eq!(state.point_count(), 3);
}

#[test]
fn test_export_clear_import_restores_the_same_record() {
    let dir = tempfile::tempdir().expect("Tempdir erwartet");
    let mut controller = AppController::new();
    let (mut state, _) = make_state();
    state.options.data_dir = dir.path().to_path_buf();

    add_point(
        &mut controller,
        &mut state,
        GeoPos::new(22.30, 114.17),
        "restaurant",
        "Dim Sum",
    );
    let original = state
        .entities
        .points()
        .next()
        .expect("Punkt erwartet")
        .clone();

    // Export
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .unwrap();
    let export_path = std::fs::read_dir(dir.path())
        .expect("Verzeichnis erwartet")
        .filter_map(Result::ok)
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("hk-map-points-"))
        })
        .expect("Export-Datei erwartet");

    // Bestand leeren
    let id = original.id;
    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested { id })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DeleteConfirmed)
        .unwrap();
    assert_eq!(state.point_count(), 0);

    // Import stellt denselben Datensatz wieder her (gleiche Id)
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportFileSelected { path: export_path },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::NoticeAcknowledged)
        .unwrap();

    let restored: Vec<MapPoint> = state.entities.points().cloned().collect();
    assert_eq!(restored, vec![original]);
}

#[test]
fn test_import_merge_keeps_existing_and_reports_count() {
    let dir = tempfile::tempdir().expect("Tempdir erwartet");
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    add_point(
        &mut controller,
        &mut state,
        GeoPos::new(22.30, 114.17),
        "restaurant",
        "Original",
    );
    let existing = state
        .entities
        .points()
        .next()
        .expect("Punkt erwartet")
        .clone();

    // Import-Dokument: bekannte Id mit fremdem Inhalt + ein neuer Punkt
    let mut foreign = existing.clone();
    foreign.tag = "Fremd".to_string();
    let new_point = MapPoint {
        id: existing.id + 999,
        tag: "Neu".to_string(),
        ..existing.clone()
    };
    let doc_path = dir.path().join("import.json");
    std::fs::write(
        &doc_path,
        serde_json::to_string_pretty(&vec![foreign, new_point]).expect("JSON erwartet"),
    )
    .expect("Schreiben erwartet");

    controller
        .handle_intent(&mut state, AppIntent::ImportFileSelected { path: doc_path })
        .unwrap();

    let notice = state.ui.notice.clone().expect("Meldung erwartet");
    assert_eq!(notice.message, "1 neue Punkte importiert");

    assert_eq!(state.point_count(), 2);
    assert_eq!(
        state.entities.point(existing.id).map(|p| p.tag.as_str()),
        Some("Original")
    );
}

#[test]
fn test_import_of_non_array_document_blocks_with_invalid_format() {
    let dir = tempfile::tempdir().expect("Tempdir erwartet");
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    let doc_path = dir.path().join("kaputt.json");
    std::fs::write(&doc_path, r#"{"points": []}"#).expect("Schreiben erwartet");

    controller
        .handle_intent(&mut state, AppIntent::ImportFileSelected { path: doc_path })
        .unwrap();

    let notice = state.ui.notice.clone().expect("Meldung erwartet");
    assert!(notice.message.contains("Ungültiges Import-Format"));
    assert_eq!(state.point_count(), 0);
}

#[test]
fn test_reload_resets_transient_route_visibility() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(&mut state, AppIntent::StartRouteRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.31, 114.16),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.32, 114.17),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::FinishRouteRequested {
                form: hk_map_annotator::RouteForm {
                    name: "Hafenrunde".to_string(),
                    description: String::new(),
                    username: String::new(),
                },
            },
        )
        .unwrap();
    let id = state.entities.routes().next().expect("Route erwartet").id;
    assert!(state.is_route_visible(id));

    controller
        .handle_intent(&mut state, AppIntent::RefreshRequested)
        .unwrap();

    // Route bleibt erhalten, Sichtbarkeit ist zurückgesetzt
    assert_eq!(state.route_count(), 1);
    assert!(!state.is_route_visible(id));
}
