//! Punkt-Flows: Anlegen, Bearbeiten, Löschen mit Bestätigung.

use hk_map_annotator::{AppController, AppIntent, GeoPos, PointEditForm};

use super::{make_state, point_form};

#[test]
fn test_click_then_submit_creates_a_point() {
    let mut controller = AppController::new();
    let (mut state, backend) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.3193, 114.1694),
            },
        )
        .expect("MapClicked sollte funktionieren");

    assert!(state.ui.show_point_form);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .expect("PointFormSubmitted sollte funktionieren");

    assert_eq!(state.point_count(), 1);
    let point = state.entities.points().next().expect("Punkt erwartet");
    assert_eq!(point.tag, "Dim Sum");
    assert_eq!(point.username, "Anonymous");
    // Formular geschlossen, Ort verworfen
    assert!(!state.ui.show_point_form);
    assert!(state.ui.selected_location.is_none());
    // Persistiert vor der Rückkehr
    assert_eq!(backend.points_snapshot().len(), 1);
}

#[test]
fn test_submit_without_selected_location_is_ignored() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .expect("PointFormSubmitted sollte funktionieren");

    assert_eq!(state.point_count(), 0);
}

#[test]
fn test_cancel_discards_the_selected_location() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.3193, 114.1694),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::PointFormCancelled)
        .unwrap();

    assert!(state.ui.selected_location.is_none());
    assert!(!state.ui.show_point_form);
    assert_eq!(state.point_count(), 0);
}

#[test]
fn test_delete_requires_confirmation() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.3193, 114.1694),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .unwrap();
    let id = state.entities.points().next().expect("Punkt erwartet").id;

    // Anfrage allein löscht noch nichts
    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested { id })
        .unwrap();
    assert_eq!(state.point_count(), 1);

    // Abbruch verwirft die Anfrage
    controller
        .handle_intent(&mut state, AppIntent::DeleteCancelled)
        .unwrap();
    assert_eq!(state.point_count(), 1);

    // Erneute Anfrage plus Bestätigung löscht
    controller
        .handle_intent(&mut state, AppIntent::DeletePointRequested { id })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DeleteConfirmed)
        .unwrap();

    assert_eq!(state.point_count(), 0);
    assert!(state
        .list_visible_points()
        .iter()
        .all(|p| p.id != id));
}

#[test]
fn test_point_edit_appends_pictures_and_replaces_fields() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.3193, 114.1694),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .unwrap();
    let id = state.entities.points().next().expect("Punkt erwartet").id;

    controller
        .handle_intent(&mut state, AppIntent::EditPointRequested { id })
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointEditSubmitted {
                edit: PointEditForm {
                    category: "shopping".to_string(),
                    tag: "Markt".to_string(),
                    comment: "umgezogen".to_string(),
                    attachments: vec![hk_map_annotator::Attachment {
                        name: "foto.jpg".to_string(),
                        bytes: vec![1, 2, 3],
                    }],
                },
            },
        )
        .unwrap();

    let point = state.entities.point(id).expect("Punkt erwartet");
    assert_eq!(point.category, "shopping");
    assert_eq!(point.tag, "Markt");
    assert_eq!(point.pictures.len(), 1);
    assert_eq!(point.pictures[0].name, "foto.jpg");
    assert!(state.ui.edit_target.is_none());
}

#[test]
fn test_persistence_failure_rolls_back_and_blocks() {
    let mut controller = AppController::new();
    let (mut state, backend) = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.3193, 114.1694),
            },
        )
        .unwrap();

    backend.set_fail_writes(true);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .unwrap();

    // In-Memory zurückgerollt, Meldung blockiert
    assert_eq!(state.point_count(), 0);
    assert!(state.ui.notice.is_some());

    // Weitere Intents werden bis zur Bestätigung verworfen
    backend.set_fail_writes(false);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .unwrap();
    assert_eq!(state.point_count(), 0);

    // Nach Bestätigung geht der Retry durch
    controller
        .handle_intent(&mut state, AppIntent::NoticeAcknowledged)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointFormSubmitted {
                form: point_form("restaurant", "Dim Sum"),
            },
        )
        .unwrap();
    assert_eq!(state.point_count(), 1);
}
