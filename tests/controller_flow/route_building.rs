//! Routen-Flows: Konstruktion per Klick, Abschluss, Sichtbarkeit.

use hk_map_annotator::{AppController, AppIntent, GeoPos, RouteForm, RoutePointKind};

use super::{make_state, point_form};

fn route_form(name: &str) -> RouteForm {
    RouteForm {
        name: name.to_string(),
        description: String::new(),
        username: String::new(),
    }
}

#[test]
fn test_clicks_during_building_become_vertices() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(&mut state, AppIntent::StartRouteRequested)
        .expect("StartRouteRequested sollte funktionieren");
    assert!(state.route_builder.is_building());

    for coord in [
        GeoPos::new(22.31, 114.16),
        GeoPos::new(22.32, 114.17),
        GeoPos::new(22.33, 114.18),
    ] {
        controller
            .handle_intent(&mut state, AppIntent::MapClicked { coord })
            .unwrap();
    }

    assert_eq!(state.route_builder.vertex_count(), 3);
    // Während der Konstruktion öffnet kein Punkt-Formular
    assert!(!state.ui.show_point_form);

    let snapshot = controller.build_view_snapshot(&state);
    let preview = snapshot.build_preview.expect("Preview erwartet");
    assert_eq!(preview.polyline.len(), 3);
    assert_eq!(preview.markers.len(), 3);
}

#[test]
fn test_click_near_existing_point_becomes_a_waypoint() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    // Punkt anlegen
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
    let point_id = state.entities.points().next().expect("Punkt erwartet").id;

    // Konstruktion: Klick ~11 m neben dem Punkt
    controller
        .handle_intent(&mut state, AppIntent::StartRouteRequested)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.3194, 114.1694),
            },
        )
        .unwrap();

    let vertex = state
        .route_builder
        .vertices()
        .next()
        .expect("Vertex erwartet")
        .clone();
    assert_eq!(vertex.kind, RoutePointKind::Waypoint);
    assert_eq!(vertex.point_id, Some(point_id));
    assert_eq!(vertex.name, "Dim Sum");
}

#[test]
fn test_secondary_click_removes_nearest_vertex_and_compacts() {
    let mut controller = AppController::new();
    let (mut state, _) = make_state();

    controller
        .handle_intent(&mut state, AppIntent::StartRouteRequested)
        .unwrap();
    for coord in [
        GeoPos::new(22.31, 114.16),
        GeoPos::new(22.32, 114.17),
        GeoPos::new(22.33, 114.18),
    ] {
        controller
            .handle_intent(&mut state, AppIntent::MapClicked { coord })
            .unwrap();
    }

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapSecondaryClicked {
                coord: GeoPos::new(22.32, 114.17),
            },
        )
        .unwrap();

    assert_eq!(state.route_builder.vertex_count(), 2);
    let indices: Vec<usize> = state
        .route_builder
        .preview_markers()
        .iter()
        .map(|m| m.index)
        .collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_finish_with_one_vertex_blocks_and_keeps_session() {
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
            AppIntent::FinishRouteRequested {
                form: route_form("Zu kurz"),
            },
        )
        .unwrap();

    assert!(state.ui.notice.is_some());
    assert!(state.route_builder.is_building());
    assert_eq!(state.route_count(), 0);
}

#[test]
fn test_finish_saves_route_and_shows_it() {
    let mut controller = AppController::new();
    let (mut state, backend) = make_state();

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
                form: route_form("Hafenrunde"),
            },
        )
        .unwrap();

    assert!(!state.route_builder.is_building());
    assert_eq!(state.route_count(), 1);
    assert_eq!(backend.routes_snapshot().len(), 1);

    let route = state.entities.routes().next().expect("Route erwartet");
    assert_eq!(route.points.len(), 2);
    assert_eq!(route.points[0].name, "Route Point 1");
    assert!(state.is_route_visible(route.id));

    let snapshot = controller.build_view_snapshot(&state);
    assert!(snapshot.build_preview.is_none());
    let route_view = &snapshot.routes[0];
    assert!(route_view.visible);
    assert_eq!(route_view.polyline.len(), 2);
    // Beide Vertices sind neu gesetzt → beide bekommen Marker
    assert_eq!(route_view.vertex_markers.len(), 2);
}

#[test]
fn test_visibility_toggle_adds_and_removes_derived_visuals() {
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
                form: route_form("Hafenrunde"),
            },
        )
        .unwrap();
    let id = state.entities.routes().next().expect("Route erwartet").id;

    controller
        .handle_intent(&mut state, AppIntent::ToggleRouteVisibilityRequested { id })
        .unwrap();
    let snapshot = controller.build_view_snapshot(&state);
    assert!(!snapshot.routes[0].visible);
    assert!(snapshot.routes[0].polyline.is_empty());
    assert!(snapshot.routes[0].vertex_markers.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::ToggleRouteVisibilityRequested { id })
        .unwrap();
    let snapshot = controller.build_view_snapshot(&state);
    assert!(snapshot.routes[0].visible);
    assert_eq!(snapshot.routes[0].polyline.len(), 2);
}

#[test]
fn test_cancel_discards_the_session() {
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
        .handle_intent(&mut state, AppIntent::CancelRouteRequested)
        .unwrap();

    assert!(!state.route_builder.is_building());
    assert_eq!(state.route_count(), 0);

    // Nach dem Abbruch öffnen Klicks wieder das Punkt-Formular
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapClicked {
                coord: GeoPos::new(22.31, 114.16),
            },
        )
        .unwrap();
    assert!(state.ui.show_point_form);
}

#[test]
fn test_rename_route_point_via_editor() {
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
                form: route_form("Hafenrunde"),
            },
        )
        .unwrap();
    let route_id = state.entities.routes().next().expect("Route erwartet").id;

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditRoutePointRequested { route_id, index: 1 },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RoutePointRenameSubmitted {
                name: "Aussichtspunkt".to_string(),
            },
        )
        .unwrap();

    let route = state.entities.route(route_id).expect("Route erwartet");
    assert_eq!(route.points[1].name, "Aussichtspunkt");
    assert_eq!(route.points[0].name, "Route Point 1");
}
