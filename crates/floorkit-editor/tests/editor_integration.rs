//! End-to-end editor scenarios: pointer gestures through the interaction
//! controller down to committed floor-store state.

use floorkit_core::{MutationError, NullSink, Point};
use floorkit_editor::{
    plan_primitives, Element, ElementKind, InteractionController, PlanPrimitive, PointerEvent,
    PropertyKey, Tool, WheelEvent,
};
use floorkit_editor::{FloorStore, PlanViewport};

fn controller() -> InteractionController {
    InteractionController::with_sink(Box::new(NullSink))
}

#[test]
fn test_placed_wall_has_consistent_mm_and_px() {
    let mut store = FloorStore::new();
    let mut ctl = controller();
    ctl.set_tool(Tool::Wall);

    ctl.pointer_event(&mut store, PointerEvent::down(1000.0, 700.0));
    ctl.pointer_event(&mut store, PointerEvent::up(1000.0, 700.0));

    let wall = &store.elements("1F")[0];
    assert_eq!(wall.kind, ElementKind::Wall);
    // Footprint is the mm defaults scaled at 0.1 px/mm.
    assert_eq!(wall.footprint.width, 20.0);
    assert_eq!(wall.footprint.height, 100.0);
    let (thickness, length, height) = wall.dimensions_mm();
    assert_eq!(thickness, 200.0);
    assert_eq!(length, 1000.0);
    assert_eq!(height, 2400.0);
}

#[test]
fn test_empty_canvas_click_clears_selection_without_mutation() {
    let mut store = FloorStore::new();
    let mut ctl = controller();
    let id = store
        .add_element("1F", Element::new(ElementKind::Wall, Point::new(90.0, 90.0)))
        .unwrap();
    ctl.select_element(&store, id).unwrap();
    let snapshot = store.clone();

    ctl.pointer_event(&mut store, PointerEvent::down(700.0, 700.0));
    ctl.pointer_event(&mut store, PointerEvent::up(700.0, 700.0));

    assert_eq!(ctl.selected_id(), None);
    assert_eq!(store, snapshot);
}

#[test]
fn test_drag_commits_to_nearest_grid_cell() {
    let mut store = FloorStore::new();
    let mut ctl = controller();
    ctl.viewport_mut().set_canvas_size(2000.0, 1500.0);
    let id = store
        .add_element(
            "1F",
            Element::new(ElementKind::Wall, Point::new(990.0, 990.0)),
        )
        .unwrap();
    ctl.select_element(&store, id).unwrap();

    ctl.pointer_event(&mut store, PointerEvent::down(1000.0, 1000.0));
    ctl.pointer_event(&mut store, PointerEvent::moved(1043.0, 1022.0));
    ctl.pointer_event(&mut store, PointerEvent::up(1043.0, 1022.0));

    // Raw drop position (1033, 1012) snaps to (1035, 990).
    assert_eq!(
        store.element("1F", id).unwrap().position,
        Point::new(1035.0, 990.0)
    );
}

#[test]
fn test_inverted_window_height_range_is_rejected() {
    let mut store = FloorStore::new();
    let id = store
        .add_element(
            "1F",
            Element::new(ElementKind::Window, Point::new(0.0, 0.0)),
        )
        .unwrap();

    store
        .update_property("1F", id, PropertyKey::HeightFrom, 500.0)
        .unwrap();
    let err = store
        .update_property("1F", id, PropertyKey::HeightFrom, 2200.0)
        .unwrap_err();
    assert!(matches!(err, MutationError::InvertedHeightRange { .. }));

    // The rejected update left both ends of the range untouched.
    let window = store.element("1F", id).unwrap();
    let json = serde_json::to_value(&window.props).unwrap();
    assert_eq!(json["height_from_mm"], 500.0);
    assert_eq!(json["height_to_mm"], 2000.0);
}

#[test]
fn test_zoom_out_stops_at_minimum() {
    let mut ctl = controller();
    for _ in 0..40 {
        ctl.wheel_event(WheelEvent {
            delta_y: 120.0,
            x: 600.0,
            y: 400.0,
        });
    }
    assert_eq!(ctl.viewport().scale(), 0.1);
}

#[test]
fn test_plan_projection_tracks_committed_state() {
    let mut store = FloorStore::new();
    let mut ctl = controller();
    ctl.set_tool(Tool::Door);
    ctl.pointer_event(&mut store, PointerEvent::down(101.0, 97.0));
    ctl.pointer_event(&mut store, PointerEvent::up(101.0, 97.0));

    let vp = PlanViewport::default();
    let prims = plan_primitives(store.elements("1F"), &vp, ctl.selected_id());

    // Door body plus swing arc plus hinge marker.
    assert_eq!(prims.len(), 3);
    match &prims[0] {
        PlanPrimitive::Rect { x, y, .. } => {
            assert_eq!(*x, 90.0);
            assert_eq!(*y, 90.0);
        }
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn test_save_and_restore_preserves_the_session() {
    let mut store = FloorStore::new();
    let mut ctl = controller();
    ctl.set_tool(Tool::Wall);
    ctl.pointer_event(&mut store, PointerEvent::down(450.0, 450.0));
    ctl.pointer_event(&mut store, PointerEvent::up(450.0, 450.0));
    store.set_active_floor("2F").unwrap();

    let json = floorkit_editor::serialization::store_to_json(&store).unwrap();
    let restored = floorkit_editor::serialization::store_from_json(&json).unwrap();

    assert_eq!(restored.active_floor_id(), "2F");
    assert_eq!(restored.elements("1F"), store.elements("1F"));
}
