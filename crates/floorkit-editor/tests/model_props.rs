//! Property tests for the element model: the editor-pixel footprint must
//! track the millimeter properties through any sequence of updates, and a
//! rejected update must leave the element exactly as it was.

use proptest::prelude::*;

use floorkit_core::units::mm_to_editor_px;
use floorkit_core::Point;
use floorkit_editor::{Element, ElementKind, ElementProps, PropertyKey};

const KINDS: [ElementKind; 3] = [ElementKind::Wall, ElementKind::Door, ElementKind::Window];
const KEYS: [PropertyKey; 7] = [
    PropertyKey::Thickness,
    PropertyKey::Length,
    PropertyKey::Width,
    PropertyKey::Depth,
    PropertyKey::Height,
    PropertyKey::HeightFrom,
    PropertyKey::HeightTo,
];

proptest! {
    #[test]
    fn prop_footprint_tracks_mm_after_update_sequence(
        kind_idx in 0usize..KINDS.len(),
        ops in prop::collection::vec((0usize..KEYS.len(), -500.0f64..6000.0), 0..16),
    ) {
        let mut element = Element::new(KINDS[kind_idx], Point::new(0.0, 0.0));

        for (key_idx, value_mm) in ops {
            let before = element.clone();
            if element.update_property(KEYS[key_idx], value_mm).is_err() {
                // Rejection restores nothing because nothing may change.
                prop_assert_eq!(&element, &before);
            }
        }

        // Whatever was accepted, both representations describe the same
        // plan-view extent.
        let (width_mm, depth_mm, _) = element.dimensions_mm();
        prop_assert!((element.footprint.width - mm_to_editor_px(width_mm)).abs() < 1e-9);
        prop_assert!((element.footprint.height - mm_to_editor_px(depth_mm)).abs() < 1e-9);
    }

    #[test]
    fn prop_resize_pushes_exact_mm_back(
        kind_idx in 0usize..KINDS.len(),
        width_px in 0.5f64..5000.0,
        height_px in 0.5f64..5000.0,
    ) {
        let mut element = Element::new(KINDS[kind_idx], Point::new(0.0, 0.0));
        element.set_footprint_px(width_px, height_px).unwrap();

        let (width_mm, depth_mm, _) = element.dimensions_mm();
        prop_assert!((mm_to_editor_px(width_mm) - width_px).abs() < 1e-9);
        prop_assert!((mm_to_editor_px(depth_mm) - height_px).abs() < 1e-9);
    }

    #[test]
    fn prop_window_height_range_never_inverts(
        sills in prop::collection::vec(-100.0f64..3000.0, 1..8),
        heads in prop::collection::vec(-100.0f64..3000.0, 1..8),
    ) {
        let mut window = Element::new(ElementKind::Window, Point::new(0.0, 0.0));

        for (sill, head) in sills.into_iter().zip(heads) {
            let _ = window.update_property(PropertyKey::HeightFrom, sill);
            let _ = window.update_property(PropertyKey::HeightTo, head);

            match &window.props {
                ElementProps::Window(p) => {
                    prop_assert!(p.height_from_mm >= 0.0);
                    prop_assert!(p.height_to_mm > p.height_from_mm);
                }
                other => prop_assert!(false, "expected window props, got {other:?}"),
            }
        }
    }
}
