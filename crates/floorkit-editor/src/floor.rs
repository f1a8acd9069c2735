//! Floors and the floor store.
//!
//! The store is the single source of truth: every view reads element state
//! from here and every mutation lands here. Other components hold element
//! ids only and re-fetch current state, never a second live reference.

use serde::{Deserialize, Serialize};

use floorkit_core::{snap_point, snap_px, MutationError, Point, Result};

use crate::model::{Element, ElementId, PropertyKey};

/// One building level: a named, ordered collection of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub elements: Vec<Element>,
}

impl Floor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            elements: Vec::new(),
        }
    }
}

/// A patch merged into an element by `FloorStore::update_element`. Absent
/// fields leave the current value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Point>,
    pub rotation: Option<f64>,
    pub footprint_px: Option<(f64, f64)>,
}

/// In-memory session store of floors and their elements.
///
/// Mutations referencing unknown floor or element ids are reported no-ops
/// (`Err`), never panics: under rapid interaction a delete can race a
/// queued update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorStore {
    floors: Vec<Floor>,
    active: String,
}

impl FloorStore {
    /// Creates the session store with the fixed ground and upper floors.
    pub fn new() -> Self {
        Self::with_floors(vec![Floor::new("1F", "Ground floor"), Floor::new("2F", "Upper floor")])
    }

    /// Creates a store from an explicit floor list. The first floor becomes
    /// active.
    pub fn with_floors(floors: Vec<Floor>) -> Self {
        let active = floors.first().map(|f| f.id.clone()).unwrap_or_default();
        Self { floors, active }
    }

    /// The full floor list, plain data ready for persistence.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn active_floor_id(&self) -> &str {
        &self.active
    }

    /// Switches the active floor. Unknown ids are rejected.
    pub fn set_active_floor(&mut self, floor_id: &str) -> Result<()> {
        if self.floors.iter().any(|f| f.id == floor_id) {
            self.active = floor_id.to_string();
            Ok(())
        } else {
            Err(MutationError::UnknownFloor {
                id: floor_id.to_string(),
            })
        }
    }

    pub fn floor(&self, floor_id: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == floor_id)
    }

    fn floor_mut(&mut self, floor_id: &str) -> Result<&mut Floor> {
        self.floors
            .iter_mut()
            .find(|f| f.id == floor_id)
            .ok_or_else(|| MutationError::UnknownFloor {
                id: floor_id.to_string(),
            })
    }

    /// Elements of a floor in draw order. Empty for unknown floors.
    pub fn elements(&self, floor_id: &str) -> &[Element] {
        self.floor(floor_id).map(|f| f.elements.as_slice()).unwrap_or(&[])
    }

    pub fn element(&self, floor_id: &str, element_id: ElementId) -> Option<&Element> {
        self.floor(floor_id)?
            .elements
            .iter()
            .find(|e| e.id == element_id)
    }

    fn element_mut(&mut self, floor_id: &str, element_id: ElementId) -> Result<&mut Element> {
        let floor_id_owned = floor_id.to_string();
        self.floor_mut(floor_id)?
            .elements
            .iter_mut()
            .find(|e| e.id == element_id)
            .ok_or(MutationError::UnknownElement {
                floor_id: floor_id_owned,
            })
    }

    /// Appends an element to a floor and returns its id.
    pub fn add_element(&mut self, floor_id: &str, element: Element) -> Result<ElementId> {
        let id = element.id;
        self.floor_mut(floor_id)?.elements.push(element);
        Ok(id)
    }

    /// Seeds a floor from a previously saved element list, replacing its
    /// current contents. A missing list is the caller's "empty floor" case,
    /// not an error.
    pub fn seed(&mut self, floor_id: &str, elements: Vec<Element>) -> Result<()> {
        self.floor_mut(floor_id)?.elements = elements;
        Ok(())
    }

    /// Merges a patch into an element, running model validation. Position
    /// and footprint values are committed as given; snapping convenience
    /// lives in the `move_`/`resize_` wrappers.
    pub fn update_element(
        &mut self,
        floor_id: &str,
        element_id: ElementId,
        patch: ElementPatch,
    ) -> Result<()> {
        let element = self.element_mut(floor_id, element_id)?;
        if let Some((w, h)) = patch.footprint_px {
            element.set_footprint_px(w, h)?;
        }
        if let Some(position) = patch.position {
            element.position = position;
        }
        if let Some(rotation) = patch.rotation {
            element.rotation = rotation.rem_euclid(360.0);
        }
        Ok(())
    }

    /// Updates one numeric mm property through the element model's
    /// validation, keeping mm and px representations consistent.
    pub fn update_property(
        &mut self,
        floor_id: &str,
        element_id: ElementId,
        key: PropertyKey,
        value_mm: f64,
    ) -> Result<()> {
        self.element_mut(floor_id, element_id)?
            .update_property(key, value_mm)
    }

    /// Removes an element and returns it. The caller owns clearing any
    /// selection that pointed at it.
    pub fn remove_element(&mut self, floor_id: &str, element_id: ElementId) -> Result<Element> {
        let floor_id_owned = floor_id.to_string();
        let floor = self.floor_mut(floor_id)?;
        let index = floor
            .elements
            .iter()
            .position(|e| e.id == element_id)
            .ok_or(MutationError::UnknownElement {
                floor_id: floor_id_owned,
            })?;
        Ok(floor.elements.remove(index))
    }

    /// Moves an element, snapping the committed position to the grid.
    pub fn move_element(
        &mut self,
        floor_id: &str,
        element_id: ElementId,
        position: Point,
    ) -> Result<()> {
        self.update_element(
            floor_id,
            element_id,
            ElementPatch {
                position: Some(snap_point(position)),
                ..Default::default()
            },
        )
    }

    /// Resizes an element's plan footprint, snapping both dimensions to the
    /// grid. Degenerate (zero-cell) results are rejected by the model.
    pub fn resize_element(
        &mut self,
        floor_id: &str,
        element_id: ElementId,
        width_px: f64,
        height_px: f64,
    ) -> Result<()> {
        self.update_element(
            floor_id,
            element_id,
            ElementPatch {
                footprint_px: Some((snap_px(width_px), snap_px(height_px))),
                ..Default::default()
            },
        )
    }

    /// Rotates an element by a delta in degrees.
    pub fn rotate_element(
        &mut self,
        floor_id: &str,
        element_id: ElementId,
        delta_deg: f64,
    ) -> Result<()> {
        self.element_mut(floor_id, element_id)?.rotate(delta_deg);
        Ok(())
    }
}

impl Default for FloorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use uuid::Uuid;

    #[test]
    fn test_fixed_floors_at_start() {
        let store = FloorStore::new();
        assert_eq!(store.floors().len(), 2);
        assert_eq!(store.active_floor_id(), "1F");
        assert!(store.floor("2F").is_some());
    }

    #[test]
    fn test_add_to_unknown_floor_is_reported() {
        let mut store = FloorStore::new();
        let wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        let err = store.add_element("9F", wall).unwrap_err();
        assert!(matches!(err, MutationError::UnknownFloor { .. }));
        assert!(store.elements("1F").is_empty());
    }

    #[test]
    fn test_update_after_delete_is_a_no_op() {
        let mut store = FloorStore::new();
        let wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        let id = store.add_element("1F", wall).unwrap();
        store.remove_element("1F", id).unwrap();

        let err = store
            .update_element("1F", id, ElementPatch::default())
            .unwrap_err();
        assert!(matches!(err, MutationError::UnknownElement { .. }));
    }

    #[test]
    fn test_move_snaps_position() {
        let mut store = FloorStore::new();
        let wall = Element::new(ElementKind::Wall, Point::new(1000.0, 1000.0));
        let id = store.add_element("1F", wall).unwrap();

        store
            .move_element("1F", id, Point::new(1033.0, 1012.0))
            .unwrap();
        let moved = store.element("1F", id).unwrap();
        assert_eq!(moved.position, Point::new(1035.0, 990.0));
    }

    #[test]
    fn test_resize_snaps_and_syncs_mm() {
        let mut store = FloorStore::new();
        let wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        let id = store.add_element("1F", wall).unwrap();

        store.resize_element("1F", id, 47.0, 182.0).unwrap();
        let resized = store.element("1F", id).unwrap();
        assert_eq!(resized.footprint.width, 45.0);
        assert_eq!(resized.footprint.height, 180.0);
        let (thickness, length, _) = resized.dimensions_mm();
        assert_eq!(thickness, 450.0);
        assert_eq!(length, 1800.0);
    }

    #[test]
    fn test_rotate_wrapper() {
        let mut store = FloorStore::new();
        let wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        let id = store.add_element("1F", wall).unwrap();
        store.rotate_element("1F", id, 90.0).unwrap();
        store.rotate_element("1F", id, 270.0).unwrap();
        assert_eq!(store.element("1F", id).unwrap().rotation, 0.0);
    }

    #[test]
    fn test_elements_are_floor_scoped() {
        let mut store = FloorStore::new();
        let wall = Element::new(ElementKind::Wall, Point::new(0.0, 0.0));
        let id = store.add_element("1F", wall).unwrap();
        assert!(store.element("2F", id).is_none());
        assert_eq!(store.elements("1F").len(), 1);
    }

    #[test]
    fn test_unknown_element_lookup_is_none() {
        let store = FloorStore::new();
        assert!(store.element("1F", Uuid::new_v4()).is_none());
    }
}
