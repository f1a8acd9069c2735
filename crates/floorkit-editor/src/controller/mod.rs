//! Interaction controller.
//!
//! Translates normalized pointer/wheel events into floor-store mutations,
//! enforcing the snap-on-commit and selection-exclusivity invariants. The
//! state machine:
//!
//! ```text
//! Idle(tool) --down on selected--> Dragging --up--> Idle(select), move committed snapped
//! Idle(placement tool) --down--> Placing --up--> Idle(same tool), element committed snapped
//! any --escape / up off-surface--> Idle, no store mutation
//! ```
//!
//! Mid-drag frames only update a transient position for visual feedback;
//! nothing reaches the store until the gesture commits.

pub mod events;

pub use events::{Modifiers, PointerEvent, PointerKind, Tool, WheelEvent};

use floorkit_core::{snap_point, Point, TraceEvent, TraceSink, TracingSink};
use floorkit_core::{MutationError, Result};

use crate::floor::FloorStore;
use crate::model::{Element, ElementId};
use crate::selection::SelectionManager;
use crate::viewport::PlanViewport;

/// Hit-test tolerance in view pixels, converted to world units per event.
const HIT_TOLERANCE_VIEW_PX: f64 = 3.0;

/// Zoom step per wheel notch.
const WHEEL_ZOOM_STEP: f64 = 1.2;

/// Controller state. Dragging and placing keep the raw, unsnapped pointer
/// position; only the committed position is snapped.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    Idle {
        tool: Tool,
    },
    Dragging {
        element_id: ElementId,
        grab_offset: Point,
        raw_position: Point,
    },
    Placing {
        tool: Tool,
        pending_position: Point,
    },
}

/// Translates input events into floor-store mutations.
pub struct InteractionController {
    state: EditorState,
    viewport: PlanViewport,
    selection: SelectionManager,
    sink: Box<dyn TraceSink>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    /// Creates a controller with an injected trace sink.
    pub fn with_sink(sink: Box<dyn TraceSink>) -> Self {
        Self {
            state: EditorState::Idle { tool: Tool::Select },
            viewport: PlanViewport::default(),
            selection: SelectionManager::new(),
            sink,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The active tool. Transient drag/placement states keep reporting the
    /// tool they will return to.
    pub fn tool(&self) -> Tool {
        match &self.state {
            EditorState::Idle { tool } => *tool,
            EditorState::Dragging { .. } => Tool::Select,
            EditorState::Placing { tool, .. } => *tool,
        }
    }

    pub fn viewport(&self) -> &PlanViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut PlanViewport {
        &mut self.viewport
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selection.selected_id()
    }

    /// Switches tool. Entering a placement tool leaves selection mode, so
    /// the current selection is cleared (the two modes are mutually
    /// exclusive).
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != Tool::Select {
            self.selection.clear();
        }
        self.state = EditorState::Idle { tool };
    }

    /// Selects an element by id. Refused while a placement tool is active.
    pub fn select_element(&mut self, store: &FloorStore, id: ElementId) -> Result<()> {
        let tool = self.tool();
        if tool != Tool::Select {
            return Err(MutationError::SelectionUnavailable {
                tool: tool.name().into(),
            });
        }
        if store.element(store.active_floor_id(), id).is_none() {
            return Err(MutationError::UnknownElement {
                floor_id: store.active_floor_id().to_string(),
            });
        }
        self.selection.select(id);
        Ok(())
    }

    /// Feeds one pointer event through the state machine.
    pub fn pointer_event(&mut self, store: &mut FloorStore, event: PointerEvent) {
        self.prune_selection(store);
        match event.kind {
            PointerKind::Down => self.pointer_down(store, event),
            PointerKind::Move => self.pointer_move(event),
            PointerKind::Up => self.pointer_up(store, event),
        }
    }

    fn pointer_down(&mut self, store: &mut FloorStore, event: PointerEvent) {
        let world = self.viewport.view_to_world(event.x, event.y);
        match self.state.clone() {
            EditorState::Idle { tool: Tool::Select } => {
                let tolerance = HIT_TOLERANCE_VIEW_PX / self.viewport.scale();
                match self.hit_test(store, world, tolerance) {
                    Some(id) if self.selection.is_selected(id) => {
                        if let Some(element) = store.element(store.active_floor_id(), id) {
                            self.state = EditorState::Dragging {
                                element_id: id,
                                grab_offset: Point::new(
                                    world.x - element.position.x,
                                    world.y - element.position.y,
                                ),
                                raw_position: element.position,
                            };
                        }
                    }
                    Some(id) => {
                        self.selection.select(id);
                    }
                    None => {
                        // Empty-canvas click: clear selection, touch nothing
                        // in the store.
                        self.selection.clear();
                    }
                }
            }
            EditorState::Idle { tool } => {
                self.state = EditorState::Placing {
                    tool,
                    pending_position: world,
                };
            }
            // A second down mid-gesture is noise from the input layer.
            EditorState::Dragging { .. } | EditorState::Placing { .. } => {}
        }
    }

    fn pointer_move(&mut self, event: PointerEvent) {
        let world = self.viewport.view_to_world(event.x, event.y);
        match &mut self.state {
            EditorState::Dragging {
                grab_offset,
                raw_position,
                ..
            } => {
                *raw_position = Point::new(world.x - grab_offset.x, world.y - grab_offset.y);
            }
            EditorState::Placing {
                pending_position, ..
            } => {
                *pending_position = world;
            }
            EditorState::Idle { .. } => {}
        }
    }

    fn pointer_up(&mut self, store: &mut FloorStore, event: PointerEvent) {
        let on_surface = self.viewport.contains_view_point(event.x, event.y);
        match self.state.clone() {
            EditorState::Dragging {
                element_id,
                raw_position,
                ..
            } => {
                self.state = EditorState::Idle { tool: Tool::Select };
                if !on_surface {
                    return;
                }
                let floor_id = store.active_floor_id().to_string();
                match store.move_element(&floor_id, element_id, raw_position) {
                    Ok(()) => self.sink.emit(TraceEvent::ElementUpdated {
                        floor_id,
                        element_id: element_id.to_string(),
                    }),
                    Err(err) => self.report_rejection(err),
                }
            }
            EditorState::Placing {
                tool,
                pending_position,
            } => {
                // Tool stays active so placements can repeat.
                self.state = EditorState::Idle { tool };
                if !on_surface {
                    return;
                }
                self.commit_placement(store, tool, pending_position);
            }
            EditorState::Idle { .. } => {}
        }
    }

    /// Wheel zoom at any state: zoom-to-cursor, clamped, state unchanged.
    /// Zero-delta events (trackpads emit them at gesture edges) are ignored.
    pub fn wheel_event(&mut self, event: WheelEvent) {
        if event.delta_y == 0.0 {
            return;
        }
        let factor = if event.delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        let requested = self.viewport.scale() * factor;
        let applied = self.viewport.zoom_about(event.x, event.y, requested);
        if (applied - requested).abs() > f64::EPSILON {
            self.sink.emit(TraceEvent::ZoomClamped {
                requested,
                clamped: applied,
            });
        }
    }

    /// Aborts an in-flight drag or placement (Escape, or pointer-up outside
    /// a valid target reported by the embedder). No store mutation occurs.
    pub fn cancel(&mut self) {
        self.state = match &self.state {
            EditorState::Dragging { .. } => EditorState::Idle { tool: Tool::Select },
            EditorState::Placing { tool, .. } => EditorState::Idle { tool: *tool },
            idle @ EditorState::Idle { .. } => idle.clone(),
        };
    }

    /// Drag-from-palette placement: commits one element at the drop point
    /// and switches back to the select tool.
    pub fn place_from_palette(
        &mut self,
        store: &mut FloorStore,
        tool: Tool,
        view_x: f64,
        view_y: f64,
    ) -> Option<ElementId> {
        let world = self.viewport.view_to_world(view_x, view_y);
        let id = self.commit_placement(store, tool, world);
        self.state = EditorState::Idle { tool: Tool::Select };
        id
    }

    /// Deletes the selected element, clearing the selection.
    pub fn delete_selected(&mut self, store: &mut FloorStore) {
        let Some(id) = self.selection.selected_id() else {
            return;
        };
        let floor_id = store.active_floor_id().to_string();
        match store.remove_element(&floor_id, id) {
            Ok(_) => self.sink.emit(TraceEvent::ElementRemoved {
                floor_id,
                element_id: id.to_string(),
            }),
            Err(err) => self.report_rejection(err),
        }
        self.selection.clear_if(id);
    }

    /// The active floor's elements with any in-flight drag position applied.
    /// Renderers draw this snapshot; the store itself stays unchanged until
    /// the gesture commits. A selection left stale by a direct store removal
    /// is dropped here.
    pub fn render_elements(&mut self, store: &FloorStore) -> Vec<Element> {
        self.prune_selection(store);
        let mut elements = store.elements(store.active_floor_id()).to_vec();
        if let EditorState::Dragging {
            element_id,
            raw_position,
            ..
        } = &self.state
        {
            if let Some(element) = elements.iter_mut().find(|e| e.id == *element_id) {
                element.position = *raw_position;
            }
        }
        elements
    }

    fn commit_placement(
        &mut self,
        store: &mut FloorStore,
        tool: Tool,
        world: Point,
    ) -> Option<ElementId> {
        let kind = tool.placed_kind()?;
        let mut element = Element::new(kind, world);
        element.position = snap_point(element.position);
        let floor_id = store.active_floor_id().to_string();
        match store.add_element(&floor_id, element) {
            Ok(id) => {
                self.sink.emit(TraceEvent::ElementAdded {
                    floor_id,
                    element_id: id.to_string(),
                });
                Some(id)
            }
            Err(err) => {
                self.report_rejection(err);
                None
            }
        }
    }

    /// Clears a selection whose element is gone from the active floor.
    /// Removal through `delete_selected` handles this itself; this covers an
    /// embedder mutating the store directly.
    fn prune_selection(&mut self, store: &FloorStore) {
        if let Some(id) = self.selection.selected_id() {
            if store.element(store.active_floor_id(), id).is_none() {
                self.selection.clear_if(id);
            }
        }
    }

    fn hit_test(&self, store: &FloorStore, world: Point, tolerance: f64) -> Option<ElementId> {
        // Topmost first: reverse draw order.
        store
            .elements(store.active_floor_id())
            .iter()
            .rev()
            .find(|e| e.contains(world, tolerance))
            .map(|e| e.id)
    }

    fn report_rejection(&self, err: MutationError) {
        self.sink.emit(TraceEvent::MutationRejected {
            reason: err.to_string(),
        });
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
