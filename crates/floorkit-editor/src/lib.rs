//! # Floorkit Editor
//!
//! The 2D plan editor: the element model (walls, doors, windows with
//! millimetre properties and editor-pixel footprints), the floor store,
//! selection, the plan viewport, the pointer/wheel interaction state
//! machine, the plan projection adapter, and JSON persistence.
//!
//! The crate is renderer-agnostic. A host adapts its native input events
//! into [`controller::events`] types, feeds them to the
//! [`controller::InteractionController`], and draws the
//! [`plan::PlanPrimitive`] list the adapter produces.

pub mod controller;
pub mod floor;
pub mod model;
pub mod plan;
pub mod selection;
pub mod serialization;
pub mod viewport;

pub use controller::events::{Modifiers, PointerEvent, PointerKind, Tool, WheelEvent};
pub use controller::{EditorState, InteractionController};
pub use floor::{ElementPatch, Floor, FloorStore};
pub use model::{Element, ElementId, ElementKind, ElementProps, Footprint, PropertyKey};
pub use plan::{plan_primitives, PlanPrimitive, PlanStyle};
pub use selection::SelectionManager;
pub use viewport::PlanViewport;
