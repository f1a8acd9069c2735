//! Renderer-neutral input events.
//!
//! Each rendering library's native pointer/wheel callbacks are adapted into
//! these types at the boundary, keeping the state machine testable without
//! any rendering library loaded.

use crate::model::ElementKind;

/// Pointer event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// A normalized pointer event in view-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }
}

/// A normalized wheel/pinch event in view-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub x: f64,
    pub y: f64,
}

/// The active editor tool. `Select` manipulates existing elements; the
/// placement tools create new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Wall,
    Door,
    Window,
}

impl Tool {
    /// The element kind this tool places, `None` for `Select`.
    pub fn placed_kind(&self) -> Option<ElementKind> {
        match self {
            Self::Select => None,
            Self::Wall => Some(ElementKind::Wall),
            Self::Door => Some(ElementKind::Door),
            Self::Window => Some(ElementKind::Window),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
        }
    }
}
