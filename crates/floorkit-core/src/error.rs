//! Error handling for Floorkit
//!
//! The engine has no fatal conditions: every rejected mutation leaves the
//! prior state intact and reports why through `MutationError`, so the
//! interaction loop can surface a hint (or ignore it) without ever crashing.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Mutation error type
///
/// Describes why a floor-store or element mutation was rejected. Callers
/// treat these as reported no-ops, not exceptions: deletion races under
/// rapid interaction make `UnknownElement` an expected outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    /// The floor id is not part of the session
    #[error("Unknown floor: {id}")]
    UnknownFloor {
        /// The floor id that was requested.
        id: String,
    },

    /// The element id does not exist on the floor (possibly already deleted)
    #[error("Unknown element on floor {floor_id}")]
    UnknownElement {
        /// The floor the lookup ran against.
        floor_id: String,
    },

    /// A dimension-bearing property was set to a non-positive value
    #[error("Dimension '{key}' must be positive, got {value}")]
    NonPositiveDimension {
        /// The property key that was updated.
        key: String,
        /// The rejected value in millimeters.
        value: f64,
    },

    /// A window height range update would invert or collapse the range
    #[error("Window height range inverted: from {height_from} to {height_to}")]
    InvertedHeightRange {
        /// Sill height from floor, in millimeters.
        height_from: f64,
        /// Head height from floor, in millimeters.
        height_to: f64,
    },

    /// The property key does not apply to this element kind
    #[error("Property '{key}' does not apply to a {kind}")]
    PropertyNotApplicable {
        /// The property key that was updated.
        key: String,
        /// The element kind name.
        kind: String,
    },

    /// Selection was requested while a placement tool is active
    #[error("Cannot select while the {tool} tool is active")]
    SelectionUnavailable {
        /// The active placement tool name.
        tool: String,
    },
}

/// Result alias for engine mutations.
pub type Result<T> = std::result::Result<T, MutationError>;
