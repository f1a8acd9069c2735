//! # Floorkit Core
//!
//! Core types and utilities for the Floorkit floor-plan engine.
//! Provides the unit-conversion pipeline, the architectural grid snap,
//! shared geometry types, the mutation error taxonomy, and the
//! observability hook used by the editor and the projection adapters.

pub mod constants;
pub mod error;
pub mod grid;
pub mod trace;
pub mod types;
pub mod units;

pub use error::{MutationError, Result};
pub use grid::{snap_mm, snap_point, snap_px};
pub use trace::{NullSink, TraceEvent, TraceSink, TracingSink};
pub use types::{Color, Point};
pub use units::{editor_px_to_mm, meters_to_mm, mm_to_editor_px, mm_to_meters};
