//! Structured trace events.
//!
//! The geometry core stays side-effect-free: instead of logging from inside
//! geometry code, the editor emits typed events through an injectable
//! `TraceSink`. The default sink forwards to `tracing`; tests inject
//! `NullSink` (or their own recorder) to keep assertions deterministic.

use std::fmt;

/// A structured event emitted by the editor around floor-store mutations
/// and view-parameter clamping.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// An element was committed to a floor.
    ElementAdded { floor_id: String, element_id: String },
    /// An element was mutated (move/resize/rotate/property edit).
    ElementUpdated { floor_id: String, element_id: String },
    /// An element was removed from a floor.
    ElementRemoved { floor_id: String, element_id: String },
    /// A mutation was rejected and the prior state retained.
    MutationRejected { reason: String },
    /// A zoom or camera-distance request was clamped into range.
    ZoomClamped { requested: f64, clamped: f64 },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementAdded {
                floor_id,
                element_id,
            } => write!(f, "added {element_id} on {floor_id}"),
            Self::ElementUpdated {
                floor_id,
                element_id,
            } => write!(f, "updated {element_id} on {floor_id}"),
            Self::ElementRemoved {
                floor_id,
                element_id,
            } => write!(f, "removed {element_id} on {floor_id}"),
            Self::MutationRejected { reason } => write!(f, "rejected: {reason}"),
            Self::ZoomClamped { requested, clamped } => {
                write!(f, "zoom clamped {requested} -> {clamped}")
            }
        }
    }
}

/// Receiver for trace events. Implementations must not mutate engine state.
pub trait TraceSink {
    fn emit(&self, event: TraceEvent);
}

/// Default sink: forwards events to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&self, event: TraceEvent) {
        match &event {
            TraceEvent::MutationRejected { .. } | TraceEvent::ZoomClamped { .. } => {
                tracing::warn!(target: "floorkit", "{event}");
            }
            _ => {
                tracing::debug!(target: "floorkit", "{event}");
            }
        }
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn emit(&self, _event: TraceEvent) {}
}
