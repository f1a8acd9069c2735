//! JSON persistence for floors and elements.
//!
//! Element properties serialize as a tagged union (`"type": "wall"` etc.),
//! so a saved plan is self-describing. Loading seed data is deliberately
//! lenient: a missing or malformed payload yields an empty plan rather
//! than an error, since a fresh session has nothing to restore.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::floor::{Floor, FloorStore};
use crate::model::Element;

/// On-disk document wrapping the floors and the active floor id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub active_floor: String,
    pub floors: Vec<Floor>,
}

/// Serializes the full store to pretty-printed JSON.
pub fn store_to_json(store: &FloorStore) -> serde_json::Result<String> {
    let doc = PlanDocument {
        active_floor: store.active_floor_id().to_string(),
        floors: store.floors().to_vec(),
    };
    serde_json::to_string_pretty(&doc)
}

/// Restores a store from a document produced by [`store_to_json`].
pub fn store_from_json(json: &str) -> serde_json::Result<FloorStore> {
    let doc: PlanDocument = serde_json::from_str(json)?;
    let mut store = FloorStore::with_floors(doc.floors);
    if store.set_active_floor(&doc.active_floor).is_err() {
        warn!(
            target: "floorkit",
            floor_id = %doc.active_floor,
            "saved active floor no longer exists, keeping default"
        );
    }
    Ok(store)
}

/// Serializes one floor's elements, e.g. for copy/paste or seed fixtures.
pub fn elements_to_json(elements: &[Element]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(elements)
}

/// Parses a seed element list. Returns an empty list when the payload is
/// absent or unreadable instead of failing the session.
pub fn elements_from_json(json: Option<&str>) -> Vec<Element> {
    let Some(json) = json else {
        return Vec::new();
    };
    match serde_json::from_str(json) {
        Ok(elements) => elements,
        Err(err) => {
            warn!(target: "floorkit", error = %err, "ignoring unreadable seed elements");
            Vec::new()
        }
    }
}
