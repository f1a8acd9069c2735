//! Selection state.
//!
//! At most one element is selected at a time, globally for the session.
//! Selecting a new element implicitly deselects the previous one; the
//! interaction controller additionally refuses selection while a placement
//! tool is active.

use crate::model::ElementId;

/// Tracks the single selected element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Option<ElementId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// The currently selected element, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Selects `id`, returning the id that was deselected to make room.
    pub fn select(&mut self, id: ElementId) -> Option<ElementId> {
        self.selected.replace(id).filter(|prev| *prev != id)
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clears the selection if it points at `id`; used when an element is
    /// removed from the store.
    pub fn clear_if(&mut self, id: ElementId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_selection_is_exclusive() {
        let mut sel = SelectionManager::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(sel.select(a), None);
        assert_eq!(sel.select(b), Some(a));
        assert!(sel.is_selected(b));
        assert!(!sel.is_selected(a));
    }

    #[test]
    fn test_clear_if_only_matches_own_id() {
        let mut sel = SelectionManager::new();
        let a = Uuid::new_v4();
        sel.select(a);
        sel.clear_if(Uuid::new_v4());
        assert!(sel.is_selected(a));
        sel.clear_if(a);
        assert_eq!(sel.selected_id(), None);
    }
}
