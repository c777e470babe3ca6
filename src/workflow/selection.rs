//! List selection management
//!
//! Tracks which entities of a displayed list are checked for a bulk
//! action. Selection is by identity (`entity_id`), never by list position,
//! so reconciliation is independent of display order.

use tracing::debug;

/// Anything selectable in a displayed list
pub trait Identified {
    fn entity_id(&self) -> i64;
}

/// A set of selected entities, keyed by identity.
///
/// `toggle_all` captures a snapshot of the current list; if the list
/// mutates before the bulk action runs, the selection is intentionally not
/// re-synced.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    items: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified + Clone> Selection<T> {
    /// Create an empty selection
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add the entity if absent, remove it if present
    pub fn toggle_one(&mut self, entity: &T) {
        let id = entity.entity_id();
        if let Some(pos) = self.items.iter().position(|e| e.entity_id() == id) {
            self.items.remove(pos);
            debug!(entity_id = id, "Entity deselected");
        } else {
            self.items.push(entity.clone());
            debug!(entity_id = id, "Entity selected");
        }
    }

    /// Select a full copy of the current list, or clear the selection
    pub fn toggle_all(&mut self, all_entities: &[T], checked: bool) {
        if checked {
            self.items = all_entities.to_vec();
        } else {
            self.items.clear();
        }
        debug!(selected = self.items.len(), "Select-all toggled");
    }

    /// Identity membership test
    pub fn is_selected(&self, entity: &T) -> bool {
        self.items
            .iter()
            .any(|e| e.entity_id() == entity.entity_id())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|e| e.entity_id()).collect()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(i64);

    impl Identified for Item {
        fn entity_id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_toggle_one_adds_and_removes() {
        let mut selection = Selection::new();
        let item = Item(3);

        selection.toggle_one(&item);
        assert!(selection.is_selected(&item));
        assert_eq!(selection.len(), 1);

        selection.toggle_one(&item);
        assert!(!selection.is_selected(&item));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_snapshots_current_list() {
        let mut selection = Selection::new();
        let mut list = vec![Item(1), Item(2)];

        selection.toggle_all(&list, true);
        assert_eq!(selection.ids(), vec![1, 2]);

        // later list growth does not re-sync the snapshot
        list.push(Item(3));
        assert_eq!(selection.ids(), vec![1, 2]);
        assert!(!selection.is_selected(&Item(3)));
    }

    #[test]
    fn test_toggle_all_unchecked_clears() {
        let mut selection = Selection::new();
        let list = vec![Item(1), Item(2)];
        selection.toggle_all(&list, true);
        selection.toggle_all(&list, false);
        assert!(selection.is_empty());
    }
}
