//! Workspace store for coordinating items and their pane trees
//!
//! The store owns the ordered item list and wraps every tree mutation with
//! item-level policy: locating the right item, enforcing the pane cap,
//! repairing focus, and handling item removal/creation side effects.
//!
//! Sub-modules:
//! - [`items`]: Item CRUD, reorder, rename, dissolve, detach-to-item.
//! - [`panes`]: Pane mutations within an item (split, close, move, resize).
//! - [`queries`]: Derived read-only queries over items and sessions.
//! - [`sessions`]: Reconciliation against the external session collection.
//! - [`intent`]: Routing of resolved drag-and-drop decisions.

mod intent;
mod items;
mod panes;
mod queries;
mod sessions;

pub use intent::{DropIntent, DropKind, DropSource};
pub use sessions::{SessionRecord, SessionStatus};

use super::item::{ItemId, WorkspaceItem};
use crate::pane::PaneId;

/// Owns the workspace item list and all mutation entry points
pub struct WorkspaceStore {
    /// All workspace items, in sidebar order
    pub(super) items: Vec<WorkspaceItem>,
    /// Currently active item ID
    pub(super) active_item_id: Option<ItemId>,
    /// Counter for generating unique item IDs
    pub(super) next_item_id: ItemId,
    /// Counter for generating unique pane IDs
    pub(super) next_pane_id: PaneId,
}

impl WorkspaceStore {
    /// Create a new empty workspace store
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            active_item_id: None,
            next_item_id: 1,
            next_pane_id: 1,
        }
    }

    /// Allocate the next pane ID
    pub(crate) fn alloc_pane_id(&mut self) -> PaneId {
        let id = self.next_pane_id;
        self.next_pane_id += 1;
        id
    }

    /// Allocate the next item ID
    pub(super) fn alloc_item_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Mutable access to the pane-id counter (used when decoding trees)
    pub(crate) fn next_pane_id_mut(&mut self) -> &mut PaneId {
        &mut self.next_pane_id
    }

    /// Get all items as a slice, in sidebar order
    pub fn items(&self) -> &[WorkspaceItem] {
        &self.items
    }

    /// Get the number of items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the workspace has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID
    pub fn get_item(&self, id: ItemId) -> Option<&WorkspaceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Get a mutable reference to an item by ID
    pub(crate) fn get_item_mut(&mut self, id: ItemId) -> Option<&mut WorkspaceItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Index of an item in sidebar order
    pub fn item_index(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Get the active item ID
    pub fn active_item_id(&self) -> Option<ItemId> {
        self.active_item_id
    }

    /// Get a reference to the active item
    pub fn active_item(&self) -> Option<&WorkspaceItem> {
        self.active_item_id.and_then(|id| self.get_item(id))
    }

    /// Get index of the active item (0-based)
    pub fn active_item_index(&self) -> Option<usize> {
        self.active_item_id.and_then(|id| self.item_index(id))
    }

    /// Re-point the active item after the item at `old_index` was removed
    ///
    /// The item that slid into the removed item's old index becomes active,
    /// or the new last item if the removed one was last, or nothing if the
    /// list is now empty.
    pub(super) fn reassign_active_after_removal(&mut self, removed_id: ItemId, old_index: usize) {
        if self.active_item_id == Some(removed_id) {
            self.active_item_id = if self.items.is_empty() {
                None
            } else {
                let new_idx = old_index.min(self.items.len().saturating_sub(1));
                Some(self.items[new_idx].id)
            };
        }
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}
