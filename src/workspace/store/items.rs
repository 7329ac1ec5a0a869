//! Item-level operations for the workspace store
//!
//! Handles creating, removing, reordering, renaming, and dissolving items,
//! and keeps the active-item pointer valid through every change.

use super::WorkspaceStore;
use crate::pane::{MAX_PANES, Pane, PaneId, PaneNode, PreviewKind, SessionId};
use crate::workspace::item::{ItemId, WorkspaceItem};

impl WorkspaceStore {
    /// Append a new item owning `tree` and return its ID
    ///
    /// Focus defaults to the tree's first leaf when `focused_pane_id` is
    /// omitted or stale. The pane-id counter is bumped past the tree's
    /// highest id so later allocations never collide with a pre-built tree.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        tree: PaneNode,
        focused_pane_id: Option<PaneId>,
    ) -> ItemId {
        if let Some(max_id) = tree.all_pane_ids().into_iter().max()
            && max_id >= self.next_pane_id
        {
            self.next_pane_id = max_id + 1;
        }
        if tree.pane_count() > MAX_PANES {
            log::warn!(
                "Adding item with {} panes, above the split cap of {}",
                tree.pane_count(),
                MAX_PANES
            );
        }

        let id = self.alloc_item_id();
        let item = WorkspaceItem::new(id, name, tree, focused_pane_id);
        self.items.push(item);
        self.active_item_id = Some(id);

        log::info!("Created item {} (total: {})", id, self.items.len());
        id
    }

    /// Create a single-pane item bound to a terminal session
    pub fn add_terminal_item(&mut self, session_id: impl Into<SessionId>) -> ItemId {
        let pane_id = self.alloc_pane_id();
        let name = format!("Terminal {}", self.items.len() + 1);
        self.add_item(
            name,
            PaneNode::leaf(Pane::terminal(pane_id, session_id)),
            Some(pane_id),
        )
    }

    /// Create a single-pane item showing static preview content
    pub fn add_preview_item(&mut self, kind: PreviewKind, source: impl Into<String>) -> ItemId {
        let pane_id = self.alloc_pane_id();
        let name = format!("Preview {}", self.items.len() + 1);
        self.add_item(
            name,
            PaneNode::leaf(Pane::preview(pane_id, kind, source)),
            Some(pane_id),
        )
    }

    /// Remove an item by ID
    ///
    /// Returns true if the item existed. If it was active, the item at its
    /// old index (or the new last item) becomes active.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(idx) = self.item_index(id) else {
            return false;
        };

        log::info!("Removing item {} (index {})", id, idx);
        self.items.remove(idx);
        self.reassign_active_after_removal(id, idx);
        true
    }

    /// Move an item to a new position in sidebar order
    ///
    /// Returns true if the order changed. Out-of-range indices and
    /// `from_index == to_index` are no-ops: a drop landing where the drag
    /// started must leave the list byte-identical.
    pub fn reorder_item(&mut self, from_index: usize, to_index: usize) -> bool {
        if from_index >= self.items.len() || to_index >= self.items.len() {
            return false;
        }
        if from_index == to_index {
            return false;
        }

        let item = self.items.remove(from_index);
        let id = item.id;
        self.items.insert(to_index, item);
        log::debug!("Moved item {} from index {} to {}", id, from_index, to_index);
        true
    }

    /// Rename an item and mark it as user-named
    pub fn rename_item(&mut self, id: ItemId, name: impl Into<String>) {
        if let Some(item) = self.get_item_mut(id) {
            item.name = name.into();
            item.user_renamed = true;
            log::debug!("Renamed item {}", id);
        }
    }

    /// Switch the active item; `None` clears it
    ///
    /// A stale item ID is ignored rather than dangling the pointer.
    pub fn set_active_item(&mut self, id: Option<ItemId>) {
        match id {
            Some(id) if self.get_item(id).is_none() => {}
            _ => self.active_item_id = id,
        }
    }

    /// Replace a multi-pane item with one single-pane item per leaf
    ///
    /// The new items land contiguously at the dissolved item's position, in
    /// left-to-right leaf order, so neighbors keep their relative order. If
    /// the dissolved item was active, the first new item becomes active.
    /// Single-pane items have nothing to dissolve and are left alone.
    pub fn dissolve_item(&mut self, id: ItemId) -> Vec<ItemId> {
        let Some(idx) = self.item_index(id) else {
            return Vec::new();
        };
        if self.items[idx].pane_count() < 2 {
            return Vec::new();
        }

        let item = self.items.remove(idx);
        let was_active = self.active_item_id == Some(item.id);
        let panes = item.tree.into_panes();

        let mut new_ids = Vec::with_capacity(panes.len());
        for (offset, pane) in panes.into_iter().enumerate() {
            let new_id = self.alloc_item_id();
            let name = format!("Terminal {}", idx + offset + 1);
            let focused = Some(pane.id);
            let new_item = WorkspaceItem::new(new_id, name, PaneNode::leaf(pane), focused);
            self.items.insert(idx + offset, new_item);
            new_ids.push(new_id);
        }

        if was_active && let Some(&first) = new_ids.first() {
            self.active_item_id = Some(first);
        }

        log::info!(
            "Dissolved item {} into {} items (total: {})",
            id,
            new_ids.len(),
            self.items.len()
        );
        new_ids
    }

    /// Pull one pane out of an item and rehost it as its own item
    ///
    /// The new item is inserted right after the source item and becomes
    /// active. No-op on a single-pane item (the pane already is its own
    /// item) or a stale reference. Returns the new item's ID.
    pub fn detach_to_item(&mut self, item_id: ItemId, pane_id: PaneId) -> Option<ItemId> {
        let idx = self.item_index(item_id)?;
        if self.items[idx].pane_count() < 2 {
            return None;
        }

        let mut item = self.items.remove(idx);
        match item.tree.remove(pane_id) {
            crate::pane::RemoveResult::Removed {
                pane,
                rest: Some(rest),
            } => {
                item.tree = rest;
                item.repair_focus();
                self.items.insert(idx, item);

                let new_id = self.alloc_item_id();
                let name = format!("Terminal {}", idx + 2);
                let focused = Some(pane.id);
                let new_item = WorkspaceItem::new(new_id, name, PaneNode::leaf(pane), focused);
                self.items.insert(idx + 1, new_item);
                self.active_item_id = Some(new_id);

                log::info!("Detached pane {} of item {} into item {}", pane_id, item_id, new_id);
                Some(new_id)
            }
            // pane_count >= 2 means removal can't empty the tree
            crate::pane::RemoveResult::Removed { pane, rest: None } => {
                item.tree = PaneNode::leaf(pane);
                self.items.insert(idx, item);
                None
            }
            crate::pane::RemoveResult::NotFound(tree) => {
                item.tree = tree;
                self.items.insert(idx, item);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::store_with_terminals;
    use super::*;
    use crate::pane::SplitDirection;

    #[test]
    fn add_terminal_item_defaults() {
        let (store, ids) = store_with_terminals(1);
        let item = store.get_item(ids[0]).unwrap();
        assert_eq!(item.name, "Terminal 1");
        assert!(!item.user_renamed);
        assert!(item.is_single_pane());
        assert_eq!(item.focused_pane_id, item.tree.first_pane_id());
        assert_eq!(store.active_item_id(), Some(ids[0]));
    }

    #[test]
    fn add_item_bumps_pane_counter_past_prebuilt_tree() {
        let mut store = WorkspaceStore::new();
        let tree = PaneNode::split(
            SplitDirection::Vertical,
            0.5,
            PaneNode::leaf(Pane::terminal(10, "a")),
            PaneNode::leaf(Pane::terminal(11, "b")),
        );
        store.add_item("layout", tree, None);
        // Fresh allocations must not collide with ids 10/11
        let next = store.add_terminal_item("c");
        let pane_id = store.get_item(next).unwrap().tree.first_pane_id().unwrap();
        assert!(pane_id > 11);
    }

    #[test]
    fn add_item_stale_focus_falls_back_to_first_leaf() {
        let mut store = WorkspaceStore::new();
        let tree = PaneNode::leaf(Pane::terminal(1, "a"));
        let id = store.add_item("x", tree, Some(42));
        assert_eq!(store.get_item(id).unwrap().focused_pane_id, Some(1));
    }

    #[test]
    fn remove_middle_item_activates_successor() {
        let (mut store, ids) = store_with_terminals(3);
        store.set_active_item(Some(ids[1]));
        assert!(store.remove_item(ids[1]));
        // Item that slid into index 1 becomes active
        assert_eq!(store.active_item_id(), Some(ids[2]));
    }

    #[test]
    fn remove_last_item_activates_previous() {
        let (mut store, ids) = store_with_terminals(3);
        assert_eq!(store.active_item_id(), Some(ids[2]));
        assert!(store.remove_item(ids[2]));
        assert_eq!(store.active_item_id(), Some(ids[1]));
    }

    #[test]
    fn remove_only_item_clears_active() {
        let (mut store, ids) = store_with_terminals(1);
        assert!(store.remove_item(ids[0]));
        assert_eq!(store.active_item_id(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_inactive_item_keeps_active() {
        let (mut store, ids) = store_with_terminals(3);
        assert!(store.remove_item(ids[0]));
        assert_eq!(store.active_item_id(), Some(ids[2]));
    }

    #[test]
    fn remove_unknown_item_is_noop() {
        let (mut store, ids) = store_with_terminals(2);
        assert!(!store.remove_item(999));
        let current: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(current, ids);
    }

    #[test]
    fn reorder_item_moves_within_bounds() {
        let (mut store, ids) = store_with_terminals(4);
        assert!(store.reorder_item(0, 2));
        let current: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(current, vec![ids[1], ids[2], ids[0], ids[3]]);
    }

    #[test]
    fn reorder_item_same_index_is_noop() {
        let (mut store, ids) = store_with_terminals(3);
        assert!(!store.reorder_item(1, 1));
        let current: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(current, ids);
    }

    #[test]
    fn reorder_item_out_of_range_is_noop() {
        let (mut store, ids) = store_with_terminals(3);
        assert!(!store.reorder_item(0, 3));
        assert!(!store.reorder_item(5, 0));
        let current: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(current, ids);
    }

    #[test]
    fn rename_item_sets_user_renamed() {
        let (mut store, ids) = store_with_terminals(1);
        store.rename_item(ids[0], "build logs");
        let item = store.get_item(ids[0]).unwrap();
        assert_eq!(item.name, "build logs");
        assert!(item.user_renamed);
    }

    #[test]
    fn set_active_item_validates_id() {
        let (mut store, ids) = store_with_terminals(2);
        store.set_active_item(Some(999));
        assert_eq!(store.active_item_id(), Some(ids[1]));
        store.set_active_item(Some(ids[0]));
        assert_eq!(store.active_item_id(), Some(ids[0]));
        store.set_active_item(None);
        assert_eq!(store.active_item_id(), None);
    }

    #[test]
    fn dissolve_item_preserves_sidebar_order() {
        let (mut store, ids) = store_with_terminals(3);
        // Grow the middle item to three panes: s2, s4, s5
        let b = ids[1];
        let first = store.get_item(b).unwrap().tree.first_pane_id().unwrap();
        let p4 = store
            .split_pane(b, first, SplitDirection::Vertical, "s4", false)
            .unwrap();
        store.split_pane(b, p4, SplitDirection::Horizontal, "s5", false);

        let new_ids = store.dissolve_item(b);
        assert_eq!(new_ids.len(), 3);

        let order: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(
            order,
            vec![ids[0], new_ids[0], new_ids[1], new_ids[2], ids[2]]
        );
        // Leaves land in left-to-right traversal order
        let sessions: Vec<String> = store
            .items()
            .iter()
            .flat_map(|i| store.sessions_in_item(i.id))
            .collect();
        assert_eq!(sessions, vec!["s1", "s2", "s4", "s5", "s3"]);
    }

    #[test]
    fn dissolve_active_item_activates_first_fragment() {
        let (mut store, ids) = store_with_terminals(1);
        let first = store.get_item(ids[0]).unwrap().tree.first_pane_id().unwrap();
        store.split_pane(ids[0], first, SplitDirection::Vertical, "s2", false);
        store.set_active_item(Some(ids[0]));

        let new_ids = store.dissolve_item(ids[0]);
        assert_eq!(new_ids.len(), 2);
        assert_eq!(store.active_item_id(), Some(new_ids[0]));
    }

    #[test]
    fn dissolve_single_pane_item_is_noop() {
        let (mut store, ids) = store_with_terminals(2);
        assert!(store.dissolve_item(ids[0]).is_empty());
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn detach_to_item_rehosts_pane_after_source() {
        let (mut store, ids) = store_with_terminals(2);
        let a = ids[0];
        let first = store.get_item(a).unwrap().tree.first_pane_id().unwrap();
        let p3 = store
            .split_pane(a, first, SplitDirection::Vertical, "s3", false)
            .unwrap();

        let new_id = store.detach_to_item(a, p3).unwrap();
        let order: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![a, new_id, ids[1]]);
        assert!(store.get_item(a).unwrap().is_single_pane());
        assert_eq!(store.sessions_in_item(new_id), vec!["s3"]);
        assert_eq!(store.active_item_id(), Some(new_id));
    }

    #[test]
    fn detach_to_item_on_single_pane_is_noop() {
        let (mut store, ids) = store_with_terminals(1);
        let pane = store.get_item(ids[0]).unwrap().tree.first_pane_id().unwrap();
        assert!(store.detach_to_item(ids[0], pane).is_none());
        assert_eq!(store.item_count(), 1);
    }
}
