//! Pane operations within a workspace item
//!
//! Wraps the tree's structural operations with store policy: cap
//! enforcement on split, focus repair on close, item removal when the last
//! pane goes, and silent no-ops on stale references throughout.

use super::WorkspaceStore;
use crate::pane::{
    MAX_PANES, Pane, PaneContent, PaneId, RemoveResult, SessionId, SplitChild, SplitDirection,
};
use crate::workspace::item::ItemId;

impl WorkspaceStore {
    /// Split a pane, putting a new terminal pane next to it
    ///
    /// Returns the ID of the new pane, or None if the item or target pane
    /// is gone or the item is already at the pane cap.
    pub fn split_pane(
        &mut self,
        item_id: ItemId,
        pane_id: PaneId,
        direction: SplitDirection,
        session_id: impl Into<SessionId>,
        insert_before: bool,
    ) -> Option<PaneId> {
        self.split_pane_with(
            item_id,
            pane_id,
            direction,
            PaneContent::Terminal {
                session_id: session_id.into(),
            },
            insert_before,
        )
    }

    /// Split a pane, putting a new pane with arbitrary content next to it
    pub fn split_pane_with(
        &mut self,
        item_id: ItemId,
        pane_id: PaneId,
        direction: SplitDirection,
        content: PaneContent,
        insert_before: bool,
    ) -> Option<PaneId> {
        let idx = self.item_index(item_id)?;
        {
            let item = &self.items[idx];
            if item.tree.find_pane(pane_id).is_none() {
                log::debug!("Split target pane {} not found in item {}", pane_id, item_id);
                return None;
            }
            if item.pane_count() >= MAX_PANES {
                log::warn!("Cannot split: max panes limit ({}) reached", MAX_PANES);
                return None;
            }
        }

        let new_id = self.alloc_pane_id();
        let new_pane = Pane {
            id: new_id,
            content,
        };

        let mut item = self.items.remove(idx);
        item.tree = item.tree.split_at(pane_id, direction, new_pane, insert_before);
        // Focus follows the new pane
        item.focused_pane_id = Some(new_id);
        self.items.insert(idx, item);

        log::debug!(
            "Split pane {} of item {} {:?}, created pane {}",
            pane_id,
            item_id,
            direction,
            new_id
        );
        Some(new_id)
    }

    /// Close a pane by ID
    ///
    /// Closing the last pane removes the whole item (active reassignment as
    /// in `remove_item`). Closing the focused pane moves focus to the first
    /// remaining leaf. Returns true if the item was removed.
    pub fn close_pane(&mut self, item_id: ItemId, pane_id: PaneId) -> bool {
        let Some(idx) = self.item_index(item_id) else {
            return false;
        };

        let mut item = self.items.remove(idx);
        match item.tree.remove(pane_id) {
            RemoveResult::Removed {
                rest: Some(rest), ..
            } => {
                item.tree = rest;
                if item.focused_pane_id == Some(pane_id) {
                    item.focused_pane_id = item.tree.first_pane_id();
                    log::debug!(
                        "Closed focused pane {}, new focus: {:?}",
                        pane_id,
                        item.focused_pane_id
                    );
                }
                self.items.insert(idx, item);
                false
            }
            RemoveResult::Removed { rest: None, .. } => {
                log::info!("Closed last pane of item {}; removing item", item_id);
                self.reassign_active_after_removal(item.id, idx);
                true
            }
            RemoveResult::NotFound(tree) => {
                item.tree = tree;
                self.items.insert(idx, item);
                false
            }
        }
    }

    /// Move a pane next to another pane within the same item
    ///
    /// Returns true if the tree changed. Focus is untouched: the moved pane
    /// stays a valid member of the tree.
    pub fn move_pane(
        &mut self,
        item_id: ItemId,
        source_pane_id: PaneId,
        target_pane_id: PaneId,
        direction: SplitDirection,
        insert_before: bool,
    ) -> bool {
        let Some(idx) = self.item_index(item_id) else {
            return false;
        };
        {
            let tree = &self.items[idx].tree;
            if source_pane_id == target_pane_id
                || tree.find_pane(source_pane_id).is_none()
                || tree.find_pane(target_pane_id).is_none()
            {
                return false;
            }
        }

        let mut item = self.items.remove(idx);
        item.tree = item
            .tree
            .relocate(source_pane_id, target_pane_id, direction, insert_before);
        self.items.insert(idx, item);

        log::debug!(
            "Moved pane {} next to pane {} in item {}",
            source_pane_id,
            target_pane_id,
            item_id
        );
        true
    }

    /// Close a pane and hand back its session for rehosting
    ///
    /// Same as `close_pane`, but returns the session handle that was bound
    /// to the removed leaf so the caller can rehost it as a new top-level
    /// item. Returns None if the pane is gone or is a preview leaf (which
    /// has no session to hand back; the tree is left unchanged).
    pub fn detach_pane(&mut self, item_id: ItemId, pane_id: PaneId) -> Option<SessionId> {
        let idx = self.item_index(item_id)?;
        self.items[idx].tree.find_pane(pane_id)?.session_id()?;

        let mut item = self.items.remove(idx);
        match item.tree.remove(pane_id) {
            RemoveResult::Removed {
                pane,
                rest: Some(rest),
            } => {
                item.tree = rest;
                item.repair_focus();
                self.items.insert(idx, item);
                log::debug!("Detached pane {} from item {}", pane_id, item_id);
                pane.session_id().map(str::to_owned)
            }
            RemoveResult::Removed { pane, rest: None } => {
                log::info!("Detached last pane of item {}; removing item", item_id);
                self.reassign_active_after_removal(item.id, idx);
                pane.session_id().map(str::to_owned)
            }
            RemoveResult::NotFound(tree) => {
                item.tree = tree;
                self.items.insert(idx, item);
                None
            }
        }
    }

    /// Focus a specific pane within an item
    pub fn set_focused_pane(&mut self, item_id: ItemId, pane_id: PaneId) {
        if let Some(item) = self.get_item_mut(item_id)
            && item.tree.find_pane(pane_id).is_some()
        {
            item.focused_pane_id = Some(pane_id);
        }
    }

    /// Set the ratio of the split addressed by `path` (clamped to [0.1, 0.9])
    pub fn set_ratio(&mut self, item_id: ItemId, path: &[SplitChild], ratio: f32) {
        let Some(idx) = self.item_index(item_id) else {
            return;
        };
        let mut item = self.items.remove(idx);
        item.tree = item.tree.with_ratio_at(path, ratio);
        self.items.insert(idx, item);
    }

    /// Rebind a terminal pane to a different session
    ///
    /// Used when the backing session is restarted or swapped. Preview panes
    /// are left alone: turning static content into a terminal would be a
    /// kind change the caller didn't ask for.
    pub fn replace_session_in_pane(
        &mut self,
        item_id: ItemId,
        pane_id: PaneId,
        new_session_id: impl Into<SessionId>,
    ) {
        if let Some(item) = self.get_item_mut(item_id)
            && let Some(pane) = item.tree.find_pane_mut(pane_id)
            && let PaneContent::Terminal { session_id } = &mut pane.content
        {
            *session_id = new_session_id.into();
            log::debug!("Rebound pane {} of item {}", pane_id, item_id);
        }
    }
}
