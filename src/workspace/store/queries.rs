//! Derived read-only queries over the workspace
//!
//! Computed on demand from the current state, never cached, so they can't
//! go stale.

use super::WorkspaceStore;
use crate::pane::SessionId;
use crate::workspace::item::{ItemId, WorkspaceItem};

impl WorkspaceStore {
    /// All terminal session handles in an item's tree, in traversal order
    ///
    /// Preview panes have no session and are skipped.
    pub fn sessions_in_item(&self, item_id: ItemId) -> Vec<SessionId> {
        self.get_item(item_id)
            .map(|item| {
                item.tree
                    .all_panes()
                    .into_iter()
                    .filter_map(|pane| pane.session_id().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The session the user is currently interacting with
    ///
    /// For a single-pane active item that is its sole pane's session; for a
    /// multi-pane item the focused pane's session. None when nothing is
    /// active, focus is unset, or the pane in question is a preview.
    pub fn active_session_id(&self) -> Option<SessionId> {
        let item = self.active_item()?;
        let pane = if item.is_single_pane() {
            item.tree.all_panes().into_iter().next()?
        } else {
            item.tree.find_pane(item.focused_pane_id?)?
        };
        pane.session_id().map(str::to_owned)
    }

    /// Find the item hosting a given session (linear scan)
    pub fn find_item_by_session(&self, session_id: &str) -> Option<&WorkspaceItem> {
        self.items.iter().find(|item| {
            item.tree
                .all_panes()
                .iter()
                .any(|pane| pane.session_id() == Some(session_id))
        })
    }
}
