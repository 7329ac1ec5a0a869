//! Capture current workspace state into a snapshot

use super::{ItemSnapshot, WorkspaceSnapshot};
use crate::session::notation::encode_tree;
use crate::workspace::{WorkspaceItem, WorkspaceStore};

/// Capture the whole workspace
///
/// `saved_at` is a caller-supplied timestamp (ISO 8601); the engine takes
/// no clock dependency. Capture never fails: every valid tree has a valid
/// notation.
pub fn capture_workspace(store: &WorkspaceStore, saved_at: impl Into<String>) -> WorkspaceSnapshot {
    WorkspaceSnapshot {
        saved_at: saved_at.into(),
        items: store.items().iter().map(capture_item).collect(),
        active_index: store.active_item_index(),
    }
}

/// Capture a single item
pub fn capture_item(item: &WorkspaceItem) -> ItemSnapshot {
    ItemSnapshot {
        name: item.name.clone(),
        tree_notation: encode_tree(&item.tree),
        user_renamed: item.user_renamed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::SplitDirection;

    #[test]
    fn capture_reflects_items_and_active_index() {
        let mut store = WorkspaceStore::new();
        let a = store.add_terminal_item("s1");
        let b = store.add_terminal_item("s2");
        let pane = store.get_item(b).unwrap().tree.first_pane_id().unwrap();
        store.split_pane(b, pane, SplitDirection::Vertical, "s3", false);
        store.rename_item(b, "pair");
        store.set_active_item(Some(a));

        let snapshot = capture_workspace(&store, "2025-06-01T12:00:00Z");
        assert_eq!(snapshot.saved_at, "2025-06-01T12:00:00Z");
        assert_eq!(snapshot.active_index, Some(0));
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].tree_notation, "[s:s1]");
        assert!(!snapshot.items[0].user_renamed);
        assert_eq!(snapshot.items[1].name, "pair");
        assert_eq!(snapshot.items[1].tree_notation, "v50[s:s2][s:s3]");
        assert!(snapshot.items[1].user_renamed);
    }
}
