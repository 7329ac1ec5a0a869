//! Rebuild a workspace from a snapshot

use super::{ItemSnapshot, WorkspaceSnapshot};
use crate::session::notation::decode_tree;
use crate::workspace::{ItemId, WorkspaceStore};

/// Restore a workspace from a snapshot, producing a fresh store
///
/// Decoding is all-or-nothing per item: an item whose tree notation is
/// malformed is skipped with a warning and the rest are restored. The
/// snapshot's active index is honored when that item survived, otherwise
/// the first restored item becomes active.
pub fn restore_workspace(snapshot: &WorkspaceSnapshot) -> WorkspaceStore {
    let mut store = WorkspaceStore::new();

    let restored: Vec<Option<ItemId>> = snapshot
        .items
        .iter()
        .map(|item| restore_item(&mut store, item))
        .collect();

    let active = snapshot
        .active_index
        .and_then(|idx| restored.get(idx).copied().flatten())
        .or_else(|| restored.iter().copied().flatten().next());
    store.set_active_item(active);

    log::info!(
        "Restored {} of {} item(s) from snapshot",
        store.item_count(),
        snapshot.items.len()
    );
    store
}

/// Restore one item into the store
///
/// Returns the new item's id, or None if the notation is invalid (no item
/// is added in that case).
pub fn restore_item(store: &mut WorkspaceStore, snapshot: &ItemSnapshot) -> Option<ItemId> {
    match decode_tree(&snapshot.tree_notation, store.next_pane_id_mut()) {
        Ok(tree) => {
            let id = store.add_item(snapshot.name.clone(), tree, None);
            if let Some(item) = store.get_item_mut(id) {
                item.user_renamed = snapshot.user_renamed;
            }
            Some(id)
        }
        Err(err) => {
            log::warn!(
                "Skipping item {:?}: invalid tree notation: {err}",
                snapshot.name
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::capture::capture_workspace;
    use crate::pane::SplitDirection;

    fn item(name: &str, notation: &str, user_renamed: bool) -> ItemSnapshot {
        ItemSnapshot {
            name: name.to_string(),
            tree_notation: notation.to_string(),
            user_renamed,
        }
    }

    #[test]
    fn restores_items_in_order() {
        let snapshot = WorkspaceSnapshot {
            saved_at: String::new(),
            items: vec![
                item("one", "[s:a]", false),
                item("pair", "v50[s:b][s:c]", true),
            ],
            active_index: Some(1),
        };

        let store = restore_workspace(&snapshot);
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.items()[0].name, "one");
        assert_eq!(store.items()[1].name, "pair");
        assert!(store.items()[1].user_renamed);
        assert_eq!(store.items()[1].pane_count(), 2);
        assert_eq!(store.active_item_id(), Some(store.items()[1].id));
        // Focus defaults to the first leaf
        assert_eq!(
            store.items()[1].focused_pane_id,
            store.items()[1].tree.first_pane_id()
        );
    }

    #[test]
    fn skips_invalid_items_and_keeps_the_rest() {
        let snapshot = WorkspaceSnapshot {
            saved_at: String::new(),
            items: vec![
                item("bad", "v50[s:a]", false), // truncated split
                item("good", "[s:b]", false),
            ],
            active_index: Some(0),
        };

        let store = restore_workspace(&snapshot);
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.items()[0].name, "good");
        // Active falls back to the first restored item
        assert_eq!(store.active_item_id(), Some(store.items()[0].id));
    }

    #[test]
    fn restored_pane_ids_are_unique_across_items() {
        let snapshot = WorkspaceSnapshot {
            saved_at: String::new(),
            items: vec![
                item("a", "v50[s:1][s:2]", false),
                item("b", "h40[s:3][s:4]", false),
            ],
            active_index: None,
        };

        let store = restore_workspace(&snapshot);
        let mut all_ids: Vec<u64> = store
            .items()
            .iter()
            .flat_map(|i| i.tree.all_pane_ids())
            .collect();
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), 4);
    }

    #[test]
    fn capture_then_restore_preserves_layouts() {
        let mut store = WorkspaceStore::new();
        let a = store.add_terminal_item("s1");
        let pane = store.get_item(a).unwrap().tree.first_pane_id().unwrap();
        store.split_pane(a, pane, SplitDirection::Horizontal, "s2", true);
        store.rename_item(a, "workbench");

        let snapshot = capture_workspace(&store, "t");
        let restored = restore_workspace(&snapshot);

        assert_eq!(restored.item_count(), 1);
        let original = store.get_item(a).unwrap();
        let copy = &restored.items()[0];
        assert!(copy.tree.same_layout(&original.tree));
        assert_eq!(copy.name, "workbench");
        assert!(copy.user_renamed);
    }
}
