//! `WorkspaceItem` — one sidebar entry owning a pane tree.

use crate::pane::{Pane, PaneId, PaneNode};

/// Unique identifier for a workspace item
pub type ItemId = u64;

/// A named, ordered entry in the workspace
///
/// There is no stored distinction between a standalone terminal and a split
/// layout: an item whose tree is a single leaf *is* a standalone terminal,
/// and one with a split root is a layout. Presentation (icon, badge) derives
/// from `pane_count()`, which removes the type-transition bookkeeping a
/// tagged representation would need.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceItem {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Display name shown in the sidebar
    pub name: String,
    /// Root of the pane tree; always holds at least one leaf
    pub tree: PaneNode,
    /// Pane holding keyboard focus within the item
    pub focused_pane_id: Option<PaneId>,
    /// True once the user has renamed the item; derived names stop applying
    pub user_renamed: bool,
}

impl WorkspaceItem {
    /// Create an item. Focus falls back to the tree's first leaf when the
    /// given pane id is absent from the tree.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        tree: PaneNode,
        focused_pane_id: Option<PaneId>,
    ) -> Self {
        let focused_pane_id = focused_pane_id
            .filter(|&pane_id| tree.find_pane(pane_id).is_some())
            .or_else(|| tree.first_pane_id());
        Self {
            id,
            name: name.into(),
            tree,
            focused_pane_id,
            user_renamed: false,
        }
    }

    /// Number of leaf panes in this item's tree
    pub fn pane_count(&self) -> usize {
        self.tree.pane_count()
    }

    /// Check if this item is a standalone single pane
    pub fn is_single_pane(&self) -> bool {
        self.pane_count() == 1
    }

    /// Get the currently focused pane
    pub fn focused_pane(&self) -> Option<&Pane> {
        self.tree.find_pane(self.focused_pane_id?)
    }

    /// Re-point focus at the first leaf if it no longer resolves
    ///
    /// Called after any structural mutation that can invalidate focus
    /// (closing or detaching the focused pane). A `None` focus is left
    /// alone.
    pub(crate) fn repair_focus(&mut self) {
        if let Some(pane_id) = self.focused_pane_id
            && self.tree.find_pane(pane_id).is_none()
        {
            self.focused_pane_id = self.tree.first_pane_id();
        }
    }
}
