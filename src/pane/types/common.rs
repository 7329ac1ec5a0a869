//! Shared identifiers and enums for the pane system.

use serde::{Deserialize, Serialize};

/// Unique identifier for a pane within a workspace
pub type PaneId = u64;

/// Opaque handle to an externally managed terminal session
pub type SessionId = String;

/// Maximum number of leaf panes a single item's tree may hold.
///
/// Enforced by the workspace store when splitting; the tree itself has no
/// cap awareness, so a tree built directly can exceed it.
pub const MAX_PANES: usize = 8;

/// Direction of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitDirection {
    /// Panes are stacked vertically (split creates top/bottom panes)
    Horizontal,
    /// Panes are side by side (split creates left/right panes)
    Vertical,
}

/// Rendering mode for preview pane content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewKind {
    /// Plain text
    Text,
    /// Rendered markdown
    Markdown,
}

/// One step of a path addressing a split node by descending from the root.
///
/// A path of `SplitChild` steps locates a split independently of pane ids,
/// which is what divider-drag resize needs: the divider the user grabbed is
/// identified by position in the tree, not by the panes around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitChild {
    /// Descend into the first (top/left) child
    First,
    /// Descend into the second (bottom/right) child
    Second,
}
