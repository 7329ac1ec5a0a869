//! Pane layout tree for split terminal support
//!
//! This module provides the layout-tree infrastructure for split panes:
//! - `Pane`: a single leaf pane and the content it displays
//! - `PaneNode`: binary tree structure for nested pane splits
//! - `PaneId`: unique identifier for each pane within a tree
//!
//! Everything here is pure data: structural operations consume a tree by
//! value and return a rebuilt one, moving untouched subtrees unchanged, so
//! the workspace store can commit results wholesale and hosts can diff by
//! comparing what actually got rebuilt.

mod types;

pub use types::{
    MAX_PANES, Pane, PaneContent, PaneId, PaneNode, PreviewKind, RemoveResult, SessionId,
    SplitChild, SplitDirection,
};
