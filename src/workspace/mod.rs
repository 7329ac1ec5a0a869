//! Workspace management: the ordered item collection and its operations
//!
//! This module wraps the pure layout tree with item-level semantics:
//! - `WorkspaceItem`: one sidebar entry owning a pane tree
//! - `WorkspaceStore`: the ordered collection, active-item tracking, and
//!   every mutation entry point (split, close, move, detach, dissolve,
//!   reorder, resize)
//!
//! Store operations silently no-op on stale item/pane references: UI event
//! handlers may legitimately race against a just-completed removal, and a
//! stale click must never panic the host.

mod item;
mod store;

pub use item::{ItemId, WorkspaceItem};
pub use store::{
    DropIntent, DropKind, DropSource, SessionRecord, SessionStatus, WorkspaceStore,
};
