// Library exports for the tiledeck workspace engine.
//
// The engine is synchronous and single-threaded by design: every mutation
// runs to completion inside the host's event handler, so there is no locking
// and no operation can observe a half-applied tree. Hosts that need to move
// state across threads should do so between mutations, not during them.

/// Crate version, for hosts that surface it in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod pane;
pub mod session;
pub mod workspace;

pub use pane::{
    MAX_PANES, Pane, PaneContent, PaneId, PaneNode, PreviewKind, RemoveResult, SessionId,
    SplitChild, SplitDirection,
};
pub use workspace::{
    DropIntent, DropKind, DropSource, ItemId, SessionRecord, SessionStatus, WorkspaceItem,
    WorkspaceStore,
};
