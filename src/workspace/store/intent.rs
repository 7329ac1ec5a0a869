//! Routing of resolved drag-and-drop decisions
//!
//! The gesture layer does its own hit-testing and hands the store a fully
//! resolved decision; nothing here inspects pointer positions. Dropping a
//! pane routes to a move, dropping an external session routes to a split
//! hosting that session.

use super::WorkspaceStore;
use crate::pane::{PaneId, SessionId, SplitDirection};
use crate::workspace::item::ItemId;

/// What the drop gesture asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    /// Create a new pane at the target
    Split,
    /// Relocate an existing pane to the target
    Move,
}

/// Where the dragged payload came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropSource {
    /// A pane already in the target item
    Pane(PaneId),
    /// An external session (dragged in from the sidebar)
    Session(SessionId),
}

/// A fully resolved drop decision delivered by the gesture layer
#[derive(Debug, Clone, PartialEq)]
pub struct DropIntent {
    /// Split or move
    pub kind: DropKind,
    /// Direction of the resulting split
    pub direction: SplitDirection,
    /// Which side of the target the payload lands on
    pub insert_before: bool,
    /// The dragged payload
    pub source: DropSource,
    /// The pane the payload was dropped onto
    pub target_pane: PaneId,
}

impl WorkspaceStore {
    /// Route a resolved drop decision to the matching mutation
    ///
    /// Returns true if the store changed. The `kind` is advisory when it
    /// conflicts with the source: a dragged pane always relocates, a
    /// dragged session always splits.
    pub fn apply_drop(&mut self, item_id: ItemId, intent: &DropIntent) -> bool {
        match &intent.source {
            DropSource::Pane(source_pane) => self.move_pane(
                item_id,
                *source_pane,
                intent.target_pane,
                intent.direction,
                intent.insert_before,
            ),
            DropSource::Session(session_id) => self
                .split_pane(
                    item_id,
                    intent.target_pane,
                    intent.direction,
                    session_id.clone(),
                    intent.insert_before,
                )
                .is_some(),
        }
    }
}
