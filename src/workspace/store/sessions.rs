//! Reconciliation against the external session collection
//!
//! The store subscribes to the collection of live session records owned by
//! the backend. Reacting to a change must terminate: the diff is computed
//! in full before any state is touched, and an empty diff returns without
//! mutating anything, so a notification loop can never feed itself.
//!
//! A session exiting never removes panes or items here. The affected panes
//! keep their handle and the rendering layer shows them as ended; actual
//! removal is an explicit caller decision via `close_panes_for_session`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::WorkspaceStore;
use crate::pane::{PaneId, SessionId};
use crate::workspace::item::ItemId;

/// Liveness of an externally managed terminal session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// The backing process is alive
    Running,
    /// The backing process has exited; the record may linger
    Exited,
}

/// A record in the external session collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session handle, as referenced by terminal panes
    pub id: SessionId,
    /// Backend-assigned display name
    pub name: String,
    /// Current liveness
    pub status: SessionStatus,
}

impl WorkspaceStore {
    /// Reconcile against the current state of the session collection
    ///
    /// Returns the handles of sessions that are gone (or exited) while
    /// still referenced by panes, for the rendering layer's "ended"
    /// affordance. Single-pane items the user hasn't renamed pick up the
    /// backend's display name for their session. Tree structure is never
    /// modified here.
    pub fn sync_sessions(&mut self, records: &[SessionRecord]) -> Vec<SessionId> {
        let live: HashSet<&str> = records
            .iter()
            .filter(|record| record.status == SessionStatus::Running)
            .map(|record| record.id.as_str())
            .collect();

        // Compute the full diff before touching any state
        let mut ended: Vec<SessionId> = Vec::new();
        for item in &self.items {
            for pane in item.tree.all_panes() {
                if let Some(session_id) = pane.session_id()
                    && !live.contains(session_id)
                    && !ended.iter().any(|s| s == session_id)
                {
                    ended.push(session_id.to_owned());
                }
            }
        }

        let renames: Vec<(ItemId, String)> = self
            .items
            .iter()
            .filter(|item| !item.user_renamed && item.is_single_pane())
            .filter_map(|item| {
                let session_id = item.tree.all_panes().first()?.session_id()?;
                let record = records.iter().find(|record| record.id == session_id)?;
                (record.name != item.name && !record.name.is_empty())
                    .then(|| (item.id, record.name.clone()))
            })
            .collect();

        if ended.is_empty() && renames.is_empty() {
            return ended;
        }

        for (item_id, name) in renames {
            if let Some(item) = self.get_item_mut(item_id) {
                item.name = name;
            }
        }
        if !ended.is_empty() {
            log::debug!(
                "{} session(s) ended while still referenced by panes",
                ended.len()
            );
        }
        ended
    }

    /// Close every pane bound to `session_id`, across all items
    ///
    /// This is the explicit removal policy the engine itself never applies
    /// on session exit. Items whose last pane goes are removed with the
    /// usual active-item reassignment. Returns the number of panes closed.
    pub fn close_panes_for_session(&mut self, session_id: &str) -> usize {
        // Collect first, then act: closing mutates the item list
        let doomed: Vec<(ItemId, PaneId)> = self
            .items
            .iter()
            .flat_map(|item| {
                item.tree
                    .all_panes()
                    .into_iter()
                    .filter(|pane| pane.session_id() == Some(session_id))
                    .map(|pane| (item.id, pane.id))
                    .collect::<Vec<_>>()
            })
            .collect();

        for &(item_id, pane_id) in &doomed {
            self.close_pane(item_id, pane_id);
        }

        if !doomed.is_empty() {
            log::info!(
                "Closed {} pane(s) for ended session {}",
                doomed.len(),
                session_id
            );
        }
        doomed.len()
    }
}
