//! Workspace persistence: snapshot types, save/restore, and file storage
//!
//! A snapshot captures the whole workspace as plain data: each item's name,
//! its pane tree in compact prefix notation, and the user-renamed flag.
//! Pane ids are deliberately absent — they are ephemeral and reallocated on
//! restore.

pub mod capture;
pub mod notation;
pub mod restore;
pub mod storage;

use serde::{Deserialize, Serialize};

/// Serialized form of one workspace item
///
/// Field names are part of the wire contract (`name` / `treeNotation` /
/// `userRenamed`), shared with non-Rust hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    /// Display name
    pub name: String,
    /// Pane tree in compact prefix notation (see [`notation`])
    pub tree_notation: String,
    /// Whether the user renamed this item
    pub user_renamed: bool,
}

/// Serialized form of the whole workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    /// Timestamp when the snapshot was taken (ISO 8601), supplied by the caller
    pub saved_at: String,
    /// Items in sidebar order
    pub items: Vec<ItemSnapshot>,
    /// Index of the active item, if any
    pub active_index: Option<usize>,
}

impl WorkspaceSnapshot {
    /// Compact JSON form, for embedding a workspace in a URL or message
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse the compact JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
