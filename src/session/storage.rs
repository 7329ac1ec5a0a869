//! File I/O for workspace persistence
//!
//! Snapshots are stored in `~/.config/tiledeck/workspace.yaml`

use super::WorkspaceSnapshot;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the path to the workspace snapshot file
pub fn workspace_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tiledeck")
        .join("workspace.yaml")
}

/// Save a snapshot to the default location
pub fn save_workspace(snapshot: &WorkspaceSnapshot) -> Result<()> {
    save_workspace_to(snapshot, workspace_path())
}

/// Save a snapshot to a specific file
pub fn save_workspace_to(snapshot: &WorkspaceSnapshot, path: PathBuf) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let contents =
        serde_yaml::to_string(snapshot).context("Failed to serialize workspace snapshot")?;

    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write workspace snapshot to {:?}", path))?;

    log::info!(
        "Saved workspace snapshot ({} items) to {:?}",
        snapshot.items.len(),
        path
    );
    Ok(())
}

/// Load a snapshot from the default location
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but is corrupt.
pub fn load_workspace() -> Result<Option<WorkspaceSnapshot>> {
    load_workspace_from(workspace_path())
}

/// Load a snapshot from a specific file
pub fn load_workspace_from(path: PathBuf) -> Result<Option<WorkspaceSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read workspace snapshot from {:?}", path))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let snapshot: WorkspaceSnapshot = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse workspace snapshot from {:?}", path))?;

    log::info!(
        "Loaded workspace snapshot ({} items) from {:?}",
        snapshot.items.len(),
        path
    );
    Ok(Some(snapshot))
}

/// Remove the snapshot file (e.g., after a successful restore)
pub fn clear_workspace() -> Result<()> {
    let path = workspace_path();
    if path.exists() {
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove workspace snapshot file {:?}", path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ItemSnapshot;
    use tempfile::tempdir;

    fn sample_snapshot() -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            saved_at: "2025-01-01T00:00:00Z".to_string(),
            items: vec![
                ItemSnapshot {
                    name: "work".to_string(),
                    tree_notation: "[s:shell-1]".to_string(),
                    user_renamed: false,
                },
                ItemSnapshot {
                    name: "pair".to_string(),
                    tree_notation: "v50[s:shell-2]h40[s:shell-3][m:notes.md]".to_string(),
                    user_renamed: true,
                },
            ],
            active_index: Some(1),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nonexistent.yaml");
        let result = load_workspace_from(path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.yaml");
        std::fs::write(&path, "").unwrap();
        let result = load_workspace_from(path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("corrupt.yaml");
        std::fs::write(&path, "not: valid: yaml: [[[").unwrap();
        let result = load_workspace_from(path);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("workspace.yaml");

        let snapshot = sample_snapshot();
        save_workspace_to(&snapshot, path.clone()).unwrap();

        let loaded = load_workspace_from(path).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("dir").join("workspace.yaml");

        let snapshot = sample_snapshot();
        save_workspace_to(&snapshot, path.clone()).unwrap();
        assert!(path.exists());
    }
}
