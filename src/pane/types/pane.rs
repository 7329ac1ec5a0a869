//! `Pane` — a single leaf pane and the content it displays.

use super::common::{PaneId, PreviewKind, SessionId};

/// Content hosted by a leaf pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneContent {
    /// A terminal bound to an externally managed session
    Terminal {
        /// Handle to the backing session; the session's lifecycle is owned
        /// elsewhere and the tree only carries the reference
        session_id: SessionId,
    },
    /// Static preview content with no backing session
    Preview {
        /// How the source should be rendered
        kind: PreviewKind,
        /// The content reference (file path, inline text, etc.)
        source: String,
    },
}

/// A single pane in the layout tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    /// Unique identifier for this pane
    pub id: PaneId,
    /// What this pane displays
    pub content: PaneContent,
}

impl Pane {
    /// Create a terminal pane bound to a session handle
    pub fn terminal(id: PaneId, session_id: impl Into<SessionId>) -> Self {
        Self {
            id,
            content: PaneContent::Terminal {
                session_id: session_id.into(),
            },
        }
    }

    /// Create a preview pane with static content
    pub fn preview(id: PaneId, kind: PreviewKind, source: impl Into<String>) -> Self {
        Self {
            id,
            content: PaneContent::Preview {
                kind,
                source: source.into(),
            },
        }
    }

    /// The session handle, if this pane hosts a terminal
    pub fn session_id(&self) -> Option<&str> {
        match &self.content {
            PaneContent::Terminal { session_id } => Some(session_id),
            PaneContent::Preview { .. } => None,
        }
    }

    /// Check if this pane hosts a terminal session
    pub fn is_terminal(&self) -> bool {
        matches!(self.content, PaneContent::Terminal { .. })
    }
}
