//! `PaneNode` — binary tree structure for arbitrary pane nesting.

use super::common::{PaneId, SplitChild, SplitDirection};
use super::pane::Pane;

/// Tree node for pane layout
///
/// The pane tree is a binary tree where:
/// - Leaf nodes contain actual panes
/// - Split nodes contain two children with a split direction and ratio
///
/// Structural operations (`split_at`, `remove`, `relocate`, `with_ratio_at`)
/// consume the tree by value and return a rebuilt tree. Subtrees the
/// operation does not touch are moved, not cloned, and an operation that
/// finds nothing to do hands the original nodes straight back.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneNode {
    /// A leaf node containing a pane
    Leaf(Pane),
    /// A split containing two child nodes
    Split {
        /// Direction of the split
        direction: SplitDirection,
        /// Split ratio (0.1 to 0.9) - position of divider
        /// For horizontal: ratio is height of first child / total height
        /// For vertical: ratio is width of first child / total width
        ratio: f32,
        /// First child (top for horizontal, left for vertical)
        first: Box<PaneNode>,
        /// Second child (bottom for horizontal, right for vertical)
        second: Box<PaneNode>,
    },
}

/// Result of attempting to remove a pane from the tree
pub enum RemoveResult {
    /// Pane was removed
    Removed {
        /// The extracted pane, for callers that rehost it elsewhere
        pane: Pane,
        /// The remaining subtree, or None if the tree is now empty
        rest: Option<PaneNode>,
    },
    /// Pane was not found, returning the original tree
    NotFound(PaneNode),
}

impl PaneNode {
    /// Create a new leaf node with a pane
    pub fn leaf(pane: Pane) -> Self {
        PaneNode::Leaf(pane)
    }

    /// Create a new split node
    pub fn split(direction: SplitDirection, ratio: f32, first: PaneNode, second: PaneNode) -> Self {
        PaneNode::Split {
            direction,
            ratio: ratio.clamp(0.1, 0.9), // Enforce minimum pane size
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, PaneNode::Leaf(_))
    }

    /// Get the pane if this is a leaf node
    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => Some(pane),
            PaneNode::Split { .. } => None,
        }
    }

    /// Find a pane by ID (recursive)
    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => {
                if pane.id == id {
                    Some(pane)
                } else {
                    None
                }
            }
            PaneNode::Split { first, second, .. } => {
                first.find_pane(id).or_else(|| second.find_pane(id))
            }
        }
    }

    /// Find a mutable pane by ID (recursive)
    pub fn find_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        match self {
            PaneNode::Leaf(pane) => {
                if pane.id == id {
                    Some(pane)
                } else {
                    None
                }
            }
            PaneNode::Split { first, second, .. } => first
                .find_pane_mut(id)
                .or_else(move || second.find_pane_mut(id)),
        }
    }

    /// Get all pane IDs in this subtree, in left-to-right traversal order
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        match self {
            PaneNode::Leaf(pane) => vec![pane.id],
            PaneNode::Split { first, second, .. } => {
                let mut ids = first.all_pane_ids();
                ids.extend(second.all_pane_ids());
                ids
            }
        }
    }

    /// Get all panes in this subtree, in left-to-right traversal order
    ///
    /// This order is what focus fallback and serialization rely on.
    pub fn all_panes(&self) -> Vec<&Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.all_panes();
                panes.extend(second.all_panes());
                panes
            }
        }
    }

    /// Extract every pane from this subtree by value, in traversal order
    pub fn into_panes(self) -> Vec<Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.into_panes();
                panes.extend(second.into_panes());
                panes
            }
        }
    }

    /// Count total number of panes
    pub fn pane_count(&self) -> usize {
        match self {
            PaneNode::Leaf(_) => 1,
            PaneNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    /// The first pane in traversal order (focus fallback target)
    pub fn first_pane_id(&self) -> Option<PaneId> {
        match self {
            PaneNode::Leaf(pane) => Some(pane.id),
            PaneNode::Split { first, .. } => first.first_pane_id(),
        }
    }

    /// Split the leaf holding `target_id`, pairing it with `new_pane`
    ///
    /// The target leaf is replaced by a 50/50 split; `insert_before` decides
    /// whether the new pane becomes the first (top/left) or second
    /// (bottom/right) child. If the target is not found the tree is
    /// returned unchanged and the new pane is discarded.
    pub fn split_at(
        self,
        target_id: PaneId,
        direction: SplitDirection,
        new_pane: Pane,
        insert_before: bool,
    ) -> PaneNode {
        let (node, _leftover) = self.split_with(target_id, direction, Some(new_pane), insert_before);
        node
    }

    /// Recursive worker for `split_at`
    ///
    /// Returns (new_node, remaining_pane) where remaining_pane is Some if
    /// the target was not found in this subtree.
    fn split_with(
        self,
        target_id: PaneId,
        direction: SplitDirection,
        new_pane: Option<Pane>,
        insert_before: bool,
    ) -> (PaneNode, Option<Pane>) {
        match self {
            PaneNode::Leaf(pane) => {
                if pane.id == target_id {
                    if let Some(new) = new_pane {
                        let (first, second) = if insert_before {
                            (PaneNode::Leaf(new), PaneNode::Leaf(pane))
                        } else {
                            (PaneNode::Leaf(pane), PaneNode::Leaf(new))
                        };
                        (PaneNode::split(direction, 0.5, first, second), None)
                    } else {
                        // Pane already consumed deeper in the walk
                        (PaneNode::Leaf(pane), None)
                    }
                } else {
                    // Not the target, keep as-is and pass the new pane through
                    (PaneNode::Leaf(pane), new_pane)
                }
            }
            PaneNode::Split {
                direction: split_dir,
                ratio,
                first,
                second,
            } => {
                // Try to insert in first child
                let (new_first, remaining) =
                    (*first).split_with(target_id, direction, new_pane, insert_before);

                if remaining.is_none() {
                    // Target was found in first child
                    (
                        PaneNode::Split {
                            direction: split_dir,
                            ratio,
                            first: Box::new(new_first),
                            second,
                        },
                        None,
                    )
                } else {
                    // Target not in first, try second
                    let (new_second, remaining) =
                        (*second).split_with(target_id, direction, remaining, insert_before);
                    (
                        PaneNode::Split {
                            direction: split_dir,
                            ratio,
                            first: Box::new(new_first),
                            second: Box::new(new_second),
                        },
                        remaining,
                    )
                }
            }
        }
    }

    /// Remove the leaf holding `target_id` from the tree
    ///
    /// Removing a leaf collapses exactly one split level: the parent split
    /// is replaced by the sibling subtree, so no single-child splits ever
    /// exist. Removing the sole leaf yields `Removed { rest: None }` and the
    /// caller decides what happens to the now-empty tree.
    pub fn remove(self, target_id: PaneId) -> RemoveResult {
        match self {
            PaneNode::Leaf(pane) => {
                if pane.id == target_id {
                    RemoveResult::Removed { pane, rest: None }
                } else {
                    RemoveResult::NotFound(PaneNode::Leaf(pane))
                }
            }
            PaneNode::Split {
                direction,
                ratio,
                first,
                second,
            } => {
                // Try to remove from first child
                match (*first).remove(target_id) {
                    RemoveResult::Removed { pane, rest: None } => {
                        // First child was the target; this split collapses
                        // to the second child
                        RemoveResult::Removed {
                            pane,
                            rest: Some(*second),
                        }
                    }
                    RemoveResult::Removed {
                        pane,
                        rest: Some(new_first),
                    } => RemoveResult::Removed {
                        pane,
                        rest: Some(PaneNode::Split {
                            direction,
                            ratio,
                            first: Box::new(new_first),
                            second,
                        }),
                    },
                    RemoveResult::NotFound(first_node) => {
                        // Target not in first child, try second
                        match (*second).remove(target_id) {
                            RemoveResult::Removed { pane, rest: None } => RemoveResult::Removed {
                                pane,
                                rest: Some(first_node),
                            },
                            RemoveResult::Removed {
                                pane,
                                rest: Some(new_second),
                            } => RemoveResult::Removed {
                                pane,
                                rest: Some(PaneNode::Split {
                                    direction,
                                    ratio,
                                    first: Box::new(first_node),
                                    second: Box::new(new_second),
                                }),
                            },
                            RemoveResult::NotFound(second_node) => {
                                RemoveResult::NotFound(PaneNode::Split {
                                    direction,
                                    ratio,
                                    first: Box::new(first_node),
                                    second: Box::new(second_node),
                                })
                            }
                        }
                    }
                }
            }
        }
    }

    /// Move the leaf `source_id` next to the leaf `target_id`
    ///
    /// Extracts the source leaf, then splits at the target to re-insert it.
    /// No-op when source and target are the same pane or either is missing.
    pub fn relocate(
        self,
        source_id: PaneId,
        target_id: PaneId,
        direction: SplitDirection,
        insert_before: bool,
    ) -> PaneNode {
        if source_id == target_id
            || self.find_pane(source_id).is_none()
            || self.find_pane(target_id).is_none()
        {
            return self;
        }

        match self.remove(source_id) {
            RemoveResult::Removed {
                pane,
                rest: Some(rest),
            } => rest.split_at(target_id, direction, pane, insert_before),
            // Source was the sole leaf; the guard above means the target
            // would also have to be that leaf, so this branch is dead, but
            // restoring the leaf keeps the function total.
            RemoveResult::Removed { pane, rest: None } => PaneNode::Leaf(pane),
            RemoveResult::NotFound(node) => node,
        }
    }

    /// Set the ratio of the split addressed by `path`, clamped to [0.1, 0.9]
    ///
    /// The path descends first/second choices from the root. A path that
    /// runs into a leaf or ends on one leaves the tree unchanged.
    pub fn with_ratio_at(self, path: &[SplitChild], new_ratio: f32) -> PaneNode {
        match self {
            PaneNode::Leaf(pane) => PaneNode::Leaf(pane),
            PaneNode::Split {
                direction,
                ratio,
                first,
                second,
            } => match path.split_first() {
                None => PaneNode::Split {
                    direction,
                    ratio: new_ratio.clamp(0.1, 0.9),
                    first,
                    second,
                },
                Some((SplitChild::First, rest)) => PaneNode::Split {
                    direction,
                    ratio,
                    first: Box::new((*first).with_ratio_at(rest, new_ratio)),
                    second,
                },
                Some((SplitChild::Second, rest)) => PaneNode::Split {
                    direction,
                    ratio,
                    first,
                    second: Box::new((*second).with_ratio_at(rest, new_ratio)),
                },
            },
        }
    }

    /// Structural equality ignoring pane ids
    ///
    /// Pane ids are ephemeral (reallocated whenever a tree is decoded from
    /// its serialized notation), so persistence round-trips compare layout
    /// shape and content instead of exact ids.
    pub fn same_layout(&self, other: &PaneNode) -> bool {
        match (self, other) {
            (PaneNode::Leaf(a), PaneNode::Leaf(b)) => a.content == b.content,
            (
                PaneNode::Split {
                    direction: dir_a,
                    ratio: ratio_a,
                    first: first_a,
                    second: second_a,
                },
                PaneNode::Split {
                    direction: dir_b,
                    ratio: ratio_b,
                    first: first_b,
                    second: second_b,
                },
            ) => {
                dir_a == dir_b
                    && (ratio_a - ratio_b).abs() < f32::EPSILON
                    && first_a.same_layout(first_b)
                    && second_a.same_layout(second_b)
            }
            _ => false,
        }
    }
}
