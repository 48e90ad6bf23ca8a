//! Flat pre-order encoding of an [`ActionTree`].
//!
//! Layout:
//! - `nodes`: every node of every populated branch in pre-order, branch by
//!   branch in key order, each carrying its child count
//! - `branch_keys[i]` / `branch_counts[i]`: key of the i-th stored branch and
//!   the number of root trees it contributes to `nodes`
//!
//! Pre-order position plus child counts fully determine the shape, so the
//! encoding is lossless. Decoding threads a single cursor through the whole
//! node list and rejects counts that would read past its end. Neither
//! direction recurses; decoding refuses trees deeper than [`MAX_TREE_DEPTH`].

use super::{ActionTree, ActionTreeNode, LocomotionBranch};
use crate::action::ActionCommand;
use crate::error::{ComboError, ErrorSeverity};

/// Deepest tree [`FlatActionTree::unflatten`] accepts. A childless root has
/// depth 0, as in [`ActionTreeNode::depth`].
pub const MAX_TREE_DEPTH: usize = 128;

/// One node record of the flat form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatActionNode<A> {
    pub animation: A,
    pub command: ActionCommand,
    pub child_count: u32,
}

/// Linear persisted form of an [`ActionTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatActionTree<A> {
    pub nodes: Vec<FlatActionNode<A>>,
    pub branch_keys: Vec<u32>,
    pub branch_counts: Vec<u32>,
}

impl<A> Default for FlatActionTree<A> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            branch_keys: Vec::new(),
            branch_counts: Vec::new(),
        }
    }
}

/// Errors raised while decoding a [`FlatActionTree`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("branch table mismatch: {keys} keys but {counts} counts")]
    BranchTableMismatch { keys: usize, counts: usize },

    #[error("unknown branch key {0}")]
    UnknownBranch(u32),

    #[error("branch {0} stored more than once")]
    DuplicateBranch(LocomotionBranch),

    #[error("node record {index} requested but only {len} records are stored")]
    Truncated { index: usize, len: usize },

    #[error("{remaining} node records left unread after decoding")]
    TrailingNodes { remaining: usize },

    #[error("node record {index} nests deeper than {max} levels")]
    TooDeep { index: usize, max: usize },
}

impl ComboError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BranchTableMismatch { .. }
            | Self::UnknownBranch(_)
            | Self::DuplicateBranch(_)
            | Self::TooDeep { .. } => ErrorSeverity::Validation,
            Self::Truncated { .. } | Self::TrailingNodes { .. } => ErrorSeverity::Corrupt,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BranchTableMismatch { .. } => "CODEC_BRANCH_TABLE_MISMATCH",
            Self::UnknownBranch(_) => "CODEC_UNKNOWN_BRANCH",
            Self::DuplicateBranch(_) => "CODEC_DUPLICATE_BRANCH",
            Self::Truncated { .. } => "CODEC_TRUNCATED",
            Self::TrailingNodes { .. } => "CODEC_TRAILING_NODES",
            Self::TooDeep { .. } => "CODEC_TOO_DEEP",
        }
    }
}

impl<A: Clone> ActionTree<A> {
    /// Flattens the forest. Branches without roots are omitted.
    pub fn flatten(&self) -> FlatActionTree<A> {
        let mut flat = FlatActionTree::default();
        for (branch, roots) in self.branches() {
            flat.branch_keys.push(branch.key());
            flat.branch_counts.push(roots.len() as u32);
            for root in roots {
                write_node(root, &mut flat.nodes);
            }
        }
        flat
    }
}

impl<A: Clone> FlatActionTree<A> {
    /// Rebuilds the forest, validating the branch tables and child counts.
    pub fn unflatten(&self) -> Result<ActionTree<A>, CodecError> {
        if self.branch_keys.len() != self.branch_counts.len() {
            return Err(CodecError::BranchTableMismatch {
                keys: self.branch_keys.len(),
                counts: self.branch_counts.len(),
            });
        }

        let mut tree = ActionTree::new();
        let mut cursor = Cursor::new(&self.nodes);
        let mut seen = [false; LocomotionBranch::ALL.len()];

        for (&key, &count) in self.branch_keys.iter().zip(&self.branch_counts) {
            let branch = LocomotionBranch::from_key(key).ok_or(CodecError::UnknownBranch(key))?;
            if core::mem::replace(&mut seen[branch.key() as usize], true) {
                return Err(CodecError::DuplicateBranch(branch));
            }

            let mut roots = Vec::new();
            for _ in 0..count {
                roots.push(cursor.read_tree()?);
            }
            if !roots.is_empty() {
                tree.set_branch(branch, roots);
            }
        }

        cursor.finish()?;
        Ok(tree)
    }

    /// Number of stored node records.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn write_node<A: Clone>(root: &ActionTreeNode<A>, out: &mut Vec<FlatActionNode<A>>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(FlatActionNode {
            animation: node.animation.clone(),
            command: node.command,
            child_count: node.children.len() as u32,
        });
        // Reversed so the first child is emitted next.
        stack.extend(node.children.iter().rev());
    }
}

/// Read position shared by every branch of one decode.
struct Cursor<'a, A> {
    nodes: &'a [FlatActionNode<A>],
    position: usize,
}

impl<'a, A: Clone> Cursor<'a, A> {
    fn new(nodes: &'a [FlatActionNode<A>]) -> Self {
        Self { nodes, position: 0 }
    }

    fn remaining(&self) -> usize {
        self.nodes.len() - self.position
    }

    fn next(&mut self) -> Result<&'a FlatActionNode<A>, CodecError> {
        let record = self.nodes.get(self.position).ok_or(CodecError::Truncated {
            index: self.position,
            len: self.nodes.len(),
        })?;
        self.position += 1;
        Ok(record)
    }

    /// Consumes one record and the child-count header it carries.
    fn open_node(&mut self) -> Result<(ActionTreeNode<A>, usize), CodecError> {
        let record = self.next()?;
        let child_count = record.child_count as usize;

        // Every child needs at least one record.
        if child_count > self.remaining() {
            return Err(CodecError::Truncated {
                index: self.position + self.remaining(),
                len: self.nodes.len(),
            });
        }

        let node = ActionTreeNode::new(record.animation.clone(), record.command);
        Ok((node, child_count))
    }

    /// Consumes one root record and, depth-first, every record below it.
    ///
    /// `open` holds the ancestors of the node being read, each with the
    /// number of children it still expects.
    fn read_tree(&mut self) -> Result<ActionTreeNode<A>, CodecError> {
        let mut open: Vec<(ActionTreeNode<A>, usize)> = Vec::new();
        let mut current = self.open_node()?;

        loop {
            if current.1 > 0 {
                current.1 -= 1;
                open.push(current);
                if open.len() > MAX_TREE_DEPTH {
                    return Err(CodecError::TooDeep {
                        index: self.position,
                        max: MAX_TREE_DEPTH,
                    });
                }
                current = self.open_node()?;
                continue;
            }

            let (finished, _) = current;
            match open.pop() {
                Some(mut parent) => {
                    parent.0.children.push(finished);
                    current = parent;
                }
                None => return Ok(finished),
            }
        }
    }

    fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(CodecError::TrailingNodes { remaining }),
        }
    }
}
