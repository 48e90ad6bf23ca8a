use std::collections::BTreeMap;

use crate::action::{ActionCommand, LocomotionMode};

/// Locomotion-keyed group of trees.
///
/// Discriminants are the persisted branch keys and must stay stable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LocomotionBranch {
    Idle = 0,
    Walk = 1,
    Run = 2,
    Air = 3,
}

impl LocomotionBranch {
    /// All branches in key order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Walk, Self::Run, Self::Air];

    /// Persisted key of this branch.
    pub const fn key(self) -> u32 {
        self as u32
    }

    /// Branch for a persisted key.
    pub const fn from_key(key: u32) -> Option<Self> {
        match key {
            0 => Some(Self::Idle),
            1 => Some(Self::Walk),
            2 => Some(Self::Run),
            3 => Some(Self::Air),
            _ => None,
        }
    }
}

impl From<LocomotionMode> for LocomotionBranch {
    fn from(mode: LocomotionMode) -> Self {
        match mode {
            LocomotionMode::Still => Self::Idle,
            LocomotionMode::Walking => Self::Walk,
            LocomotionMode::Running => Self::Run,
        }
    }
}

/// One animation decision: play `animation` when `command` arrives, then
/// offer `children` as follow-ups.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTreeNode<A> {
    pub animation: A,
    pub command: ActionCommand,
    #[cfg_attr(feature = "serde", serde(default = "Vec::new"))]
    pub children: Vec<ActionTreeNode<A>>,
}

impl<A> ActionTreeNode<A> {
    pub fn new(animation: A, command: ActionCommand) -> Self {
        Self {
            animation,
            command,
            children: Vec::new(),
        }
    }

    /// Appends a follow-up (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: ActionTreeNode<A>) -> Self {
        self.children.push(child);
        self
    }

    /// First child reached by `command`.
    pub fn follow_up(&self, command: ActionCommand) -> Option<&ActionTreeNode<A>> {
        self.children.iter().find(|child| child.command == command)
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a childless node has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Forest of decision trees keyed by locomotion branch.
///
/// Branches iterate in key order. A branch with no roots is treated the same
/// as an absent branch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionTree<A> {
    branches: BTreeMap<LocomotionBranch, Vec<ActionTreeNode<A>>>,
}

impl<A> Default for ActionTree<A> {
    fn default() -> Self {
        Self {
            branches: BTreeMap::new(),
        }
    }
}

impl<A> ActionTree<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root tree to `branch`.
    pub fn push_root(&mut self, branch: LocomotionBranch, node: ActionTreeNode<A>) {
        self.branches.entry(branch).or_default().push(node);
    }

    /// Replaces all roots of `branch`.
    pub fn set_branch(&mut self, branch: LocomotionBranch, roots: Vec<ActionTreeNode<A>>) {
        self.branches.insert(branch, roots);
    }

    /// Roots of `branch`, empty when the branch is absent.
    pub fn branch(&self, branch: LocomotionBranch) -> &[ActionTreeNode<A>] {
        self.branches
            .get(&branch)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Populated branches in key order.
    pub fn branches(&self) -> impl Iterator<Item = (LocomotionBranch, &[ActionTreeNode<A>])> {
        self.branches
            .iter()
            .filter(|(_, roots)| !roots.is_empty())
            .map(|(branch, roots)| (*branch, roots.as_slice()))
    }

    /// Follows `commands` from the roots of `branch`, first match wins at
    /// every level. Returns the node reached by the last command.
    pub fn resolve(
        &self,
        branch: LocomotionBranch,
        commands: &[ActionCommand],
    ) -> Option<&ActionTreeNode<A>> {
        let (first, rest) = commands.split_first()?;
        let mut node = self.branch(branch).iter().find(|root| root.command == *first)?;
        for command in rest {
            node = node.follow_up(*command)?;
        }
        Some(node)
    }

    /// Total number of nodes across every branch.
    pub fn node_count(&self) -> usize {
        self.branches
            .values()
            .flatten()
            .map(ActionTreeNode::node_count)
            .sum()
    }

    /// Returns true if no branch holds a root.
    pub fn is_empty(&self) -> bool {
        self.branches.values().all(Vec::is_empty)
    }
}
