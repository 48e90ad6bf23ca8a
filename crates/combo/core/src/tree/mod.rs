//! Animation-decision trees and their flat persisted form.
//!
//! An [`ActionTree`] is a forest grouped by [`LocomotionBranch`]. Root nodes
//! are the openers available from a branch; each child is a follow-up that
//! may be chained from its parent. For storage the forest is flattened into
//! a pre-order node list plus per-branch root counts ([`FlatActionTree`]).

mod codec;
mod node;

pub use codec::{CodecError, FlatActionNode, FlatActionTree, MAX_TREE_DEPTH};
pub use node::{ActionTree, ActionTreeNode, LocomotionBranch};
