//! Deterministic combo resolution and locomotion logic for 2D characters.
//!
//! `combo-core` defines the canonical rules (action catalog, combo resolver,
//! motion state machine, action tree codec) and exposes pure APIs that can be
//! reused by host engines, content tooling and the replay tool. Per-character
//! mutation flows through [`controller::CharacterController`], which routes
//! input events into [`action::ComboResolver`] and [`motion::MotionState`].
//! Designer data ([`action::ActionCatalog`], [`tree::ActionTree`]) is
//! immutable and shared by reference across characters.
pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod motion;
pub mod tree;

pub use action::{
    ActionCatalog, ActionChain, ActionCommand, ActionStep, CatalogError, ComboResolver,
    ComboState, LocomotionFlags, LocomotionMode, NO_ACTION,
};
pub use config::CharacterConfig;
pub use controller::{CharacterController, CharacterInput, CharacterState, Frame};
pub use error::{ComboError, ErrorSeverity};
pub use motion::{Facing, MotionMode, MotionState};
pub use tree::{
    ActionTree, ActionTreeNode, CodecError, FlatActionNode, FlatActionTree, LocomotionBranch,
    MAX_TREE_DEPTH,
};

pub use glam::Vec2;
