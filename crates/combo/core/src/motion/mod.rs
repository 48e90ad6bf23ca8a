//! Locomotion state machine.
//!
//! Idle/Walk/Run are mutually exclusive modes driven by the motion vector and
//! the run flag. Action mode is orthogonal: while it is active the combo
//! resolver owns the character, and mode transitions, facing changes and
//! locomotion velocity are suspended.

mod state;

pub use state::{Facing, MotionMode, MotionState};
