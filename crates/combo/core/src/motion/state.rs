use glam::Vec2;

use crate::action::LocomotionMode;
use crate::config::CharacterConfig;

/// Horizontal facing. Forward is toward +x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    #[default]
    Forward,
    Backward,
}

impl Facing {
    /// Facing implied by a horizontal input, if it is decisive.
    pub fn from_horizontal(x: f32) -> Option<Self> {
        if x.abs() > CharacterConfig::DIRECTION_EPSILON {
            Some(if x > 0.0 { Self::Forward } else { Self::Backward })
        } else {
            None
        }
    }

    /// +1 for forward, -1 for backward.
    pub const fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Discrete locomotion mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MotionMode {
    #[default]
    Idle,
    Walk,
    Run,
}

impl MotionMode {
    /// Mode selected by a motion vector and run request.
    pub fn select(motion: Vec2, run_requested: bool) -> Self {
        if motion.length() <= CharacterConfig::MOTION_EPSILON {
            Self::Idle
        } else if run_requested {
            Self::Run
        } else {
            Self::Walk
        }
    }

    /// Index handed to the presentation layer's motion animation slot.
    pub const fn animation_index(self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Walk => 1,
            Self::Run => 2,
        }
    }

    pub const fn locomotion(self) -> LocomotionMode {
        match self {
            Self::Idle => LocomotionMode::Still,
            Self::Walk => LocomotionMode::Walking,
            Self::Run => LocomotionMode::Running,
        }
    }
}

/// Per-character locomotion state.
///
/// `motion_changed` and `direction_changed` are edge-triggered: they are set
/// by transitions and cleared by the `take_*` accessors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionState {
    facing: Facing,
    /// Facing recorded when action mode was entered.
    action_facing: Facing,
    motion: Vec2,
    run_requested: bool,
    mode: MotionMode,
    in_action_mode: bool,
    motion_changed: bool,
    direction_changed: bool,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new motion vector.
    pub fn move_changed(&mut self, motion: Vec2) {
        self.motion = motion;
        self.motion_changed = true;
        if self.in_action_mode {
            return;
        }
        self.update_facing();
        self.transition(MotionMode::select(self.motion, self.run_requested));
    }

    /// Records a new run request. Without motion the character stays idle.
    pub fn run_changed(&mut self, run_requested: bool) {
        self.run_requested = run_requested;
        self.motion_changed = true;
        if self.in_action_mode || self.mode == MotionMode::Idle {
            return;
        }
        self.transition(MotionMode::select(self.motion, self.run_requested));
    }

    /// Enters or leaves action mode.
    ///
    /// Leaving re-evaluates facing and mode against the current motion vector,
    /// since both were frozen while the action played, and flags a motion
    /// change so locomotion resumes on the next tick.
    pub fn set_action_mode(&mut self, active: bool) {
        if active == self.in_action_mode {
            return;
        }
        self.in_action_mode = active;

        if active {
            self.action_facing = self.facing;
            tracing::trace!(facing = %self.facing, "locomotion suspended");
        } else {
            self.update_facing();
            self.transition(MotionMode::select(self.motion, self.run_requested));
            self.motion_changed = true;
            tracing::trace!(mode = %self.mode, facing = %self.facing, "locomotion resumed");
        }
    }

    /// Returns true if motion or facing changed since the last call.
    ///
    /// Only the motion flag is cleared; a pending facing flip is left for
    /// [`Self::take_direction_changed`].
    pub fn take_motion_changed(&mut self) -> bool {
        let changed = self.motion_changed || self.direction_changed;
        self.motion_changed = false;
        changed
    }

    /// Returns and clears the facing-flip flag.
    pub fn take_direction_changed(&mut self) -> bool {
        core::mem::take(&mut self.direction_changed)
    }

    /// Locomotion velocity: speed for the current mode times the motion vector.
    pub fn velocity(&self, config: &CharacterConfig) -> Vec2 {
        if self.in_action_mode {
            return Vec2::ZERO;
        }
        match self.mode {
            MotionMode::Idle => Vec2::ZERO,
            MotionMode::Walk => config.walk_speed * self.motion,
            MotionMode::Run => config.run_speed * self.motion,
        }
    }

    /// True whenever the motion vector is non-trivial, running included.
    pub fn is_walking(&self) -> bool {
        self.motion.length() > CharacterConfig::MOTION_EPSILON
    }

    pub fn is_running(&self) -> bool {
        self.run_requested && self.is_walking()
    }

    /// Mode used to match chain start conditions, derived from live input.
    pub fn locomotion_mode(&self) -> LocomotionMode {
        LocomotionMode::from_motion(self.is_walking(), self.is_running())
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn action_facing(&self) -> Facing {
        self.action_facing
    }

    pub fn motion(&self) -> Vec2 {
        self.motion
    }

    pub fn run_requested(&self) -> bool {
        self.run_requested
    }

    pub fn in_action_mode(&self) -> bool {
        self.in_action_mode
    }

    fn update_facing(&mut self) {
        let Some(facing) = Facing::from_horizontal(self.motion.x) else {
            return;
        };
        if facing != self.facing {
            tracing::trace!(from = %self.facing, to = %facing, "facing flipped");
            self.facing = facing;
            self.direction_changed = true;
        }
    }

    fn transition(&mut self, next: MotionMode) {
        if next != self.mode {
            tracing::trace!(from = %self.mode, to = %next, "motion mode changed");
            self.mode = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CharacterConfig {
        CharacterConfig::with_speeds(Vec2::new(2.0, 1.0), Vec2::new(6.0, 3.0))
    }

    #[test]
    fn zero_motion_is_idle_regardless_of_run() {
        let mut state = MotionState::new();
        state.run_changed(true);
        state.move_changed(Vec2::ZERO);

        assert_eq!(state.mode(), MotionMode::Idle);
        assert_eq!(state.velocity(&config()), Vec2::ZERO);
        assert!(!state.is_running());
    }

    #[test]
    fn motion_without_run_walks() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(5.0, 0.0));

        assert_eq!(state.mode(), MotionMode::Walk);
        assert_eq!(state.velocity(&config()), Vec2::new(10.0, 0.0));
        assert_eq!(state.locomotion_mode(), LocomotionMode::Walking);
    }

    #[test]
    fn toggling_run_while_walking_runs() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(1.0, 1.0));
        state.run_changed(true);

        assert_eq!(state.mode(), MotionMode::Run);
        assert_eq!(state.velocity(&config()), Vec2::new(6.0, 3.0));
        assert_eq!(state.locomotion_mode(), LocomotionMode::Running);

        state.run_changed(false);
        assert_eq!(state.mode(), MotionMode::Walk);
    }

    #[test]
    fn run_without_motion_stays_idle_then_runs_on_move() {
        let mut state = MotionState::new();
        state.run_changed(true);
        assert_eq!(state.mode(), MotionMode::Idle);

        state.move_changed(Vec2::new(-1.0, 0.0));
        assert_eq!(state.mode(), MotionMode::Run);
    }

    #[test]
    fn facing_flips_once_when_crossing_zero() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(1.0, 0.0));
        assert!(!state.take_direction_changed());

        state.move_changed(Vec2::new(-1.0, 0.0));
        assert_eq!(state.facing(), Facing::Backward);
        assert!(state.take_direction_changed());
        assert!(!state.take_direction_changed());
    }

    #[test]
    fn facing_holds_when_direction_unchanged() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(1.0, 0.0));
        state.move_changed(Vec2::new(2.0, 0.0));
        assert!(!state.take_direction_changed());
        assert_eq!(state.facing(), Facing::Forward);
    }

    #[test]
    fn vertical_or_tiny_input_keeps_facing() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(-1.0, 0.0));
        state.take_direction_changed();

        state.move_changed(Vec2::new(0.0, 1.0));
        state.move_changed(Vec2::new(0.0005, 0.0));
        assert_eq!(state.facing(), Facing::Backward);
        assert!(!state.take_direction_changed());
    }

    #[test]
    fn flip_alone_counts_as_motion_change() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(-1.0, 0.0));

        assert!(state.take_motion_changed());
        // Direction flag survives the motion poll and keeps reporting a change.
        assert!(state.take_motion_changed());
        assert!(state.take_direction_changed());
        assert!(!state.take_motion_changed());
    }

    #[test]
    fn action_mode_suspends_transitions_and_velocity() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(1.0, 0.0));
        state.set_action_mode(true);
        assert_eq!(state.action_facing(), Facing::Forward);

        state.move_changed(Vec2::new(-1.0, 0.0));
        state.run_changed(true);

        assert_eq!(state.mode(), MotionMode::Walk);
        assert_eq!(state.facing(), Facing::Forward);
        assert_eq!(state.velocity(&config()), Vec2::ZERO);
        assert!(!state.take_direction_changed());
    }

    #[test]
    fn leaving_action_mode_reevaluates_facing_and_mode() {
        let mut state = MotionState::new();
        state.move_changed(Vec2::new(1.0, 0.0));
        state.set_action_mode(true);
        state.move_changed(Vec2::new(-1.0, 0.0));
        state.run_changed(true);
        state.take_motion_changed();

        state.set_action_mode(false);

        assert_eq!(state.facing(), Facing::Backward);
        assert_eq!(state.mode(), MotionMode::Run);
        assert!(state.take_direction_changed());
        assert!(state.take_motion_changed());
        assert_eq!(state.velocity(&config()), Vec2::new(-6.0, 0.0));
    }

    #[test]
    fn animation_indices_follow_mode_order() {
        assert_eq!(MotionMode::Idle.animation_index(), 0);
        assert_eq!(MotionMode::Walk.animation_index(), 1);
        assert_eq!(MotionMode::Run.animation_index(), 2);
    }
}
