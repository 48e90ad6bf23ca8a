//! Per-character input routing and per-tick output.
//!
//! The controller composes [`MotionState`] and [`ComboState`] for one
//! character. Input events arrive in order through
//! [`CharacterController::handle`]; the presentation layer calls
//! [`CharacterController::tick`] once per frame and applies the returned
//! [`Frame`]. Every field of a frame is a one-shot: a cue or velocity is
//! reported once and then omitted until it changes again.

use glam::Vec2;

use crate::action::{ActionCatalog, ActionCommand, ComboResolver, ComboState, NO_ACTION};
use crate::config::CharacterConfig;
use crate::motion::{Facing, MotionMode, MotionState};

/// Input event delivered to a character.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterInput {
    /// New motion vector from the stick or AI controller.
    Move(Vec2),
    /// Run button state.
    Run(bool),
    /// Discrete action command.
    Command(ActionCommand),
    /// The playing step reached its decision point.
    StepDecision,
    /// The playing step connected with a target.
    Hit,
    /// The action animation finished; control returns to locomotion.
    ActionEnded,
    /// Short horizontal push along the facing direction, scaled by
    /// [`CharacterConfig::nudge_speed`].
    Nudge(f32),
}

/// Output of one tick.
///
/// The action and motion animation slots are independent; a frame may set
/// both when an action ends and locomotion resumes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Value for the action animation slot; [`NO_ACTION`] clears it.
    pub action_animation: Option<u32>,
    /// Locomotion animation.
    pub motion_animation: Option<MotionMode>,
    pub velocity: Option<Vec2>,
    pub flip: Option<Facing>,
}

impl Frame {
    /// Returns true if the frame carries nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.action_animation.is_none()
            && self.motion_animation.is_none()
            && self.velocity.is_none()
            && self.flip.is_none()
    }
}

/// Everything one character owns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterState {
    pub motion: MotionState,
    pub combo: ComboState,
    action_mode: bool,
    velocity_override: Option<Vec2>,
    pending_action_cue: Option<u32>,
}

impl CharacterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_action_mode(&self) -> bool {
        self.action_mode
    }
}

/// Input routing for one character over shared designer data.
pub struct CharacterController<'a> {
    catalog: &'a ActionCatalog,
    config: &'a CharacterConfig,
    state: &'a mut CharacterState,
}

impl<'a> CharacterController<'a> {
    pub fn new(
        catalog: &'a ActionCatalog,
        config: &'a CharacterConfig,
        state: &'a mut CharacterState,
    ) -> Self {
        Self {
            catalog,
            config,
            state,
        }
    }

    /// Applies one input event.
    pub fn handle(&mut self, input: CharacterInput) {
        match input {
            CharacterInput::Move(motion) => self.state.motion.move_changed(motion),
            CharacterInput::Run(run) => self.state.motion.run_changed(run),
            CharacterInput::Command(command) => self.command(command),
            CharacterInput::StepDecision => self.resolver().next_action(),
            CharacterInput::Hit => self.resolver().register_hit(),
            CharacterInput::ActionEnded => self.end_action(),
            CharacterInput::Nudge(amount) => self.nudge(amount),
        }
    }

    /// Produces the output for this tick.
    pub fn tick(&mut self) -> Frame {
        let mut frame = Frame {
            velocity: self.state.velocity_override.take(),
            action_animation: self.state.pending_action_cue.take(),
            ..Frame::default()
        };

        if self.state.action_mode {
            if self.state.combo.take_ready() {
                frame.action_animation = Some(self.state.combo.current_animation_index());
            }
            return frame;
        }

        let motion = &mut self.state.motion;
        if motion.take_motion_changed() {
            if motion.take_direction_changed() {
                frame.flip = Some(motion.facing());
            }
            frame.motion_animation = Some(motion.mode());
            frame.velocity = Some(motion.velocity(self.config));
        }

        frame
    }

    fn command(&mut self, command: ActionCommand) {
        if self.state.action_mode {
            self.resolver().add_action(command);
            return;
        }

        let mode = self.state.motion.locomotion_mode();
        if self.resolver().start_action(command, mode) {
            tracing::debug!(%command, %mode, "entering action mode");
            self.state.action_mode = true;
            self.state.pending_action_cue = None;
            self.state.velocity_override = Some(Vec2::ZERO);
            self.state.motion.set_action_mode(true);
        }
    }

    fn end_action(&mut self) {
        if !self.state.action_mode {
            return;
        }
        tracing::debug!(
            chain = ?self.state.combo.active_chain_name(self.catalog),
            "leaving action mode"
        );
        self.state.action_mode = false;
        self.state.combo.reset();
        self.state.pending_action_cue = Some(NO_ACTION);
        self.state.motion.set_action_mode(false);
    }

    fn nudge(&mut self, amount: f32) {
        let facing = if self.state.action_mode {
            self.state.motion.action_facing()
        } else {
            self.state.motion.facing()
        };
        self.state.velocity_override = Some(Vec2::new(
            amount * self.config.nudge_speed * facing.sign(),
            0.0,
        ));
    }

    fn resolver(&mut self) -> ComboResolver<'_> {
        ComboResolver::new(self.catalog, &mut self.state.combo)
    }
}
