use glam::Vec2;

/// Character tuning constants and runtime-tunable locomotion parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterConfig {
    /// Per-axis speed applied to the motion vector while walking.
    pub walk_speed: Vec2,
    /// Per-axis speed applied to the motion vector while running.
    pub run_speed: Vec2,
    /// Horizontal speed of a velocity nudge issued during an action.
    pub nudge_speed: f32,
}

impl CharacterConfig {
    // ===== thresholds =====
    /// Motion vectors at or below this magnitude count as no motion.
    pub const MOTION_EPSILON: f32 = 0.001;
    /// Horizontal input must exceed this magnitude to change facing.
    pub const DIRECTION_EPSILON: f32 = 0.001;
    /// Analog run input above this magnitude counts as pressed.
    pub const RUN_INPUT_THRESHOLD: f32 = 0.001;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WALK_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    pub const DEFAULT_RUN_SPEED: Vec2 = Vec2::new(5.0, 0.0);
    pub const DEFAULT_NUDGE_SPEED: f32 = 3.0;

    pub fn new() -> Self {
        Self {
            walk_speed: Self::DEFAULT_WALK_SPEED,
            run_speed: Self::DEFAULT_RUN_SPEED,
            nudge_speed: Self::DEFAULT_NUDGE_SPEED,
        }
    }

    pub fn with_speeds(walk_speed: Vec2, run_speed: Vec2) -> Self {
        Self {
            walk_speed,
            run_speed,
            ..Self::new()
        }
    }

    /// Converts an analog run axis value into the run flag.
    pub fn run_pressed(value: f32) -> bool {
        value.abs() > Self::RUN_INPUT_THRESHOLD
    }
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self::new()
    }
}
