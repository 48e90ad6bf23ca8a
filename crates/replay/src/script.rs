//! Input scripts.
//!
//! A script is a RON list of steps. Every step except the tick steps is
//! delivered to the character as an input event; tick steps advance the
//! frame clock and emit output.
//!
//! ```ron
//! [
//!     Move((1.0, 0.0)),
//!     Tick,
//!     Command(FastAttack),
//!     Ticks(3),
//! ]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use combo_core::{ActionCommand, CharacterInput, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    Move(Vec2),
    Run(bool),
    Command(ActionCommand),
    StepDecision,
    Hit,
    ActionEnded,
    Nudge(f32),
    /// Advance one frame.
    Tick,
    /// Advance several frames.
    Ticks(u32),
}

impl ScriptStep {
    /// Input event carried by this step, `None` for tick steps.
    pub fn input(self) -> Option<CharacterInput> {
        let input = match self {
            Self::Move(motion) => CharacterInput::Move(motion),
            Self::Run(run) => CharacterInput::Run(run),
            Self::Command(command) => CharacterInput::Command(command),
            Self::StepDecision => CharacterInput::StepDecision,
            Self::Hit => CharacterInput::Hit,
            Self::ActionEnded => CharacterInput::ActionEnded,
            Self::Nudge(amount) => CharacterInput::Nudge(amount),
            Self::Tick | Self::Ticks(_) => return None,
        };
        Some(input)
    }

    /// Number of frames this step advances.
    pub fn ticks(self) -> u32 {
        match self {
            Self::Tick => 1,
            Self::Ticks(count) => count,
            _ => 0,
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid script {}", path.display()))
}

pub fn parse(content: &str) -> Result<Vec<ScriptStep>> {
    ron::from_str(content).context("Failed to parse script RON")
}
