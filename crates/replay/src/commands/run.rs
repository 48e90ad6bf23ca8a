//! Replay an input script through one character.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use combo_core::{CharacterController, CharacterState, Frame};
use serde::Serialize;

use super::{load_catalog, load_config};
use crate::script;

/// Replay an input script and print per-tick frames
#[derive(Parser)]
pub struct Run {
    /// RON input script
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Action catalog (RON); defaults to the bundled catalog
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Character tuning (TOML); defaults to the bundled config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit one JSON object per frame instead of text
    #[arg(long)]
    json: bool,

    /// Also print frames that carry no output
    #[arg(short, long)]
    all: bool,
}

#[derive(Serialize)]
struct FrameRecord {
    tick: u64,
    #[serde(flatten)]
    frame: Frame,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let config = load_config(self.config.as_deref())?;
        let steps = script::load(&self.script)?;

        let mut state = CharacterState::new();
        let mut controller = CharacterController::new(&catalog, &config, &mut state);
        let mut tick = 0u64;
        let mut emitted = 0usize;

        for step in steps {
            if let Some(input) = step.input() {
                tracing::debug!(?input, "input");
                controller.handle(input);
            }
            for _ in 0..step.ticks() {
                let frame = controller.tick();
                if self.all || !frame.is_empty() {
                    self.print(FrameRecord { tick, frame })?;
                    emitted += 1;
                }
                tick += 1;
            }
        }

        tracing::info!(ticks = tick, frames = emitted, "replay finished");
        Ok(())
    }

    fn print(&self, record: FrameRecord) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{}", describe(&record));
        }
        Ok(())
    }
}

fn describe(record: &FrameRecord) -> String {
    let frame = &record.frame;
    let mut parts = Vec::new();
    if let Some(index) = frame.action_animation {
        parts.push(format!("action={index}"));
    }
    if let Some(mode) = frame.motion_animation {
        parts.push(format!("motion={mode}"));
    }
    if let Some(velocity) = frame.velocity {
        parts.push(format!("velocity=({}, {})", velocity.x, velocity.y));
    }
    if let Some(facing) = frame.flip {
        parts.push(format!("flip={facing}"));
    }
    if parts.is_empty() {
        parts.push("-".to_string());
    }
    format!("tick {:>4}: {}", record.tick, parts.join(" "))
}

#[cfg(test)]
mod tests {
    use combo_core::{Facing, MotionMode, Vec2};

    use super::*;

    #[test]
    fn describes_frames() {
        let record = FrameRecord {
            tick: 3,
            frame: Frame {
                action_animation: None,
                motion_animation: Some(MotionMode::Walk),
                velocity: Some(Vec2::new(-2.0, 0.0)),
                flip: Some(Facing::Backward),
            },
        };
        assert_eq!(
            describe(&record),
            "tick    3: motion=walk velocity=(-2, 0) flip=backward"
        );

        let empty = FrameRecord {
            tick: 12,
            frame: Frame::default(),
        };
        assert_eq!(describe(&empty), "tick   12: -");
    }

    #[test]
    fn frame_records_flatten_into_json() {
        let record = FrameRecord {
            tick: 0,
            frame: Frame {
                action_animation: Some(1),
                ..Frame::default()
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tick"], 0);
        assert_eq!(json["action_animation"], 1);
        assert!(json["flip"].is_null());
    }
}
