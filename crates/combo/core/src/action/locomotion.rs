use bitflags::bitflags;

bitflags! {
    /// Locomotion modes a chain may be started from.
    ///
    /// A chain is eligible when the character's current [`LocomotionMode`]
    /// is a member of its flag set. An empty set makes the chain unreachable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct LocomotionFlags: u8 {
        const STILL   = 1 << 0;
        const WALKING = 1 << 1;
        const RUNNING = 1 << 2;
    }
}

impl LocomotionFlags {
    /// Returns true if a chain with these flags may start from `mode`.
    #[inline]
    pub fn allows(self, mode: LocomotionMode) -> bool {
        self.contains(mode.flag())
    }
}

/// The character's single current movement state for chain matching.
///
/// Exactly one mode holds at any instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LocomotionMode {
    #[default]
    Still,
    Walking,
    Running,
}

impl LocomotionMode {
    /// Derives the mode from the motion predicates; running wins over walking.
    pub const fn from_motion(walking: bool, running: bool) -> Self {
        if running {
            Self::Running
        } else if walking {
            Self::Walking
        } else {
            Self::Still
        }
    }

    /// The flag bit representing this mode.
    pub const fn flag(self) -> LocomotionFlags {
        match self {
            Self::Still => LocomotionFlags::STILL,
            Self::Walking => LocomotionFlags::WALKING,
            Self::Running => LocomotionFlags::RUNNING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_takes_priority_over_walking() {
        assert_eq!(LocomotionMode::from_motion(true, true), LocomotionMode::Running);
        assert_eq!(LocomotionMode::from_motion(true, false), LocomotionMode::Walking);
        assert_eq!(LocomotionMode::from_motion(false, false), LocomotionMode::Still);
    }

    #[test]
    fn flags_allow_only_members() {
        let flags = LocomotionFlags::STILL | LocomotionFlags::RUNNING;
        assert!(flags.allows(LocomotionMode::Still));
        assert!(!flags.allows(LocomotionMode::Walking));
        assert!(flags.allows(LocomotionMode::Running));
        assert!(!LocomotionFlags::empty().allows(LocomotionMode::Still));
    }
}
