/// Discrete command trigger delivered by the input layer.
///
/// Commands carry no payload; a chain step matches purely on identity.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionCommand {
    FastAttack,
    SlowAttack,
    SpecialAttack,
    Dodge,
    Jump,
}

impl ActionCommand {
    /// Single-letter code used when rendering a chain for designers.
    pub const fn code(self) -> char {
        match self {
            Self::FastAttack => 'F',
            Self::SlowAttack => 'S',
            Self::SpecialAttack => 'P',
            Self::Dodge => 'D',
            Self::Jump => 'J',
        }
    }

    /// Inverse of [`ActionCommand::code`].
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'F' => Some(Self::FastAttack),
            'S' => Some(Self::SlowAttack),
            'P' => Some(Self::SpecialAttack),
            'D' => Some(Self::Dodge),
            'J' => Some(Self::Jump),
            _ => None,
        }
    }
}
