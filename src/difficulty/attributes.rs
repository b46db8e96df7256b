use std::ops::{BitOr, BitOrAssign};

/// Patterns that are likely to be manipulated and thus make the overall
/// difficulty less reliable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PatternFlags(u8);

impl PatternFlags {
    pub const NONE: Self = Self(0);
    /// Long stretches of fast same-finger jacks.
    pub const SIMPLE_VIBRO: Self = Self(1);
    /// Long stretches of uneven rolls.
    pub const ROLLS: Self = Self(1 << 1);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PatternFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PatternFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The result of a difficulty calculation on a keys chart.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeysDifficultyAttributes {
    /// The overall difficulty.
    pub overall_difficulty: f64,
    /// Manipulable patterns. Only set for detailed calculations.
    pub pattern_flags: PatternFlags,
    /// The amount of notes in the chart, including scratch notes.
    pub n_objects: u32,
    /// The amount of hold notes in the chart.
    pub n_hold_notes: u32,
    /// The clock rate that was used.
    pub clock_rate: f64,
}

impl KeysDifficultyAttributes {
    /// Return the overall difficulty.
    pub const fn overall_difficulty(&self) -> f64 {
        self.overall_difficulty
    }
}
