use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{BitAnd, BitOr, BitOrAssign},
};

/// The layout of a keys chart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keymode {
    #[default]
    Keys4,
    Keys7,
}

impl Keymode {
    /// The amount of playable columns, excluding a scratch lane.
    pub const fn key_count(self) -> usize {
        match self {
            Self::Keys4 => 4,
            Self::Keys7 => 7,
        }
    }

    /// Whether a column cannot be attributed to one specific hand.
    ///
    /// Such keymodes are solved once for each hand and averaged.
    pub const fn has_ambiguous_column(self) -> bool {
        matches!(self, Self::Keys7)
    }
}

impl Display for Keymode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}K", self.key_count())
    }
}

/// The hand that presses a column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hand {
    Left,
    #[default]
    Right,
    Ambiguous,
}

impl Hand {
    pub(crate) const fn idx(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right | Self::Ambiguous => 1,
        }
    }
}

/// Bitmask of engaged fingers on one hand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FingerState(u8);

impl FingerState {
    pub const NONE: Self = Self(0);
    pub const INDEX: Self = Self(1);
    pub const MIDDLE: Self = Self(1 << 1);
    pub const RING: Self = Self(1 << 2);
    pub const PINKY: Self = Self(1 << 3);
    pub const THUMB: Self = Self(1 << 4);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether both states share at least one finger.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// The amount of engaged fingers.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Every finger moved one position outwards.
    pub const fn shifted(self) -> Self {
        Self(self.0 << 1)
    }
}

impl BitOr for FingerState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FingerState {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FingerState {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

/// Static column to hand and finger tables of a [`Keymode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneAssignment {
    hands: &'static [Hand],
    fingers: &'static [FingerState],
}

impl LaneAssignment {
    const KEYS4: Self = Self {
        hands: &[Hand::Left, Hand::Left, Hand::Right, Hand::Right],
        fingers: &[
            FingerState::MIDDLE,
            FingerState::INDEX,
            FingerState::INDEX,
            FingerState::MIDDLE,
        ],
    };

    const KEYS7: Self = Self {
        hands: &[
            Hand::Left,
            Hand::Left,
            Hand::Left,
            Hand::Ambiguous,
            Hand::Right,
            Hand::Right,
            Hand::Right,
        ],
        fingers: &[
            FingerState::RING,
            FingerState::MIDDLE,
            FingerState::INDEX,
            FingerState::THUMB,
            FingerState::INDEX,
            FingerState::MIDDLE,
            FingerState::RING,
        ],
    };

    pub const fn for_keymode(keymode: Keymode) -> &'static Self {
        match keymode {
            Keymode::Keys4 => &Self::KEYS4,
            Keymode::Keys7 => &Self::KEYS7,
        }
    }

    /// The hand of a column. Returns `None` if the column is out of range.
    pub fn hand(&self, column: usize) -> Option<Hand> {
        self.hands.get(column).copied()
    }

    /// The finger of a column. Returns `None` if the column is out of range.
    pub fn finger(&self, column: usize) -> Option<FingerState> {
        self.fingers.get(column).copied()
    }

    /// Hand and finger of a column where an ambiguous hand is replaced by
    /// `assumed_hand`.
    pub fn resolve(&self, column: usize, assumed_hand: Hand) -> Option<(Hand, FingerState)> {
        let hand = match self.hand(column)? {
            Hand::Ambiguous => assumed_hand,
            hand => hand,
        };

        self.finger(column).map(|finger| (hand, finger))
    }
}
