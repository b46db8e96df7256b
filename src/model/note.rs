use std::cmp::Ordering;

use crate::model::keymode::Keymode;

/// A single lane event of a keys chart.
///
/// Columns are zero-based. A note whose end time does not exceed its start
/// time is a tap, otherwise it is a hold note.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    pub column: usize,
    pub start_time: f64,
    pub end_time: f64,
}

impl Note {
    /// Create a tap note.
    pub const fn tap(column: usize, start_time: f64) -> Self {
        Self {
            column,
            start_time,
            end_time: start_time,
        }
    }

    /// Create a hold note.
    pub const fn hold(column: usize, start_time: f64, end_time: f64) -> Self {
        Self {
            column,
            start_time,
            end_time,
        }
    }

    /// Whether the note is a hold note.
    pub fn is_hold(&self) -> bool {
        self.end_time > self.start_time
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// A fully parsed keys chart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    pub keymode: Keymode,
    /// Whether the last column is a scratch lane. Its notes are ignored.
    pub has_scratch: bool,
    pub notes: Vec<Note>,
}

impl Chart {
    /// Create a new chart without scratch lane.
    pub fn new(keymode: Keymode, notes: impl Into<Vec<Note>>) -> Self {
        Self {
            keymode,
            has_scratch: false,
            notes: notes.into(),
        }
    }

    /// Specify whether the chart has a scratch lane.
    #[must_use]
    pub const fn with_scratch(mut self, has_scratch: bool) -> Self {
        self.has_scratch = has_scratch;

        self
    }

    /// The amount of columns, including the scratch lane.
    pub const fn key_count(&self) -> usize {
        self.keymode.key_count() + self.has_scratch as usize
    }

    /// The column of the scratch lane, if any.
    pub const fn scratch_column(&self) -> Option<usize> {
        if self.has_scratch {
            Some(self.keymode.key_count())
        } else {
            None
        }
    }

    /// The amount of hold notes.
    pub fn n_hold_notes(&self) -> u32 {
        self.notes.iter().filter(|note| note.is_hold()).count() as u32
    }
}
