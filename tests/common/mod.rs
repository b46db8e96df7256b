#![allow(dead_code)]

use proptest::prelude::*;
use qss::{Chart, Keymode, Note};

/// Maximum difference between two floats to be considered equal.
pub const EPSILON: f64 = 1e-9;

pub fn assert_eq_float(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Consecutive taps on a single column.
pub fn jacks(column: usize, n: u32, gap: f64) -> Vec<Note> {
    (0..n)
        .map(|i| Note::tap(column, f64::from(i) * gap))
        .collect()
}

/// Stairs over every column of a keymode, one note each `gap` ms.
pub fn stairs(keymode: Keymode, n: u32, gap: f64) -> Chart {
    let key_count = keymode.key_count() as u32;

    let notes: Vec<_> = (0..n)
        .map(|i| Note::tap((i % key_count) as usize, f64::from(i) * gap))
        .collect();

    Chart::new(keymode, notes)
}

/// The same four note wrist cycle on the left hand of a 4K chart, repeated
/// `cycles` times.
pub fn wrist_cycles(cycles: u32) -> Chart {
    let notes: Vec<_> = (0..cycles)
        .flat_map(|cycle| {
            let offset = f64::from(cycle) * 600.0;

            [
                Note::tap(0, offset),
                Note::tap(1, offset + 40.0),
                Note::tap(0, offset + 300.0),
                Note::tap(1, offset + 340.0),
            ]
        })
        .collect();

    Chart::new(Keymode::Keys4, notes)
}

/// Divide every time of the chart by `clock_rate`.
pub fn scaled(chart: &Chart, clock_rate: f64) -> Chart {
    let notes: Vec<_> = chart
        .notes
        .iter()
        .map(|note| {
            Note::hold(
                note.column,
                note.start_time / clock_rate,
                note.end_time / clock_rate,
            )
        })
        .collect();

    Chart::new(chart.keymode, notes).with_scratch(chart.has_scratch)
}

pub fn arb_keymode() -> impl Strategy<Value = Keymode> {
    prop_oneof![Just(Keymode::Keys4), Just(Keymode::Keys7)]
}

prop_compose! {
    fn arb_note(key_count: usize)(
        column in 0..key_count,
        start_time in 0_u32..30_000,
        hold_len in prop_oneof![3 => Just(0_u32), 1 => 1_u32..1500],
    ) -> Note {
        let start_time = f64::from(start_time);

        Note::hold(column, start_time, start_time + f64::from(hold_len))
    }
}

prop_compose! {
    /// Random charts with integer millisecond times.
    pub fn arb_chart()(keymode in arb_keymode())(
        notes in prop::collection::vec(arb_note(keymode.key_count()), 2..200),
        keymode in Just(keymode),
    ) -> Chart {
        Chart::new(keymode, notes)
    }
}
