use tracing::trace;

use crate::{
    constants::StrainConstants,
    difficulty::object::StrainNode,
    error::{StrainError, StrainResult},
    model::{Chart, Hand, LaneAssignment},
};

/// Builds the per-hand node chains of a chart.
pub struct ChainBuilder<'a> {
    constants: &'a StrainConstants,
    clock_rate: f64,
    assumed_hand: Hand,
}

impl<'a> ChainBuilder<'a> {
    pub const fn new(constants: &'a StrainConstants, clock_rate: f64, assumed_hand: Hand) -> Self {
        Self {
            constants,
            clock_rate,
            assumed_hand,
        }
    }

    /// Create one node per note, merge chords and link every node to the
    /// next node on its hand.
    pub fn build(&self, chart: &Chart) -> StrainResult<Vec<StrainNode>> {
        if !self.clock_rate.is_finite() || self.clock_rate <= 0.0 {
            return Err(StrainError::InvalidClockRate {
                clock_rate: self.clock_rate,
            });
        }

        let mut nodes = self.create_nodes(chart)?;
        let n_notes = nodes.len();

        merge_chords(&mut nodes, self.constants);
        link_hands(&mut nodes);

        trace!(n_notes, n_nodes = nodes.len(), "merged chords");

        Ok(nodes)
    }

    fn create_nodes(&self, chart: &Chart) -> StrainResult<Vec<StrainNode>> {
        let lanes = LaneAssignment::for_keymode(chart.keymode);
        let scratch_column = chart.scratch_column();
        let mut nodes = Vec::with_capacity(chart.notes.len());

        for (idx, note) in chart.notes.iter().enumerate() {
            if !note.start_time.is_finite() || !note.end_time.is_finite() {
                return Err(StrainError::NonFiniteTime { idx });
            }

            if scratch_column == Some(note.column) {
                continue;
            }

            let (hand, finger) = lanes.resolve(note.column, self.assumed_hand).ok_or(
                StrainError::InvalidColumn {
                    column: note.column,
                    keymode: chart.keymode,
                },
            )?;

            nodes.push(StrainNode::new(note, self.clock_rate, hand, finger));
        }

        // * stable so that simultaneous notes keep their chart order
        nodes.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        Ok(nodes)
    }
}

/// Merge nodes of the same hand within the chord tolerance into one node and
/// mark nodes chorded with the other hand.
///
/// Finger states are solved afterwards.
pub(crate) fn merge_chords(nodes: &mut Vec<StrainNode>, constants: &StrainConstants) {
    let tolerance = StrainConstants::CHORD_CLUMP_TOLERANCE_MS;
    let mut i = 0;

    while i + 1 < nodes.len() {
        let mut j = i + 1;

        while j < nodes.len() {
            let ms_diff = nodes[j].start_time - nodes[i].start_time;

            if ms_diff > tolerance {
                break;
            }

            if ms_diff.abs() > tolerance {
                j += 1;

                continue;
            }

            if nodes[i].hand == nodes[j].hand {
                // * the next node now sits at index j
                let merged = nodes.remove(j);
                nodes[i].absorb(merged);
            } else {
                nodes[i].chord_multiplier = constants.both_hand_chorded_multiplier;
                nodes[j].chord_multiplier = constants.both_hand_chorded_multiplier;
                j += 1;
            }
        }

        i += 1;
    }

    for node in nodes.iter_mut() {
        node.solve_finger_state();
    }
}

/// Point every node to the next later node on its hand.
pub(crate) fn link_hands(nodes: &mut [StrainNode]) {
    let mut prev_on_hand: [Option<usize>; 2] = [None; 2];

    for idx in 0..nodes.len() {
        let hand = nodes[idx].hand.idx();

        if let Some(prev) = prev_on_hand[hand] {
            if nodes[idx].start_time <= nodes[prev].start_time {
                continue;
            }

            nodes[prev].next_on_hand = Some(idx);
        }

        prev_on_hand[hand] = Some(idx);
    }
}
