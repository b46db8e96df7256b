use crate::{
    constants::StrainConstants,
    difficulty::object::{LnLayerType, StrainNode},
    util::difficulty::reverse_lerp,
};

pub struct LongNoteEvaluator;

impl LongNoteEvaluator {
    /// Layer every node that is pressed while a hold note of the same hand is
    /// still held.
    pub fn evaluate(nodes: &mut [StrainNode], constants: &StrainConstants) {
        for idx in 0..nodes.len() {
            let hold = &nodes[idx];

            if !hold.is_hold() {
                continue;
            }

            let hold_end_time = hold.end_time;
            let base_difficulty =
                Self::base_difficulty(hold.end_time - hold.start_time, constants);
            let mut next = hold.next_on_hand;

            while let Some(next_idx) = next {
                let curr = &mut nodes[next_idx];

                if curr.start_time >= hold_end_time - StrainConstants::LN_END_THRESHOLD_MS {
                    break;
                }

                let (layer_type, multiplier) =
                    if curr.end_time > hold_end_time + StrainConstants::LN_END_THRESHOLD_MS {
                        (
                            LnLayerType::OutsideRelease,
                            constants.ln_release_after_multiplier,
                        )
                    } else if curr.is_hold() {
                        (
                            LnLayerType::InsideRelease,
                            constants.ln_release_before_multiplier,
                        )
                    } else {
                        (LnLayerType::InsideTap, constants.ln_tap_multiplier)
                    };

                for note in curr.notes.iter_mut() {
                    note.ln_layer_type = layer_type;
                    note.ln_strain_difficulty = base_difficulty * multiplier;
                }

                next = curr.next_on_hand;
            }
        }
    }

    pub fn base_difficulty(duration: f64, constants: &StrainConstants) -> f64 {
        let threshold = constants.ln_difficult_size_threshold_ms;

        let duration_value = if threshold > 0.0 {
            reverse_lerp(duration, 0.0, threshold)
        } else {
            1.0
        };

        constants.ln_base_value + duration_value * constants.ln_base_multiplier
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        difficulty::chain::ChainBuilder,
        model::{Chart, Hand, Keymode, Note},
    };

    use super::*;

    fn solve(notes: Vec<Note>) -> Vec<StrainNode> {
        let constants = StrainConstants::default();

        let mut nodes = ChainBuilder::new(&constants, 1.0, Hand::Right)
            .build(&Chart::new(Keymode::Keys4, notes))
            .unwrap();

        LongNoteEvaluator::evaluate(&mut nodes, &constants);

        nodes
    }

    #[test]
    fn long_hold_saturates_base_difficulty() {
        let constants = StrainConstants::default();

        assert_eq!(
            LongNoteEvaluator::base_difficulty(300.0, &constants),
            constants.ln_base_value + constants.ln_base_multiplier
        );
        assert_eq!(
            LongNoteEvaluator::base_difficulty(0.0, &constants),
            constants.ln_base_value
        );
    }

    #[test]
    fn classifies_layers() {
        let constants = StrainConstants::default();
        let base = LongNoteEvaluator::base_difficulty(1000.0, &constants);

        let nodes = solve(vec![
            Note::hold(0, 0.0, 1000.0),
            Note::tap(1, 200.0),
            Note::hold(0, 400.0, 600.0),
            Note::hold(1, 700.0, 1500.0),
        ]);

        assert_eq!(nodes[1].notes[0].ln_layer_type, LnLayerType::InsideTap);
        assert_eq!(
            nodes[1].notes[0].ln_strain_difficulty,
            base * constants.ln_tap_multiplier
        );

        assert_eq!(nodes[2].notes[0].ln_layer_type, LnLayerType::InsideRelease);
        assert_eq!(
            nodes[2].notes[0].ln_strain_difficulty,
            base * constants.ln_release_before_multiplier
        );

        assert_eq!(nodes[3].notes[0].ln_layer_type, LnLayerType::OutsideRelease);
        assert_eq!(
            nodes[3].notes[0].ln_strain_difficulty,
            base * constants.ln_release_after_multiplier
        );
    }

    #[test]
    fn ignores_notes_close_to_release() {
        let nodes = solve(vec![Note::hold(0, 0.0, 1000.0), Note::tap(1, 980.0)]);

        assert_eq!(nodes[1].notes[0].ln_layer_type, LnLayerType::None);
        assert_eq!(nodes[1].notes[0].ln_strain_difficulty, 1.0);
    }

    #[test]
    fn other_hand_is_not_layered() {
        let nodes = solve(vec![Note::hold(0, 0.0, 1000.0), Note::tap(2, 200.0)]);

        assert_eq!(nodes[1].notes[0].ln_layer_type, LnLayerType::None);
    }
}
