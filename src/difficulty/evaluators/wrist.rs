use crate::{
    constants::StrainConstants,
    difficulty::object::StrainNode,
    model::FingerState,
};

/// Detects hands returning to the same finger state over and over and
/// lowers their strain the longer the motion repeats.
pub struct WristEvaluator;

impl WristEvaluator {
    /// Longer to shorter action ratio above which a return to the starting
    /// finger counts as wrist movement instead of a roll.
    const ROLL_RATIO_TOLERANCE: f64 = 1.9;

    pub fn evaluate(nodes: &mut [StrainNode], constants: &StrainConstants) {
        Self::solve_wrist_states(nodes);
        Self::apply_multipliers(nodes, constants);
    }

    fn solve_wrist_states(nodes: &mut [StrainNode]) {
        let mut path = Vec::new();

        for idx in 0..nodes.len() {
            let Some(next_on_hand) = nodes[idx].next_on_hand else {
                continue;
            };

            if !nodes[idx].wrist_state.is_empty() {
                continue;
            }

            let resolved = Self::solve_wrist_state(nodes, idx, &mut path);

            let next_after_wrist_up = match resolved {
                Some(resolved) if resolved != idx => nodes[resolved].next_after_wrist_up,
                _ => Some(next_on_hand),
            };

            let node = &mut nodes[idx];
            node.wrist_state = node.finger_state;
            node.next_after_wrist_up = next_after_wrist_up;
        }
    }

    /// Walk the hand's chain from `start` while accumulating finger states.
    ///
    /// Returns the node that closed the wrist cycle, or `None` if the chain
    /// continues as a roll or the cycle was too short. Every node on the way
    /// to a closing node takes over its wrist state. The walk is bounded by
    /// the chain's length.
    fn solve_wrist_state(
        nodes: &mut [StrainNode],
        start: usize,
        path: &mut Vec<usize>,
    ) -> Option<usize> {
        path.clear();

        let mut curr = start;
        let mut state = nodes[start].finger_state;
        let mut duration = 0.0;

        let resolved = loop {
            let Some(next) = nodes[curr].next_on_hand else {
                nodes[curr].wrist_state = state;

                break Some(curr);
            };

            if state.intersects(nodes[next].finger_state) {
                let node = &mut nodes[curr];

                // * too short to be a cycle or already spanning several fingers;
                // * the node keeps its own state
                if duration < StrainConstants::CHORD_CLUMP_TOLERANCE_MS || state.count() > 1 {
                    node.wrist_state = state;
                    node.next_after_wrist_up = Some(next);

                    break None;
                }

                let (min, max) = if duration > node.finger_action_duration_ms {
                    (node.finger_action_duration_ms, duration)
                } else {
                    (duration, node.finger_action_duration_ms)
                };

                if max / min > Self::ROLL_RATIO_TOLERANCE {
                    node.wrist_state = state;
                    node.next_after_wrist_up = Some(next);

                    break Some(curr);
                }

                break None;
            }

            path.push(curr);
            state |= nodes[curr].finger_state;
            duration = nodes[curr].finger_action_duration_ms;
            curr = next;
        };

        if let Some(resolved) = resolved {
            let wrist_state = nodes[resolved].wrist_state;
            let next_after_wrist_up = nodes[resolved].next_after_wrist_up;

            for &idx in path.iter().rev() {
                nodes[idx].wrist_state = wrist_state;
                nodes[idx].next_after_wrist_up = next_after_wrist_up;
            }
        }

        resolved
    }

    fn apply_multipliers(nodes: &mut [StrainNode], constants: &StrainConstants) {
        let mut curr_wrist_state = [FingerState::NONE; 2];
        let mut count = [0_u32; 2];

        let w = constants.wrist_manipulation_multiplier;
        let offset = constants.wrist_manipulation_offset;

        for node in nodes.iter_mut() {
            if node.next_on_hand.is_none() {
                continue;
            }

            let hand = node.hand.idx();

            if node.wrist_state == curr_wrist_state[hand] {
                count[hand] += 1;
                node.wrist_manipulation_multiplier =
                    (1.0 - w) + w * offset / (f64::from(count[hand]) + offset);

                continue;
            }

            count[hand] = 0;
            curr_wrist_state[hand] = node.wrist_state;
        }
    }
}
