use crate::{
    constants::StrainConstants,
    difficulty::object::{FingerAction, StrainNode},
    util::difficulty::saturating_curve,
};

pub struct ActionEvaluator;

impl ActionEvaluator {
    const X_MIN: f64 = 20.0;
    const MIN_DURATION: f64 = 1.0;

    /// Classify the action of every node with a successor on its hand and
    /// store its strain coefficient.
    pub fn evaluate(nodes: &mut [StrainNode], constants: &StrainConstants) {
        for idx in 0..nodes.len() {
            let Some(next_idx) = nodes[idx].next_on_hand else {
                continue;
            };

            let next = &nodes[next_idx];
            let curr = &nodes[idx];

            let action = Self::classify(curr, next);
            let duration = next.start_time - curr.start_time;

            let curr = &mut nodes[idx];
            curr.finger_action = action;
            curr.finger_action_duration_ms = duration;
            curr.action_strain_coefficient = Self::coefficient_of(action, duration, constants);
        }
    }

    pub fn classify(curr: &StrainNode, next: &StrainNode) -> FingerAction {
        let chord_found = curr.is_hand_chord() || next.is_hand_chord();

        // * a jack onto a neighbouring finger in either direction
        let tech_jack_found = next.finger_state.intersects(curr.finger_state.shifted())
            || curr.finger_state.intersects(next.finger_state.shifted());

        if !chord_found && !curr.finger_state.intersects(next.finger_state) {
            FingerAction::Trill
        } else if curr.finger_state == next.finger_state {
            FingerAction::SimpleJack
        } else if tech_jack_found {
            FingerAction::TechnicalJack
        } else {
            FingerAction::Bracket
        }
    }

    pub fn coefficient_of(
        action: FingerAction,
        duration: f64,
        constants: &StrainConstants,
    ) -> f64 {
        let (x_max, max_strain, exp) = match action {
            FingerAction::None => return 1.0,
            FingerAction::SimpleJack => (
                constants.sjack_upper_boundary_ms,
                constants.sjack_max_strain_value,
                constants.sjack_curve_exponential,
            ),
            FingerAction::TechnicalJack => (
                constants.tjack_upper_boundary_ms,
                constants.tjack_max_strain_value,
                constants.tjack_curve_exponential,
            ),
            FingerAction::Trill => (
                constants.roll_upper_boundary_ms,
                constants.roll_max_strain_value,
                constants.roll_curve_exponential,
            ),
            FingerAction::Bracket => (
                constants.bracket_upper_boundary_ms,
                constants.bracket_max_strain_value,
                constants.bracket_curve_exponential,
            ),
        };

        // * Duration is capped at a very small value to prevent infinite values.
        let duration = f64::max(duration, Self::MIN_DURATION);

        let density_bonus = f64::min(
            constants.max_density_bonus,
            constants.density_bonus_duration / duration,
        );

        saturating_curve(duration, Self::X_MIN, x_max, max_strain, exp, density_bonus)
    }
}
