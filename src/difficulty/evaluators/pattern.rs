use tracing::debug;

use crate::{
    constants::StrainConstants,
    difficulty::{
        attributes::PatternFlags,
        object::{FingerAction, StrainNode},
    },
};

/// Flags charts whose rating is likely inaccurate because large parts of it
/// can be manipulated.
pub struct PatternEvaluator;

impl PatternEvaluator {
    const VIBRO_FLAG_THRESHOLD: f64 = 0.10;
    const ROLL_FLAG_THRESHOLD: f64 = 0.15;

    pub fn evaluate(nodes: &[StrainNode]) -> PatternFlags {
        if nodes.is_empty() {
            return PatternFlags::NONE;
        }

        let vibro_confidence = Self::vibro_confidence(nodes);
        let roll_confidence = Self::roll_confidence(nodes);

        let n_nodes = nodes.len() as f64;
        let mut flags = PatternFlags::NONE;

        if f64::from(vibro_confidence) / n_nodes > Self::VIBRO_FLAG_THRESHOLD {
            flags |= PatternFlags::SIMPLE_VIBRO;
        }

        if f64::from(roll_confidence) / n_nodes > Self::ROLL_FLAG_THRESHOLD {
            flags |= PatternFlags::ROLLS;
        }

        debug!(vibro_confidence, roll_confidence, n_nodes, ?flags, "pattern flags");

        flags
    }

    /// Counts fast simple jacks that are followed by another simple jack
    /// without slowing down.
    fn vibro_confidence(nodes: &[StrainNode]) -> u32 {
        let max_duration =
            StrainConstants::VIBRO_ACTION_DURATION_MS + StrainConstants::VIBRO_ACTION_TOLERANCE_MS;

        let mut prev_action_duration = 0.0;
        let mut confidence = 0;

        for node in nodes {
            let Some(next) = node.next_on_hand.map(|idx| &nodes[idx]) else {
                continue;
            };

            let duration = node.finger_action_duration_ms;

            if node.finger_action == FingerAction::SimpleJack
                && next.finger_action == FingerAction::SimpleJack
                && duration <= max_duration
                && duration < StrainConstants::VIBRO_DELTA_TOLERANCE_MS + prev_action_duration
            {
                confidence += 1;
            }

            prev_action_duration = duration;
        }

        confidence
    }

    /// Counts A-B-A trills where one of both actions is much longer.
    fn roll_confidence(nodes: &[StrainNode]) -> u32 {
        let mut confidence = 0;

        for node in nodes {
            let Some(middle) = node.next_on_hand.map(|idx| &nodes[idx]) else {
                continue;
            };

            let Some(last) = middle.next_on_hand.map(|idx| &nodes[idx]) else {
                continue;
            };

            if node.finger_action != FingerAction::Trill
                || middle.finger_action != FingerAction::Trill
                || node.finger_state != last.finger_state
            {
                continue;
            }

            let ratio = f64::max(
                node.finger_action_duration_ms / middle.finger_action_duration_ms,
                middle.finger_action_duration_ms / node.finger_action_duration_ms,
            );

            if ratio >= StrainConstants::ROLL_RATIO_TOLERANCE {
                confidence += 1;
            }
        }

        confidence
    }
}
