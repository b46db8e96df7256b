use crate::{
    constants::StrainConstants, difficulty::object::StrainNode, util::difficulty::weighted_mean,
};

/// Reduces the strain of all nodes into the overall difficulty.
pub struct KeysRatingCalculator<'a> {
    nodes: &'a [StrainNode],
    constants: &'a StrainConstants,
}

impl<'a> KeysRatingCalculator<'a> {
    pub const fn new(nodes: &'a [StrainNode], constants: &'a StrainConstants) -> Self {
        Self { nodes, constants }
    }

    /// Weighted mean of all node strains where nodes played under fatigue
    /// weigh more.
    pub fn calculate(&self) -> f64 {
        weighted_mean(self.nodes.iter().map(|node| {
            let weight = f64::powf(
                node.stamina_multiplier + self.constants.strain_weight_offset,
                self.constants.strain_weight_exponent,
            );

            (node.total_strain_value, weight)
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{FingerState, Hand, Note};

    use super::*;

    fn node(total_strain_value: f64, stamina_multiplier: f64) -> StrainNode {
        let mut node = StrainNode::new(&Note::tap(0, 0.0), 1.0, Hand::Left, FingerState::INDEX);
        node.total_strain_value = total_strain_value;
        node.stamina_multiplier = stamina_multiplier;

        node
    }

    #[test]
    fn equal_fatigue_is_plain_mean() {
        let constants = StrainConstants::default();
        let nodes = [node(10.0, 1.0), node(20.0, 1.0), node(30.0, 1.0)];

        let rating = KeysRatingCalculator::new(&nodes, &constants).calculate();

        assert!((rating - 20.0).abs() < 1e-9);
    }

    #[test]
    fn fatigue_weighs_more() {
        let constants = StrainConstants::default();
        let nodes = [node(10.0, 0.9), node(30.0, 1.0)];

        let rating = KeysRatingCalculator::new(&nodes, &constants).calculate();

        assert!(rating > 20.0);
    }

    #[test]
    fn zero_weight_is_zero() {
        let constants = StrainConstants {
            strain_weight_offset: -1.0,
            ..Default::default()
        };

        let nodes = [node(10.0, 1.0)];

        assert_eq!(KeysRatingCalculator::new(&nodes, &constants).calculate(), 0.0);
    }
}
