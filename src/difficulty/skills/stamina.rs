use crate::{constants::StrainConstants, difficulty::object::StrainNode};

/// Leaky fatigue integrator over all nodes in time order.
///
/// Hard nodes raise the fatigue by a fixed step while easy sections relax it
/// proportionally to the elapsed time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stamina {
    fatigue: f64,
    prev_start_time: f64,
}

impl Stamina {
    pub const fn new() -> Self {
        Self {
            fatigue: 0.0,
            prev_start_time: 0.0,
        }
    }

    /// Resolve the stamina multiplier and the resulting strain of every node
    /// that has a successor on its hand.
    pub fn process_all(nodes: &mut [StrainNode], constants: &StrainConstants) {
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| nodes[a].start_time.total_cmp(&nodes[b].start_time));

        let mut stamina = Self::new();

        for idx in order {
            let node = &mut nodes[idx];

            if node.next_on_hand.is_some() {
                stamina.process(node, constants);
            }
        }
    }

    pub fn process(&mut self, node: &mut StrainNode, constants: &StrainConstants) {
        node.calculate_strain_value();

        let delta = (node.start_time - self.prev_start_time) / 1000.0;
        self.prev_start_time = node.start_time;

        if node.total_strain_value > constants.stamina_difficulty_value {
            self.fatigue += constants.stamina_increase_value;
        } else {
            self.fatigue -= constants.stamina_decrease_velocity * delta;
        }

        self.fatigue = self.fatigue.clamp(0.0, 1.0);

        node.stamina_multiplier = self.fatigue * constants.stamina_strain_multiplier
            + (1.0 - constants.stamina_strain_multiplier);

        node.calculate_strain_value();
    }

    /// The current fatigue in `[0, 1]`.
    pub const fn fatigue(&self) -> f64 {
        self.fatigue
    }
}
