use std::collections::BTreeMap;

use crate::{difficulty::object::StrainNode, model::Hand};

/// The resolved nodes of one solving run.
#[derive(Clone, Debug, PartialEq)]
pub struct HandSolution {
    /// The hand that the ambiguous column was assigned to.
    pub assumed_hand: Hand,
    pub overall_difficulty: f64,
    pub nodes: Box<[StrainNode]>,
}

/// Per-node strain values of a chart, e.g. for plotting.
///
/// Contains one [`HandSolution`] per hand assumption; charts without an
/// ambiguous column are solved only once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeysStrains {
    pub solutions: Vec<HandSolution>,
}

impl KeysStrains {
    /// Time between two consecutive strain graph points.
    pub const SECTION_LEN: f64 = 500.0;

    /// Average strain of all nodes starting in the same window of
    /// [`KeysStrains::SECTION_LEN`] ms, using the first solution.
    ///
    /// Returns the start time and average strain of every window that
    /// contains at least one node, in time order.
    pub fn section_strains(&self) -> Vec<(f64, f64)> {
        let Some(solution) = self.solutions.first() else {
            return Vec::new();
        };

        let mut sections: BTreeMap<u64, (f64, u32)> = BTreeMap::new();

        for node in solution.nodes.iter() {
            // * saturating cast; negative times fall into the first section
            let section = (node.start_time.max(0.0) / Self::SECTION_LEN) as u64;
            let (sum, count) = sections.entry(section).or_default();
            *sum += node.total_strain_value;
            *count += 1;
        }

        sections
            .into_iter()
            .map(|(section, (sum, count))| {
                (section as f64 * Self::SECTION_LEN, sum / f64::from(count))
            })
            .collect()
    }
}
