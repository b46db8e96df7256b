use rosu_mods::GameModsLegacy;
use tracing::debug;

use crate::{
    constants::StrainConstants,
    error::{StrainError, StrainResult},
    model::{Chart, Hand},
};

use self::{
    chain::ChainBuilder,
    evaluators::{ActionEvaluator, LongNoteEvaluator, PatternEvaluator, WristEvaluator},
    rating::KeysRatingCalculator,
    skills::Stamina,
};

pub use self::{
    attributes::{KeysDifficultyAttributes, PatternFlags},
    object::{FingerAction, LnLayerType, StrainNode, StrainNote},
    strains::{HandSolution, KeysStrains},
};

mod attributes;
mod chain;
mod evaluators;
mod object;
mod rating;
mod skills;
mod strains;

/// Difficulty calculator on keys charts.
///
/// # Example
///
/// ```
/// use qss::{Chart, Difficulty, Keymode, Note};
///
/// let chart = Chart::new(
///     Keymode::Keys4,
///     vec![Note::tap(0, 0.0), Note::tap(1, 120.0), Note::tap(2, 240.0)],
/// );
///
/// let attrs = Difficulty::new()
///     .clock_rate(1.2)
///     .detailed(true)
///     .calculate(&chart)?;
///
/// assert!(attrs.overall_difficulty > 0.0);
/// # Ok::<_, qss::StrainError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameModsLegacy,
    clock_rate: Option<f64>,
    constants: StrainConstants,
    detailed: bool,
}

impl Difficulty {
    const MIN_CLOCK_RATE: f64 = 0.01;
    const MAX_CLOCK_RATE: f64 = 100.0;

    /// Create a new difficulty calculator with default constants.
    pub fn new() -> Self {
        Self {
            mods: GameModsLegacy::NoMod,
            clock_rate: None,
            constants: StrainConstants::default(),
            detailed: false,
        }
    }

    /// Specify mods.
    ///
    /// Only rate changing mods are considered, i.e. `DoubleTime` and
    /// `Nightcore` for a clock rate of 1.5 and `HalfTime` for 0.75.
    pub fn mods(mut self, mods: impl Into<GameModsLegacy>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    ///
    /// A NaN clock rate makes the calculation fail with
    /// [`StrainError::InvalidClockRate`].
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.clock_rate = Some(clock_rate.clamp(Self::MIN_CLOCK_RATE, Self::MAX_CLOCK_RATE));

        self
    }

    /// Use custom [`StrainConstants`], e.g. while tuning.
    pub fn constants(mut self, constants: StrainConstants) -> Self {
        self.constants = constants;

        self
    }

    /// Whether [`PatternFlags`] should be evaluated.
    pub const fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;

        self
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| {
            if self
                .mods
                .intersects(GameModsLegacy::DoubleTime | GameModsLegacy::Nightcore)
            {
                1.5
            } else if self.mods.contains(GameModsLegacy::HalfTime) {
                0.75
            } else {
                1.0
            }
        })
    }

    pub const fn get_constants(&self) -> &StrainConstants {
        &self.constants
    }

    fn checked_clock_rate(&self) -> StrainResult<f64> {
        let clock_rate = self.get_clock_rate();

        // * NaN passes through `clamp`
        if clock_rate.is_finite() && clock_rate > 0.0 {
            Ok(clock_rate)
        } else {
            Err(StrainError::InvalidClockRate { clock_rate })
        }
    }

    /// Calculate the difficulty attributes of a chart.
    ///
    /// Charts with less than two notes have an overall difficulty of `0.0`.
    pub fn calculate(&self, chart: &Chart) -> StrainResult<KeysDifficultyAttributes> {
        let clock_rate = self.checked_clock_rate()?;

        let mut attrs = KeysDifficultyAttributes {
            n_objects: chart.notes.len() as u32,
            n_hold_notes: chart.n_hold_notes(),
            clock_rate,
            ..Default::default()
        };

        let strains = self.strains(chart)?;

        if strains.solutions.is_empty() {
            return Ok(attrs);
        }

        let sum: f64 = strains
            .solutions
            .iter()
            .map(|solution| solution.overall_difficulty)
            .sum();

        attrs.overall_difficulty = sum / strains.solutions.len() as f64;

        if self.detailed {
            attrs.pattern_flags = strains
                .solutions
                .iter()
                .map(|solution| PatternEvaluator::evaluate(&solution.nodes))
                .fold(PatternFlags::NONE, |flags, next| flags | next);
        }

        Ok(attrs)
    }

    /// Solve a chart and return all resolved nodes.
    ///
    /// Charts with less than two notes are not solved.
    pub fn strains(&self, chart: &Chart) -> StrainResult<KeysStrains> {
        let clock_rate = self.checked_clock_rate()?;

        if chart.notes.len() < 2 {
            return Ok(KeysStrains::default());
        }

        let assumed_hands: &[Hand] = if chart.keymode.has_ambiguous_column() {
            &[Hand::Left, Hand::Right]
        } else {
            &[Hand::Right]
        };

        let solutions = assumed_hands
            .iter()
            .map(|&assumed_hand| {
                DifficultyValues::calculate(chart, clock_rate, assumed_hand, &self.constants)
                    .map(|values| HandSolution {
                        assumed_hand,
                        overall_difficulty: values.overall_difficulty,
                        nodes: values.nodes.into_boxed_slice(),
                    })
            })
            .collect::<StrainResult<Vec<_>>>()?;

        Ok(KeysStrains { solutions })
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DifficultyValues {
    pub nodes: Vec<StrainNode>,
    pub overall_difficulty: f64,
}

impl DifficultyValues {
    /// Run every solving stage in order for one hand assumption.
    pub fn calculate(
        chart: &Chart,
        clock_rate: f64,
        assumed_hand: Hand,
        constants: &StrainConstants,
    ) -> StrainResult<Self> {
        let mut nodes = ChainBuilder::new(constants, clock_rate, assumed_hand).build(chart)?;

        ActionEvaluator::evaluate(&mut nodes, constants);
        WristEvaluator::evaluate(&mut nodes, constants);
        LongNoteEvaluator::evaluate(&mut nodes, constants);
        Stamina::process_all(&mut nodes, constants);

        let overall_difficulty = KeysRatingCalculator::new(&nodes, constants).calculate();

        debug!(
            keymode = %chart.keymode,
            ?assumed_hand,
            n_nodes = nodes.len(),
            overall_difficulty,
            "solved chart"
        );

        Ok(Self {
            nodes,
            overall_difficulty,
        })
    }
}
