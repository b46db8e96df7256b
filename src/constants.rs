use std::borrow::Cow;

use crate::error::{StrainError, StrainResult};

/// A named tunable value of [`StrainConstants`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantVariable {
    pub name: Cow<'static, str>,
    pub value: f64,
}

impl ConstantVariable {
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }
}

macro_rules! strain_constants {
    (
        $( #[$meta:meta] )*
        pub struct $name:ident {
            $(
                $( #[$field_meta:meta] )*
                $field:ident: $key:literal = $default:expr,
            )*
        }
    ) => {
        $( #[$meta] )*
        pub struct $name {
            $(
                $( #[$field_meta] )*
                pub $field: f64,
            )*
        }

        impl $name {
            /// Names of all tunable constants in solving order.
            pub const NAMES: &'static [&'static str] = &[$( $key, )*];

            /// The amount of tunable constants.
            pub const LEN: usize = Self::NAMES.len();

            /// All tunable values in solving order.
            pub fn values(&self) -> Vec<f64> {
                vec![$( self.$field, )*]
            }

            /// All tunable values paired with their name.
            pub fn variables(&self) -> Vec<ConstantVariable> {
                vec![$( ConstantVariable::new($key, self.$field), )*]
            }

            fn from_slice(values: &[f64]) -> Self {
                let mut values = values.iter().copied();

                Self {
                    $( $field: values.next().unwrap_or($default), )*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }
    };
}

strain_constants! {
    /// Tunable constants of the strain solver.
    ///
    /// The structure is shared between the shipped defaults and externally
    /// tuned vectors. Values are consumed positionally in the order of
    /// [`StrainConstants::NAMES`].
    #[derive(Clone, Debug, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StrainConstants {
        // Overall difficulty
        strain_weight_offset: "StrainWeightOffset" = 6.0,
        strain_weight_exponent: "StrainWeightExponent" = 4.0,

        // Density
        max_density_bonus: "MaxDensityBonus" = 3.7,
        density_bonus_duration: "DensityBonusDuration" = 200.0,

        // Stamina
        stamina_increase_value: "StaminaIncreaseValue" = 0.04,
        /// Decrease per second of an easy section.
        stamina_decrease_velocity: "StaminaDecreaseVelocity" = 4.12,
        stamina_difficulty_value: "StaminaDifficultyValue" = 10.0,
        stamina_strain_multiplier: "StaminaStrainMultiplier" = 0.12,

        // Chords
        both_hand_chorded_multiplier: "BothHandChordedMultiplier" = 0.88,

        // Simple jacks
        sjack_upper_boundary_ms: "SJackUpperBoundaryMs" = 310.0,
        sjack_max_strain_value: "SJackMaxStrainValue" = 69.5,
        sjack_curve_exponential: "SJackCurveExponential" = 1.51,

        // Technical jacks
        tjack_upper_boundary_ms: "TJackUpperBoundaryMs" = 330.0,
        tjack_max_strain_value: "TJackMaxStrainValue" = 72.5,
        tjack_curve_exponential: "TJackCurveExponential" = 1.59,

        // Rolls and trills
        roll_upper_boundary_ms: "RollUpperBoundaryMs" = 250.0,
        roll_max_strain_value: "RollMaxStrainValue" = 66.5,
        roll_curve_exponential: "RollCurveExponential" = 2.09,

        // Brackets
        bracket_upper_boundary_ms: "BracketUpperBoundaryMs" = 230.0,
        bracket_max_strain_value: "BracketMaxStrainValue" = 60.0,
        bracket_curve_exponential: "BracketCurveExponential" = 1.43,

        // Wrist manipulation
        wrist_manipulation_multiplier: "WristManipulationMultiplier" = 0.35,
        wrist_manipulation_offset: "WristManipulationOffset" = 6.0,

        // Long notes
        ln_base_value: "LnBaseValue" = 2.7,
        ln_base_multiplier: "LnBaseMultiplier" = 4.65,
        ln_difficult_size_threshold_ms: "LnDifficultSizeThresholdMs" = 250.0,
        ln_release_after_multiplier: "LnReleaseAfterMultiplier" = 1.5,
        ln_release_before_multiplier: "LnReleaseBeforeMultiplier" = 1.15,
        ln_tap_multiplier: "LnTapMultiplier" = 1.05,
    }
}

impl StrainConstants {
    /// Version of the constant layout and solver.
    pub const VERSION: &'static str = "0.2.0";

    // Fixed thresholds; not part of the tunable vector.

    /// Hold notes starting or ending within this window of a hold's end are
    /// not layered onto it.
    pub const LN_END_THRESHOLD_MS: f64 = 42.0;

    /// Notes on one hand closer than this are merged into a chord.
    pub const CHORD_CLUMP_TOLERANCE_MS: f64 = 8.0;

    /// How far a jack may slow down and still count as vibro.
    pub const VIBRO_DELTA_TOLERANCE_MS: f64 = 30.0;

    /// 170bpm 1/4 vibro.
    pub const VIBRO_ACTION_DURATION_MS: f64 = 88.2;
    pub const VIBRO_ACTION_TOLERANCE_MS: f64 = 22.0;

    /// Minimum ratio between both actions of an A-B-A roll.
    pub const ROLL_RATIO_TOLERANCE: f64 = 2.0;

    /// Create constants from a positional vector.
    ///
    /// Fails if the amount of values differs from [`StrainConstants::LEN`].
    pub fn from_values(values: &[f64]) -> StrainResult<Self> {
        if values.len() != Self::LEN {
            return Err(StrainError::ConstantCount {
                expected: Self::LEN,
                actual: values.len(),
            });
        }

        Ok(Self::from_slice(values))
    }

    /// Create constants from named values.
    ///
    /// Fails if the amount of values differs from [`StrainConstants::LEN`] or
    /// if any name does not match [`StrainConstants::NAMES`] at its position.
    pub fn from_variables(variables: &[ConstantVariable]) -> StrainResult<Self> {
        if variables.len() != Self::LEN {
            return Err(StrainError::ConstantCount {
                expected: Self::LEN,
                actual: variables.len(),
            });
        }

        let mismatch = Self::NAMES
            .iter()
            .zip(variables)
            .position(|(expected, variable)| *expected != variable.name);

        if let Some(idx) = mismatch {
            return Err(StrainError::ConstantName {
                idx,
                expected: Self::NAMES[idx],
                actual: variables[idx].name.to_string(),
            });
        }

        let values: Vec<_> = variables.iter().map(|variable| variable.value).collect();

        Ok(Self::from_slice(&values))
    }
}
