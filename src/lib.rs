//! Strain-based difficulty calculation for keys rhythm game charts.
//!
//! A chart's notes are grouped into per-hand chords which are linked into
//! chains. Every link is then classified as a finger action, checked for
//! wrist manipulation and long note layering, and weighed by stamina before
//! all strains are aggregated into a single overall difficulty.
//!
//! ### Usage
//!
//! ```
//! use qss::{Chart, Difficulty, Keymode, Note};
//!
//! let notes = vec![
//!     Note::tap(0, 0.0),
//!     Note::tap(1, 150.0),
//!     Note::hold(2, 150.0, 900.0),
//!     Note::tap(3, 300.0),
//!     Note::tap(0, 450.0),
//!     Note::tap(3, 600.0),
//! ];
//!
//! let chart = Chart::new(Keymode::Keys4, notes);
//!
//! let attrs = Difficulty::new()
//!     .mods(qss::GameModsLegacy::DoubleTime)
//!     .calculate(&chart)?;
//!
//! assert_eq!(attrs.clock_rate, 1.5);
//! assert!(attrs.overall_difficulty > 0.0);
//! # Ok::<_, qss::StrainError>(())
//! ```
//!
//! Custom constants, e.g. while tuning, can be provided through
//! [`StrainConstants::from_values`] or [`StrainConstants::from_variables`].
//!
//! ### Features
//!
//! | Flag | Description |
//! | ---- | ----------- |
//! | `default` | No features enabled |
//! | `serde` | Implement `Serialize` and `Deserialize` for attributes, constants, and chart types |
//!
//! ### Logging
//!
//! Every solving run emits a `debug` event through [`tracing`]; chain
//! construction details are emitted on `trace` level.

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::default_trait_access)]

#[doc(inline)]
pub use self::{
    constants::{ConstantVariable, StrainConstants},
    difficulty::{
        Difficulty, DifficultyValues, FingerAction, HandSolution, KeysDifficultyAttributes,
        KeysStrains, LnLayerType, PatternFlags, StrainNode, StrainNote,
    },
    error::{StrainError, StrainResult},
    model::{Chart, FingerState, Hand, Keymode, LaneAssignment, Note},
};

pub use rosu_mods::GameModsLegacy;

/// Tunable and fixed constants of the solver.
pub mod constants;

/// Difficulty calculation and its intermediate results.
pub mod difficulty;

/// Errors when solving a chart.
pub mod error;

/// Chart and lane types.
pub mod model;

mod util;
