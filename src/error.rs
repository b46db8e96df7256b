use thiserror::Error;

use crate::model::Keymode;

/// Errors that prevent a chart from being solved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrainError {
    #[error("column {column} is out of range for {keymode}")]
    InvalidColumn { column: usize, keymode: Keymode },

    #[error("note #{idx} has a non-finite start or end time")]
    NonFiniteTime { idx: usize },

    #[error("clock rate must be finite and positive, got {clock_rate}")]
    InvalidClockRate { clock_rate: f64 },

    #[error("expected {expected} strain constants, got {actual}")]
    ConstantCount { expected: usize, actual: usize },

    #[error("strain constant #{idx} must be `{expected}`, got `{actual}`")]
    ConstantName {
        idx: usize,
        expected: &'static str,
        actual: String,
    },
}

pub type StrainResult<T> = Result<T, StrainError>;
