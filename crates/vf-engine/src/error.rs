//! Engine errors.
//!
//! Every variant is an input-validation failure: the engine performs no
//! I/O, so it has no partial-failure or retry semantics. A failed
//! computation yields no result, never a partially-filled one.

use thiserror::Error;
use vf_factors::FactorError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// An absolute temperature at or below zero.
    #[error("{which} temperature is at or below absolute zero ({rankine:.2} °R)")]
    InvalidTemperature { which: &'static str, rankine: f64 },

    /// An obstruction factor at or below zero would make every area
    /// computation degenerate.
    #[error("{which} obstruction factor must be positive (got {value})")]
    InvalidObstructionFactor { which: &'static str, value: f64 },

    /// Fugitive emission method selected with an empty source inventory.
    #[error("Fugitive emission method requires at least one leak source")]
    MissingLeakSource,

    /// Factor table lookup failure.
    #[error(transparent)]
    Factor(#[from] FactorError),
}
