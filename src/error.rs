//! Error type shared by dice, games and analyzers.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MonteCarloError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonteCarloError {
    #[error("Invalid input: {0}")]
    InvalidInputKind(String),
    #[error("Face values must be distinct, '{0}' appears more than once")]
    DuplicateValue(String),
    #[error("Face '{0}' is not on this die")]
    UnknownFace(String),
    #[error("Weight '{0}' is not a valid number")]
    InvalidWeightType(String),
    #[error("Weight cannot be negative (got {0})")]
    NegativeWeight(f64),
    #[error("Cannot roll a die whose weights are all zero")]
    NoPositiveWeight,
    #[error("Form must be either 'wide' or 'narrow' (got '{0}')")]
    InvalidForm(String),
    #[error("Value is not a simulation outcome table: {0}")]
    NotASimulation(String),
    #[error("Roll count must be positive")]
    InvalidRollCount,
}
