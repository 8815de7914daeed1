//! The module contains the error the engine can throw.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("Invalid hours: {0}")]
    InvalidHours(String),
}
