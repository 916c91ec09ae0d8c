//! Error types for the lab.
//!
//! The evaluators themselves are total; errors only arise where raw numbers
//! or identifiers enter from outside.

use thiserror::Error;

pub type LabResult<T> = Result<T, LabError>;

#[derive(Debug, Error)]
pub enum LabError {
    #[error("{quantity} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{quantity} must be a finite number")]
    NonFinite { quantity: &'static str },

    #[error("unknown metal '{0}' (expected one of: sodium, calcium, zinc, copper, platinum)")]
    UnknownMetal(String),

    #[error("unknown simulation '{0}' (expected one of: blackbody, photoelectric, compton)")]
    UnknownSimulation(String),

    #[error("invalid value '{value}' for {name}")]
    InvalidArgument { name: String, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
