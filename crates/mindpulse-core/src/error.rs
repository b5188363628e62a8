use thiserror::Error;

use crate::models::check_in::RatingField;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    RatingOutOfRange {
        field: RatingField,
        value: i32,
        min: u8,
        max: u8,
    },

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),

    #[error("unknown concern tag: {0}")]
    UnknownConcern(String),
}
