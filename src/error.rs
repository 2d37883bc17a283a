//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers dimension/coordinate contract violations, shape mismatches, date-string
//! parsing failures, and unsupported frequency tokens.
use chrono::NaiveDate;
use thiserror::Error;

use crate::types::Frequency;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported frequency: {token}. Expected day, month or year")]
    UnsupportedFrequency { token: String },

    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("Array has {actual} axes but {expected} dimension names were given")]
    DimensionCount { expected: usize, actual: usize },

    #[error("Duplicate dimension name: {dim}")]
    DuplicateDimension { dim: String },

    #[error("Unknown dimension: {dim}. Available: {available:?}")]
    UnknownDimension {
        dim: String,
        available: Vec<String>,
    },

    #[error("Dimension {dim} carries no time coordinate")]
    MissingTimeCoordinate { dim: String },

    #[error("Coordinate of length {actual} does not match axis {dim} of length {expected}")]
    CoordinateLength {
        dim: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid date string: {value}. Expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("Date arithmetic overflow stepping {offset} {freq}(s) from {start}")]
    DateOverflow {
        start: NaiveDate,
        freq: Frequency,
        offset: usize,
    },
}
