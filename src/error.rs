use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid symbol '{symbol}' at position {position}, expected one of A, C, G, T")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Dimension mismatch: expected length {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Invalid parameter: {name} = {value}, {message}")]
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },
}

/// Type alias for Result with MotifError
pub type Result<T> = std::result::Result<T, MotifError>;

impl MotifError {
    /// Create a new InvalidSymbol error
    pub fn invalid_symbol(symbol: char, position: usize) -> Self {
        MotifError::InvalidSymbol { symbol, position }
    }

    /// Create a new DimensionMismatch error
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        MotifError::DimensionMismatch { expected, found }
    }

    /// Create a new DegenerateInput error
    pub fn degenerate(message: impl Into<String>) -> Self {
        MotifError::DegenerateInput(message.into())
    }

    /// Create a new InvalidParameter error
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        MotifError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for MotifError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        MotifError::DataError(err.to_string())
    }
}
