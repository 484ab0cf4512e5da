use aockit_core::GridError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("No digits found in puzzle data")]
    NoDigits,

    #[error("Could not parse {value:?} on line {line}: {reason}")]
    Parse {
        line: usize,
        value: String,
        reason: String,
    },

    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}
