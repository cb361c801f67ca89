use std::{io, num::ParseIntError, path::PathBuf};
use thiserror::Error;

/// Everything that can be wrong with the input before a grid exists.
///
/// Out-of-range cell queries are not errors and never produce one of these.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    #[error("cannot read grid file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("grid file is empty, expected a `<rows> <columns>` header")]
    MissingHeader,

    #[error("invalid header {line:?}, expected `<rows> <columns>`")]
    InvalidHeader { line: String },

    #[error("grid dimensions must be at least 1x1, got {rows}x{columns}")]
    ZeroDimension { rows: usize, columns: usize },

    #[error("grid dimensions {rows}x{columns} are too large")]
    TooLarge { rows: usize, columns: usize },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("expected {expected} cells in total, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: unrecognized cell symbol {symbol:?}")]
    InvalidSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("row {row}, column {column}: cell state must be 0 or 1, got {value}")]
    InvalidState { row: usize, column: usize, value: u8 },

    #[error("generation count must not be negative, got {0}")]
    NegativeGenerations(i64),

    #[error("invalid generation count {text:?}")]
    InvalidGenerations {
        text: String,
        #[source]
        source: ParseIntError,
    },
}
