use std::error::Error;
use std::fmt;

use crate::math::Shape;

/// Errors raised while building, parsing or multiplying matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// `left.cols != right.rows`; the product is undefined.
    DimensionMismatch { left: Shape, right: Shape },
    /// Buffer length does not equal `rows * cols`, or a dimension is zero.
    InvalidMatrix { rows: usize, cols: usize, len: usize },
    /// Accumulating result cell `(row, col)` overflowed `i64`.
    Overflow { row: usize, col: usize },
    /// A field could not be parsed as an integer. `record` and `field` are 1-based.
    NotAnInteger {
        record: usize,
        field: usize,
        value: String,
    },
    /// A record has a different field count than the first record (1-based).
    RaggedRow {
        record: usize,
        expected: usize,
        found: usize,
    },
    /// The input contained no records.
    EmptyInput,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "The product of a {} matrix and a {} matrix is not defined, \
                 see https://en.wikipedia.org/wiki/Matrix_multiplication",
                left, right
            ),
            MatrixError::InvalidMatrix { rows, cols, len } => write!(
                f,
                "Matrix doesn't appear to be valid: shape ({}, {}) with {} elements",
                rows, cols, len
            ),
            MatrixError::Overflow { row, col } => {
                write!(f, "Integer overflow while computing cell ({}, {})", row, col)
            }
            MatrixError::NotAnInteger {
                record,
                field,
                value,
            } => write!(
                f,
                "'{}' doesn't appear to be an int (record {}, field {})",
                value, record, field
            ),
            MatrixError::RaggedRow {
                record,
                expected,
                found,
            } => write!(
                f,
                "Record {} has {} fields, expected {} like the first record",
                record, found, expected
            ),
            MatrixError::EmptyInput => write!(f, "Input contains no matrix rows"),
        }
    }
}

impl Error for MatrixError {}
