use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// How the flat element buffer of a [`Matrix`] is linearized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// Consecutive elements belong to the same row.
    RowMajor,
    /// Consecutive elements belong to the same column.
    ColumnMajor,
}

impl Layout {
    pub fn flipped(self) -> Self {
        match self {
            Layout::RowMajor => Layout::ColumnMajor,
            Layout::ColumnMajor => Layout::RowMajor,
        }
    }
}

/// Logical dimensions of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Dense integer matrix.
///
/// Invariant: `rows > 0`, `cols > 0` and `data.len() == rows * cols`. The
/// constructors enforce it, so every `Matrix` value is safe to operate on.
/// Equality compares the layout and the raw buffer, so a row-major matrix
/// and its column-major conversion are not equal unless their buffers match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
    layout: Layout,
}

impl Matrix {
    pub fn new(
        rows: usize,
        cols: usize,
        layout: Layout,
        data: Vec<i64>,
    ) -> Result<Self, MatrixError> {
        check_shape(rows, cols, data.len())?;
        Ok(Self {
            data,
            rows,
            cols,
            layout,
        })
    }

    pub fn from_row_major(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self, MatrixError> {
        Self::new(rows, cols, Layout::RowMajor, data)
    }

    /// Build a row-major matrix from nested rows. All rows must have the
    /// length of the first one.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, MatrixError> {
        let first = rows.first().ok_or(MatrixError::EmptyInput)?;
        let cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    record: idx + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_row_major(rows.len(), cols, data)
    }

    pub(crate) fn from_parts_unchecked(
        rows: usize,
        cols: usize,
        layout: Layout,
        data: Vec<i64>,
    ) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            rows,
            cols,
            layout,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Raw storage in the order given by [`Matrix::layout`].
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.data
    }

    /// Re-check the length invariant.
    pub fn validate(&self) -> Result<(), MatrixError> {
        check_shape(self.rows, self.cols, self.data.len())
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        match self.layout {
            Layout::RowMajor => row * self.cols + col,
            Layout::ColumnMajor => col * self.rows + row,
        }
    }

    /// Element at logical cell `(row, col)`, independent of layout.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.offset(row, col)])
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {} matrix",
            row,
            col,
            self.shape()
        );
        &self.data[self.offset(row, col)]
    }
}

fn check_shape(rows: usize, cols: usize, len: usize) -> Result<(), MatrixError> {
    let expected = rows.checked_mul(cols);
    if rows == 0 || cols == 0 || expected != Some(len) {
        return Err(MatrixError::InvalidMatrix { rows, cols, len });
    }
    Ok(())
}
