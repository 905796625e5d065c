//! Matrix product.
//!
//! The left operand is coerced to row-major and the right operand to
//! column-major, so cell `(i, j)` of the result is the dot product of two
//! contiguous slices: row `i` of `a` and column `j` of `b`. Callers only see
//! the logical product; the result is always row-major.
use crate::config::OverflowPolicy;
use crate::error::MatrixError;

use super::matrix::{Layout, Matrix};

/// Multiply `a` (m x n) by `b` (n x p) into a row-major m x p matrix.
///
/// Accumulation uses wrapping `i64` arithmetic; see [`checked_product`] for
/// a variant that reports overflow instead.
pub fn product(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    product_with(a, b, |row, col| {
        Some(
            row.iter()
                .zip(col)
                .fold(0i64, |acc, (&x, &y)| acc.wrapping_add(x.wrapping_mul(y))),
        )
    })
}

/// Like [`product`], but fails with [`MatrixError::Overflow`] on the first
/// result cell whose dot product does not fit in an `i64`.
///
/// Each cell is accumulated in `i128`, so intermediate partial sums may leave
/// the `i64` range as long as the final value is back inside it.
pub fn checked_product(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    product_with(a, b, |row, col| {
        let acc = row.iter().zip(col).try_fold(0i128, |acc, (&x, &y)| {
            acc.checked_add(i128::from(x) * i128::from(y))
        })?;
        i64::try_from(acc).ok()
    })
}

/// Dispatch to [`product`] or [`checked_product`].
pub fn multiply(a: &Matrix, b: &Matrix, policy: OverflowPolicy) -> Result<Matrix, MatrixError> {
    match policy {
        OverflowPolicy::Wrapping => product(a, b),
        OverflowPolicy::Checked => checked_product(a, b),
    }
}

/// `dot` receives row `i` of `a` and column `j` of `b` as contiguous slices
/// and returns `None` when the cell overflows.
fn product_with<F>(a: &Matrix, b: &Matrix, dot: F) -> Result<Matrix, MatrixError>
where
    F: Fn(&[i64], &[i64]) -> Option<i64>,
{
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let lhs = a.to_layout(Layout::RowMajor);
    let rhs = b.to_layout(Layout::ColumnMajor);
    let inner = a.ncols();
    let (rows, cols) = (a.nrows(), b.ncols());

    let mut data = Vec::with_capacity(rows * cols);
    for (i, a_row) in lhs.as_slice().chunks_exact(inner).enumerate() {
        for (j, b_col) in rhs.as_slice().chunks_exact(inner).enumerate() {
            let cell = dot(a_row, b_col).ok_or(MatrixError::Overflow { row: i, col: j })?;
            data.push(cell);
        }
    }

    log::debug!(
        "computed product of {} and {} matrices",
        a.shape(),
        b.shape()
    );
    Ok(Matrix::from_parts_unchecked(rows, cols, Layout::RowMajor, data))
}
