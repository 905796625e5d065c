//! Conversion between row-major and column-major storage.
use std::borrow::Cow;

use super::matrix::{Layout, Matrix};

/// Return a copy of `m` with the opposite layout and the same logical
/// contents. Applying it twice yields a matrix equal to `m`.
pub fn convert(m: &Matrix) -> Matrix {
    // View the buffer as `outer` runs of `inner` contiguous elements and
    // emit it transposed: every run position `i` across all runs, in order.
    let (outer, inner) = match m.layout() {
        Layout::RowMajor => (m.nrows(), m.ncols()),
        Layout::ColumnMajor => (m.ncols(), m.nrows()),
    };
    let src = m.as_slice();
    let mut data = Vec::with_capacity(src.len());
    for i in 0..inner {
        for o in 0..outer {
            data.push(src[o * inner + i]);
        }
    }
    log::debug!(
        "converted {} matrix from {:?} to {:?}",
        m.shape(),
        m.layout(),
        m.layout().flipped()
    );
    Matrix::from_parts_unchecked(m.nrows(), m.ncols(), m.layout().flipped(), data)
}

impl Matrix {
    /// Borrow `self` if it already uses `layout`, otherwise convert.
    pub fn to_layout(&self, layout: Layout) -> Cow<'_, Matrix> {
        if self.layout() == layout {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(convert(self))
        }
    }

    pub fn to_row_major(&self) -> Cow<'_, Matrix> {
        self.to_layout(Layout::RowMajor)
    }

    /// Logical rows in order, whatever the storage layout.
    pub fn row_vecs(&self) -> Vec<Vec<i64>> {
        let rm = self.to_row_major();
        rm.as_slice()
            .chunks_exact(rm.ncols())
            .map(|row| row.to_vec())
            .collect()
    }
}
