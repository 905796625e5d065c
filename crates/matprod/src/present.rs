//! Human-readable rendering of matrices.
use std::fmt;

use crate::math::Matrix;

/// One bracketed line per logical row, elements right-aligned to width 2.
///
/// ```text
/// [  1  2 ]
/// [  3  4 ]
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_vecs() {
            write!(f, "[ ")?;
            for value in row {
                write!(f, "{:2} ", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
