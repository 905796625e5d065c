//! Integration tests for the Matrix type, layout conversion and the product.

use matprod::{
    checked_product, convert, multiply, product, Layout, Matrix, MatrixError, OverflowPolicy, Shape,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rm(rows: usize, cols: usize, data: Vec<i64>) -> Matrix {
    Matrix::from_row_major(rows, cols, data).unwrap()
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols).map(|_| rng.gen_range(-50..=50)).collect();
    let layout = if rng.gen_bool(0.5) {
        Layout::RowMajor
    } else {
        Layout::ColumnMajor
    };
    Matrix::new(rows, cols, layout, data).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_rejects_length_mismatch() {
    let err = Matrix::from_row_major(2, 3, vec![1, 2, 3]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidMatrix {
            rows: 2,
            cols: 3,
            len: 3
        }
    );
}

#[test]
fn new_rejects_zero_dimensions() {
    assert!(Matrix::from_row_major(0, 3, vec![]).is_err());
    assert!(Matrix::new(3, 0, Layout::ColumnMajor, vec![]).is_err());
}

#[test]
fn from_rows_flattens_in_row_order() {
    let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(m.shape(), Shape { rows: 2, cols: 3 });
    assert_eq!(m.layout(), Layout::RowMajor);
    assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert!(m.validate().is_ok());
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::RaggedRow {
            record: 2,
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn logical_indexing_ignores_layout() {
    let r = rm(2, 3, vec![1, 2, 3, 4, 5, 6]);
    let c = convert(&r);
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(r[(row, col)], c[(row, col)]);
            assert_eq!(r.get(row, col), c.get(row, col));
        }
    }
    assert_eq!(c[(1, 0)], 4);
    assert_eq!(c.get(2, 0), None);
}

#[test]
fn layout_is_part_of_equality() {
    let r = rm(2, 2, vec![3, 4, 5, 6]);
    let c = Matrix::new(2, 2, Layout::ColumnMajor, vec![3, 5, 4, 6]).unwrap();
    assert_ne!(r, c);
    assert_eq!(r.row_vecs(), c.row_vecs());
    // Same buffer, different flag: still not equal.
    let same_buf = Matrix::new(2, 2, Layout::ColumnMajor, vec![3, 4, 5, 6]).unwrap();
    assert_ne!(r, same_buf);
}

// ---------------------------------------------------------------------------
// Layout conversion
// ---------------------------------------------------------------------------

#[test]
fn convert_2x2_both_directions() {
    let m_r = rm(2, 2, vec![3, 4, 5, 6]);
    let m_c = Matrix::new(2, 2, Layout::ColumnMajor, vec![3, 5, 4, 6]).unwrap();
    assert_eq!(convert(&m_r), m_c);
    assert_eq!(convert(&m_c), m_r);
}

#[test]
fn convert_keeps_shape_and_length() {
    let m = rm(3, 2, vec![1, 2, 3, 4, 5, 6]);
    let c = convert(&m);
    assert_eq!(c.shape(), m.shape());
    assert_eq!(c.as_slice().len(), 6);
    assert_eq!(c.as_slice(), &[1, 3, 5, 2, 4, 6]);
}

#[test]
fn convert_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let rows = rng.gen_range(1..=7);
        let cols = rng.gen_range(1..=7);
        let m = random_matrix(&mut rng, rows, cols);
        assert_eq!(convert(&convert(&m)), m);
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[test]
fn product_2x2_by_2x2() {
    let a = rm(2, 2, vec![1, 2, 3, 4]);
    let b = rm(2, 2, vec![3, 4, 5, 6]);
    assert_eq!(product(&a, &b).unwrap(), rm(2, 2, vec![13, 16, 29, 36]));
}

#[test]
fn product_2x4_by_4x2() {
    let a = rm(2, 4, vec![3, 4, 5, 6, 7, 8, 9, 10]);
    let b = rm(4, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(product(&a, &b).unwrap(), rm(2, 2, vec![82, 100, 146, 180]));
}

#[test]
fn product_1x1() {
    let a = rm(1, 1, vec![3]);
    let b = rm(1, 1, vec![5]);
    assert_eq!(product(&a, &b).unwrap(), rm(1, 1, vec![15]));
}

#[test]
fn product_1x3_by_3x4() {
    let a = rm(1, 3, vec![3, 4, 2]);
    let b = rm(3, 4, vec![13, 9, 7, 15, 8, 7, 4, 6, 6, 4, 0, 3]);
    assert_eq!(product(&a, &b).unwrap(), rm(1, 4, vec![83, 63, 37, 75]));
}

#[test]
fn product_shape_and_layout() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let (m, n, p) = (
            rng.gen_range(1..=6),
            rng.gen_range(1..=6),
            rng.gen_range(1..=6),
        );
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);
        let c = product(&a, &b).unwrap();
        assert_eq!(c.shape(), Shape { rows: m, cols: p });
        assert_eq!(c.layout(), Layout::RowMajor);
    }
}

#[test]
fn product_does_not_depend_on_operand_layout() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let (m, n, p) = (
            rng.gen_range(1..=6),
            rng.gen_range(1..=6),
            rng.gen_range(1..=6),
        );
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);
        let expected = product(&a, &b).unwrap();
        assert_eq!(product(&convert(&a), &b).unwrap(), expected);
        assert_eq!(product(&a, &convert(&b)).unwrap(), expected);
        assert_eq!(product(&convert(&a), &convert(&b)).unwrap(), expected);
    }
}

#[test]
fn product_matches_naive_definition() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_matrix(&mut rng, 4, 3);
    let b = random_matrix(&mut rng, 3, 5);
    let c = product(&a, &b).unwrap();
    for i in 0..4 {
        for j in 0..5 {
            let expected: i64 = (0..3).map(|k| a[(i, k)] * b[(k, j)]).sum();
            assert_eq!(c[(i, j)], expected);
        }
    }
}

#[test]
fn product_rejects_incompatible_shapes() {
    let a = rm(4, 4, (1..=16).collect());
    let b = rm(2, 2, vec![1, 2, 3, 4]);
    let (a_before, b_before) = (a.clone(), b.clone());

    let err = product(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left: Shape { rows: 4, cols: 4 },
            right: Shape { rows: 2, cols: 2 },
        }
    );
    assert!(err.to_string().contains("not defined"));
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

// ---------------------------------------------------------------------------
// Overflow policy
// ---------------------------------------------------------------------------

#[test]
fn product_wraps_on_overflow() {
    let a = rm(1, 2, vec![i64::MAX, 1]);
    let b = rm(2, 1, vec![1, 1]);
    assert_eq!(product(&a, &b).unwrap(), rm(1, 1, vec![i64::MIN]));
}

#[test]
fn checked_product_reports_overflowing_cell() {
    let a = rm(2, 2, vec![1, 1, i64::MAX, 1]);
    let b = rm(2, 1, vec![1, 1]);
    assert_eq!(
        checked_product(&a, &b).unwrap_err(),
        MatrixError::Overflow { row: 1, col: 0 }
    );
}

#[test]
fn checked_product_allows_partial_sums_outside_i64() {
    // MAX + 1 - 1: the running sum leaves the i64 range but the cell fits.
    let a = rm(1, 3, vec![i64::MAX, 1, -1]);
    let b = rm(3, 1, vec![1, 1, 1]);
    assert_eq!(checked_product(&a, &b).unwrap(), rm(1, 1, vec![i64::MAX]));
    assert_eq!(product(&a, &b).unwrap(), rm(1, 1, vec![i64::MAX]));

    let c = rm(1, 3, vec![i64::MIN, -1, 1]);
    assert_eq!(checked_product(&c, &b).unwrap(), rm(1, 1, vec![i64::MIN]));
}

#[test]
fn checked_product_rejects_large_products_of_elements() {
    let a = rm(1, 2, vec![i64::MAX, i64::MAX]);
    let b = rm(2, 1, vec![2, -2]);
    // MAX*2 - MAX*2 == 0 even though each term overflows i64.
    assert_eq!(checked_product(&a, &b).unwrap(), rm(1, 1, vec![0]));

    let b = rm(2, 1, vec![2, 0]);
    assert_eq!(
        checked_product(&a, &b).unwrap_err(),
        MatrixError::Overflow { row: 0, col: 0 }
    );
}

#[test]
fn multiply_dispatches_on_policy() {
    let a = rm(1, 1, vec![i64::MAX]);
    let b = rm(1, 1, vec![2]);
    assert!(multiply(&a, &b, OverflowPolicy::Wrapping).is_ok());
    assert!(multiply(&a, &b, OverflowPolicy::Checked).is_err());

    let small = rm(1, 1, vec![3]);
    assert_eq!(
        multiply(&small, &small, OverflowPolicy::Checked).unwrap(),
        rm(1, 1, vec![9])
    );
}
