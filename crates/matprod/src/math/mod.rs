//! Matrix storage, layout conversion and the matrix product.
//!
//! `Matrix` keeps its elements in one flat `Vec<i64>` and records whether
//! that buffer is row-major or column-major. Operations never mutate their
//! inputs; they return fresh matrices.
pub mod layout;
pub mod matrix;
pub mod product;

pub use layout::convert;
pub use matrix::{Layout, Matrix, Shape};
pub use product::{checked_product, multiply, product};
