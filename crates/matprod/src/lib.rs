//! matprod: dense integer matrices and their product.
//!
//! This crate provides a small `Matrix` type whose flat storage carries an
//! explicit row-major / column-major layout flag, a layout converter, a
//! product engine that exploits the layout flag, and a delimited-text
//! adapter for loading and saving matrices.
//!
//! Core operations are pure and return typed [`error::MatrixError`] values;
//! file-level helpers in [`io`] return `anyhow::Result` with context.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod present;

pub use config::{MatrixConfig, OverflowPolicy};
pub use error::MatrixError;
pub use math::{checked_product, convert, multiply, product, Layout, Matrix, Shape};
