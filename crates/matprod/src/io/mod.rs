//! IO utilities for loading and saving matrices as delimited text.

pub mod delimited;

pub use delimited::{
    read_matrix, read_matrix_from_reader, read_matrix_with_config, write_matrix,
    write_matrix_to_writer, write_matrix_with_config,
};
