//! Delimited-text (CSV/TSV) matrix reader and writer.
//!
//! Each record is one logical row; there is no header. Matrices are read as
//! row-major and always written row by row, whatever their layout.
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Trim;

use crate::config::MatrixConfig;
use crate::error::MatrixError;
use crate::math::Matrix;

/// Read a comma-separated matrix file.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    read_matrix_with_config(path, &MatrixConfig::default())
}

/// Read a matrix file using the delimiter from `config`.
pub fn read_matrix_with_config<P: AsRef<Path>>(path: P, config: &MatrixConfig) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("{} does not seem to exist or cannot be opened", path.display()))?;
    let matrix = read_matrix_from_reader(file, config)
        .with_context(|| format!("Error while processing {}", path.display()))?;
    log::info!(
        "Loaded {} matrix from {}",
        matrix.shape(),
        path.display()
    );
    Ok(matrix)
}

/// Parse a matrix from any byte source.
pub fn read_matrix_from_reader<R: Read>(reader: R, config: &MatrixConfig) -> Result<Matrix> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = 0usize;
    let mut cols = 0usize;
    let mut data = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record_no = idx + 1;
        let record = result.with_context(|| format!("Failed to read record {}", record_no))?;

        if rows == 0 {
            cols = record.len();
        } else if record.len() != cols {
            return Err(MatrixError::RaggedRow {
                record: record_no,
                expected: cols,
                found: record.len(),
            }
            .into());
        }

        for (field_idx, field) in record.iter().enumerate() {
            let value = field.parse::<i64>().map_err(|_| MatrixError::NotAnInteger {
                record: record_no,
                field: field_idx + 1,
                value: field.to_string(),
            })?;
            data.push(value);
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(MatrixError::EmptyInput.into());
    }

    Ok(Matrix::from_row_major(rows, cols, data)?)
}

/// Write `matrix` as comma-separated text.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix) -> Result<()> {
    write_matrix_with_config(path, matrix, &MatrixConfig::default())
}

/// Write `matrix` using the delimiter from `config`.
pub fn write_matrix_with_config<P: AsRef<Path>>(
    path: P,
    matrix: &Matrix,
    config: &MatrixConfig,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_matrix_to_writer(BufWriter::new(file), matrix, config)
        .with_context(|| format!("Cannot write to file: {}", path.display()))?;
    log::info!("Wrote {} matrix to {}", matrix.shape(), path.display());
    Ok(())
}

/// Serialize `matrix` one logical row per record.
pub fn write_matrix_to_writer<W: Write>(
    writer: W,
    matrix: &Matrix,
    config: &MatrixConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(false)
        .from_writer(writer);

    let row_major = matrix.to_row_major();
    for row in row_major.as_slice().chunks_exact(row_major.ncols()) {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
