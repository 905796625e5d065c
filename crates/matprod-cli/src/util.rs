use anyhow::Result;
use std::path::{Path, PathBuf};

/// Check that an input matrix file exists. Unusual extensions only warn,
/// since any delimited text is accepted.
pub fn validate_matrix_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    if !pb.exists() {
        anyhow::bail!("{} does not seem to exist.", path);
    }

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") | Some("tsv") | Some("txt") => {}
        _ => log::warn!("{} does not look like a .csv or .tsv file", path),
    }

    Ok(())
}

/// Tab for `.tsv` paths, comma otherwise.
pub fn delimiter_for_path<P: AsRef<Path>>(path: P) -> char {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());
    match extension.as_deref() {
        Some("tsv") => '\t',
        _ => ',',
    }
}
