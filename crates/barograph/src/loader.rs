//! Reading IGC files and classifying their lines.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read an IGC file and return its lines without line terminators.
///
/// IGC files are nominally ASCII, but some loggers write pilot names in
/// Latin-1; invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns [`Error::FileRead`] if the file cannot be read.
pub fn load_igc_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Reading IGC file {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect();

    debug!(lines = lines.len(), "Loaded IGC file");
    Ok(lines)
}

/// Select the H (header) records.
pub fn header_lines<S: AsRef<str>>(lines: &[S]) -> Vec<&str> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| line.trim_start().starts_with('H'))
        .collect()
}

/// Select the B (fix) records, paired with their 1-based line numbers.
pub fn data_lines<S: AsRef<str>>(lines: &[S]) -> Vec<(usize, &str)> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .enumerate()
        .filter(|(_, line)| line.trim_start().starts_with('B'))
        .map(|(index, line)| (index + 1, line.trim_start()))
        .collect()
}
