//! Line loader
//!
//! The whole report is read up front; the file handle is dropped as soon
//! as the contents are captured.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{FioSummaryError, Result};

/// Read the report at `path` into ordered lines with trailing `\n` removed
///
/// Fails with [`FioSummaryError::FileNotFound`] before opening anything when
/// `path` is not an existing regular file.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(FioSummaryError::FileNotFound(path.to_path_buf()));
    }

    let mut content = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut content)?;
    }

    let lines = lines_from_str(&content);
    debug!(path = %path.display(), lines = lines.len(), "loaded report");
    Ok(lines)
}

/// Split in-memory report text the same way [`load_lines`] does
///
/// Only the `\n` terminator is removed; a preceding `\r` stays part of the line.
pub fn lines_from_str(content: &str) -> Vec<String> {
    content.split_terminator('\n').map(str::to_string).collect()
}
