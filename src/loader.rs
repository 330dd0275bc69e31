//! Reads the stop dataset from disk.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{OptimizeError, Result};
use crate::model::StopRecord;

/// Loads every stop record from the JSON array at `path`.
///
/// # Errors
///
/// Returns [`OptimizeError::Io`] if the file cannot be read and
/// [`OptimizeError::Parse`] if it is not a JSON array of objects.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_stops(path: &Path) -> Result<Vec<StopRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| OptimizeError::io(path, e))?;
    debug!(bytes = content.len(), "Input read, parsing");

    let stops = parse_stops(&content).map_err(|source| OptimizeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(records = stops.len(), "Stops loaded");
    Ok(stops)
}

/// Parses an in-memory JSON array of stop objects.
pub fn parse_stops(content: &str) -> serde_json::Result<Vec<StopRecord>> {
    serde_json::from_str(content)
}
