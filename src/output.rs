//! Persistence for the lite dataset.
//!
//! The dataset is written compactly and swapped into place with a rename, so
//! the target is either the previous content or the complete new content.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{OptimizeError, Result};
use crate::model::LiteStopRecord;

/// Writes `records` as compact JSON to `path`, replacing any previous file.
///
/// Returns the number of bytes written.
#[tracing::instrument(skip_all, fields(path = %path.display(), records = records.len()))]
pub fn write_compact(path: &Path, records: &[LiteStopRecord]) -> Result<u64> {
    let tmp = temp_path(path);
    debug!(tmp = %tmp.display(), "Writing to temporary file");

    if let Err(e) = write_file(&tmp, records) {
        discard_temp(&tmp);
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&tmp, path) {
        warn!(error = %e, "Rename onto target failed");
        discard_temp(&tmp);
        return Err(OptimizeError::io(path, e));
    }

    let bytes = std::fs::metadata(path)
        .map_err(|e| OptimizeError::io(path, e))?
        .len();
    info!(bytes, "Lite dataset written");
    Ok(bytes)
}

fn write_file(tmp: &Path, records: &[LiteStopRecord]) -> Result<()> {
    let file = File::create(tmp).map_err(|e| OptimizeError::io(tmp, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, records).map_err(|e| {
        // serialization of plain JSON values only fails on I/O
        OptimizeError::io(tmp, e.into())
    })?;

    let file = writer
        .into_inner()
        .map_err(|e| OptimizeError::io(tmp, e.into_error()))?;
    file.sync_all().map_err(|e| OptimizeError::io(tmp, e))?;
    Ok(())
}

fn discard_temp(tmp: &Path) {
    if let Err(e) = std::fs::remove_file(tmp) {
        debug!(tmp = %tmp.display(), error = %e, "Temporary file not removed");
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
