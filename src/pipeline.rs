//! Load → project → write → measure.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{OptimizeError, Result};
use crate::loader::load_stops;
use crate::output::write_compact;
use crate::projector::project_all;
use crate::report::SizeReport;

pub const DEFAULT_INPUT: &str = "stops.txt";
pub const DEFAULT_OUTPUT: &str = "stops_lite.json";

/// Input and output locations for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Runs the whole pipeline. Nothing is written unless every record projects.
#[tracing::instrument(skip_all, fields(input = %paths.input.display(), output = %paths.output.display()))]
pub fn optimize(paths: &Paths) -> Result<SizeReport> {
    let stops = load_stops(&paths.input)?;
    let lite = project_all(&stops)?;
    let new_bytes = write_compact(&paths.output, &lite)?;

    let report = SizeReport {
        original_bytes: file_size(&paths.input)?,
        new_bytes,
        records: lite.len(),
    };

    info!(
        records = report.records,
        original_bytes = report.original_bytes,
        new_bytes = report.new_bytes,
        reduction_pct = format!("{:.1}", report.reduction_pct()),
        "Optimization complete"
    );
    Ok(report)
}

fn file_size(path: &Path) -> Result<u64> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| OptimizeError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = Paths::default();
        assert_eq!(paths.input, Path::new("stops.txt"));
        assert_eq!(paths.output, Path::new("stops_lite.json"));
    }

    #[test]
    fn test_optimize_counts_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths {
            input: dir.path().join("stops.txt"),
            output: dir.path().join("stops_lite.json"),
        };
        let input = r#"[ { "stop_id": "7", "name": "Elm Ave", "lat": 41.0, "lon": -72.0 } ]"#;
        std::fs::write(&paths.input, input).unwrap();

        let report = optimize(&paths).unwrap();

        let expected = r#"[{"i":"7","n":"Elm Ave","l":41.0,"o":-72.0,"c":""}]"#;
        assert_eq!(report.records, 1);
        assert_eq!(report.original_bytes, input.len() as u64);
        assert_eq!(report.new_bytes, expected.len() as u64);
    }
}
