//! Projection of full stop records onto the five-key lite schema.

use serde_json::Value;
use tracing::debug;

use crate::error::{OptimizeError, Result};
use crate::model::{LiteStopRecord, StopRecord};

/// Projects one stop. `index` is the record's position in the dataset and
/// only feeds the error.
pub fn project(index: usize, stop: &StopRecord) -> Result<LiteStopRecord> {
    let required = |value: &Option<Value>, field: &'static str| {
        value
            .clone()
            .ok_or_else(|| OptimizeError::FieldMissing { index, field })
    };

    Ok(LiteStopRecord {
        i: required(&stop.stop_id, "stop_id")?,
        n: required(&stop.name, "name")?,
        l: required(&stop.lat, "lat")?,
        o: required(&stop.lon, "lon")?,
        c: stop
            .locality
            .clone()
            .unwrap_or_else(|| Value::String(String::new())),
    })
}

/// Projects every stop in order. The first record missing a required field
/// fails the whole batch.
#[tracing::instrument(skip_all, fields(records = stops.len()))]
pub fn project_all(stops: &[StopRecord]) -> Result<Vec<LiteStopRecord>> {
    let lite = stops
        .iter()
        .enumerate()
        .map(|(index, stop)| project(index, stop))
        .collect::<Result<Vec<_>>>()?;

    let defaulted = stops.iter().filter(|s| s.locality.is_none()).count();
    debug!(projected = lite.len(), defaulted_locality = defaulted, "Stops projected");

    Ok(lite)
}
