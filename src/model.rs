//! Stop record shapes: the full input record and its five-key lite projection.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single stop as it appears in the input dataset.
///
/// Values are kept as raw JSON so they are copied without coercion. The
/// required fields are `None` only when the key is absent; an explicit
/// `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StopRecord {
    #[serde(default, deserialize_with = "present")]
    pub stop_id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub lat: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub lon: Option<Value>,

    // absent and null both land here as None
    #[serde(default)]
    pub locality: Option<Value>,
}

/// Reduced stop record written to the lite dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteStopRecord {
    /// stop_id
    pub i: Value,
    /// name
    pub n: Value,
    /// lat
    pub l: Value,
    /// lon
    pub o: Value,
    /// locality, `""` when missing
    pub c: Value,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
