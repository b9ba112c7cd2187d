use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Threshold applied when a request does not name one.
pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

/// A validated analytics query: which regions to summarize and the latency
/// above which a sample counts as a breach.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyQuery {
    pub regions: Vec<String>,
    pub threshold_ms: f64,
}

impl LatencyQuery {
    pub fn new(regions: Vec<String>, threshold_ms: f64) -> Self {
        LatencyQuery { regions, threshold_ms }
    }
}

/// Request body as it arrives on the wire.
///
/// Both fields are optional, but a field that is present must have the right
/// type: `"regions": null` or `"threshold_ms": null` are rejected rather than
/// silently defaulted. The body itself must be a JSON object; arrays are not
/// read positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyQueryPayload {
    pub regions: Vec<String>,
    pub threshold_ms: Option<f64>,
}

#[derive(Deserialize)]
struct PayloadFields {
    #[serde(default)]
    regions: Vec<String>,
    #[serde(default, deserialize_with = "present_number")]
    threshold_ms: Option<f64>,
}

impl<'de> Deserialize<'de> for LatencyQueryPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields = PayloadFields::deserialize(Value::Object(object)).map_err(D::Error::custom)?;
        Ok(LatencyQueryPayload {
            regions: fields.regions,
            threshold_ms: fields.threshold_ms,
        })
    }
}

impl LatencyQueryPayload {
    pub fn into_query(self, default_threshold_ms: f64) -> LatencyQuery {
        LatencyQuery {
            regions: self.regions,
            threshold_ms: self.threshold_ms.unwrap_or(default_threshold_ms),
        }
    }
}

// Only invoked when the key exists, so absence still maps to `None`.
fn present_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}
