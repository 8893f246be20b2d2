use serde::{Deserialize, Serialize};

use super::deserializers::deserialize_optional_id;

/// Top-level JSON body returned by the ID converter
///
/// Error responses for malformed identifiers carry no `records` field.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IdConvResponse {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub records: Option<Vec<IdConvRecord>>,
}

/// One record of the `records` array
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IdConvRecord {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub pmid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub pmcid: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub doi: Option<String>,
}
