use std::collections::HashSet;

use crate::error::Result;
use crate::idconv::models::{ConversionRequest, ConversionResult, IdType};
use crate::idconv::responses::IdConvResponse;
use tracing::debug;

/// Maps ID converter JSON responses onto [`ConversionResult`] values
pub struct IdConvJsonParser;

impl IdConvJsonParser {
    /// Parse a raw JSON body produced by `request`
    ///
    /// # Errors
    ///
    /// Returns `IdConvError::JsonError` if the body is not JSON or if `records`
    /// is malformed. Any JSON value without a `records` field, including
    /// `null` and non-object values, yields no results.
    pub fn parse_body(body: &str, request: &ConversionRequest) -> Result<Vec<ConversionResult>> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if value.get("records").is_none() {
            debug!("Response body has no records field");
            return Ok(Vec::new());
        }

        let response: IdConvResponse = serde_json::from_value(value)?;
        Ok(Self::parse_records(&response, request))
    }

    /// Convert every response record into a result, in server order
    ///
    /// Each record is correlated to a requested identifier by checking its
    /// `pmid`, then `pmcid`, then `doi` against the correlation set. The first
    /// hit wins; records with no hit are kept with `requested_id` unset.
    pub fn parse_records(
        response: &IdConvResponse,
        request: &ConversionRequest,
    ) -> Vec<ConversionResult> {
        let Some(records) = &response.records else {
            debug!(status = ?response.status, "Response has no records");
            return Vec::new();
        };

        let requested = correlation_set(request);

        records
            .iter()
            .map(|record| {
                let requested_id = [&record.pmid, &record.pmcid, &record.doi]
                    .into_iter()
                    .flatten()
                    .find(|id| requested.contains(id.as_str()))
                    .cloned();

                ConversionResult {
                    requested_id,
                    pmid: record.pmid.clone(),
                    pmcid: record.pmcid.clone(),
                    doi: record.doi.clone(),
                }
            })
            .collect()
    }
}

/// Acceptable forms of the requested identifiers
///
/// With a PMCID hint every identifier is stored with its "PMC" prefix.
pub(crate) fn correlation_set(request: &ConversionRequest) -> HashSet<String> {
    match request.id_type() {
        Some(IdType::Pmcid) => request
            .identifiers()
            .iter()
            .map(|id| ensure_pmc_prefix(id))
            .collect(),
        _ => request.identifiers().iter().cloned().collect(),
    }
}

fn ensure_pmc_prefix(id: &str) -> String {
    if id.starts_with("PMC") {
        id.to_string()
    } else {
        format!("PMC{id}")
    }
}
