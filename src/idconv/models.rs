use crate::error::{IdConvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier type hint sent as the `idtype` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// PubMed ID
    Pmid,
    /// PubMed Central ID
    Pmcid,
    /// Digital Object Identifier
    Doi,
}

impl IdType {
    /// Wire value understood by the service
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Pmid => "pmid",
            IdType::Pmcid => "pmcid",
            IdType::Doi => "doi",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = IdConvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pmid" => Ok(IdType::Pmid),
            "pmcid" => Ok(IdType::Pmcid),
            "doi" => Ok(IdType::Doi),
            _ => Err(IdConvError::InvalidIdType {
                value: s.to_string(),
            }),
        }
    }
}

/// One logical conversion request, before chunking
///
/// # Example
///
/// ```
/// use pmc_idconv_client::{ConversionRequest, IdType};
///
/// let request = ConversionRequest::new(["7611378", "PMC1325230"])
///     .with_id_type(IdType::Pmcid);
///
/// assert_eq!(request.identifiers().len(), 2);
/// assert!(!request.include_versions());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    id_type: Option<IdType>,
    include_versions: bool,
    identifiers: Vec<String>,
}

impl ConversionRequest {
    /// Create a request for the given identifiers with no type hint and versions omitted
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_type: None,
            include_versions: false,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }

    /// Tell the service how to interpret the identifiers
    pub fn with_id_type(mut self, id_type: IdType) -> Self {
        self.id_type = Some(id_type);
        self
    }

    /// Ask the service to include version information
    pub fn with_versions(mut self, include_versions: bool) -> Self {
        self.include_versions = include_versions;
        self
    }

    pub fn id_type(&self) -> Option<IdType> {
        self.id_type
    }

    pub fn include_versions(&self) -> bool {
        self.include_versions
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Derive a request for a subset of identifiers, keeping the hint and versions flag
    pub fn for_chunk(&self, identifiers: &[String]) -> Self {
        Self {
            id_type: self.id_type,
            include_versions: self.include_versions,
            identifiers: identifiers.to_vec(),
        }
    }

    /// Build the query parameters for this request
    ///
    /// Identifiers are passed through unvalidated.
    pub fn build_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("ids".to_string(), self.identifiers.join(",")),
            ("format".to_string(), "json".to_string()),
        ];

        if !self.include_versions {
            params.push(("versions".to_string(), "no".to_string()));
        }

        if let Some(id_type) = self.id_type {
            params.push(("idtype".to_string(), id_type.as_str().to_string()));
        }

        params
    }
}

/// A single converted record returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The requested identifier this record was matched to, if any
    pub requested_id: Option<String>,
    /// PubMed ID
    pub pmid: Option<String>,
    /// PubMed Central ID
    pub pmcid: Option<String>,
    /// DOI
    pub doi: Option<String>,
}

impl ConversionResult {
    /// Whether the record was correlated to a requested identifier
    pub fn is_matched(&self) -> bool {
        self.requested_id.is_some()
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("None")
        }

        write!(
            f,
            "request_id: {} pmid: {} pmcid: {} doi: {}",
            show(&self.requested_id),
            show(&self.pmid),
            show(&self.pmcid),
            show(&self.doi)
        )
    }
}

/// A chunk that failed during [`convert_partial`](crate::IdConverter::convert_partial)
#[derive(Debug)]
pub struct ChunkFailure {
    /// Zero-based position of the chunk
    pub chunk_index: usize,
    /// Identifiers carried by the failed chunk
    pub identifiers: Vec<String>,
    pub error: IdConvError,
}

/// Results collected by a partial-failure tolerant conversion
#[derive(Debug, Default)]
pub struct ConversionOutcome {
    pub results: Vec<ConversionResult>,
    pub failures: Vec<ChunkFailure>,
}

impl ConversionOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
