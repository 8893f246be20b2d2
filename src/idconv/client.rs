use crate::config::ClientConfig;
use crate::error::{IdConvError, Result};
use crate::idconv::batch::to_chunks;
use crate::idconv::models::{ChunkFailure, ConversionOutcome, ConversionRequest, ConversionResult};
use crate::idconv::parser::IdConvJsonParser;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

/// Client for the PMC ID Converter API
#[derive(Clone)]
pub struct IdConverter {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl IdConverter {
    /// Create a converter that identifies itself with the given contact email
    ///
    /// # Example
    ///
    /// ```
    /// use pmc_idconv_client::IdConverter;
    ///
    /// let converter = IdConverter::new("researcher@university.edu");
    /// ```
    pub fn new<S: Into<String>>(email: S) -> Self {
        Self::with_config(ClientConfig::new().with_email(email))
    }

    /// Create a converter with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pmc_idconv_client::{ClientConfig, IdConverter};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_base_url("http://localhost:8080/idconv/")
    ///     .with_chunk_delay(Duration::ZERO);
    ///
    /// let converter = IdConverter::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self::with_client(client, config)
    }

    /// Create a converter around an existing reqwest client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Convert every identifier of `request`
    ///
    /// Requests with fewer identifiers than the configured batch limit (200 by
    /// default) are sent in a single call. Larger requests are split into
    /// chunks sent one after another with a pause between them; results are
    /// concatenated in chunk order.
    ///
    /// # Errors
    ///
    /// * `IdConvError::ApiError` - If any chunk gets a non-success status other than 404
    /// * `IdConvError::RequestError` - If the HTTP request fails
    /// * `IdConvError::JsonError` - If a response body is not valid JSON
    ///
    /// Any error aborts the whole conversion; results of earlier chunks are discarded.
    /// Use [`convert_partial`](Self::convert_partial) to keep them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pmc_idconv_client::{ConversionRequest, IdConverter};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let converter = IdConverter::new("researcher@university.edu");
    ///     let request = ConversionRequest::new(["16923184", "28913292"]);
    ///
    ///     for result in converter.convert(&request).await? {
    ///         println!("{result}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, request), fields(ids_count = request.identifiers().len()))]
    pub async fn convert(&self, request: &ConversionRequest) -> Result<Vec<ConversionResult>> {
        let max_ids = self.config.max_ids_per_request;
        if request.identifiers().len() < max_ids {
            return self.convert_chunk(request).await;
        }

        let chunks = to_chunks(request.identifiers(), max_ids);
        let total_chunks = chunks.len();
        info!(total_chunks, chunk_size = max_ids, "Converting identifiers in chunks");

        let mut results = Vec::new();
        for (chunk_index, chunk) in chunks.into_iter().enumerate() {
            self.pace(chunk_index).await;

            let chunk_request = request.for_chunk(chunk);
            let chunk_results = self.convert_chunk(&chunk_request).await?;
            info!(
                chunk = chunk_index + 1,
                total_chunks,
                records = chunk_results.len(),
                "Chunk converted"
            );
            results.extend(chunk_results);
        }

        info!(records = results.len(), "Conversion completed");
        Ok(results)
    }

    /// Convert every identifier of `request`, keeping going past failed chunks
    ///
    /// Chunking and pacing match [`convert`](Self::convert). A chunk that fails
    /// is recorded in [`ConversionOutcome::failures`] and the remaining chunks
    /// are still sent.
    #[instrument(skip(self, request), fields(ids_count = request.identifiers().len()))]
    pub async fn convert_partial(&self, request: &ConversionRequest) -> ConversionOutcome {
        let chunks = if request.identifiers().len() < self.config.max_ids_per_request {
            vec![request.identifiers()]
        } else {
            to_chunks(request.identifiers(), self.config.max_ids_per_request)
        };

        let mut outcome = ConversionOutcome::default();
        for (chunk_index, chunk) in chunks.into_iter().enumerate() {
            self.pace(chunk_index).await;

            let chunk_request = request.for_chunk(chunk);
            match self.convert_chunk(&chunk_request).await {
                Ok(chunk_results) => outcome.results.extend(chunk_results),
                Err(error) => {
                    warn!(chunk = chunk_index + 1, error = %error, "Chunk conversion failed");
                    outcome.failures.push(ChunkFailure {
                        chunk_index,
                        identifiers: chunk.to_vec(),
                        error,
                    });
                }
            }
        }

        info!(
            records = outcome.results.len(),
            failed_chunks = outcome.failures.len(),
            "Partial conversion completed"
        );
        outcome
    }

    /// Send a single request to the service, without chunking
    ///
    /// A 404 response yields an empty result list instead of an error.
    ///
    /// # Errors
    ///
    /// * `IdConvError::ApiError` - For any other non-success status, carrying the body
    /// * `IdConvError::RequestError` - If the HTTP request fails
    /// * `IdConvError::JsonError` - If the body is not valid JSON
    #[instrument(skip(self, request), fields(ids_count = request.identifiers().len()))]
    pub async fn convert_chunk(
        &self,
        request: &ConversionRequest,
    ) -> Result<Vec<ConversionResult>> {
        let url = self.build_url(request);

        debug!("Making ID converter API request");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            warn!(body = %body, "ID converter returned 404, treating as no records");
            return Ok(Vec::new());
        }

        if !status.is_success() {
            warn!("API request failed with status: {}", status);
            return Err(IdConvError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!("Received successful API response, parsing JSON");
        let results = IdConvJsonParser::parse_body(&body, request)?;
        debug!(records = results.len(), "Parsed ID converter response");

        Ok(results)
    }

    /// Sleep before every chunk except the first
    async fn pace(&self, chunk_index: usize) {
        if chunk_index > 0 && !self.config.chunk_delay.is_zero() {
            debug!(
                delay_ms = self.config.chunk_delay.as_millis() as u64,
                "Adding delay between chunks"
            );
            tokio::time::sleep(self.config.chunk_delay).await;
        }
    }

    fn build_url(&self, request: &ConversionRequest) -> String {
        let query = request
            .build_params()
            .into_iter()
            .chain(self.config.build_api_params())
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{query}", self.base_url)
    }
}
