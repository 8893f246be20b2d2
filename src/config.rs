//! Client configuration for the PMC ID Converter API

use std::time::Duration;

/// Production endpoint of the NCBI PMC ID Converter API
pub const DEFAULT_BASE_URL: &str = "https://www.ncbi.nlm.nih.gov/pmc/utils/idconv/v1.0/";

/// Tool name reported to NCBI when none is configured
pub const DEFAULT_TOOL: &str = "pmc_id_convert_client";

/// Maximum number of identifiers the service accepts in a single call
pub const DEFAULT_MAX_IDS_PER_REQUEST: usize = 200;

/// Pause between successive chunk requests
pub const DEFAULT_CHUNK_DELAY: Duration = Duration::from_millis(500);

/// Configuration for [`IdConverter`](crate::IdConverter)
///
/// # Example
///
/// ```
/// use pmc_idconv_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_tool("my-pipeline")
///     .with_chunk_delay(Duration::from_secs(1));
///
/// assert_eq!(config.effective_tool(), "my-pipeline");
/// assert_eq!(config.max_ids_per_request, 200);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the ID converter endpoint
    pub base_url: Option<String>,
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
    /// HTTP timeout. `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// Batch size limit; lists with at least this many identifiers are chunked
    pub max_ids_per_request: usize,
    /// Delay inserted between successive chunk requests
    pub chunk_delay: Duration,
}

impl ClientConfig {
    /// Create a configuration with production defaults
    pub fn new() -> Self {
        Self {
            base_url: None,
            email: None,
            tool: None,
            user_agent: None,
            timeout: None,
            max_ids_per_request: DEFAULT_MAX_IDS_PER_REQUEST,
            chunk_delay: DEFAULT_CHUNK_DELAY,
        }
    }

    /// Point the client at another endpoint (e.g. a mock server)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the contact email NCBI uses to reach the caller
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name reported to NCBI
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set an HTTP timeout for each request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the per-call identifier limit. Zero is treated as one.
    pub fn with_max_ids_per_request(mut self, max_ids: usize) -> Self {
        self.max_ids_per_request = max_ids.max(1);
        self
    }

    /// Set the delay between chunk requests. `Duration::ZERO` disables pacing.
    pub fn with_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay = delay;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )
        })
    }

    /// Build the `tool` and `email` query parameters
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("tool".to_string(), self.effective_tool().to_string())];

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
