use thiserror::Error;

/// Error types for ID converter operations
#[derive(Error, Debug)]
pub enum IdConvError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Non-success HTTP status other than 404, with the response body
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Unknown identifier type name
    #[error("Invalid identifier type: {value}")]
    InvalidIdType { value: String },
}

pub type Result<T> = std::result::Result<T, IdConvError>;
