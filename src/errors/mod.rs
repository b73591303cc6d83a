//! Unified error handling module
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not decode field `{field}` from {value:?}")]
    Decode { field: &'static str, value: String },

    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ApiError {
    pub(crate) fn decode(field: &'static str, value: impl Into<String>) -> Self {
        ApiError::Decode {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        ApiError::MalformedResponse(msg.into())
    }

    /// Transport-level failure: the request did not produce a usable response.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::UnexpectedStatus { .. }
        )
    }

    /// A response arrived but its content could not be mapped to the model.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ApiError::Json(_) | ApiError::Decode { .. } | ApiError::ImageDecode(_)
        )
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
