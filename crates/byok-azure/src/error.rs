use byok_core::error::ByokError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

/// Transport-level failures of [`crate::HttpTransport`].
#[derive(Debug, thiserror::Error)]
pub enum AzureError {
    /// Never carries the request URL; see the `From` impl below.
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Azure returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] InvalidHeaderValue),
}

impl From<reqwest::Error> for AzureError {
    /// Drops the URL so deployment names in it never reach error text.
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

impl From<AzureError> for ByokError {
    fn from(value: AzureError) -> Self {
        ByokError::Backend(Box::new(value))
    }
}
