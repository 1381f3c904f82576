//! Unified error type exposed by **`byok-core`**.
//!
//! Provider crates convert their transport errors into [`ByokError::Backend`]
//! before bubbling them up. The remaining variants describe failures that are
//! classified locally (bad endpoint URLs, incomplete descriptors, rejected
//! keys) and are surfaced to the caller verbatim.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ByokError>;

#[derive(Debug, Error)]
pub enum ByokError {
    /// The deployment URL's host matches none of the known topologies.
    #[error("unrecognized endpoint URL `{url}`: expected an Azure OpenAI or Azure AI inference host")]
    UnrecognizedEndpoint { url: String },

    /// The descriptor for `model` is missing its deployment URL or API key.
    #[error("deployment `{model}` requires both a deployment URL and an API key")]
    MissingDeploymentFields { model: String },

    /// The provider rejected the configured key. The transport error that
    /// triggered this classification is intentionally not kept.
    #[error(
        "authentication failed for `{model}`: verify the API key configured for this deployment"
    )]
    AuthenticationFailure { model: String },

    /// A model with the same (case-insensitive) id is already registered.
    #[error("model `{model}` is already registered")]
    AlreadyRegistered { model: String },

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}
