//! Azure backend for bring-your-own-key chat endpoints.
//!
//! Covers both Azure topologies (Azure OpenAI resources behind
//! `*.openai.azure.com` and standalone Azure AI inference hosts) and both
//! request shapes (chat completions and responses):
//!
//! ```rust,no_run
//! use byok_azure::{AzureByokProvider, DeploymentDescriptor};
//! use byok_core::registry::ModelRegistry;
//!
//! # fn main() -> byok_core::error::Result<()> {
//! let registry = ModelRegistry::new();
//! let provider = AzureByokProvider::new()?;
//! let handle = provider.register(
//!     &registry,
//!     &DeploymentDescriptor::from_env("o3-mini"),
//! )?;
//! // … use `registry.get(handle.model_id())` …
//! handle.dispose();
//! # Ok(())
//! # }
//! ```
mod adapter;
mod capabilities;
mod client;
mod descriptor;
mod endpoint;
pub mod error;
pub mod model_family;
mod registration;
mod sanitize;

pub use adapter::AzureEndpoint;
pub use capabilities::{
    REASONING_CONTEXT_WINDOW_TOKENS, REASONING_OUTPUT_TOKENS, REASONING_PROMPT_TOKENS,
    derive_capabilities,
};
pub use client::HttpTransport;
pub use descriptor::{API_KEY_ENV, DeploymentDescriptor, ENDPOINT_ENV};
pub use endpoint::{API_VERSION, Topology, resolve_endpoint_url};
pub use model_family::{SurfaceKind, requires_responses_api};
pub use registration::AzureByokProvider;
pub use sanitize::sanitize_request_body;
