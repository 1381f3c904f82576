//! Turns whatever deployment URL a user pasted into the exact request URL.
//!
//! Azure exposes two topologies:
//!
//! * **Gateway** (`*.openai.azure.com`) – one resource hosts many named
//!   deployments; every request carries an `api-version` query parameter.
//! * **Raw inference** (`*.models.ai.azure.com`, `*.inference.ml.azure.com`) –
//!   one host per model, unversioned `/v1/...` paths.
//!
//! Users paste both bare hosts and URLs ending in `/`, `/v1` or a complete
//! request path, so resolution is normalising and idempotent.
use byok_core::error::{ByokError, Result};
use url::Url;

/// `api-version` sent to gateway hosts. The only knob for vendor API migrations.
pub const API_VERSION: &str = "2025-04-01-preview";

const RAW_INFERENCE_HOST_MARKERS: &[&str] = &["models.ai.azure.com", "inference.ml.azure.com"];
const GATEWAY_HOST_MARKER: &str = "openai.azure.com";
const REQUEST_PATH_MARKERS: &[&str] = &["/chat/completions", "/responses"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Gateway,
    RawInference,
}

impl Topology {
    /// Classify the host of `url`; raw-inference markers take precedence.
    pub fn classify(url: &str) -> Option<Self> {
        let host = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase))
            .unwrap_or_else(|| url.to_ascii_lowercase());

        if RAW_INFERENCE_HOST_MARKERS
            .iter()
            .any(|marker| host.contains(marker))
        {
            Some(Self::RawInference)
        } else if host.contains(GATEWAY_HOST_MARKER) {
            Some(Self::Gateway)
        } else {
            None
        }
    }
}

/// Resolve `url` into the request URL for `model_id`.
///
/// URLs that already contain a request path are returned unchanged.
///
/// # Errors
///
/// * [`ByokError::UnrecognizedEndpoint`] – the host is neither a gateway nor a
///   raw-inference host. The error carries the trimmed URL.
pub fn resolve_endpoint_url(model_id: &str, url: &str, use_responses_api: bool) -> Result<String> {
    if REQUEST_PATH_MARKERS
        .iter()
        .any(|marker| url.contains(marker))
    {
        return Ok(url.to_owned());
    }

    let base = url.strip_suffix('/').unwrap_or(url);
    let base = base.strip_suffix("/v1").unwrap_or(base);

    let topology = Topology::classify(base).ok_or_else(|| ByokError::UnrecognizedEndpoint {
        url: base.to_owned(),
    })?;

    let resolved = match (topology, use_responses_api) {
        (Topology::RawInference, true) => format!("{base}/v1/responses"),
        (Topology::RawInference, false) => format!("{base}/v1/chat/completions"),
        (Topology::Gateway, true) => {
            format!("{base}/openai/v1/responses?api-version={API_VERSION}")
        }
        (Topology::Gateway, false) => format!(
            "{base}/openai/deployments/{model_id}/chat/completions?api-version={API_VERSION}"
        ),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(model = model_id, ?topology, url = %resolved, "resolved Azure endpoint URL");

    Ok(resolved)
}
