use std::{fmt, sync::Arc};

use byok_core::{
    capabilities::CapabilityRecord,
    error::{ByokError, Result},
    model::ModelId,
    provider::{ChatRequest, ChatTransport, LanguageModelEndpoint, ProviderFuture, RequestBody},
};
use serde_json::Value;

use crate::{client::HttpTransport, model_family::SurfaceKind, sanitize::sanitize_request_body};

/// A registered Azure deployment, ready to execute chat requests.
///
/// Wraps a shared [`ChatTransport`] (the generic base behaviour) and adds the
/// Azure-specific parts on top of it:
///
/// * the resolved request URL and the deployment's API key,
/// * body sanitising for reasoning models right before transmission,
/// * translation of key-related transport failures into
///   [`ByokError::AuthenticationFailure`].
///
/// All fields are immutable; [`Self::with_prompt_token_budget`] builds a new
/// endpoint instead of changing this one.
pub struct AzureEndpoint<T = HttpTransport> {
    model_id: ModelId,
    api_key: String,
    url: String,
    capabilities: CapabilityRecord,
    transport: Arc<T>,
}

impl<T: ChatTransport> AzureEndpoint<T> {
    pub fn new(
        model_id: ModelId,
        api_key: impl Into<String>,
        url: impl Into<String>,
        capabilities: CapabilityRecord,
        transport: Arc<T>,
    ) -> Self {
        Self {
            model_id,
            api_key: api_key.into(),
            url: url.into(),
            capabilities,
            transport,
        }
    }

    pub fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn capabilities(&self) -> &CapabilityRecord {
        &self.capabilities
    }

    pub fn surface(&self) -> SurfaceKind {
        SurfaceKind::for_model(self.model_id.as_str())
    }

    /// Rebuild from the same model id, key, URL and transport with
    /// `max_prompt_tokens` replaced.
    pub fn with_prompt_token_budget(&self, max_prompt_tokens: u32) -> Self {
        Self::new(
            self.model_id.clone(),
            self.api_key.clone(),
            self.url.clone(),
            self.capabilities.with_max_prompt_tokens(max_prompt_tokens),
            Arc::clone(&self.transport),
        )
    }

    /// Base interception first, then the reasoning-model rules.
    pub fn intercept_outbound_body(&self, body: &mut RequestBody) {
        self.transport.intercept_outbound_body(body);
        sanitize_request_body(body, self.model_id.as_str());
    }

    /// Send one chat request. Not retried.
    ///
    /// # Errors
    ///
    /// * [`ByokError::AuthenticationFailure`] – the transport error mentions
    ///   authentication.
    /// * Any other transport error, unchanged.
    pub async fn send_chat_request(&self, mut body: RequestBody) -> Result<Value> {
        self.intercept_outbound_body(&mut body);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            model = %self.model_id,
            url = %self.url,
            surface = ?self.surface(),
            "sending Azure chat request"
        );

        let request = ChatRequest {
            url: &self.url,
            api_key: &self.api_key,
            body,
        };

        self.transport
            .send(request)
            .await
            .map_err(|err| self.classify_failure(err))
    }

    fn classify_failure(&self, err: ByokError) -> ByokError {
        if !is_authentication_error(&err) {
            return err;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(model = %self.model_id, error = %err, "Azure rejected the configured API key");

        ByokError::AuthenticationFailure {
            model: self.model_id.to_string(),
        }
    }
}

fn is_authentication_error(err: &ByokError) -> bool {
    // "auth" also covers "authentication", "unauthorized", "authorization".
    err.to_string().to_ascii_lowercase().contains("auth")
}

impl<T: ChatTransport + 'static> LanguageModelEndpoint for AzureEndpoint<T> {
    fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn capabilities(&self) -> &CapabilityRecord {
        &self.capabilities
    }

    fn intercept_outbound_body(&self, body: &mut RequestBody) {
        AzureEndpoint::intercept_outbound_body(self, body);
    }

    fn send_chat_request(&self, body: RequestBody) -> ProviderFuture<'_, Value> {
        Box::pin(AzureEndpoint::send_chat_request(self, body))
    }

    fn with_prompt_token_budget(&self, max_prompt_tokens: u32) -> Arc<dyn LanguageModelEndpoint> {
        Arc::new(AzureEndpoint::with_prompt_token_budget(self, max_prompt_tokens))
    }
}

impl<T> fmt::Debug for AzureEndpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureEndpoint")
            .field("model_id", &self.model_id)
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
