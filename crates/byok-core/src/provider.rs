//! The two seams every provider crate plugs into.
//!
//! * [`ChatTransport`] – the generic "base behaviour": puts a JSON body on the
//!   wire and hands back the decoded JSON reply. It knows nothing about model
//!   families or URL shapes.
//! * [`LanguageModelEndpoint`] – a fully configured, request-executing model
//!   endpoint. Provider crates compose a transport with their own URL and body
//!   rules and expose the result through this trait so a
//!   [`crate::registry::ModelRegistry`] can hold endpoints of any provider.
//!
//! Both traits return a [`Pin<Box<dyn Future>>`] so they stay object-safe
//! without pulling in `async_trait`.
use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::{Map, Value};

use crate::{capabilities::CapabilityRecord, error::Result, model::ModelId};

/// One outbound chat request body (`"model"`, `"messages"`, `"temperature"`, …).
///
/// Owned by exactly one in-flight request.
pub type RequestBody = Map<String, Value>;

/// Boxed future returned by the provider traits.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Everything a transport needs to perform one POST.
#[derive(Clone)]
pub struct ChatRequest<'a> {
    pub url: &'a str,
    pub api_key: &'a str,
    pub body: RequestBody,
}

impl std::fmt::Debug for ChatRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRequest")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

pub trait ChatTransport: Send + Sync {
    /// Generic, provider-independent body rewriting applied before any
    /// endpoint-specific rules. Defaults to a no-op.
    fn intercept_outbound_body(&self, _body: &mut RequestBody) {}

    /// Send `request` and return the decoded JSON response.
    ///
    /// Implementations must not retry; dropping the future cancels the call.
    fn send<'a>(&'a self, request: ChatRequest<'a>) -> ProviderFuture<'a, Value>;
}

pub trait LanguageModelEndpoint: Send + Sync {
    fn model_id(&self) -> &ModelId;

    /// Fully resolved request URL.
    fn url(&self) -> &str;

    fn capabilities(&self) -> &CapabilityRecord;

    /// Rewrite `body` in place right before transmission.
    fn intercept_outbound_body(&self, body: &mut RequestBody);

    /// Intercept `body` and send it through the endpoint's transport.
    fn send_chat_request(&self, body: RequestBody) -> ProviderFuture<'_, Value>;

    /// A new endpoint for the same deployment whose capability record allows
    /// at most `max_prompt_tokens` prompt tokens. `self` is left untouched.
    fn with_prompt_token_budget(&self, max_prompt_tokens: u32) -> Arc<dyn LanguageModelEndpoint>;
}
