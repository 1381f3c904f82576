use std::time::Duration;

use byok_core::provider::{ChatRequest, ChatTransport, ProviderFuture};
use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;

use crate::error::AzureError;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("api-key");
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP transport for Azure chat endpoints.
///
/// * Non-streaming only (one request ▶ one JSON response).
/// * Posts to the fully resolved URL it is handed; it never builds URLs.
/// * Shares a single `reqwest::Client`, so cloning `HttpTransport` is cheap.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a default `reqwest` client: 30 s timeout, Rustls TLS.
    ///
    /// # Errors
    ///
    /// * [`AzureError::Http`] – the TLS backend could not be initialised.
    pub fn new() -> Result<Self, AzureError> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_http(http))
    }

    /// Use a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Perform a **non-streaming** POST of `request.body` to `request.url`.
    pub async fn post_json(&self, request: ChatRequest<'_>) -> Result<Value, AzureError> {
        let headers = auth_headers(request.api_key)?;

        let resp = self
            .http
            .post(request.url)
            .headers(headers)
            .json(&request.body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AzureError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl ChatTransport for HttpTransport {
    fn send<'a>(&'a self, request: ChatRequest<'a>) -> ProviderFuture<'a, Value> {
        Box::pin(async move { Ok(self.post_json(request).await?) })
    }
}

/// Gateway hosts authenticate with `api-key`, inference hosts with a bearer
/// token; both are sent so one transport serves either topology.
fn auth_headers(api_key: &str) -> Result<HeaderMap, AzureError> {
    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(API_KEY_HEADER, key);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_key_for_both_topologies() {
        let headers = auth_headers("secret").unwrap();

        assert_eq!(headers[&API_KEY_HEADER], "secret");
        assert_eq!(headers[AUTHORIZATION], "Bearer secret");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn keys_with_control_characters_are_rejected() {
        assert!(matches!(
            auth_headers("bad\nkey"),
            Err(AzureError::InvalidApiKey(_))
        ));
    }
}
