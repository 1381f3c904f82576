use std::{env, fmt};

use byok_core::{capabilities::CapabilityOverrides, model::ModelId};
use serde::Deserialize;

pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";

/// One user-registered Azure deployment.
///
/// Can be deserialised from host settings:
///
/// ```rust
/// use byok_azure::DeploymentDescriptor;
///
/// let descriptor: DeploymentDescriptor = serde_json::from_str(r#"{
///     "modelId": "o3-mini",
///     "apiKey": "sk-…",
///     "deploymentUrl": "https://my-resource.openai.azure.com",
///     "capabilities": { "maxOutputTokens": 32000 }
/// }"#).unwrap();
///
/// assert_eq!(descriptor.model_id.as_str(), "o3-mini");
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDescriptor {
    pub model_id: ModelId,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default, alias = "url")]
    pub deployment_url: Option<String>,
    #[serde(default)]
    pub capabilities: Option<CapabilityOverrides>,
}

impl DeploymentDescriptor {
    pub fn new(
        model_id: impl Into<ModelId>,
        deployment_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            api_key: Some(api_key.into()),
            deployment_url: Some(deployment_url.into()),
            capabilities: None,
        }
    }

    /// Descriptor for `model_id` with the key and URL taken from
    /// `AZURE_OPENAI_API_KEY` / `AZURE_OPENAI_ENDPOINT`.
    ///
    /// Never fails; missing variables surface at registration as
    /// [`byok_core::error::ByokError::MissingDeploymentFields`].
    pub fn from_env(model_id: impl Into<ModelId>) -> Self {
        Self {
            model_id: model_id.into(),
            api_key: env::var(API_KEY_ENV).ok(),
            deployment_url: env::var(ENDPOINT_ENV).ok(),
            capabilities: None,
        }
    }

    pub fn with_capabilities(mut self, capabilities: CapabilityOverrides) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Key and URL, if both are present and non-blank and the model id is
    /// not blank either.
    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        if self.model_id.is_empty() {
            return None;
        }
        let url = non_blank(self.deployment_url.as_deref())?;
        let key = non_blank(self.api_key.as_deref())?;
        Some((url, key))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Debug for DeploymentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentDescriptor")
            .field("model_id", &self.model_id)
            .field("deployment_url", &self.deployment_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_missing() {
        let mut descriptor = DeploymentDescriptor::new("gpt-4o", "https://x.openai.azure.com", "k");
        assert_eq!(
            descriptor.credentials(),
            Some(("https://x.openai.azure.com", "k"))
        );

        descriptor.api_key = Some("   ".into());
        assert_eq!(descriptor.credentials(), None);

        descriptor.api_key = Some("k".into());
        descriptor.deployment_url = None;
        assert_eq!(descriptor.credentials(), None);
    }

    #[test]
    fn blank_model_id_has_no_credentials() {
        let descriptor: DeploymentDescriptor = serde_json::from_str(
            r#"{ "modelId": " ", "apiKey": "k", "deploymentUrl": "https://x.openai.azure.com" }"#,
        )
        .unwrap();

        assert_eq!(descriptor.credentials(), None);
    }

    #[test]
    fn settings_without_key_deserialize() {
        let descriptor: DeploymentDescriptor =
            serde_json::from_str(r#"{ "modelId": "gpt-4o", "url": "https://x.openai.azure.com" }"#)
                .unwrap();

        assert_eq!(descriptor.api_key, None);
        assert_eq!(
            descriptor.deployment_url.as_deref(),
            Some("https://x.openai.azure.com")
        );
    }

    #[test]
    fn debug_output_hides_the_key() {
        let descriptor = DeploymentDescriptor::new("gpt-4o", "https://x.openai.azure.com", "top-secret");
        assert!(!format!("{descriptor:?}").contains("top-secret"));
    }
}
