use std::sync::Arc;

use byok_core::{
    capabilities::CapabilityRecord,
    error::{ByokError, Result},
    model::ModelId,
    provider::ChatTransport,
    registry::{ModelRegistry, RegistrationHandle},
};

use crate::{
    adapter::AzureEndpoint,
    capabilities::derive_capabilities,
    client::HttpTransport,
    descriptor::DeploymentDescriptor,
    endpoint::resolve_endpoint_url,
    model_family::SurfaceKind,
};

/// Registration workflow for Azure deployments.
///
/// Think of it as the **factory** for [`AzureEndpoint`]s:
///
/// * owns the transport all endpoints it creates share,
/// * turns a [`DeploymentDescriptor`] into a configured endpoint,
/// * inserts that endpoint into a caller-owned [`ModelRegistry`].
///
/// Azure has no model discovery API; every deployment is registered on its
/// own, and [`Self::deployable_models`] is always empty.
pub struct AzureByokProvider<T = HttpTransport> {
    transport: Arc<T>,
}

impl AzureByokProvider<HttpTransport> {
    /// Provider backed by a default [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// * [`ByokError::Backend`] – the HTTP client could not be built.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }
}

impl<T: ChatTransport + 'static> AzureByokProvider<T> {
    pub const VENDOR: &'static str = "azure";

    pub fn with_transport(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn deployable_models(&self) -> Vec<ModelId> {
        Vec::new()
    }

    /// Build the endpoint for `descriptor` without registering it.
    ///
    /// # Errors
    ///
    /// * [`ByokError::MissingDeploymentFields`] – model id, URL or key
    ///   missing/blank.
    /// * [`ByokError::UnrecognizedEndpoint`] – the URL's host is not an Azure host.
    pub fn build_endpoint(&self, descriptor: &DeploymentDescriptor) -> Result<AzureEndpoint<T>> {
        let model_id = &descriptor.model_id;
        let (url, api_key) =
            descriptor
                .credentials()
                .ok_or_else(|| ByokError::MissingDeploymentFields {
                    model: model_id.to_string(),
                })?;

        let baseline = match &descriptor.capabilities {
            Some(overrides) => CapabilityRecord::default().with_overrides(overrides),
            None => CapabilityRecord::default(),
        };

        let capabilities =
            derive_capabilities(model_id.as_str(), &baseline).with_fitted_context_window();
        let surface = SurfaceKind::for_model(model_id.as_str());
        let url = resolve_endpoint_url(model_id.as_str(), url, surface.is_responses())?;

        Ok(AzureEndpoint::new(
            model_id.clone(),
            api_key,
            url,
            capabilities,
            Arc::clone(&self.transport),
        ))
    }

    /// Build the endpoint for `descriptor` and add it to `registry`.
    ///
    /// Nothing stays registered when this fails.
    ///
    /// # Errors
    ///
    /// Everything [`Self::build_endpoint`] returns, plus
    /// [`ByokError::AlreadyRegistered`].
    pub fn register(
        &self,
        registry: &ModelRegistry,
        descriptor: &DeploymentDescriptor,
    ) -> Result<RegistrationHandle> {
        let result = self
            .build_endpoint(descriptor)
            .and_then(|endpoint| registry.register(Arc::new(endpoint)));

        #[cfg(feature = "tracing")]
        match &result {
            Ok(handle) => tracing::info!(
                vendor = Self::VENDOR,
                model = %handle.model_id(),
                "registered Azure deployment"
            ),
            Err(err) => tracing::error!(
                vendor = Self::VENDOR,
                model = %descriptor.model_id,
                error = %err,
                "failed to register Azure deployment"
            ),
        }

        result
    }
}

impl<T> std::fmt::Debug for AzureByokProvider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureByokProvider").finish_non_exhaustive()
    }
}
