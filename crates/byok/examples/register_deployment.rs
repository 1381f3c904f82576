use byok::{
    ModelRegistry,
    azure::{AzureByokProvider, DeploymentDescriptor},
    capabilities::CapabilityOverrides,
    provider::RequestBody,
};
use serde_json::json;

/// # Register an Azure deployment and send one request
///
/// Registers the deployment named by `AZURE_OPENAI_DEPLOYMENT` (default
/// `gpt-4o`), prints the resolved URL and derived capabilities, then sends a
/// single chat request. Reasoning deployments (`o3-mini`, `o4-mini`, …) are
/// sent to the Responses API automatically.
///
/// ```bash
/// export AZURE_OPENAI_API_KEY=…                                   # mandatory
/// export AZURE_OPENAI_ENDPOINT=https://my-resource.openai.azure.com  # mandatory
/// cargo run -p byok --example register_deployment
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let deployment =
        std::env::var("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|_| "gpt-4o".to_owned());

    let registry = ModelRegistry::new();
    let provider = AzureByokProvider::new()?;
    let descriptor = DeploymentDescriptor::from_env(deployment).with_capabilities(
        CapabilityOverrides {
            max_output_tokens: Some(4_096),
            ..Default::default()
        },
    );

    let handle = provider.register(&registry, &descriptor)?;
    let endpoint = registry
        .get(handle.model_id())
        .ok_or_else(|| anyhow::anyhow!("deployment vanished from the registry"))?;

    println!("URL:          {}", endpoint.url());
    println!("Capabilities: {:?}", endpoint.capabilities());

    let mut body = RequestBody::new();
    if byok::azure::requires_responses_api(endpoint.model_id().as_str()) {
        body.insert("input".into(), json!("Why is the Rust borrow checker important?"));
    } else {
        body.insert(
            "messages".into(),
            json!([{ "role": "user", "content": "Why is the Rust borrow checker important?" }]),
        );
    }
    body.insert("temperature".into(), json!(0.2));

    let reply = endpoint.send_chat_request(body).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);

    handle.dispose();
    Ok(())
}
