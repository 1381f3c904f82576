//! # `byok` – The umbrella crate
//!
//! One-stop import for bring-your-own-key chat endpoints.
//!
//! | Crate            | What it provides                                                          |
//! |------------------|---------------------------------------------------------------------------|
//! | **`byok-core`**  | Capability records, endpoint/transport traits, model registry, errors     |
//! | **`byok-azure`** | Azure URL resolution, model families, request sanitising *(optional)*     |
//!
//! The `azure` feature (on by default) re-exports the Azure crate as
//! [`azure`]; `tracing` turns on its structured logging.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use byok::{ModelRegistry, azure::{AzureByokProvider, DeploymentDescriptor}};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = ModelRegistry::new();
//!     let provider = AzureByokProvider::new()?;
//!     let handle = provider.register(&registry, &DeploymentDescriptor::from_env("gpt-4o"))?;
//!
//!     let endpoint = registry.get(handle.model_id()).expect("just registered");
//!     let mut body = serde_json::Map::new();
//!     body.insert("messages".into(), serde_json::json!([{ "role": "user", "content": "Hi!" }]));
//!     println!("{}", endpoint.send_chat_request(body).await?);
//!     Ok(())
//! }
//! ```
pub use byok_core::*;

#[cfg(feature = "azure")]
pub use byok_azure as azure;
