//! Provider-agnostic building blocks for bring-your-own-key chat endpoints.
//!
//! | Module           | What it provides                                                   |
//! |------------------|--------------------------------------------------------------------|
//! | [`model`]        | Case-insensitive [`model::ModelId`]                                |
//! | [`capabilities`] | [`capabilities::CapabilityRecord`] and its partial overrides       |
//! | [`provider`]     | [`provider::ChatTransport`] and [`provider::LanguageModelEndpoint`] |
//! | [`registry`]     | Caller-owned [`registry::ModelRegistry`] with disposable handles   |
//! | [`error`]        | Workspace-wide [`error::ByokError`]                                |
//!
//! Provider crates (e.g. `byok-azure`) implement the traits; hosts only ever
//! talk to the registry and the endpoint trait.
pub mod capabilities;
pub mod error;
pub mod model;
pub mod provider;
pub mod registry;

pub use registry::{ModelRegistry, RegistrationHandle};
