//! Caller-owned table of registered model endpoints.
//!
//! The registry is an ordinary value: create one per process (or per test),
//! clone it freely (clones share the same table) and hand it to the
//! registration workflow of any provider crate. Each successful
//! [`ModelRegistry::register`] returns a [`RegistrationHandle`]; disposing or
//! dropping the handle removes exactly that entry again.
//!
//! ```rust
//! use byok_core::registry::ModelRegistry;
//!
//! let registry = ModelRegistry::new();
//! assert!(registry.is_empty());
//! ```
use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, PoisonError, RwLock, Weak},
};

use crate::{
    error::{ByokError, Result},
    model::ModelId,
    provider::LanguageModelEndpoint,
};

#[derive(Default)]
struct Entries {
    next_token: u64,
    by_key: BTreeMap<String, Entry>,
}

struct Entry {
    token: u64,
    endpoint: Arc<dyn LanguageModelEndpoint>,
}

type Table = RwLock<Entries>;

#[derive(Clone, Default)]
pub struct ModelRegistry {
    table: Arc<Table>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `endpoint` under its model id.
    ///
    /// # Errors
    ///
    /// * [`ByokError::AlreadyRegistered`] – an endpoint with the same
    ///   (case-insensitive) model id is already present. The table is left
    ///   unchanged.
    pub fn register(&self, endpoint: Arc<dyn LanguageModelEndpoint>) -> Result<RegistrationHandle> {
        let model_id = endpoint.model_id().clone();
        let key = model_id.normalized();

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if table.by_key.contains_key(&key) {
            return Err(ByokError::AlreadyRegistered {
                model: model_id.to_string(),
            });
        }
        table.next_token += 1;
        let token = table.next_token;
        table.by_key.insert(key.clone(), Entry { token, endpoint });

        Ok(RegistrationHandle {
            table: Arc::downgrade(&self.table),
            key,
            token,
            model_id,
            active: true,
        })
    }

    pub fn get(&self, model_id: &ModelId) -> Option<Arc<dyn LanguageModelEndpoint>> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_key
            .get(&model_id.normalized())
            .map(|entry| Arc::clone(&entry.endpoint))
    }

    pub fn contains(&self, model_id: &ModelId) -> bool {
        self.get(model_id).is_some()
    }

    /// Remove an entry without going through its handle. The handle, if still
    /// alive, becomes inert.
    pub fn remove(&self, model_id: &ModelId) -> Option<Arc<dyn LanguageModelEndpoint>> {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .by_key
            .remove(&model_id.normalized())
            .map(|entry| entry.endpoint)
    }

    /// Registered ids in lexicographic (lower-case) order.
    pub fn model_ids(&self) -> Vec<ModelId> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_key
            .values()
            .map(|entry| entry.endpoint.model_id().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_key
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.model_ids())
            .finish()
    }
}

/// Keeps one registration alive.
///
/// Dropping the handle unregisters the model, exactly like calling
/// [`RegistrationHandle::dispose`]. Holds only a weak reference, so it never
/// keeps the registry itself alive.
#[must_use = "dropping the handle unregisters the model"]
pub struct RegistrationHandle {
    table: Weak<Table>,
    key: String,
    token: u64,
    model_id: ModelId,
    active: bool,
}

impl RegistrationHandle {
    pub fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    /// `true` while the entry this handle created is still in the registry.
    pub fn is_active(&self) -> bool {
        self.active
            && self.table.upgrade().is_some_and(|table| {
                table
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .by_key
                    .get(&self.key)
                    .is_some_and(|entry| entry.token == self.token)
            })
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !std::mem::take(&mut self.active) {
            return;
        }
        let Some(table) = self.table.upgrade() else {
            return;
        };
        let mut table = table.write().unwrap_or_else(PoisonError::into_inner);
        // Only remove the entry this handle created, never a re-registration.
        if table
            .by_key
            .get(&self.key)
            .is_some_and(|entry| entry.token == self.token)
        {
            table.by_key.remove(&self.key);
        }
    }
}

impl Drop for RegistrationHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for RegistrationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationHandle")
            .field("model_id", &self.model_id)
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{
        capabilities::CapabilityRecord,
        provider::{ProviderFuture, RequestBody},
    };

    struct StubEndpoint {
        model_id: ModelId,
        capabilities: CapabilityRecord,
    }

    impl StubEndpoint {
        fn arc(id: &str) -> Arc<dyn LanguageModelEndpoint> {
            Arc::new(Self {
                model_id: id.into(),
                capabilities: CapabilityRecord::default(),
            })
        }
    }

    impl LanguageModelEndpoint for StubEndpoint {
        fn model_id(&self) -> &ModelId {
            &self.model_id
        }

        fn url(&self) -> &str {
            "https://stub.invalid"
        }

        fn capabilities(&self) -> &CapabilityRecord {
            &self.capabilities
        }

        fn intercept_outbound_body(&self, _body: &mut RequestBody) {}

        fn send_chat_request(&self, _body: RequestBody) -> ProviderFuture<'_, Value> {
            Box::pin(async { Ok(Value::Null) })
        }

        fn with_prompt_token_budget(&self, max_prompt_tokens: u32) -> Arc<dyn LanguageModelEndpoint> {
            Arc::new(Self {
                model_id: self.model_id.clone(),
                capabilities: self.capabilities.with_max_prompt_tokens(max_prompt_tokens),
            })
        }
    }

    #[test]
    fn register_and_lookup_ignores_case() {
        let registry = ModelRegistry::new();
        let handle = registry.register(StubEndpoint::arc("GPT-4o")).unwrap();

        assert!(registry.contains(&"gpt-4o".into()));
        assert_eq!(registry.len(), 1);
        assert_eq!(handle.model_id().as_str(), "GPT-4o");
        assert!(handle.is_active());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = ModelRegistry::new();
        let _first = registry.register(StubEndpoint::arc("o3-mini")).unwrap();

        let err = registry.register(StubEndpoint::arc("O3-MINI")).unwrap_err();

        assert!(matches!(err, ByokError::AlreadyRegistered { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dispose_and_drop_unregister() {
        let registry = ModelRegistry::new();
        let a = registry.register(StubEndpoint::arc("a")).unwrap();
        let b = registry.register(StubEndpoint::arc("b")).unwrap();

        a.dispose();
        assert_eq!(registry.model_ids(), vec![ModelId::from("b")]);

        drop(b);
        assert!(registry.is_empty());
    }

    #[test]
    fn stale_handle_does_not_remove_a_newer_registration() {
        let registry = ModelRegistry::new();
        let old = registry.register(StubEndpoint::arc("m")).unwrap();
        registry.remove(&"m".into());
        assert!(!old.is_active());

        let new = registry.register(StubEndpoint::arc("m")).unwrap();
        old.dispose();

        assert!(registry.contains(&"m".into()));
        assert!(new.is_active());
    }

    #[test]
    fn handle_outliving_registry_is_inert() {
        let registry = ModelRegistry::new();
        let handle = registry.register(StubEndpoint::arc("x")).unwrap();
        drop(registry);

        assert!(!handle.is_active());
        handle.dispose();
    }
}
