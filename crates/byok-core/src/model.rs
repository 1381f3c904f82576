//! Model identifiers used throughout the **byok** workspace.
//!
//! A [`ModelId`] names a deployment exactly as the user typed it
//! (`"o3-mini"`, `"GPT-4.1"`, `"my-gpt-4o-eu"`). Vendors and users append
//! suffixes freely, so identifiers are compared **case-insensitively** and
//! provider crates classify them by family tokens rather than by equality.
//!
//! ```rust
//! use byok_core::model::ModelId;
//!
//! assert_eq!(ModelId::from("O3-Mini"), ModelId::from("o3-mini"));
//! assert_eq!(ModelId::from("O3-Mini").as_str(), "O3-Mini");
//! ```

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// Case-insensitive model / deployment identifier.
///
/// The original spelling is preserved for display and for URL construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form, used as the registry key.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl PartialEq for ModelId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for ModelId {}

impl Hash for ModelId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ModelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_case() {
        assert_eq!(ModelId::from("GPT-4o"), ModelId::from("gpt-4o"));
        assert_ne!(ModelId::from("gpt-4o"), ModelId::from("gpt-4o-mini"));
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(ModelId::from("O1-Preview"));
        assert!(set.contains(&ModelId::from("o1-preview")));
    }

    #[test]
    fn blank_ids_are_empty() {
        assert!(ModelId::from("  ").is_empty());
        assert!(!ModelId::from("o3").is_empty());
    }
}
