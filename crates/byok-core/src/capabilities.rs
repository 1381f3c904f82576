//! What a registered model can do and how much it can read and write.
//!
//! A [`CapabilityRecord`] is always complete. Hosts that only know some of
//! the values (e.g. a user setting `maxOutputTokens` for a custom deployment)
//! describe them with [`CapabilityOverrides`] and merge them onto a baseline.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEXT_WINDOW_TOKENS: u32 = 128_000;
pub const DEFAULT_PROMPT_TOKENS: u32 = 112_000;
pub const DEFAULT_OUTPUT_TOKENS: u32 = 16_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRecord {
    pub supports_tool_calls: bool,
    pub supports_vision: bool,
    pub max_context_window_tokens: u32,
    pub max_prompt_tokens: u32,
    pub max_output_tokens: u32,
}

impl Default for CapabilityRecord {
    fn default() -> Self {
        Self {
            supports_tool_calls: false,
            supports_vision: false,
            max_context_window_tokens: DEFAULT_CONTEXT_WINDOW_TOKENS,
            max_prompt_tokens: DEFAULT_PROMPT_TOKENS,
            max_output_tokens: DEFAULT_OUTPUT_TOKENS,
        }
    }
}

impl CapabilityRecord {
    /// Return a copy with every field present in `overrides` replaced.
    pub fn with_overrides(mut self, overrides: &CapabilityOverrides) -> Self {
        if let Some(v) = overrides.supports_tool_calls {
            self.supports_tool_calls = v;
        }
        if let Some(v) = overrides.supports_vision {
            self.supports_vision = v;
        }
        if let Some(v) = overrides.max_context_window_tokens {
            self.max_context_window_tokens = v;
        }
        if let Some(v) = overrides.max_prompt_tokens {
            self.max_prompt_tokens = v;
        }
        if let Some(v) = overrides.max_output_tokens {
            self.max_output_tokens = v;
        }
        self
    }

    /// Copy with `max_prompt_tokens` replaced; everything else is kept.
    pub fn with_max_prompt_tokens(mut self, max_prompt_tokens: u32) -> Self {
        self.max_prompt_tokens = max_prompt_tokens;
        self
    }

    /// `true` when prompt and output budgets fit in the context window.
    pub fn is_consistent(&self) -> bool {
        u64::from(self.max_prompt_tokens) + u64::from(self.max_output_tokens)
            <= u64::from(self.max_context_window_tokens)
    }

    /// Copy whose context window is widened to `prompt + output` when the
    /// budgets do not fit; a window that already fits is kept.
    pub fn with_fitted_context_window(mut self) -> Self {
        let needed = self.max_prompt_tokens.saturating_add(self.max_output_tokens);
        self.max_context_window_tokens = self.max_context_window_tokens.max(needed);
        self
    }
}

/// Partial [`CapabilityRecord`] as supplied by host settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapabilityOverrides {
    pub supports_tool_calls: Option<bool>,
    pub supports_vision: Option<bool>,
    pub max_context_window_tokens: Option<u32>,
    pub max_prompt_tokens: Option<u32>,
    pub max_output_tokens: Option<u32>,
}
