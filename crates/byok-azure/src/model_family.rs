//! Model-family classification for Azure deployments.
//!
//! Deployment names are chosen by users and vendors append suffixes, so a
//! family is recognised when its token appears anywhere in the id
//! (`"o3mini"`, `"contoso.o3-mini"`, `"o1preview"`). Matching is
//! case-insensitive and the longest contained token wins, so
//! `"o3-mini-high"` belongs to `o3-mini`, not `o3`.
//!
//! Every rule in this crate (surface selection, capability derivation, body
//! sanitising) goes through [`find_family`].

/// Reasoning ("o-series") families with fixed sampling parameters.
pub const REASONING_FAMILIES: &[&str] = &["o1", "o3", "o3-mini", "o4-mini", "codex-mini", "o3-pro"];

/// Non-reasoning families only served through the Responses API.
pub const RESPONSES_ONLY_FAMILIES: &[&str] = &[
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-4.1-nano",
    "gpt-image-1",
    "computer-use-preview",
];

/// Reasoning families that accept image input.
pub const VISION_REASONING_FAMILIES: &[&str] = &["o1", "o3", "o4-mini", "o3-pro"];

/// Multimodal chat families with tool calling (`gpt-4o*`, `gpt-4.1*`).
pub const MULTIMODAL_CHAT_FAMILIES: &[&str] = &["gpt-4o", "gpt-4.1"];

/// Which request/response shape a deployment speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceKind {
    /// `…/chat/completions`
    #[default]
    ChatCompletions,
    /// `…/responses`
    Responses,
}

impl SurfaceKind {
    /// Total: unknown and future ids fall back to [`SurfaceKind::ChatCompletions`].
    pub fn for_model(model_id: &str) -> Self {
        if requires_responses_api(model_id) {
            Self::Responses
        } else {
            Self::ChatCompletions
        }
    }

    pub fn is_responses(self) -> bool {
        matches!(self, Self::Responses)
    }
}

/// `true` for every reasoning family and every responses-only family.
pub fn requires_responses_api(model_id: &str) -> bool {
    is_reasoning_model(model_id) || find_family(model_id, RESPONSES_ONLY_FAMILIES).is_some()
}

pub fn is_reasoning_model(model_id: &str) -> bool {
    reasoning_family(model_id).is_some()
}

/// The reasoning family token `model_id` belongs to, if any.
pub fn reasoning_family(model_id: &str) -> Option<&'static str> {
    find_family(model_id, REASONING_FAMILIES)
}

pub fn is_multimodal_chat_model(model_id: &str) -> bool {
    find_family(model_id, MULTIMODAL_CHAT_FAMILIES).is_some()
}

/// Longest token of `families` contained in `model_id`, ignoring case.
pub fn find_family(model_id: &str, families: &[&'static str]) -> Option<&'static str> {
    let model_id = model_id.to_ascii_lowercase();
    families
        .iter()
        .copied()
        .filter(|token| model_id.contains(token))
        .max_by_key(|token| token.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reasoning_and_responses_token_selects_responses() {
        for token in REASONING_FAMILIES.iter().chain(RESPONSES_ONLY_FAMILIES) {
            assert!(requires_responses_api(token), "{token}");
            assert!(requires_responses_api(&token.to_uppercase()), "{token}");
        }
    }

    #[test]
    fn mixed_case_and_suffixed_ids_match() {
        assert!(requires_responses_api("O3-Mini"));
        assert!(requires_responses_api("o1-preview"));
        assert!(requires_responses_api("GPT-4.1-2025-04-14"));
        assert!(requires_responses_api("prod/o4-mini"));
    }

    #[test]
    fn legacy_models_stay_on_chat_completions() {
        for id in ["gpt-4", "gpt-4o", "gpt-3.5-turbo", "text-davinci-003", "gpt-4o-mini", ""] {
            assert!(!requires_responses_api(id), "{id}");
            assert_eq!(SurfaceKind::for_model(id), SurfaceKind::ChatCompletions);
        }
    }

    #[test]
    fn unseparated_and_prefixed_ids_match() {
        for id in ["o3mini", "o1preview", "myo3", "contoso.o3-mini", "Team-O4-Mini-EU"] {
            assert!(is_reasoning_model(id), "{id}");
            assert!(requires_responses_api(id), "{id}");
            assert_eq!(SurfaceKind::for_model(id), SurfaceKind::Responses);
        }
        assert_eq!(reasoning_family("contoso.o3-mini"), Some("o3-mini"));
        assert_eq!(reasoning_family("o3mini"), Some("o3"));
    }

    #[test]
    fn longest_family_wins() {
        assert_eq!(reasoning_family("o3-mini-high"), Some("o3-mini"));
        assert_eq!(reasoning_family("O3-Pro"), Some("o3-pro"));
        assert_eq!(reasoning_family("o3"), Some("o3"));
        assert_eq!(reasoning_family("o1-preview"), Some("o1"));
        assert_eq!(reasoning_family("gpt-4o"), None);
    }

    #[test]
    fn multimodal_chat_families() {
        assert!(is_multimodal_chat_model("gpt-4o-mini"));
        assert!(is_multimodal_chat_model("GPT-4.1-nano"));
        assert!(!is_multimodal_chat_model("gpt-4"));
    }
}
