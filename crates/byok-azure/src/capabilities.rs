use byok_core::capabilities::CapabilityRecord;

use crate::model_family::{
    VISION_REASONING_FAMILIES, is_multimodal_chat_model, reasoning_family,
};

pub const REASONING_CONTEXT_WINDOW_TOKENS: u32 = 300_000;
pub const REASONING_PROMPT_TOKENS: u32 = 200_000;
pub const REASONING_OUTPUT_TOKENS: u32 = 100_000;

/// Augment `baseline` with what is known about `model_id`'s family.
///
/// * reasoning families get tool calling, vision where the family supports
///   it, and fixed 300k / 200k / 100k windows replacing the baseline's;
/// * `gpt-4o*` / `gpt-4.1*` get tool calling and vision, baseline windows;
/// * anything else is returned as is.
pub fn derive_capabilities(model_id: &str, baseline: &CapabilityRecord) -> CapabilityRecord {
    if let Some(family) = reasoning_family(model_id) {
        return CapabilityRecord {
            supports_tool_calls: true,
            supports_vision: VISION_REASONING_FAMILIES.contains(&family),
            max_context_window_tokens: REASONING_CONTEXT_WINDOW_TOKENS,
            max_prompt_tokens: REASONING_PROMPT_TOKENS,
            max_output_tokens: REASONING_OUTPUT_TOKENS,
        };
    }

    if is_multimodal_chat_model(model_id) {
        return CapabilityRecord {
            supports_tool_calls: true,
            supports_vision: true,
            ..*baseline
        };
    }

    *baseline
}
