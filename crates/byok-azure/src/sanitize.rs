use byok_core::provider::RequestBody;
use serde_json::Value;

use crate::model_family::is_reasoning_model;

const TEMPERATURE: &str = "temperature";
const TOP_P: &str = "top_p";

/// Strip sampling parameters reasoning models reject.
///
/// `temperature` is always removed; `top_p` is removed unless it is exactly
/// the default `1`. Bodies for other models are left untouched.
pub fn sanitize_request_body(body: &mut RequestBody, model_id: &str) {
    if !is_reasoning_model(model_id) {
        return;
    }

    body.remove(TEMPERATURE);

    if body.get(TOP_P).is_some_and(|top_p| !is_default_top_p(top_p)) {
        body.remove(TOP_P);
    }
}

fn is_default_top_p(value: &Value) -> bool {
    value.as_f64() == Some(1.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(value: Value) -> RequestBody {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn reasoning_models_lose_temperature_and_custom_top_p() {
        let mut request = body(json!({ "model": "o3-mini", "temperature": 0.2, "top_p": 0.1 }));

        sanitize_request_body(&mut request, "o3-mini");

        assert_eq!(request, body(json!({ "model": "o3-mini" })));
    }

    #[test]
    fn default_top_p_is_kept() {
        let mut request = body(json!({ "temperature": 1, "top_p": 1 }));

        sanitize_request_body(&mut request, "o3-mini");

        assert_eq!(request, body(json!({ "top_p": 1 })));

        let mut float = body(json!({ "top_p": 1.0 }));
        sanitize_request_body(&mut float, "O1");
        assert!(float.contains_key("top_p"));
    }

    #[test]
    fn deployment_names_without_separators_are_sanitized() {
        for id in ["o3mini", "o1preview", "myo3", "contoso.o3-mini"] {
            let mut request = body(json!({ "temperature": 0.2, "messages": [] }));
            sanitize_request_body(&mut request, id);
            assert!(!request.contains_key("temperature"), "{id}");
        }
    }

    #[test]
    fn non_numeric_top_p_is_removed() {
        let mut request = body(json!({ "top_p": "1" }));
        sanitize_request_body(&mut request, "o4-mini");
        assert!(request.is_empty());
    }

    #[test]
    fn other_models_are_untouched() {
        let original = body(json!({ "temperature": 0.7, "top_p": 0.1 }));
        let mut request = original.clone();

        sanitize_request_body(&mut request, "gpt-4o");

        assert_eq!(request, original);
    }

    #[test]
    fn absent_fields_are_a_no_op() {
        let mut request = body(json!({ "messages": [] }));
        sanitize_request_body(&mut request, "o3");
        assert_eq!(request, body(json!({ "messages": [] })));
    }
}
