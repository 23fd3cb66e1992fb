//! Response body shaping
//!
//! The backend answers in two shapes: a bare payload, or an envelope with
//! the payload nested under `data`. Both are normalized here so callers see
//! one contract.

use serde_json::Value;

/// Unwrap the server envelope: an object exposing a `data` field yields that
/// nested value, anything else is returned as-is.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Pull a human-readable message out of an error body, preferring `message`
/// over `error`.
pub fn server_message(body: &Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_nested_data_field() {
        let body = json!({"data": {"id": 1, "title": "Rust Meetup"}});
        assert_eq!(
            unwrap_envelope(body),
            json!({"id": 1, "title": "Rust Meetup"})
        );
    }

    #[test]
    fn passes_bare_object_through() {
        let body = json!({"id": 1, "title": "Rust Meetup"});
        assert_eq!(unwrap_envelope(body.clone()), body);
    }

    #[test]
    fn passes_non_object_through() {
        assert_eq!(unwrap_envelope(json!([1, 2, 3])), json!([1, 2, 3]));
        assert_eq!(unwrap_envelope(Value::Null), Value::Null);
    }

    #[test]
    fn unwraps_null_data_as_null() {
        // An explicit `"data": null` envelope still counts as an envelope.
        assert_eq!(unwrap_envelope(json!({"data": null})), Value::Null);
    }

    #[test]
    fn server_message_prefers_message_over_error() {
        let body = json!({"message": "m1", "error": "m2"});
        assert_eq!(server_message(&body), Some("m1".to_string()));

        let body = json!({"error": "m2"});
        assert_eq!(server_message(&body), Some("m2".to_string()));
    }

    #[test]
    fn server_message_ignores_non_string_fields() {
        let body = json!({"message": {"code": 7}});
        assert_eq!(server_message(&body), None);
        assert_eq!(server_message(&json!("plain text")), None);
    }
}
