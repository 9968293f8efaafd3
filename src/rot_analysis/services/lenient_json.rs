use serde_json::{Map, Value};

/// Parses npm output, falling back to an empty object.
///
/// npm prints nothing at all for `outdated` when everything is current, and
/// may print non-JSON noise on odd failures. Neither should crash the run.
pub fn parse_lenient(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Map::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_object() {
        assert_eq!(parse_lenient(r#"{"key": "value"}"#), json!({"key": "value"}));
    }

    #[test]
    fn test_parse_invalid_text_yields_empty_object() {
        assert_eq!(parse_lenient("invalid json"), json!({}));
    }

    #[test]
    fn test_parse_empty_text_yields_empty_object() {
        assert_eq!(parse_lenient(""), json!({}));
        assert_eq!(parse_lenient("   \n"), json!({}));
    }

    #[test]
    fn test_parse_truncated_document_yields_empty_object() {
        assert_eq!(parse_lenient(r#"{"dependencies": {"a": "#), json!({}));
    }
}
