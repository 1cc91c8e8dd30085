//! Answer Set types
//!
//! The raw questionnaire arrives as a flat JSON object. Values may be
//! strings, numbers, booleans or arrays (multi-select checkboxes); the
//! helpers below read them without ever failing.

use std::collections::HashMap;

use serde_json::Value;

/// Raw questionnaire answers keyed by form field name.
pub type Answers = HashMap<String, Value>;

// ============================================================================
// Helper functions for extracting values from the answer map
// ============================================================================

/// Extract a value as text, accepting numbers and booleans as well as strings.
pub fn get_text(data: &Answers, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "oui" } else { "non" }.to_string()),
        _ => None,
    }
}

/// Extract a multi-select value as a list of strings.
///
/// A bare string counts as a one-element selection; empty strings are dropped.
pub fn get_list(data: &Answers, key: &str) -> Vec<String> {
    match data.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

/// Extract a checkbox-style flag: `true`, `"on"`, `"oui"`, `"yes"`, `"true"`, `"1"`.
pub fn get_flag(data: &Answers, key: &str) -> bool {
    match data.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_u64().is_some_and(|n| n > 0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "on" | "oui" | "yes" | "true" | "1" | "ja"
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(v: Value) -> Answers {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_get_text_accepts_scalars() {
        let a = answers(json!({"a": "x", "b": 3, "c": true, "d": null}));
        assert_eq!(get_text(&a, "a").as_deref(), Some("x"));
        assert_eq!(get_text(&a, "b").as_deref(), Some("3"));
        assert_eq!(get_text(&a, "c").as_deref(), Some("oui"));
        assert_eq!(get_text(&a, "d"), None);
        assert_eq!(get_text(&a, "missing"), None);
    }

    #[test]
    fn test_get_list() {
        let a = answers(json!({"multi": ["x", " ", "y"], "single": "z", "empty": ""}));
        assert_eq!(get_list(&a, "multi"), vec!["x", "y"]);
        assert_eq!(get_list(&a, "single"), vec!["z"]);
        assert!(get_list(&a, "empty").is_empty());
        assert!(get_list(&a, "missing").is_empty());
    }

    #[test]
    fn test_get_flag() {
        let a = answers(json!({"a": "on", "b": true, "c": "", "d": 0, "e": "non"}));
        assert!(get_flag(&a, "a"));
        assert!(get_flag(&a, "b"));
        assert!(!get_flag(&a, "c"));
        assert!(!get_flag(&a, "d"));
        assert!(!get_flag(&a, "e"));
    }
}
