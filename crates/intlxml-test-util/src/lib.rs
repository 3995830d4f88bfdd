//! Shared test utilities for the intlxml workspace.
//!
//! Integration tests of the CLI binary cannot reach `#[cfg(test)]` helpers inside other crates,
//! so report normalization lives here.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Normalize non-deterministic JSON fields so reports can be compared.
///
/// 1. **Root-only**: `tool.version` is replaced only when the root object looks like a report
///    envelope (`schema`, `tool`, `verdict`, `findings`, `data`). Finding payloads that happen
///    to carry a `tool` object are left alone.
/// 2. **Recursive**: `started_at` and `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_version_and_timestamps() {
        let input = json!({
            "schema": "intlxml.report.v1",
            "tool": { "name": "intlxml", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "verdict": "fail",
            "findings": [
                { "data": { "tool": { "name": "inner", "version": "9.9.9" }, "started_at": "x" } }
            ],
            "data": { "documents_scanned": 1 }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], VERSION_PLACEHOLDER);
        assert_eq!(result["tool"]["name"], "intlxml");
        assert_eq!(result["started_at"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(result["finished_at"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(result["findings"][0]["data"]["tool"]["version"], "9.9.9");
        assert_eq!(
            result["findings"][0]["data"]["started_at"],
            TIMESTAMP_PLACEHOLDER
        );
    }

    #[test]
    fn root_without_envelope_keys_keeps_version() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "started_at": "2026-01-01T00:00:00Z"
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["started_at"], TIMESTAMP_PLACEHOLDER);
    }
}
