//! Shared test utilities for the EvergreenOS workspace.
//!
//! Receipts and build artifacts carry wall-clock timestamps and the tool
//! version; these helpers replace them with fixed placeholders so outputs can
//! be compared across runs.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

const TIMESTAMP_KEYS: [&str; 3] = ["started_at", "finished_at", "timestamp"];

/// Normalize non-deterministic JSON fields.
///
/// `tool.version` is replaced only when the root object is a compliance
/// receipt (`schema`, `tool`, `verdict`, `requirements`). Timestamp keys are
/// replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_receipt = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("requirements");
        if is_receipt
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
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
            for key in TIMESTAMP_KEYS {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
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

/// Replace the value of every `Generated: ...` line in a text placeholder artifact.
pub fn normalize_generated_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.starts_with("Generated: ") {
            out.push_str("Generated: ");
            out.push_str(TIMESTAMP_PLACEHOLDER);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
