//! YAML to context value conversion

use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use crate::error::Result;

/// Parse YAML text into a JSON-shaped value.
///
/// Empty input and comment-only input parse to `null`. Mapping keys that are
/// not strings are rendered to text.
pub fn parse_yaml(text: &str) -> Result<JsonValue> {
    let value: YamlValue = serde_yaml::from_str(text)?;
    Ok(to_json(value))
}

fn to_json(value: YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => number_to_json(&n),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(seq) => JsonValue::Array(seq.into_iter().map(to_json).collect()),
        YamlValue::Mapping(mapping) => JsonValue::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (key_to_string(k), to_json(v)))
                .collect::<Map<String, JsonValue>>(),
        ),
        YamlValue::Tagged(tagged) => to_json(tagged.value),
    }
}

fn number_to_json(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        // .nan and .inf have no JSON form
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or_else(|| JsonValue::String(n.to_string()), JsonValue::Number)
    }
}

fn key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
