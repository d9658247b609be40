//! JSON schema generation for the agent's structured responses.
//!
//! `schemars` derives a draft-07 schema; OpenAI's strict mode wants a
//! tightened variant of it. [`StructuredOutput::openai_schema`] produces
//! that variant.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// A response type the agent can request as structured output.
///
/// Implemented for every `JsonSchema + DeserializeOwned` type.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Schema for this type in the form OpenAI strict mode accepts:
    /// every object carries `additionalProperties: false`, every property
    /// is required, and `$ref`s are inlined.
    fn openai_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        let definitions = value
            .as_object()
            .and_then(|map| map.get("definitions").cloned())
            .unwrap_or(serde_json::Value::Null);
        strictify(&mut value, &definitions);

        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Walk the schema once: inline `$ref`s from `definitions`, mark objects
/// closed, and require every property.
fn strictify(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(def) = ref_path
                    .strip_prefix("#/definitions/")
                    .and_then(|name| definitions.get(name))
                {
                    *value = def.clone();
                    strictify(value, definitions);
                    return;
                }
            }

            if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );
                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let keys = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(keys));
                }
            }

            for (_, v) in map.iter_mut() {
                strictify(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                strictify(item, definitions);
            }
        }
        _ => {}
    }
}
