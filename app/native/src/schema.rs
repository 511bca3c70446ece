//! JSON Schema for the Tricol configuration file.

use crate::config::TricolConfig;

/// Generates a JSON Schema for the Tricol configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(TricolConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/tricol/tricol/main/tricol.schema.json"
            ),
        );
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the Tricol configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
