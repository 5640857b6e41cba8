//! # JSON Schema Export
//!
//! Renders a schema tree as a Draft 2020-12 JSON Schema document.
//!
//! Object schemas become closed objects (`additionalProperties: false`)
//! whose `required` list holds every field that does not accept absence.
//! The export is descriptive: `date()` is rendered as `string | number`,
//! and custom leaves as `{}`. Validation semantics live in the engine.

use serde_json::{json, Map, Value};

use crate::field::{ObjectSchema, SchemaField};

/// Draft identifier placed in exported root documents.
pub const JSON_SCHEMA_DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

impl SchemaField {
    /// Render as a standalone JSON Schema document.
    pub fn to_json_schema(&self) -> Value {
        let mut doc = fragment(self);
        if let Value::Object(map) = &mut doc {
            map.insert("$schema".to_string(), Value::String(JSON_SCHEMA_DRAFT.to_string()));
        }
        doc
    }
}

impl ObjectSchema {
    /// JSON Schema fragment for this object.
    pub fn describe(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (name, field) in self.fields() {
            properties.insert(name.to_string(), fragment(field));
            if !field.accepts_absent() {
                required.push(Value::String(name.to_string()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}

/// JSON Schema fragment for any schema node.
pub fn fragment(schema: &SchemaField) -> Value {
    match schema {
        SchemaField::Leaf(leaf) => leaf.describe(),
        SchemaField::Object(object) => object.describe(),
    }
}
