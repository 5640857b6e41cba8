//! # Schema Fields
//!
//! A [`SchemaField`] is either a leaf validator or a nested
//! [`ObjectSchema`]. The engine dispatches on this tag rather than on the
//! runtime shape of the schema value.

use std::fmt;
use std::sync::Arc;

use contract_core::{FieldPath, Revived, SchemaError};
use serde_json::Value;

/// Recursion capability handed to leaf validators.
///
/// Composite combinators (`optional`, `or`, `array`, `values`) validate
/// their children through this trait. The engine implements it with
/// itself; tests may pass a stub.
pub trait Recurse {
    /// Validate `value` against `schema` at `path`.
    ///
    /// `None` for `value` means the key was absent. `Ok(None)` means the
    /// schema accepted the absence.
    fn validate(
        &self,
        schema: &SchemaField,
        path: &FieldPath,
        value: Option<&Value>,
    ) -> Result<Option<Revived>, SchemaError>;
}

/// A stateless leaf validator.
pub trait Leaf: fmt::Debug + Send + Sync {
    /// Validate and coerce `value` at `path`.
    ///
    /// Returns `Ok(None)` only when the value is absent and the validator
    /// accepts absence.
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError>;

    /// JSON Schema fragment describing what this validator accepts.
    fn describe(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }

    /// Whether a missing key is acceptable. Only `optional` says yes.
    fn accepts_absent(&self) -> bool {
        false
    }
}

/// One node of a schema tree.
#[derive(Debug, Clone)]
pub enum SchemaField {
    /// A leaf validator, shareable across any number of trees.
    Leaf(Arc<dyn Leaf>),
    /// A nested object schema.
    Object(ObjectSchema),
}

impl SchemaField {
    /// Wrap a leaf validator.
    pub fn leaf(leaf: impl Leaf + 'static) -> Self {
        SchemaField::Leaf(Arc::new(leaf))
    }

    /// Whether an object schema may omit this field.
    pub fn accepts_absent(&self) -> bool {
        match self {
            SchemaField::Leaf(leaf) => leaf.accepts_absent(),
            SchemaField::Object(_) => false,
        }
    }
}

impl From<ObjectSchema> for SchemaField {
    fn from(schema: ObjectSchema) -> Self {
        SchemaField::Object(schema)
    }
}

impl From<Arc<dyn Leaf>> for SchemaField {
    fn from(leaf: Arc<dyn Leaf>) -> Self {
        SchemaField::Leaf(leaf)
    }
}

/// Ordered mapping from field name to [`SchemaField`].
///
/// Field names are unique. Declaration order is kept and is the order in
/// which the engine validates fields.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, SchemaField)>,
}

impl ObjectSchema {
    /// An object schema with no fields. Accepts only `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already declared. Schemas are authored
    /// statically, so a duplicate is a programming error.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<SchemaField>) -> Self {
        let name = name.into();
        assert!(
            !self.contains(&name),
            "duplicate field `{name}` in object schema"
        );
        self.fields.push((name, schema.into()));
        self
    }

    /// Look up a declared field.
    pub fn get(&self, name: &str) -> Option<&SchemaField> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, schema)| schema)
    }

    /// Returns true if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SchemaField)> {
        self.fields.iter().map(|(n, schema)| (n.as_str(), schema))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
