//! # Schema Engine
//!
//! Walks a schema tree against a raw JSON value.
//!
//! ## Object Schemas
//!
//! 1. The value must be a JSON object.
//! 2. Undeclared keys are rejected before any declared field is
//!    validated. Keys are examined in input order.
//! 3. Declared fields are validated in declaration order; missing keys
//!    are passed down as absent. The first failure aborts validation.
//! 4. Absent optional fields are omitted from the output object.
//!
//! ## Configuration
//!
//! [`EngineConfig::from_env`] reads [`EXTRANEOUS_FIELDS_ENV`]:
//! `first` (default) reports the first undeclared key, `collect` reports
//! all of them in one failure.

use std::collections::BTreeMap;

use contract_core::{FieldPath, Revived, SchemaError};
use serde_json::Value;

use crate::field::{ObjectSchema, Recurse, SchemaField};

/// Environment variable selecting the [`ExtraneousPolicy`].
pub const EXTRANEOUS_FIELDS_ENV: &str = "CONTRACT_EXTRANEOUS_FIELDS";

/// How undeclared keys are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtraneousPolicy {
    /// Fail on the first undeclared key.
    #[default]
    FirstOnly,
    /// Fail once, naming every undeclared key.
    Collect,
}

impl ExtraneousPolicy {
    /// Parse the env var form. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Some(Self::FirstOnly),
            "collect" => Some(Self::Collect),
            _ => None,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reporting of undeclared keys.
    pub extraneous: ExtraneousPolicy,
}

impl EngineConfig {
    /// Read configuration from the environment.
    ///
    /// Unset or unrecognized values fall back to the defaults; an
    /// unrecognized value is logged.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let extraneous = match lookup(EXTRANEOUS_FIELDS_ENV) {
            Some(raw) => ExtraneousPolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    var = EXTRANEOUS_FIELDS_ENV,
                    value = %raw,
                    "unrecognized extraneous field policy, using default"
                );
                ExtraneousPolicy::default()
            }),
            None => ExtraneousPolicy::default(),
        };
        Self { extraneous }
    }
}

/// The recursive validator.
///
/// Holds only its configuration, so one engine can serve any number of
/// concurrent validations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a present value at the root.
    ///
    /// `Ok(None)` is only possible from a custom leaf that declines a
    /// present value.
    pub fn validate(&self, schema: &SchemaField, value: &Value) -> Result<Option<Revived>, SchemaError> {
        self.validate_field(schema, &FieldPath::root(), Some(value))
    }

    /// Validate `value` against `schema` at `path`.
    ///
    /// Leaves are invoked with this engine as their recursion callback.
    pub fn validate_field(
        &self,
        schema: &SchemaField,
        path: &FieldPath,
        value: Option<&Value>,
    ) -> Result<Option<Revived>, SchemaError> {
        match schema {
            SchemaField::Leaf(leaf) => leaf.validate(path, value, self),
            SchemaField::Object(object) => self.validate_object(object, path, value).map(Some),
        }
    }

    /// Validate against an object schema.
    pub fn validate_object(
        &self,
        schema: &ObjectSchema,
        path: &FieldPath,
        value: Option<&Value>,
    ) -> Result<Revived, SchemaError> {
        let Some(Value::Object(map)) = value else {
            return Err(SchemaError::shape(path, "an object", value));
        };

        let mut undeclared = map.keys().filter(|key| !schema.contains(key));
        let names: Vec<String> = match self.config.extraneous {
            ExtraneousPolicy::FirstOnly => undeclared.next().into_iter().cloned().collect(),
            ExtraneousPolicy::Collect => undeclared.cloned().collect(),
        };
        if !names.is_empty() {
            tracing::trace!(path = %path, fields = ?names, "rejecting extraneous fields");
            return Err(SchemaError::extraneous(path, names));
        }

        let mut out = BTreeMap::new();
        for (name, field) in schema.fields() {
            if let Some(revived) = self.validate_field(field, &path.push(name), map.get(name))? {
                out.insert(name.to_string(), revived);
            }
        }
        Ok(Revived::Object(out))
    }

    /// Validate against the `null` schema: accepts only `null` or absence.
    pub fn validate_null(&self, path: &FieldPath, value: Option<&Value>) -> Result<Revived, SchemaError> {
        match value {
            None | Some(Value::Null) => Ok(Revived::Null),
            other => Err(SchemaError::type_mismatch(path, "null", other)),
        }
    }
}

impl Recurse for Engine {
    fn validate(
        &self,
        schema: &SchemaField,
        path: &FieldPath,
        value: Option<&Value>,
    ) -> Result<Option<Revived>, SchemaError> {
        self.validate_field(schema, path, value)
    }
}
