//! # Error Types — Validation Failure Taxonomy
//!
//! Defines the failures raised while reviving a payload. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every schema failure carries the fully qualified [`FieldPath`] at the
//!   point of detection.
//! - The kind distinguishes type mismatches, constraint violations, shape
//!   mismatches, extraneous fields and exhausted unions.
//! - Malformed JSON is a [`ValidationError::Parse`], distinguishable from
//!   a [`ValidationError::Schema`] but surfaced the same way by default.

use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

/// A value did not conform to its schema at `path`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: {}", render_kind(.path, .kind))]
pub struct SchemaError {
    /// Dot-joined location of the offending value.
    pub path: FieldPath,
    /// What went wrong.
    pub kind: SchemaErrorKind,
}

/// Classification of a [`SchemaError`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaErrorKind {
    /// The value's runtime type is not the expected primitive type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected type name.
        expected: &'static str,
        /// Observed type name (`nothing` for an absent value).
        found: &'static str,
    },

    /// Right type, but a declared constraint does not hold.
    #[error("{0}")]
    ConstraintViolation(String),

    /// Not a mapping where an object was expected, or not an array where
    /// an array was expected.
    #[error("must be {expected}, found {found}")]
    ShapeMismatch {
        /// Expected container shape.
        expected: &'static str,
        /// Observed type name.
        found: &'static str,
    },

    /// The input mapping has keys the object schema does not declare.
    #[error("extraneous field {}", quote_names(.names))]
    ExtraneousField {
        /// Undeclared keys. Holds one name unless the engine collects all.
        names: Vec<String>,
    },

    /// Every alternative of a union failed; holds the last failure.
    #[error("no alternative matched: {0}")]
    UnionExhausted(Box<SchemaError>),
}

impl SchemaError {
    /// Build an error at `path`.
    pub fn new(path: FieldPath, kind: SchemaErrorKind) -> Self {
        Self { path, kind }
    }

    /// `value` is not of the `expected` primitive type.
    pub fn type_mismatch(path: &FieldPath, expected: &'static str, value: Option<&Value>) -> Self {
        Self::new(
            path.clone(),
            SchemaErrorKind::TypeMismatch {
                expected,
                found: type_name(value),
            },
        )
    }

    /// A constraint described by `reason` does not hold.
    pub fn constraint(path: &FieldPath, reason: impl Into<String>) -> Self {
        Self::new(path.clone(), SchemaErrorKind::ConstraintViolation(reason.into()))
    }

    /// `value` is not the `expected` container shape.
    pub fn shape(path: &FieldPath, expected: &'static str, value: Option<&Value>) -> Self {
        Self::new(
            path.clone(),
            SchemaErrorKind::ShapeMismatch {
                expected,
                found: type_name(value),
            },
        )
    }

    /// The object at `path` carries undeclared keys.
    pub fn extraneous(path: &FieldPath, names: Vec<String>) -> Self {
        Self::new(path.clone(), SchemaErrorKind::ExtraneousField { names })
    }

    /// All alternatives of the union at `path` failed, `last` being the final one.
    pub fn union_exhausted(path: &FieldPath, last: SchemaError) -> Self {
        Self::new(path.clone(), SchemaErrorKind::UnionExhausted(Box::new(last)))
    }

    /// The innermost failure, looking through exhausted unions.
    pub fn root_cause(&self) -> &SchemaError {
        match &self.kind {
            SchemaErrorKind::UnionExhausted(last) => last.root_cause(),
            _ => self,
        }
    }
}

/// Render `kind` for an error located at `path`.
///
/// An exhausted union's inner failure names its own path only when it
/// differs from `path`.
fn render_kind(path: &FieldPath, kind: &SchemaErrorKind) -> String {
    match kind {
        SchemaErrorKind::UnionExhausted(last) if last.path == *path => {
            format!("no alternative matched: {}", render_kind(&last.path, &last.kind))
        }
        other => other.to_string(),
    }
}

/// Failure of the parse-then-validate pipeline.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The raw text is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Parse(serde_json::Error),

    /// The parsed value does not conform to the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The validated value could not be decoded into the requested type.
    #[error("validated value does not fit target type: {0}")]
    Decode(serde_json::Error),
}

impl ValidationError {
    /// The schema failure, if this is one.
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            ValidationError::Schema(e) => Some(e),
            _ => None,
        }
    }
}

/// Human-readable JSON type name for diagnostics.
pub fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn quote_names(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
