//! # Combinator Library
//!
//! Constructors for stateless leaf validators. Each validator either
//! returns the coerced value or fails with a [`SchemaError`] naming the
//! offending path. A missing value fails every validator except
//! [`optional`].
//!
//! Composite combinators validate their children through the [`Recurse`]
//! capability and never call the engine directly.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use contract_core::{temporal, FieldPath, Revived, SchemaError};
use serde_json::{json, Value};

use crate::field::{Leaf, Recurse, SchemaField};

/// Options for [`string`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringOptions {
    /// Reject the empty string.
    pub non_empty: bool,
}

impl StringOptions {
    /// Options rejecting the empty string.
    pub fn non_empty() -> Self {
        Self { non_empty: true }
    }
}

/// Options for [`boolean`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanOptions {
    /// If set, the only accepted boolean.
    pub val: Option<bool>,
}

impl BooleanOptions {
    /// Options pinning the value to `val`.
    pub fn exactly(val: bool) -> Self {
        Self { val: Some(val) }
    }
}

/// Accepts any JSON number.
pub fn number() -> SchemaField {
    SchemaField::leaf(NumberLeaf)
}

/// Accepts any JSON string; with `non_empty`, rejects `""`.
pub fn string(opts: StringOptions) -> SchemaField {
    SchemaField::leaf(StringLeaf(opts))
}

/// Accepts only values equal to `lit`.
///
/// Numbers compare by numeric value, so `1` matches `1.0`.
pub fn literal(lit: impl Into<Value>) -> SchemaField {
    SchemaField::leaf(LiteralLeaf(lit.into()))
}

/// Accepts only `null`.
pub fn null_() -> SchemaField {
    SchemaField::leaf(NullLeaf)
}

/// Accepts any boolean; with `val`, only that boolean.
pub fn boolean(opts: BooleanOptions) -> SchemaField {
    SchemaField::leaf(BooleanLeaf(opts))
}

/// Coerces epoch milliseconds or a date string into a UTC date.
///
/// See [`contract_core::temporal`] for the accepted string formats.
pub fn date() -> SchemaField {
    SchemaField::leaf(DateLeaf)
}

/// Accepts absence; otherwise delegates to `inner`.
///
/// Absence is not `null`: a present `null` is handed to `inner`.
pub fn optional(inner: impl Into<SchemaField>) -> SchemaField {
    SchemaField::leaf(OptionalLeaf(inner.into()))
}

/// Tries `first`, then `second`. If both fail, the second failure is
/// surfaced wrapped in `UnionExhausted`. Nest for N-way unions.
pub fn or(first: impl Into<SchemaField>, second: impl Into<SchemaField>) -> SchemaField {
    SchemaField::leaf(OrLeaf(first.into(), second.into()))
}

/// Accepts a mapping and validates every entry's value against `inner`,
/// keeping all keys.
pub fn values(inner: impl Into<SchemaField>) -> SchemaField {
    SchemaField::leaf(ValuesLeaf(inner.into()))
}

/// Accepts an array and validates every element against `inner`, in order.
pub fn array(inner: impl Into<SchemaField>) -> SchemaField {
    SchemaField::leaf(ArrayLeaf(inner.into()))
}

/// [`array`] over an already-built leaf validator.
pub fn base_array(leaf: Arc<dyn Leaf>) -> SchemaField {
    SchemaField::leaf(ArrayLeaf(SchemaField::Leaf(leaf)))
}

/// A custom leaf validator from a closure. Described as `{}` (anything).
pub fn leaf_fn<F>(f: F) -> SchemaField
where
    F: Fn(&FieldPath, Option<&Value>, &dyn Recurse) -> Result<Option<Revived>, SchemaError>
        + Send
        + Sync
        + 'static,
{
    SchemaField::leaf(FnLeaf(f))
}

#[derive(Debug)]
struct NumberLeaf;

impl Leaf for NumberLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        _recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        match value {
            Some(Value::Number(n)) => Ok(Some(Revived::Number(n.clone()))),
            other => Err(SchemaError::type_mismatch(path, "number", other)),
        }
    }

    fn describe(&self) -> Value {
        json!({"type": "number"})
    }
}

#[derive(Debug)]
struct StringLeaf(StringOptions);

impl Leaf for StringLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        _recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        match value {
            Some(Value::String(s)) if self.0.non_empty && s.is_empty() => {
                Err(SchemaError::constraint(path, "must not be empty"))
            }
            Some(Value::String(s)) => Ok(Some(Revived::String(s.clone()))),
            other => Err(SchemaError::type_mismatch(path, "string", other)),
        }
    }

    fn describe(&self) -> Value {
        if self.0.non_empty {
            json!({"type": "string", "minLength": 1})
        } else {
            json!({"type": "string"})
        }
    }
}

#[derive(Debug)]
struct LiteralLeaf(Value);

impl LiteralLeaf {
    fn matches(&self, value: &Value) -> bool {
        match (&self.0, value) {
            (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
            (a, b) => a == b,
        }
    }
}

impl Leaf for LiteralLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        _recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        match value {
            Some(v) if self.matches(v) => Ok(Some(Revived::from_json(&self.0))),
            Some(_) => Err(SchemaError::constraint(path, format!("must equal {}", self.0))),
            None => Err(SchemaError::type_mismatch(path, "literal", None)),
        }
    }

    fn describe(&self) -> Value {
        json!({"const": self.0})
    }
}

#[derive(Debug)]
struct NullLeaf;

impl Leaf for NullLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        _recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        match value {
            Some(Value::Null) => Ok(Some(Revived::Null)),
            other => Err(SchemaError::type_mismatch(path, "null", other)),
        }
    }

    fn describe(&self) -> Value {
        json!({"type": "null"})
    }
}

#[derive(Debug)]
struct BooleanLeaf(BooleanOptions);

impl Leaf for BooleanLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        _recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        match (value, self.0.val) {
            (Some(Value::Bool(b)), Some(want)) if *b != want => {
                Err(SchemaError::constraint(path, format!("must be {want}")))
            }
            (Some(Value::Bool(b)), _) => Ok(Some(Revived::Bool(*b))),
            (other, _) => Err(SchemaError::type_mismatch(path, "boolean", other)),
        }
    }

    fn describe(&self) -> Value {
        match self.0.val {
            Some(want) => json!({"type": "boolean", "const": want}),
            None => json!({"type": "boolean"}),
        }
    }
}

#[derive(Debug)]
struct DateLeaf;

impl Leaf for DateLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        _recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        let parsed = match value {
            Some(Value::Number(n)) => n.as_f64().and_then(temporal::from_epoch_millis),
            Some(Value::String(s)) => temporal::parse_date(s),
            other => return Err(SchemaError::type_mismatch(path, "date", other)),
        };
        parsed
            .map(|dt| Some(Revived::Date(dt)))
            .ok_or_else(|| SchemaError::constraint(path, "must be a valid date"))
    }

    fn describe(&self) -> Value {
        json!({"type": ["string", "number"]})
    }
}

#[derive(Debug)]
struct OptionalLeaf(SchemaField);

impl Leaf for OptionalLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        match value {
            None => Ok(None),
            Some(_) => recurse.validate(&self.0, path, value),
        }
    }

    fn describe(&self) -> Value {
        crate::describe::fragment(&self.0)
    }

    fn accepts_absent(&self) -> bool {
        true
    }
}

#[derive(Debug)]
struct OrLeaf(SchemaField, SchemaField);

impl Leaf for OrLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        recurse
            .validate(&self.0, path, value)
            .or_else(|_| recurse.validate(&self.1, path, value))
            .map_err(|last| SchemaError::union_exhausted(path, last))
    }

    fn describe(&self) -> Value {
        json!({"anyOf": [crate::describe::fragment(&self.0), crate::describe::fragment(&self.1)]})
    }

    fn accepts_absent(&self) -> bool {
        self.0.accepts_absent() || self.1.accepts_absent()
    }
}

#[derive(Debug)]
struct ValuesLeaf(SchemaField);

impl Leaf for ValuesLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        let Some(Value::Object(map)) = value else {
            return Err(SchemaError::shape(path, "an object", value));
        };
        let mut out = BTreeMap::new();
        for (key, entry) in map {
            if let Some(revived) = recurse.validate(&self.0, &path.push(key), Some(entry))? {
                out.insert(key.clone(), revived);
            }
        }
        Ok(Some(Revived::Object(out)))
    }

    fn describe(&self) -> Value {
        json!({"type": "object", "additionalProperties": crate::describe::fragment(&self.0)})
    }
}

#[derive(Debug)]
struct ArrayLeaf(SchemaField);

impl Leaf for ArrayLeaf {
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        let Some(Value::Array(items)) = value else {
            return Err(SchemaError::shape(path, "an array", value));
        };
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            // A present element only yields `None` from a custom leaf; it is dropped.
            if let Some(revived) = recurse.validate(&self.0, &path.push(i), Some(item))? {
                out.push(revived);
            }
        }
        Ok(Some(Revived::Array(out)))
    }

    fn describe(&self) -> Value {
        json!({"type": "array", "items": crate::describe::fragment(&self.0)})
    }
}

struct FnLeaf<F>(F);

impl<F> fmt::Debug for FnLeaf<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnLeaf")
    }
}

impl<F> Leaf for FnLeaf<F>
where
    F: Fn(&FieldPath, Option<&Value>, &dyn Recurse) -> Result<Option<Revived>, SchemaError>
        + Send
        + Sync,
{
    fn validate(
        &self,
        path: &FieldPath,
        value: Option<&Value>,
        recurse: &dyn Recurse,
    ) -> Result<Option<Revived>, SchemaError> {
        (self.0)(path, value, recurse)
    }
}
