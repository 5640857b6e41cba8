//! # Revived Values
//!
//! [`Revived`] is the output of a successful validation: a JSON-shaped
//! tree whose dates have already been coerced to `DateTime<Utc>`.
//!
//! There is no "absent" variant. A field that an `optional` schema found
//! missing is simply not present in its parent object.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use crate::temporal;

/// A validated, type-coerced value.
#[derive(Debug, Clone, PartialEq)]
pub enum Revived {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, kept in its parsed representation.
    Number(Number),
    /// A string.
    String(String),
    /// A date produced by the `date()` validator.
    Date(DateTime<Utc>),
    /// Array elements in input order.
    Array(Vec<Revived>),
    /// Object fields keyed by name. Absent optional fields are omitted.
    Object(BTreeMap<String, Revived>),
}

impl Revived {
    /// Lift a raw JSON value without any coercion.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Revived::Null,
            Value::Bool(b) => Revived::Bool(*b),
            Value::Number(n) => Revived::Number(n.clone()),
            Value::String(s) => Revived::String(s.clone()),
            Value::Array(items) => Revived::Array(items.iter().map(Revived::from_json).collect()),
            Value::Object(map) => Revived::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Revived::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Lower to plain JSON. Dates become RFC 3339 strings with a `Z` suffix.
    pub fn into_json(self) -> Value {
        match self {
            Revived::Null => Value::Null,
            Revived::Bool(b) => Value::Bool(b),
            Revived::Number(n) => Value::Number(n),
            Revived::String(s) => Value::String(s),
            Revived::Date(dt) => Value::String(temporal::to_iso8601(&dt)),
            Revived::Array(items) => Value::Array(items.into_iter().map(Revived::into_json).collect()),
            Revived::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into_json())).collect())
            }
        }
    }

    /// Decode into a caller-defined type via serde.
    ///
    /// Dates arrive at the deserializer as RFC 3339 strings, which
    /// `chrono::DateTime<Utc>` accepts directly.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.into_json())
    }

    /// Field lookup on an object; `None` for other variants or missing keys.
    pub fn get(&self, field: &str) -> Option<&Revived> {
        match self {
            Revived::Object(map) => map.get(field),
            _ => None,
        }
    }

    /// Returns true if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Revived::Null)
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Revived::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number as `f64`, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Revived::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// The string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Revived::String(s) => Some(s),
            _ => None,
        }
    }

    /// The date, if this is one.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Revived::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Revived]> {
        match self {
            Revived::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The fields, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Revived>> {
        match self {
            Revived::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl Serialize for Revived {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Revived::Null => serializer.serialize_unit(),
            Revived::Bool(b) => serializer.serialize_bool(*b),
            Revived::Number(n) => n.serialize(serializer),
            Revived::String(s) => serializer.serialize_str(s),
            Revived::Date(dt) => serializer.serialize_str(&temporal::to_iso8601(dt)),
            Revived::Array(items) => items.serialize(serializer),
            Revived::Object(map) => map.serialize(serializer),
        }
    }
}

impl From<&Value> for Revived {
    fn from(value: &Value) -> Self {
        Revived::from_json(value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Lifting then lowering a date-free value is the identity.
        #[test]
        fn from_json_into_json_identity(value in json_value()) {
            prop_assert_eq!(Revived::from_json(&value).into_json(), value);
        }
    }
}
