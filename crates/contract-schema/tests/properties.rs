//! Property tests for the schema engine.
//!
//! Conforming values survive validation unchanged, undeclared keys are
//! always rejected, and the composite combinators behave uniformly over
//! arbitrary inputs.

use contract_core::SchemaErrorKind;
use contract_schema::*;
use proptest::prelude::*;
use serde_json::{json, Value};

/// JSON values without floats, so number equality is exact.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9_ ]{0,16}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// A schema that `value` conforms to by construction.
fn schema_for(value: &Value) -> SchemaField {
    match value {
        Value::Null => null_(),
        Value::Bool(_) => boolean(BooleanOptions::default()),
        Value::Number(_) => number(),
        Value::String(_) => string(StringOptions::default()),
        Value::Array(items) => {
            let element = items
                .iter()
                .map(schema_for)
                .reduce(|a, b| or(a, b))
                .unwrap_or_else(number);
            array(element)
        }
        Value::Object(map) => map
            .iter()
            .fold(ObjectSchema::new(), |schema, (k, v)| schema.field(k.clone(), schema_for(v)))
            .into(),
    }
}

proptest! {
    /// A value validated against a schema derived from it comes back unchanged.
    #[test]
    fn conforming_values_round_trip(value in json_value()) {
        let schema = schema_for(&value);
        let revived = Engine::default().validate(&schema, &value);
        prop_assert!(revived.is_ok(), "rejected conforming value: {:?}", revived.as_ref().err());
        prop_assert_eq!(revived.unwrap().map(|r| r.into_json()), Some(value));
    }

    /// Any key outside the declared set is rejected as extraneous.
    #[test]
    fn undeclared_key_always_rejected(
        fields in prop::collection::btree_map("[a-m]{1,6}", any::<i64>(), 0..6),
        extra in "[n-z]{1,6}",
    ) {
        let schema: SchemaField = fields
            .keys()
            .fold(ObjectSchema::new(), |s, k| s.field(k.clone(), number()))
            .into();
        let mut input: serde_json::Map<String, Value> =
            fields.iter().map(|(k, v)| (k.clone(), json!(v))).collect();
        input.insert(extra.clone(), json!(0));

        let err = Engine::default().validate(&schema, &Value::Object(input)).unwrap_err();
        prop_assert_eq!(err.kind, SchemaErrorKind::ExtraneousField { names: vec![extra] });
    }

    /// `or(string, number)` accepts every number via the second alternative.
    #[test]
    fn union_is_order_insensitive_for_acceptance(n in any::<i64>()) {
        let schema = or(string(StringOptions::default()), number());
        prop_assert!(Engine::default().validate(&schema, &json!(n)).is_ok());
    }

    /// `array(number())` returns elements in order.
    #[test]
    fn array_keeps_order(items in prop::collection::vec(any::<i64>(), 0..16)) {
        let value = json!(items);
        let out = Engine::default().validate(&array(number()), &value).unwrap();
        prop_assert_eq!(out.map(|r| r.into_json()), Some(value));
    }

    /// `array(number())` fails at the index of the first non-number.
    #[test]
    fn array_fails_at_first_bad_index(
        items in prop::collection::vec(any::<i64>(), 0..8),
        bad in "[a-z]{1,4}",
        tail in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let mut value: Vec<Value> = items.iter().map(|n| json!(n)).collect();
        let index = value.len();
        value.push(json!(bad));
        value.push(json!("also bad"));
        value.extend(tail.iter().map(|n| json!(n)));

        let err = Engine::default().validate(&array(number()), &Value::Array(value)).unwrap_err();
        prop_assert_eq!(err.path.as_str(), index.to_string());
    }

    /// `values(number())` keeps every key and value.
    #[test]
    fn values_keeps_all_entries(map in prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8)) {
        let value = json!(map);
        let out = Engine::default().validate(&values(number()), &value).unwrap();
        prop_assert_eq!(out.map(|r| r.into_json()), Some(value));
    }

    /// `optional(T)` on a present value behaves exactly like `T`.
    #[test]
    fn optional_delegates_when_present(value in json_value()) {
        let plain = Engine::default().validate(&number(), &value);
        let wrapped = Engine::default().validate(&optional(number()), &value);
        prop_assert_eq!(plain, wrapped);
    }
}
