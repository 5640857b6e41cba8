//! Integration test: exported JSON Schema documents agree with the engine.
//!
//! Each case is validated twice, once by the engine and once by the
//! `jsonschema` crate against `SchemaField::to_json_schema()`. Both must
//! accept or both must reject.

use contract_schema::*;
use serde_json::{json, Value};

fn order_schema() -> SchemaField {
    ObjectSchema::new()
        .field("id", string(StringOptions::non_empty()))
        .field("status", or(literal("open"), literal("closed")))
        .field("note", optional(or(null_(), string(StringOptions::default()))))
        .field("archived", boolean(BooleanOptions::default()))
        .field(
            "lines",
            array(
                ObjectSchema::new()
                    .field("sku", string(StringOptions::non_empty()))
                    .field("qty", number()),
            ),
        )
        .field("prices", values(number()))
        .into()
}

fn cases() -> Vec<Value> {
    vec![
        json!({"id": "o-1", "status": "open", "archived": false, "lines": [], "prices": {}}),
        json!({
            "id": "o-2", "status": "closed", "note": null, "archived": true,
            "lines": [{"sku": "a", "qty": 2}], "prices": {"usd": 3.5}
        }),
        json!({"id": "o-3", "status": "open", "note": "hi", "archived": false, "lines": [], "prices": {}}),
        // Failures from here on.
        json!({"id": "", "status": "open", "archived": false, "lines": [], "prices": {}}),
        json!({"id": "o-4", "status": "pending", "archived": false, "lines": [], "prices": {}}),
        json!({"id": "o-5", "status": "open", "archived": false, "lines": [], "prices": {}, "x": 1}),
        json!({"id": "o-6", "status": "open", "lines": [], "prices": {}}),
        json!({"id": "o-7", "status": "open", "archived": false, "lines": [{"sku": "a"}], "prices": {}}),
        json!({"id": "o-8", "status": "open", "archived": false, "lines": {}, "prices": {}}),
        json!({"id": "o-9", "status": "open", "archived": false, "lines": [], "prices": {"usd": "1"}}),
        json!({"id": "o-10", "status": "open", "note": 4, "archived": false, "lines": [], "prices": {}}),
        json!([]),
    ]
}

#[test]
fn exported_schema_compiles() {
    let doc = order_schema().to_json_schema();
    let result = jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&doc);
    assert!(result.is_ok(), "exported schema failed to compile: {:?}", result.err());
}

#[test]
fn engine_and_json_schema_agree() {
    let schema = order_schema();
    let doc = schema.to_json_schema();
    let validator = jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&doc)
        .expect("exported schema compiles");
    let engine = Engine::default();

    let mut disagreements = Vec::new();
    for case in cases() {
        let ours = engine.validate(&schema, &case).is_ok();
        let theirs = validator.is_valid(&case);
        if ours != theirs {
            disagreements.push(format!("{case}: engine={ours} jsonschema={theirs}"));
        }
    }
    assert!(
        disagreements.is_empty(),
        "engine and exported JSON Schema disagree:\n{}",
        disagreements.join("\n")
    );
}

#[test]
fn expected_acceptance_counts() {
    let schema = order_schema();
    let engine = Engine::default();
    let accepted = cases()
        .iter()
        .filter(|case| engine.validate(&schema, case).is_ok())
        .count();
    assert_eq!(accepted, 3);
}
