//! # Empty-Response Sentinel
//!
//! `{"isEmptyResponse": true}` is the canonical "no payload" value. An
//! endpoint declared with [`Body::Empty`](crate::Body::Empty) accepts
//! exactly this shape, and an empty body is revived as if it had been sent.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use contract_core::Revived;
use contract_schema::{boolean, BooleanOptions, ObjectSchema};
use serde_json::{json, Value};

/// Name of the sentinel's only field.
pub const EMPTY_RESPONSE_FIELD: &str = "isEmptyResponse";

/// Wire text of the sentinel.
const EMPTY_RESPONSE_JSON: &str = r#"{"isEmptyResponse":true}"#;

/// The empty-response sentinel and its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResponse;

impl EmptyResponse {
    /// The sentinel as raw JSON.
    pub fn value() -> Value {
        json!({ EMPTY_RESPONSE_FIELD: true })
    }

    /// The sentinel's wire text, substituted for empty bodies.
    pub fn json() -> &'static str {
        EMPTY_RESPONSE_JSON
    }

    /// The sentinel as a validated value.
    pub fn revived() -> Revived {
        Revived::Object(BTreeMap::from([(
            EMPTY_RESPONSE_FIELD.to_string(),
            Revived::Bool(true),
        )]))
    }

    /// The schema accepting exactly the sentinel. Built once per process.
    pub fn schema() -> &'static ObjectSchema {
        static SCHEMA: OnceLock<ObjectSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            ObjectSchema::new().field(EMPTY_RESPONSE_FIELD, boolean(BooleanOptions::exactly(true)))
        })
    }

    /// Returns true if `value` is the sentinel.
    pub fn is_sentinel(value: &Revived) -> bool {
        *value == Self::revived()
    }
}
