//! # Replies
//!
//! How a transport client reads a response body: a validated payload, the
//! designated error envelope, or "no content" for endpoints whose response
//! is the empty-response sentinel.
//!
//! The error envelope is `{"error": {"code": <u16>, "message": <string>}}`.

use std::sync::OnceLock;

use contract_core::{FieldPath, Revived};
use contract_schema::{number, string, Engine, ObjectSchema, StringOptions};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Outcome of [`Api::revive_reply`](crate::Api::revive_reply).
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The response conformed to the endpoint's response schema.
    Payload(Revived),
    /// The server answered with the error envelope.
    Error(ErrorBody),
    /// The endpoint carries no response data.
    NoContent,
}

/// Body of the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric status code.
    pub code: u16,
    /// Human-readable message.
    pub message: String,
}

impl ErrorBody {
    /// Build an error body.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The envelope as raw JSON, ready for a server to send.
    pub fn to_envelope(&self) -> Value {
        json!({"error": {"code": self.code, "message": self.message}})
    }

    /// Schema of the envelope. Built once per process.
    pub fn envelope_schema() -> &'static ObjectSchema {
        static SCHEMA: OnceLock<ObjectSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            ObjectSchema::new().field(
                "error",
                ObjectSchema::new()
                    .field("code", number())
                    .field("message", string(StringOptions::default())),
            )
        })
    }

    /// Read `text` as the envelope. `None` if it is not one.
    pub(crate) fn revive(engine: &Engine, text: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(text).ok()?;
        let revived = engine
            .validate_object(Self::envelope_schema(), &FieldPath::root(), Some(&value))
            .ok()?;
        revived.get("error")?.clone().deserialize_into().ok()
    }
}
