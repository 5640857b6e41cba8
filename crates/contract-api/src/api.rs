//! # API Contracts
//!
//! An [`Api`] binds a routing path to a request [`Body`] and a response
//! [`Body`]. Its revive operations parse raw JSON text and run it through
//! the schema engine.

use std::fmt;

use contract_core::{FieldPath, Revived, SchemaError, ValidationError};
use contract_schema::{Engine, EngineConfig, ObjectSchema};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::empty::EmptyResponse;
use crate::error::ReviveError;
use crate::reply::{ErrorBody, Reply};

/// Which side of the exchange is being revived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The body a client sends.
    Request,
    /// The body a server returns.
    Response,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Request => f.write_str("request"),
            Direction::Response => f.write_str("response"),
        }
    }
}

/// Schema for one side of an endpoint.
#[derive(Debug, Clone)]
pub enum Body {
    /// Only `null` is accepted.
    None,
    /// The endpoint carries no data; only the empty-response sentinel is accepted.
    Empty,
    /// A structured payload.
    Object(ObjectSchema),
}

impl Body {
    /// Returns true for [`Body::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    fn validate(&self, engine: &Engine, value: &Value) -> Result<Revived, SchemaError> {
        let root = FieldPath::root();
        match self {
            Body::None => engine.validate_null(&root, Some(value)),
            Body::Empty => engine.validate_object(EmptyResponse::schema(), &root, Some(value)),
            Body::Object(schema) => engine.validate_object(schema, &root, Some(value)),
        }
    }

    fn describe(&self) -> Value {
        match self {
            Body::None => json!({"type": "null"}),
            Body::Empty => EmptyResponse::schema().describe(),
            Body::Object(schema) => schema.describe(),
        }
    }
}

impl From<ObjectSchema> for Body {
    fn from(schema: ObjectSchema) -> Self {
        Body::Object(schema)
    }
}

/// A request/response contract for one endpoint.
///
/// Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Api {
    path: String,
    request: Body,
    response: Body,
    engine: Engine,
}

impl Api {
    /// Bind `path` to a request and a response body schema.
    ///
    /// The engine configuration is read from the environment
    /// (see [`EngineConfig::from_env`]); [`Api::with_config`] overrides it.
    pub fn new(path: impl Into<String>, request: impl Into<Body>, response: impl Into<Body>) -> Self {
        Self {
            path: path.into(),
            request: request.into(),
            response: response.into(),
            engine: Engine::new(EngineConfig::from_env()),
        }
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine = Engine::new(config);
        self
    }

    /// The engine configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    /// The routing key.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The request body schema.
    pub fn request(&self) -> &Body {
        &self.request
    }

    /// The response body schema.
    pub fn response(&self) -> &Body {
        &self.response
    }

    /// Returns true if the endpoint's response carries no data.
    pub fn has_no_response_body(&self) -> bool {
        self.response.is_empty()
    }

    /// The schema for one direction.
    pub fn body(&self, direction: Direction) -> &Body {
        match direction {
            Direction::Request => &self.request,
            Direction::Response => &self.response,
        }
    }

    /// Parse and validate a request body.
    pub fn revive_request(&self, text: &str) -> Result<Revived, ReviveError> {
        self.revive(Direction::Request, text)
    }

    /// Parse and validate a response body.
    pub fn revive_response(&self, text: &str) -> Result<Revived, ReviveError> {
        self.revive(Direction::Response, text)
    }

    /// Parse, validate and decode a request body into `T`.
    pub fn revive_request_as<T: DeserializeOwned>(&self, text: &str) -> Result<T, ReviveError> {
        self.revive_as(Direction::Request, text)
    }

    /// Parse, validate and decode a response body into `T`.
    pub fn revive_response_as<T: DeserializeOwned>(&self, text: &str) -> Result<T, ReviveError> {
        self.revive_as(Direction::Response, text)
    }

    /// Interpret a response body for a transport client.
    ///
    /// The response schema is tried first. A body it rejects is checked
    /// against the [`ErrorBody`] envelope; if that also fails, the response
    /// schema's failure is returned. A well-formed error envelope is an
    /// expected outcome and is not logged as a contract failure.
    pub fn revive_reply(&self, text: &str) -> Result<Reply, ReviveError> {
        let span = tracing::debug_span!("revive_reply", api = %self.path);
        let _guard = span.enter();

        match self.revive_inner(Direction::Response, text) {
            Ok(_) if self.has_no_response_body() => Ok(Reply::NoContent),
            Ok(payload) => Ok(Reply::Payload(payload)),
            Err(cause @ ValidationError::Parse(_)) => Err(self.fail(Direction::Response, cause)),
            Err(cause) => match ErrorBody::revive(&self.engine, text) {
                Some(body) => {
                    tracing::debug!(code = body.code, "response carried an error body");
                    Ok(Reply::Error(body))
                }
                None => Err(self.fail(Direction::Response, cause)),
            },
        }
    }

    /// JSON Schema document for one direction.
    pub fn json_schema(&self, direction: Direction) -> Value {
        let mut doc = self.body(direction).describe();
        if let Value::Object(map) = &mut doc {
            map.insert(
                "$schema".to_string(),
                Value::String(contract_schema::describe::JSON_SCHEMA_DRAFT.to_string()),
            );
            map.insert(
                "title".to_string(),
                Value::String(format!("{} {direction}", self.path)),
            );
        }
        doc
    }

    fn revive(&self, direction: Direction, text: &str) -> Result<Revived, ReviveError> {
        let span = tracing::debug_span!("revive", api = %self.path, %direction);
        let _guard = span.enter();

        match self.revive_inner(direction, text) {
            Ok(revived) => {
                tracing::debug!("body revived");
                Ok(revived)
            }
            Err(cause) => Err(self.fail(direction, cause)),
        }
    }

    /// Parse and validate without logging the outcome.
    fn revive_inner(&self, direction: Direction, text: &str) -> Result<Revived, ValidationError> {
        let text = if text.is_empty() { EmptyResponse::json() } else { text };
        let value = serde_json::from_str::<Value>(text).map_err(ValidationError::Parse)?;
        Ok(self.body(direction).validate(&self.engine, &value)?)
    }

    fn fail(&self, direction: Direction, cause: ValidationError) -> ReviveError {
        tracing::warn!(%direction, error = %cause, "body failed its contract");
        ReviveError {
            api: self.path.clone(),
            direction,
            cause,
        }
    }

    fn revive_as<T: DeserializeOwned>(&self, direction: Direction, text: &str) -> Result<T, ReviveError> {
        self.revive(direction, text)?
            .deserialize_into()
            .map_err(|e| ReviveError {
                api: self.path.clone(),
                direction,
                cause: ValidationError::Decode(e),
            })
    }
}
