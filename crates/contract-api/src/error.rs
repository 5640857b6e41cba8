//! # Revive Errors
//!
//! A [`ReviveError`] is the underlying [`ValidationError`] annotated with
//! the endpoint path and the direction being revived. The content of the
//! underlying failure is not altered.

use contract_core::{SchemaError, ValidationError};
use thiserror::Error;

use crate::api::Direction;

/// Reviving a request or response body for an endpoint failed.
#[derive(Error, Debug)]
#[error("{direction} for `{api}`: {cause}")]
pub struct ReviveError {
    /// Path of the endpoint whose body was revived.
    pub api: String,
    /// Whether the request or the response was revived.
    pub direction: Direction,
    /// The underlying parse, schema or decode failure.
    #[source]
    pub cause: ValidationError,
}

impl ReviveError {
    /// The path-qualified schema failure, if this is one.
    pub fn schema_error(&self) -> Option<&SchemaError> {
        self.cause.as_schema()
    }

    /// Returns true if the body was not well-formed JSON.
    pub fn is_parse_error(&self) -> bool {
        matches!(self.cause, ValidationError::Parse(_))
    }
}
