//! # contract-api — API Contract Binding
//!
//! Binds a routing path to a request schema and a response schema and
//! revives raw JSON text through the schema engine.
//!
//! ## Revival
//!
//! - An empty body is treated as the empty-response sentinel
//!   (`{"isEmptyResponse":true}`) before parsing.
//! - Malformed JSON fails with a parse error; non-conforming JSON fails
//!   with the path-qualified schema error. Both are wrapped in a
//!   [`ReviveError`] naming the endpoint and direction.
//!
//! ## Collaborators
//!
//! Transport clients call [`Api::revive_response`] or [`Api::revive_reply`];
//! server dispatchers call [`Api::revive_request`]. Mapping failures to
//! HTTP statuses is left to them.
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No network I/O, no routing, no authentication state.
//! - An `Api` is immutable once built and safe to share across threads.

pub mod api;
pub mod empty;
pub mod error;
pub mod reply;

pub use api::{Api, Body, Direction};
pub use empty::{EmptyResponse, EMPTY_RESPONSE_FIELD};
pub use error::ReviveError;
pub use reply::{ErrorBody, Reply};
