//! # contract-core — Foundational Types for Payload Contracts
//!
//! This crate is the leaf of the contract workspace. It defines the value
//! and error types shared by the schema engine (`contract-schema`) and the
//! API binding (`contract-api`); it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Path-qualified failures.** Every [`SchemaError`] carries the
//!    [`FieldPath`] at which it was detected, dot-joined from the root.
//!
//! 2. **Absence is not null.** Validators return `Option<Revived>`; `None`
//!    means "absent" and is never rendered as `Revived::Null`.
//!
//! 3. **Typed output.** [`Revived`] is the validated tree. Dates are real
//!    `chrono` values, not strings, and the tree hands itself to serde for
//!    extraction into caller-defined structs.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `contract-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod path;
pub mod temporal;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{SchemaError, SchemaErrorKind, ValidationError};
pub use path::FieldPath;
pub use value::Revived;
