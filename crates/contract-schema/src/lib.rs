//! # contract-schema — Schema Combinators & Validation Engine
//!
//! Declarative descriptions of JSON payloads and the recursive engine
//! that checks untyped data against them.
//!
//! ## Combinator Library (`combinators`)
//!
//! Stateless leaf validators: [`number`], [`string`], [`literal`],
//! [`null_`], [`boolean`], [`date`], [`optional`], [`or`], [`values`],
//! [`array`] and [`base_array`]. Composite combinators reach their children
//! only through the [`Recurse`] capability they are handed, so they know
//! nothing about the engine that drives them.
//!
//! ## Schema Engine (`engine`)
//!
//! [`Engine::validate_field`] dispatches on the [`SchemaField`] variant:
//! leaves are invoked with the engine as their recursion callback, object
//! schemas reject undeclared keys and then validate each declared field in
//! declaration order. The first failure aborts validation.
//!
//! ## JSON Schema Export (`describe`)
//!
//! [`SchemaField::to_json_schema`] renders a Draft 2020-12 document for
//! documentation and for cross-checking with external validators.
//!
//! ## Crate Policy
//!
//! - Depends only on `contract-core` internally.
//! - Schemas are authored statically and never mutated once built. All
//!   schema types are `Send + Sync` and may be shared across threads.
//! - Malformed schemas (duplicate field names) panic at construction;
//!   malformed data never panics.

pub mod combinators;
pub mod describe;
pub mod engine;
pub mod field;

pub use combinators::{
    array, base_array, boolean, date, leaf_fn, literal, null_, number, optional, or, string, values,
    BooleanOptions, StringOptions,
};
pub use engine::{Engine, EngineConfig, ExtraneousPolicy, EXTRANEOUS_FIELDS_ENV};
pub use field::{Leaf, ObjectSchema, Recurse, SchemaField};
