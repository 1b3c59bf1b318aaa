//! # optset-resolver — Declarative Option-Schema Resolution
//!
//! A mutable schema builder ([`OptionsResolver`]) plus a pure resolution
//! pass: callers declare defaults, required names, allowed types, allowed
//! values and post-resolution normalizers, then [`OptionsResolver::resolve`]
//! merges a supplied option map over the defaults and validates the result.
//!
//! ## Resolution Pipeline
//!
//! 1. Reject input keys outside the defined set.
//! 2. Merge: defaults first, caller entries win.
//! 3. Reject required names with neither default nor input value.
//! 4. Per option, in key order: type check, value check, normalization.
//! 5. Return the merged, normalized map.
//!
//! Validation runs on the merged result, never on raw input alone, so
//! defaults are subject to the same rules as caller-supplied values and
//! schema-authoring mistakes surface on the first `resolve`. Normalizer
//! output is trusted and not re-validated, which permits parse-then-adapt
//! patterns where the emitted representation no longer satisfies the
//! user-facing constraint.
//!
//! ## Determinism
//!
//! Every diagnostic listing is sorted and resolution iterates options in
//! sorted key order. Resolving the same schema with the same input always
//! produces the same output map and the same error text.
//!
//! ## Crate Policy
//!
//! - Every failure is an [`OptionsError`]; callers match broadly on the type
//!   or narrowly on a variant.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod resolver;

pub use error::OptionsError;
pub use resolver::{
    IntoAllowedValues, IntoNames, IntoTypeSpecs, Normalizer, OptionMap, OptionsResolver,
};

// Re-exported so downstream crates can declare constraints without a direct
// optset-core dependency.
pub use optset_core::{format_value, kind_name, TypeSpec, UnknownTypeError, ValueKind};
