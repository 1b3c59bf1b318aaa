//! # optset-core — Foundational Types for Option Resolution
//!
//! This crate is the leaf of the optset workspace. It defines the value-model
//! primitives that the resolver builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One untyped value model.** Option values are `serde_json::Value`.
//!    The schema (allowed types, allowed values), not the storage, decides
//!    which shapes are acceptable at resolve time.
//!
//! 2. **Closed intrinsic vocabulary.** [`ValueKind`] enumerates every
//!    intrinsic type the resolver understands. Specifier strings are parsed
//!    through a fixed alias table (`boolean`/`bool`, `integer`/`int`,
//!    `double`/`float`, ...); an unrecognized name is a parse error, never a
//!    constraint that silently matches nothing.
//!
//! 3. **One predicate per allowed-type entry.** [`TypeSpec`] unifies
//!    intrinsic-kind checks and named capability predicates under a single
//!    abstraction, while remembering the spelling it was registered under so
//!    diagnostics list types exactly as declared.
//!
//! 4. **Deterministic diagnostics.** [`kind_name`] and [`format_value`]
//!    produce the stable single-line renderings used in error messages.
//!
//! ## Crate Policy
//!
//! - No dependencies on other optset crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod format;
pub mod kind;
pub mod typespec;

// Re-export primary types for ergonomic imports.
pub use format::format_value;
pub use kind::{kind_name, UnknownTypeError, ValueKind, VALUE_KIND_COUNT};
pub use typespec::TypeSpec;
