//! # Type Specifiers — Allowed-Type Predicates
//!
//! One predicate abstraction per allowed-type entry. A [`TypeSpec`] is either
//! an intrinsic [`ValueKind`] check parsed through the alias table, or a
//! named capability predicate for shapes the intrinsic vocabulary cannot
//! express (the role class/interface instance-of checks play in dynamic
//! value models).
//!
//! A specifier keeps the spelling it was registered under. Diagnostics must
//! list allowed types exactly as declared: a constraint registered as
//! `"integer"` reads back as `"integer"`, never as the canonical `"int"`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::kind::{UnknownTypeError, ValueKind};

/// A single entry in an option's allowed-type list.
#[derive(Clone)]
pub struct TypeSpec {
    name: String,
    matcher: Matcher,
}

#[derive(Clone)]
enum Matcher {
    Kind(ValueKind),
    Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>),
}

impl TypeSpec {
    /// Parse a specifier spelling through the alias table, preserving the
    /// spelling for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTypeError`] if `spec` names no intrinsic kind.
    pub fn parse(spec: &str) -> Result<Self, UnknownTypeError> {
        let kind = spec.parse::<ValueKind>()?;
        Ok(Self {
            name: spec.to_string(),
            matcher: Matcher::Kind(kind),
        })
    }

    /// A named capability predicate.
    ///
    /// `name` appears in diagnostics the way an intrinsic spelling would;
    /// `predicate` decides membership. This is the escape hatch for
    /// structured shapes, e.g. "an object with a `url` key" or "a
    /// non-empty string".
    pub fn satisfies(
        name: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            matcher: Matcher::Predicate(Arc::new(predicate)),
        }
    }

    /// The spelling this specifier was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `value` satisfies this specifier.
    pub fn matches(&self, value: &Value) -> bool {
        match &self.matcher {
            Matcher::Kind(kind) => kind.matches(value),
            Matcher::Predicate(predicate) => predicate(value),
        }
    }
}

impl From<ValueKind> for TypeSpec {
    fn from(kind: ValueKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            matcher: Matcher::Kind(kind),
        }
    }
}

impl fmt::Debug for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("TypeSpec");
        dbg.field("name", &self.name);
        match &self.matcher {
            Matcher::Kind(kind) => dbg.field("kind", kind),
            Matcher::Predicate(_) => dbg.field("predicate", &"<fn>"),
        };
        dbg.finish()
    }
}
