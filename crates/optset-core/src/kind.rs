//! # Value Kinds — Intrinsic Type Vocabulary
//!
//! Defines `ValueKind`, the closed set of intrinsic type specifiers the
//! resolver understands. Every `match` on `ValueKind` must be exhaustive, so
//! adding a kind forces every consumer to handle it at compile time.
//!
//! Two naming tables live here and they are deliberately distinct:
//!
//! - the **alias table** ([`FromStr`]) maps specifier spellings to kinds
//!   (`"bool"` and `"boolean"` both name [`ValueKind::Bool`]);
//! - the **runtime table** ([`kind_name`]) maps a concrete value to the
//!   long-form name used when diagnostics report what a value actually is
//!   (`true` is reported as `boolean`, `42` as `integer`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// A type-specifier string named no intrinsic kind.
///
/// The intrinsic vocabulary is closed: in a JSON value model an unrecognized
/// specifier cannot be an instance-of check, so it is rejected at
/// registration instead of becoming a constraint no value satisfies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type specifier: {spec:?}")]
pub struct UnknownTypeError {
    /// The specifier string as supplied.
    pub spec: String,
}

/// All intrinsic type-specifier kinds.
///
/// `Null`, `Bool`, `Int`, `Float`, `String`, `Array` and `Object` mirror the
/// concrete shapes of `serde_json::Value`. `Number` and `Scalar` are wider
/// specifiers: `Number` accepts integers and floats, `Scalar` accepts any
/// non-container, non-null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The JSON null value.
    Null,
    /// Boolean values.
    Bool,
    /// Whole numbers (stored as `i64` or `u64`).
    Int,
    /// Floating-point numbers.
    Float,
    /// Any number, integer or float.
    Number,
    /// Strings.
    String,
    /// Booleans, numbers and strings.
    Scalar,
    /// Arrays.
    Array,
    /// Objects (string-keyed maps).
    Object,
}

/// Total number of intrinsic kinds. Used for compile-time assertions.
pub const VALUE_KIND_COUNT: usize = 9;

impl ValueKind {
    /// Returns all intrinsic kinds in canonical order.
    pub fn all_kinds() -> &'static [ValueKind] {
        &[
            Self::Null,
            Self::Bool,
            Self::Int,
            Self::Float,
            Self::Number,
            Self::String,
            Self::Scalar,
            Self::Array,
            Self::Object,
        ]
    }

    /// Returns the canonical lowercase identifier for this kind.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Scalar => "scalar",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether `value` is of this intrinsic kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Null => value.is_null(),
            Self::Bool => value.is_boolean(),
            Self::Int => value.is_i64() || value.is_u64(),
            Self::Float => value.is_f64(),
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
            Self::Scalar => value.is_boolean() || value.is_number() || value.is_string(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = UnknownTypeError;

    /// Parse a specifier spelling through the alias table.
    ///
    /// Accepts the canonical identifiers produced by [`ValueKind::as_str()`]
    /// plus the long-form aliases (`boolean`, `integer`, `double`, `numeric`,
    /// `str`, `list`, `map`). Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" | "boolean" => Ok(Self::Bool),
            "int" | "integer" => Ok(Self::Int),
            "float" | "double" => Ok(Self::Float),
            "number" | "numeric" => Ok(Self::Number),
            "string" | "str" => Ok(Self::String),
            "scalar" => Ok(Self::Scalar),
            "array" | "list" => Ok(Self::Array),
            "object" | "map" => Ok(Self::Object),
            other => Err(UnknownTypeError {
                spec: other.to_string(),
            }),
        }
    }
}

/// The runtime type name of a value, as reported in diagnostics.
///
/// Long-form names (`boolean`, `integer`) are used here; they are all valid
/// specifier spellings, so a reported name can always be pasted back into an
/// allowed-type declaration.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_f64() {
                "float"
            } else {
                "integer"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating arbitrary JSON values, floats included.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            any::<f64>()
                .prop_filter("finite", |f| f.is_finite())
                .prop_map(|f| serde_json::json!(f)),
            "[a-zA-Z0-9_ ]{0,50}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..6).prop_map(|m| {
                    let map: serde_json::Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        /// Every value's reported kind name parses back to a kind that
        /// matches the value.
        #[test]
        fn kind_name_parses_and_matches(value in json_value()) {
            let name = kind_name(&value);
            let kind: ValueKind = name.parse().unwrap_or_else(|e| {
                panic!("kind_name produced unparseable {name:?}: {e}")
            });
            prop_assert!(kind.matches(&value));
        }

        /// Exactly one concrete (non-widening) kind matches any value.
        #[test]
        fn concrete_kinds_partition_values(value in json_value()) {
            let concrete = [
                ValueKind::Null,
                ValueKind::Bool,
                ValueKind::Int,
                ValueKind::Float,
                ValueKind::String,
                ValueKind::Array,
                ValueKind::Object,
            ];
            let matching = concrete.iter().filter(|k| k.matches(&value)).count();
            prop_assert_eq!(matching, 1);
        }
    }
}
