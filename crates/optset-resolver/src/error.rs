//! # Error Taxonomy — Structured Resolver Errors
//!
//! One umbrella [`OptionsError`] covers both schema-building misuse and
//! resolve-time validation failures, so callers catch broadly by type or
//! narrowly by variant. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! Message text is a compatibility contract: name listings are sorted,
//! singular and plural templates are distinct, and allowed-type lists are
//! joined with `" or "` in registration order. Consumers match on these
//! strings, so changing a template is a breaking change.

use serde_json::Value;
use thiserror::Error;

use optset_core::{format_value, UnknownTypeError};

/// Top-level error type for schema building and resolution.
///
/// These are programmer/input errors, not transient faults: there is no
/// retry semantics and a failed [`resolve`](crate::OptionsResolver::resolve)
/// yields no output map at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// A builder operation referenced a name that was never defined.
    #[error("{}", undefined_option_message(.name, .defined))]
    UndefinedOption {
        /// The unknown option name.
        name: String,
        /// All currently defined names, sorted.
        defined: Vec<String>,
    },

    /// A defined option was queried for a default it does not have.
    #[error("The option \"{name}\" has no default value set.")]
    NoDefaultValue {
        /// The option that lacks a default.
        name: String,
    },

    /// Resolution input supplied one or more names outside the defined set.
    #[error("{}", undefined_message(.names, .defined))]
    UndefinedOptions {
        /// The offending input keys, sorted.
        names: Vec<String>,
        /// All currently defined names, sorted.
        defined: Vec<String>,
    },

    /// A required option has neither a default nor an input value.
    #[error("{}", missing_message(.names))]
    MissingOptions {
        /// The missing required names, sorted.
        names: Vec<String>,
    },

    /// A merged value matched none of the option's allowed types.
    #[error("{}", invalid_type_message(.name, .allowed, .actual))]
    InvalidType {
        /// The offending option.
        name: String,
        /// Allowed type spellings, in registration order.
        allowed: Vec<String>,
        /// The value's actual runtime type name.
        actual: String,
    },

    /// A merged value equalled none of the option's allowed values.
    #[error("{}", invalid_value_message(.name, .value))]
    InvalidValue {
        /// The offending option.
        name: String,
        /// The rejected value.
        value: Value,
    },

    /// A type-specifier string named no intrinsic kind.
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),
}

/// Join names as `"a", "b", "c"`.
fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{n}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn undefined_option_message(name: &str, defined: &[String]) -> String {
    format!(
        "The option \"{name}\" does not exist. Defined options are: {}.",
        quoted_list(defined)
    )
}

fn undefined_message(names: &[String], defined: &[String]) -> String {
    match names {
        [name] => undefined_option_message(name, defined),
        _ => format!(
            "The options {} do not exist. Defined options are: {}.",
            quoted_list(names),
            quoted_list(defined)
        ),
    }
}

fn missing_message(names: &[String]) -> String {
    match names {
        [name] => format!("The required option \"{name}\" is missing."),
        _ => format!("The required options {} are missing.", quoted_list(names)),
    }
}

fn invalid_type_message(name: &str, allowed: &[String], actual: &str) -> String {
    let allowed = allowed
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(" or ");
    format!(
        "The option \"{name}\" is expected to be of type {allowed}, but is of type \"{actual}\"."
    )
}

fn invalid_value_message(name: &str, value: &Value) -> String {
    format!(
        "The option \"{name}\" with value {} is not allowed.",
        format_value(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_undefined_singular() {
        let err = OptionsError::UndefinedOption {
            name: "foo".to_string(),
            defined: names(&["a", "z"]),
        };
        assert_eq!(
            err.to_string(),
            "The option \"foo\" does not exist. Defined options are: \"a\", \"z\"."
        );
    }

    #[test]
    fn test_undefined_plural() {
        let err = OptionsError::UndefinedOptions {
            names: names(&["bar", "foo"]),
            defined: names(&["a"]),
        };
        assert_eq!(
            err.to_string(),
            "The options \"bar\", \"foo\" do not exist. Defined options are: \"a\"."
        );
    }

    #[test]
    fn test_missing_singular_and_plural() {
        let one = OptionsError::MissingOptions {
            names: names(&["foo"]),
        };
        assert_eq!(one.to_string(), "The required option \"foo\" is missing.");

        let many = OptionsError::MissingOptions {
            names: names(&["bar", "foo"]),
        };
        assert_eq!(
            many.to_string(),
            "The required options \"bar\", \"foo\" are missing."
        );
    }

    #[test]
    fn test_invalid_type_joins_with_or() {
        let err = OptionsError::InvalidType {
            name: "foo".to_string(),
            allowed: names(&["string", "bool"]),
            actual: "integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The option \"foo\" is expected to be of type \"string\" or \"bool\", \
             but is of type \"integer\"."
        );
    }

    #[test]
    fn test_invalid_value_renders_value() {
        let err = OptionsError::InvalidValue {
            name: "foo".to_string(),
            value: Value::Null,
        };
        assert_eq!(
            err.to_string(),
            "The option \"foo\" with value null is not allowed."
        );

        let err = OptionsError::InvalidValue {
            name: "foo".to_string(),
            value: json!("baz"),
        };
        assert_eq!(
            err.to_string(),
            "The option \"foo\" with value \"baz\" is not allowed."
        );
    }

    #[test]
    fn test_no_default_value() {
        let err = OptionsError::NoDefaultValue {
            name: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "The option \"foo\" has no default value set.");
    }

    #[test]
    fn test_unknown_type_is_transparent() {
        let err = OptionsError::from(UnknownTypeError {
            spec: "Widget".to_string(),
        });
        assert_eq!(err.to_string(), "unknown type specifier: \"Widget\"");
    }
}
