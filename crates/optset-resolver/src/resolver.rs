//! # Options Resolver — Schema Builder and Resolution Engine
//!
//! The [`OptionsResolver`] accumulates option declarations through fluent
//! builder methods, then [`resolve`](OptionsResolver::resolve) validates and
//! merges one input map against the accumulated schema without mutating it.
//!
//! Builder state is five mappings plus the defined-name set. A name becomes
//! defined the moment it is given a default, marked required, or explicitly
//! declared defined; the per-option constraint setters insist on a defined
//! name so typos surface at registration, not at resolve time.
//!
//! The backing collections are `BTreeMap`/`BTreeSet`: sorted iteration makes
//! resolution order and every diagnostic listing deterministic without a
//! separate sorting step.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use optset_core::{kind_name, TypeSpec};

use crate::error::OptionsError;

/// The option map shape accepted by and returned from
/// [`OptionsResolver::resolve`].
///
/// `serde_json::Map` iterates its keys in sorted order, which keeps the
/// validation pass and all diagnostics deterministic.
pub type OptionMap = Map<String, Value>;

/// A post-resolution transform registered with
/// [`OptionsResolver::set_normalizer`].
///
/// Receives the option name and the validated value, returns the replacement
/// value. Normalizer output is trusted: it is not re-validated against the
/// option's own type or value constraints.
#[derive(Clone)]
pub struct Normalizer(Arc<dyn Fn(&str, Value) -> Value + Send + Sync>);

impl Normalizer {
    fn new(f: impl Fn(&str, Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    fn apply(&self, name: &str, value: Value) -> Value {
        (self.0)(name, value)
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Normalizer(<fn>)")
    }
}

/// A mutable option-schema builder and resolver.
///
/// Libraries that accept configuration maps declare their schema once, then
/// resolve every caller-supplied map against it:
///
/// ```
/// use optset_resolver::OptionsResolver;
/// use serde_json::Map;
///
/// let mut resolver = OptionsResolver::new();
/// resolver
///     .set_default("host", "localhost")
///     .set_default("port", 5432)
///     .set_required("host");
/// resolver.set_allowed_types("port", "int")?;
///
/// let resolved = resolver.resolve(Map::new())?;
/// assert_eq!(resolved["host"], "localhost");
/// assert_eq!(resolved["port"], 5432);
/// # Ok::<(), optset_resolver::OptionsError>(())
/// ```
///
/// `resolve` is a pure function of (schema state, input): it never mutates
/// the schema, and each call starts fresh from the defaults. The `&mut self`
/// receivers on every builder method make concurrent mutation a compile
/// error; share a resolver across threads only once building is finished.
#[derive(Debug, Clone, Default)]
pub struct OptionsResolver {
    defined: BTreeSet<String>,
    defaults: BTreeMap<String, Value>,
    required: BTreeSet<String>,
    allowed_types: BTreeMap<String, Vec<TypeSpec>>,
    allowed_values: BTreeMap<String, Vec<Value>>,
    normalizers: BTreeMap<String, Normalizer>,
}

impl OptionsResolver {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Defaults ───────────────────────────────────────────────────────

    /// Insert or overwrite the default for `name`, defining the name.
    ///
    /// Key presence, not the stored value, signals "has a default":
    /// `Value::Null` is a legitimate default, distinct from no default.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        self.defined.insert(name.clone());
        self.defaults.insert(name, value.into());
        self
    }

    /// Apply [`set_default`](Self::set_default) for every entry, in the
    /// iteration order of `entries`.
    pub fn set_defaults<K, V, I>(&mut self, entries: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in entries {
            self.set_default(name, value);
        }
        self
    }

    /// Whether `name` has a default, independent of the stored value.
    pub fn has_default(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// The default registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined, and
    /// `NoDefaultValue` if it is defined but carries no default.
    pub fn get_default(&self, name: &str) -> Result<&Value, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        self.defaults
            .get(name)
            .ok_or_else(|| OptionsError::NoDefaultValue {
                name: name.to_string(),
            })
    }

    /// Remove the default for `name`. The name stays defined.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined.
    pub fn remove_default(&mut self, name: &str) -> Result<&mut Self, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        self.defaults.remove(name);
        Ok(self)
    }

    // ─── Required and defined names ─────────────────────────────────────

    /// Mark each given name as defined and required.
    pub fn set_required(&mut self, names: impl IntoNames) -> &mut Self {
        for name in names.into_names() {
            self.defined.insert(name.clone());
            self.required.insert(name);
        }
        self
    }

    /// Whether `name` is required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// All required names, sorted.
    pub fn required_options(&self) -> Vec<&str> {
        self.required.iter().map(String::as_str).collect()
    }

    /// Whether callers must supply `name` explicitly: required with no
    /// default.
    pub fn is_missing(&self, name: &str) -> bool {
        self.required.contains(name) && !self.defaults.contains_key(name)
    }

    /// Required names with no default, sorted.
    pub fn missing_options(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| !self.defaults.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    /// Mark each given name as defined, with no default and not required.
    pub fn set_defined(&mut self, names: impl IntoNames) -> &mut Self {
        for name in names.into_names() {
            self.defined.insert(name);
        }
        self
    }

    /// Whether `name` is defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }

    /// All defined names, sorted.
    pub fn defined_options(&self) -> Vec<&str> {
        self.defined.iter().map(String::as_str).collect()
    }

    // ─── Constraints ────────────────────────────────────────────────────

    /// Replace the allowed-value list for `name`. A single value becomes a
    /// one-element list.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined.
    pub fn set_allowed_values(
        &mut self,
        name: &str,
        values: impl IntoAllowedValues,
    ) -> Result<&mut Self, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        self.allowed_values
            .insert(name.to_string(), values.into_values());
        Ok(self)
    }

    /// Append to the allowed-value list for `name`, creating the list if
    /// absent. Order is preserved and duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined.
    pub fn add_allowed_values(
        &mut self,
        name: &str,
        values: impl IntoAllowedValues,
    ) -> Result<&mut Self, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        self.allowed_values
            .entry(name.to_string())
            .or_default()
            .extend(values.into_values());
        Ok(self)
    }

    /// Replace the allowed-type list for `name`. String specifiers resolve
    /// through the alias table at registration.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined, and
    /// `UnknownType` if a specifier string names no intrinsic kind.
    pub fn set_allowed_types(
        &mut self,
        name: &str,
        types: impl IntoTypeSpecs,
    ) -> Result<&mut Self, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        self.allowed_types.insert(name.to_string(), types.into_specs()?);
        Ok(self)
    }

    /// Append to the allowed-type list for `name`, creating the list if
    /// absent. Order is preserved and duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined, and
    /// `UnknownType` if a specifier string names no intrinsic kind.
    pub fn add_allowed_types(
        &mut self,
        name: &str,
        types: impl IntoTypeSpecs,
    ) -> Result<&mut Self, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        let specs = types.into_specs()?;
        self.allowed_types
            .entry(name.to_string())
            .or_default()
            .extend(specs);
        Ok(self)
    }

    // ─── Normalizers ────────────────────────────────────────────────────

    /// Register the post-resolution transform for `name`. At most one
    /// normalizer per name; the last registration wins.
    ///
    /// The normalizer runs after type and value checks and its output is not
    /// re-validated.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedOption` if `name` was never defined.
    pub fn set_normalizer(
        &mut self,
        name: &str,
        normalizer: impl Fn(&str, Value) -> Value + Send + Sync + 'static,
    ) -> Result<&mut Self, OptionsError> {
        if !self.defined.contains(name) {
            return Err(self.undefined_option(name));
        }
        self.normalizers
            .insert(name.to_string(), Normalizer::new(normalizer));
        Ok(self)
    }

    // ─── Removal ────────────────────────────────────────────────────────

    /// Remove every trace of the given names: defined flag, default,
    /// required flag, constraints and normalizer. Removing an unknown name
    /// is a no-op.
    pub fn remove(&mut self, names: impl IntoNames) -> &mut Self {
        for name in names.into_names() {
            self.defined.remove(&name);
            self.defaults.remove(&name);
            self.required.remove(&name);
            self.allowed_types.remove(&name);
            self.allowed_values.remove(&name);
            self.normalizers.remove(&name);
        }
        self
    }

    /// Reset to the empty schema.
    pub fn clear(&mut self) -> &mut Self {
        self.defined.clear();
        self.defaults.clear();
        self.required.clear();
        self.allowed_types.clear();
        self.allowed_values.clear();
        self.normalizers.clear();
        self
    }

    // ─── Resolution ─────────────────────────────────────────────────────

    /// Validate and merge `options` against the current schema.
    ///
    /// The result contains exactly the defined names that have a default or
    /// an input value, each having passed the type and value checks and any
    /// normalizer. Resolution is all-or-nothing: on error no output map is
    /// produced.
    ///
    /// # Errors
    ///
    /// - `UndefinedOptions` if `options` contains keys outside the defined
    ///   set.
    /// - `MissingOptions` if a required name has neither default nor input
    ///   value.
    /// - `InvalidType` / `InvalidValue` if a merged value fails its
    ///   constraints. Defaults are checked too, so a default violating its
    ///   own option's constraints fails the first `resolve`.
    pub fn resolve(&self, options: OptionMap) -> Result<OptionMap, OptionsError> {
        trace!(
            supplied = options.len(),
            defined = self.defined.len(),
            "resolving options"
        );

        let mut undefined: Vec<String> = options
            .keys()
            .filter(|key| !self.defined.contains(*key))
            .cloned()
            .collect();
        if !undefined.is_empty() {
            undefined.sort();
            debug!(count = undefined.len(), "rejecting undefined options");
            return Err(OptionsError::UndefinedOptions {
                names: undefined,
                defined: self.defined.iter().cloned().collect(),
            });
        }

        // Defaults first; caller entries win.
        let mut resolved: OptionMap = self
            .defaults
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        for (name, value) in options {
            resolved.insert(name, value);
        }

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| !resolved.contains_key(*name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            debug!(count = missing.len(), "rejecting missing required options");
            return Err(OptionsError::MissingOptions { names: missing });
        }

        let names: Vec<String> = resolved.keys().cloned().collect();
        for name in names {
            if let Some(value) = resolved.get(&name) {
                if let Some(specs) = self.allowed_types.get(&name) {
                    // First match wins.
                    if !specs.iter().any(|spec| spec.matches(value)) {
                        debug!(option = %name, actual = kind_name(value), "type check failed");
                        return Err(OptionsError::InvalidType {
                            name: name.clone(),
                            allowed: specs.iter().map(|s| s.name().to_string()).collect(),
                            actual: kind_name(value).to_string(),
                        });
                    }
                }
                if let Some(allowed) = self.allowed_values.get(&name) {
                    // Strict equality, no coercion.
                    if !allowed.iter().any(|candidate| candidate == value) {
                        debug!(option = %name, "value check failed");
                        return Err(OptionsError::InvalidValue {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                }
            }
            if let Some(normalizer) = self.normalizers.get(&name) {
                if let Some(value) = resolved.remove(&name) {
                    let normalized = normalizer.apply(&name, value);
                    resolved.insert(name, normalized);
                }
            }
        }

        trace!(resolved = resolved.len(), "options resolved");
        Ok(resolved)
    }

    fn undefined_option(&self, name: &str) -> OptionsError {
        OptionsError::UndefinedOption {
            name: name.to_string(),
            defined: self.defined.iter().cloned().collect(),
        }
    }
}

// ─── Argument polymorphism ──────────────────────────────────────────────

/// Accepts a single option name or a list of names.
pub trait IntoNames {
    /// The names, in the order given.
    fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl<const N: usize> IntoNames for [&str; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoNames for &[&str] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoNames for Vec<&str> {
    fn into_names(self) -> Vec<String> {
        self.into_iter().map(|s| s.to_string()).collect()
    }
}

impl IntoNames for Vec<String> {
    fn into_names(self) -> Vec<String> {
        self
    }
}

/// Accepts a single allowed value or a list of allowed values.
///
/// A `Vec` or array is always treated as a list of alternatives. To allow an
/// array value itself, wrap it in a one-element list.
pub trait IntoAllowedValues {
    /// The allowed values, in the order given.
    fn into_values(self) -> Vec<Value>;
}

impl IntoAllowedValues for Value {
    fn into_values(self) -> Vec<Value> {
        vec![self]
    }
}

impl IntoAllowedValues for Vec<Value> {
    fn into_values(self) -> Vec<Value> {
        self
    }
}

impl<const N: usize> IntoAllowedValues for [Value; N] {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().collect()
    }
}

impl IntoAllowedValues for &str {
    fn into_values(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl IntoAllowedValues for String {
    fn into_values(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl IntoAllowedValues for bool {
    fn into_values(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl IntoAllowedValues for i32 {
    fn into_values(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl IntoAllowedValues for i64 {
    fn into_values(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl IntoAllowedValues for f64 {
    fn into_values(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

impl<const N: usize> IntoAllowedValues for [&str; N] {
    fn into_values(self) -> Vec<Value> {
        self.iter().map(|s| Value::from(*s)).collect()
    }
}

impl IntoAllowedValues for Vec<&str> {
    fn into_values(self) -> Vec<Value> {
        self.into_iter().map(Value::from).collect()
    }
}

/// Accepts a single type specifier or a list, as strings (resolved through
/// the alias table), [`ValueKind`](optset_core::ValueKind)s or prebuilt
/// [`TypeSpec`]s.
pub trait IntoTypeSpecs {
    /// The specifiers, in the order given.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if a specifier string names no intrinsic kind.
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError>;
}

impl IntoTypeSpecs for &str {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(vec![TypeSpec::parse(self)?])
    }
}

impl IntoTypeSpecs for String {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(vec![TypeSpec::parse(&self)?])
    }
}

impl IntoTypeSpecs for optset_core::ValueKind {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(vec![TypeSpec::from(self)])
    }
}

impl IntoTypeSpecs for TypeSpec {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(vec![self])
    }
}

impl<const N: usize> IntoTypeSpecs for [&str; N] {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        self.iter()
            .map(|s| TypeSpec::parse(s).map_err(OptionsError::from))
            .collect()
    }
}

impl IntoTypeSpecs for &[&str] {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        self.iter()
            .map(|s| TypeSpec::parse(s).map_err(OptionsError::from))
            .collect()
    }
}

impl IntoTypeSpecs for Vec<&str> {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        self.iter()
            .map(|s| TypeSpec::parse(s).map_err(OptionsError::from))
            .collect()
    }
}

impl IntoTypeSpecs for Vec<TypeSpec> {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(self)
    }
}

impl<const N: usize> IntoTypeSpecs for [TypeSpec; N] {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(self.into_iter().collect())
    }
}

impl IntoTypeSpecs for Vec<optset_core::ValueKind> {
    fn into_specs(self) -> Result<Vec<TypeSpec>, OptionsError> {
        Ok(self.into_iter().map(TypeSpec::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_default_defines() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("foo", "bar");
        assert!(resolver.is_defined("foo"));
        assert!(resolver.has_default("foo"));
        assert_eq!(resolver.get_default("foo").unwrap(), &json!("bar"));
    }

    #[test]
    fn test_null_default_is_a_default() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("foo", Value::Null);
        assert!(resolver.has_default("foo"));
        assert_eq!(resolver.get_default("foo").unwrap(), &Value::Null);
    }

    #[test]
    fn test_set_defaults_applies_every_entry() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defaults([("z", "1"), ("a", "2")]);
        assert_eq!(resolver.defined_options(), vec!["a", "z"]);
        assert_eq!(resolver.get_default("a").unwrap(), &json!("2"));
    }

    #[test]
    fn test_get_default_undefined() {
        let resolver = OptionsResolver::new();
        let err = resolver.get_default("foo").unwrap_err();
        assert!(matches!(err, OptionsError::UndefinedOption { .. }));
    }

    #[test]
    fn test_get_default_defined_without_default() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defined("foo");
        let err = resolver.get_default("foo").unwrap_err();
        assert_eq!(
            err,
            OptionsError::NoDefaultValue {
                name: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_remove_default_keeps_name_defined() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("foo", 1);
        resolver.remove_default("foo").unwrap();
        assert!(resolver.is_defined("foo"));
        assert!(!resolver.has_default("foo"));
    }

    #[test]
    fn test_remove_default_undefined() {
        let mut resolver = OptionsResolver::new();
        assert!(resolver.remove_default("foo").is_err());
    }

    #[test]
    fn test_set_required_defines_and_requires() {
        let mut resolver = OptionsResolver::new();
        resolver.set_required(["b", "a"]);
        assert!(resolver.is_defined("a"));
        assert!(resolver.is_required("a"));
        assert_eq!(resolver.required_options(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_is_required_minus_defaults() {
        let mut resolver = OptionsResolver::new();
        resolver.set_required(["a", "b"]).set_default("a", 1);
        assert!(!resolver.is_missing("a"));
        assert!(resolver.is_missing("b"));
        assert_eq!(resolver.missing_options(), vec!["b"]);
    }

    #[test]
    fn test_set_defined_only_defines() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defined("foo");
        assert!(resolver.is_defined("foo"));
        assert!(!resolver.is_required("foo"));
        assert!(!resolver.has_default("foo"));
    }

    #[test]
    fn test_constraint_setters_require_defined_name() {
        let mut resolver = OptionsResolver::new();
        assert!(resolver.set_allowed_values("foo", "bar").is_err());
        assert!(resolver.add_allowed_values("foo", "bar").is_err());
        assert!(resolver.set_allowed_types("foo", "string").is_err());
        assert!(resolver.add_allowed_types("foo", "string").is_err());
        assert!(resolver.set_normalizer("foo", |_, v| v).is_err());
    }

    #[test]
    fn test_add_allowed_values_appends_in_order() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defined("foo");
        resolver.set_allowed_values("foo", "a").unwrap();
        resolver.add_allowed_values("foo", ["b", "a"]).unwrap();
        // Duplicates stay; order is registration order.
        assert_eq!(
            resolver.allowed_values["foo"],
            vec![json!("a"), json!("b"), json!("a")]
        );
    }

    #[test]
    fn test_set_allowed_values_replaces() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defined("foo");
        resolver.set_allowed_values("foo", ["a", "b"]).unwrap();
        resolver.set_allowed_values("foo", "c").unwrap();
        assert_eq!(resolver.allowed_values["foo"], vec![json!("c")]);
    }

    #[test]
    fn test_add_allowed_types_appends_in_order() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defined("foo");
        resolver.set_allowed_types("foo", "string").unwrap();
        resolver.add_allowed_types("foo", ["bool", "string"]).unwrap();
        let names: Vec<&str> = resolver.allowed_types["foo"]
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["string", "bool", "string"]);
    }

    #[test]
    fn test_unknown_type_specifier_fails_at_registration() {
        let mut resolver = OptionsResolver::new();
        resolver.set_defined("foo");
        let err = resolver.set_allowed_types("foo", "Widget").unwrap_err();
        assert!(matches!(err, OptionsError::UnknownType(_)));
        // The failed registration left no constraint behind.
        assert!(!resolver.allowed_types.contains_key("foo"));
    }

    #[test]
    fn test_set_normalizer_last_wins() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("foo", 1);
        resolver.set_normalizer("foo", |_, _| json!("first")).unwrap();
        resolver.set_normalizer("foo", |_, _| json!("second")).unwrap();
        let resolved = resolver.resolve(OptionMap::new()).unwrap();
        assert_eq!(resolved["foo"], json!("second"));
    }

    #[test]
    fn test_remove_purges_everything() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("foo", 1).set_required("foo");
        resolver.set_allowed_types("foo", "int").unwrap();
        resolver.set_allowed_values("foo", 1).unwrap();
        resolver.set_normalizer("foo", |_, v| v).unwrap();

        resolver.remove("foo");
        assert!(!resolver.is_defined("foo"));
        assert!(!resolver.has_default("foo"));
        assert!(!resolver.is_required("foo"));
        assert!(!resolver.allowed_types.contains_key("foo"));
        assert!(!resolver.allowed_values.contains_key("foo"));
        assert!(!resolver.normalizers.contains_key("foo"));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("keep", 1);
        resolver.remove("unknown");
        assert!(resolver.is_defined("keep"));
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut resolver = OptionsResolver::new();
        resolver.set_default("foo", 1).set_required("bar");
        resolver.set_normalizer("foo", |_, v| v).unwrap();
        resolver.clear();
        assert!(resolver.defined_options().is_empty());
        assert!(resolver.required_options().is_empty());
        assert!(resolver.normalizers.is_empty());
        assert_eq!(resolver.resolve(OptionMap::new()).unwrap(), OptionMap::new());
    }

    #[test]
    fn test_fluent_chaining() {
        let mut resolver = OptionsResolver::new();
        resolver
            .set_default("a", 1)
            .set_default("b", 2)
            .set_required("c")
            .set_defined("d");
        assert_eq!(resolver.defined_options(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionsResolver>();
    }
}
