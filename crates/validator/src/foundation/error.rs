//! Error types for validation failures
//!
//! Every verifier and the constraint matcher report failures as a
//! [`ValidationError`]: a kind from the [`ErrorKind`] taxonomy, a
//! human-readable message naming the offending field, an optional dotted
//! field path, ordered parameters, and the nested errors of composite
//! verifiers.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required key is absent from the data.
    MissingValue,
    /// A key is present in the data but not permitted by the schema.
    UnexpectedKey,
    /// A leaf value fails a primitive type predicate.
    TypeMismatch,
    /// A leaf value is outside a numeric or length bound.
    RangeViolation,
    /// A leaf value fails a regular-expression or character-count rule.
    PatternMismatch,
    /// An `and` / `or` / `not` combinator failed, carrying the nested reasons.
    CompositeFailure,
    /// Raised by a user-supplied verifier.
    Custom,
}

impl ErrorKind {
    /// Stable snake-case code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingValue => "missing_value",
            Self::UnexpectedKey => "unexpected_key",
            Self::TypeMismatch => "type_mismatch",
            Self::RangeViolation => "range_violation",
            Self::PatternMismatch => "pattern_mismatch",
            Self::CompositeFailure => "composite_failure",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// `Display` renders only the message, because composite verifiers build
/// their own reason by concatenating the messages of their children.
///
/// # Examples
///
/// ```
/// use reqshape_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::RangeViolation, "range of 'age' must be [0, 150]")
///     .with_field("age")
///     .with_param("min", "0")
///     .with_param("max", "150");
///
/// assert_eq!(error.to_string(), "range of 'age' must be [0, 150]");
/// assert_eq!(error.param("max"), Some("150"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Failure classification.
    pub kind: ErrorKind,

    /// Human-readable reason, naming the field and the rule.
    pub message: Cow<'static, str>,

    /// Dotted path of the offending field.
    ///
    /// Examples: "age", "data.weight", "body.langs[1]"
    pub field: Option<Cow<'static, str>>,

    /// Ordered parameters of the violated rule (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Errors of the children of a composite verifier.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Prefixes the field path with a parent segment.
    ///
    /// `"weight"` under `"data"` becomes `"data.weight"`; an error without a
    /// field takes the parent as its field.
    #[must_use = "builder methods must be chained or built"]
    pub fn under(mut self, parent: &str) -> Self {
        if parent.is_empty() {
            return self;
        }
        self.field = Some(match self.field.take() {
            Some(field) if !field.is_empty() => Cow::Owned(format!("{parent}.{field}")),
            _ => Cow::Owned(parent.to_owned()),
        });
        self
    }

    /// Stable code of this error's kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors (including nested).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Converts the error tree to JSON, for HTTP-layer formatters.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code(),
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A required key is absent from the data.
    pub fn missing(key: &str) -> Self {
        Self::new(
            ErrorKind::MissingValue,
            format!("parameter '{key}' must be provided"),
        )
        .with_field(key.to_owned())
    }

    /// A data key the schema does not permit.
    pub fn unexpected(key: &str) -> Self {
        Self::new(
            ErrorKind::UnexpectedKey,
            format!("'{key}' is unnecessary parameter"),
        )
        .with_field(key.to_owned())
    }

    /// A value of the wrong category for `name`.
    pub fn type_mismatch(name: &str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::TypeMismatch, message).with_field(name.to_owned())
    }

    /// A value outside `[min, max]`.
    pub fn out_of_range<T: fmt::Display>(
        name: &str,
        message: impl Into<Cow<'static, str>>,
        min: T,
        max: T,
    ) -> Self {
        Self::new(ErrorKind::RangeViolation, message)
            .with_field(name.to_owned())
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
    }

    /// A value that fails a pattern rule.
    pub fn pattern_mismatch(name: &str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::PatternMismatch, message).with_field(name.to_owned())
    }

    /// A failure raised by a user-supplied verifier.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Custom, message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let error = ValidationError::missing("age");
        assert_eq!(error.to_string(), "parameter 'age' must be provided");
        assert_eq!(error.code(), "missing_value");
        assert_eq!(error.field.as_deref(), Some("age"));
    }

    #[test]
    fn under_builds_dotted_paths() {
        let error = ValidationError::unexpected("extra").under("data").under("body");
        assert_eq!(error.field.as_deref(), Some("body.data.extra"));
    }

    #[test]
    fn under_fills_missing_field() {
        let error = ValidationError::custom("nope").under("token");
        assert_eq!(error.field.as_deref(), Some("token"));
    }

    #[test]
    fn under_empty_parent_is_noop() {
        let error = ValidationError::missing("age").under("");
        assert_eq!(error.field.as_deref(), Some("age"));
    }

    #[test]
    fn nested_count() {
        let error = ValidationError::new(ErrorKind::CompositeFailure, "or failed").with_nested(vec![
            ValidationError::custom("a"),
            ValidationError::custom("b").with_nested_error(ValidationError::custom("c")),
        ]);
        assert!(error.has_nested());
        assert_eq!(error.total_error_count(), 4);
    }

    #[test]
    fn range_params() {
        let error = ValidationError::out_of_range("age", "out", 1, 5);
        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("actual"), None);
    }

    #[test]
    fn static_strings_stay_borrowed() {
        let error = ValidationError::custom("static reason");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn kind_serializes_as_code() {
        let json = serde_json::to_value(ErrorKind::RangeViolation).unwrap();
        assert_eq!(json, serde_json::json!("range_violation"));
    }
}
