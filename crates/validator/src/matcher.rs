//! Constraint matching
//!
//! The [`Matcher`] walks a data object against an allow-schema, depth first,
//! one level at a time. Each level runs two passes:
//!
//! 1. **Extra-key pass** over the data keys: a key the schema does not list
//!    fails with "unnecessary parameter" unless extras are allowed; a key
//!    whose schema node is nested and whose value is an object is matched
//!    recursively.
//! 2. **Required-key pass** over the schema keys: a key absent from the data
//!    fails with "must be provided"; a leaf key runs its verifier.
//!
//! The first failure aborts the whole traversal.
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("userName", is_string())
//!     .field("age", is_number())
//!     .build();
//!
//! let data = json!({ "userName": "foobar", "age": 20 });
//! assert!(constraint(data.as_object().unwrap(), &schema, false).is_ok());
//!
//! let data = json!({ "userName": "foobar", "age": 20, "extra": 1 });
//! let err = constraint(data.as_object().unwrap(), &schema, false).unwrap_err();
//! assert_eq!(err.to_string(), "'extra' is unnecessary parameter");
//! ```

use std::fmt;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::format::Formatter;
use crate::foundation::{ErrorKind, ValidationError};
use crate::request::SectionPolicy;
use crate::schema::{Schema, SchemaNode};

static DEFAULT_MATCHER: LazyLock<Matcher> = LazyLock::new(Matcher::new);

// ============================================================================
// MATCHER
// ============================================================================

/// A validation engine bound to an error formatter and a request-section
/// policy.
///
/// Matchers hold no per-validation state; one instance can serve any number
/// of concurrent validations.
pub struct Matcher<E = ValidationError> {
    formatter: Formatter<E>,
    sections: SectionPolicy,
}

impl<E> Clone for Matcher<E> {
    fn clone(&self) -> Self {
        Self {
            formatter: self.formatter.clone(),
            sections: self.sections,
        }
    }
}

impl<E> fmt::Debug for Matcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("formatter", &self.formatter)
            .field("sections", &self.sections)
            .finish()
    }
}

impl Matcher<ValidationError> {
    /// A matcher that surfaces [`ValidationError`] unchanged.
    pub fn new() -> Self {
        Self::from_formatter(Formatter::identity())
    }

    /// A matcher that converts every failure with `f`.
    ///
    /// ```
    /// use reqshape_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct BadRequest(String);
    ///
    /// let matcher = Matcher::with_formatter(|err: ValidationError| BadRequest(err.to_string()));
    /// let schema = Schema::builder().field("age", is_number()).build();
    /// let data = json!({});
    ///
    /// assert_eq!(
    ///     matcher.constraint(data.as_object().unwrap(), &schema, false),
    ///     Err(BadRequest("parameter 'age' must be provided".into())),
    /// );
    /// ```
    pub fn with_formatter<E, F>(f: F) -> Matcher<E>
    where
        F: Fn(ValidationError) -> E + Send + Sync + 'static,
    {
        Matcher::from_formatter(Formatter::new(f))
    }
}

impl Default for Matcher<ValidationError> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Matcher<E> {
    /// A matcher using an existing formatter.
    pub fn from_formatter(formatter: Formatter<E>) -> Self {
        Self {
            formatter,
            sections: SectionPolicy::default(),
        }
    }

    /// Replaces the request-section extra-key policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_section_policy(mut self, sections: SectionPolicy) -> Self {
        self.sections = sections;
        self
    }

    /// The formatter failures pass through.
    pub fn formatter(&self) -> &Formatter<E> {
        &self.formatter
    }

    /// The request-section extra-key policy.
    pub fn section_policy(&self) -> &SectionPolicy {
        &self.sections
    }

    /// Validates `data` against `schema`.
    ///
    /// `allow_extra_keys` tolerates unlisted keys at every level; a schema's
    /// own flag tolerates them at that schema's level only.
    pub fn constraint(
        &self,
        data: &Map<String, Value>,
        schema: &Schema,
        allow_extra_keys: bool,
    ) -> Result<(), E> {
        let _span = tracing::debug_span!("constraint", keys = data.len()).entered();
        match_level(data, schema, allow_extra_keys, "").map_err(|err| self.fail(err))
    }

    /// Validates a JSON value that must be an object.
    pub fn constraint_value(
        &self,
        data: &Value,
        schema: &Schema,
        allow_extra_keys: bool,
    ) -> Result<(), E> {
        match data {
            Value::Object(map) => self.constraint(map, schema, allow_extra_keys),
            _ => Err(self.fail(ValidationError::new(
                ErrorKind::TypeMismatch,
                "data must be object",
            ))),
        }
    }

    pub(crate) fn fail(&self, err: ValidationError) -> E {
        tracing::debug!(
            field = err.field.as_deref().unwrap_or_default(),
            code = err.code(),
            "validation failed: {err}"
        );
        self.formatter.format(err)
    }
}

/// Validates `data` against `schema` with the default matcher.
pub fn constraint(
    data: &Map<String, Value>,
    schema: &Schema,
    allow_extra_keys: bool,
) -> Result<(), ValidationError> {
    DEFAULT_MATCHER.constraint(data, schema, allow_extra_keys)
}

// ============================================================================
// TRAVERSAL
// ============================================================================

/// Matches one level; `path` is the dotted path of `data` ("" at the root).
pub(crate) fn match_level(
    data: &Map<String, Value>,
    schema: &Schema,
    allow_extra_keys: bool,
    path: &str,
) -> Result<(), ValidationError> {
    tracing::trace!(path, keys = data.len(), "matching level");
    let extra = allow_extra_keys || schema.allows_extra_keys();

    for (key, value) in data {
        match schema.get(key) {
            None if !extra => return Err(ValidationError::unexpected(key).under(path)),
            Some(SchemaNode::Nested(sub)) => {
                if let Value::Object(inner) = value {
                    match_level(inner, sub, allow_extra_keys, &join(path, key))?;
                }
            }
            _ => {}
        }
    }

    for (key, node) in schema.iter() {
        let Some(value) = data.get(key) else {
            return Err(ValidationError::missing(key).under(path));
        };
        match node {
            SchemaNode::Leaf(verifier) => {
                verifier.verify(value, key).map_err(|err| {
                    let err = if err.field.is_none() {
                        err.with_field(key.to_owned())
                    } else {
                        err
                    };
                    err.under(path)
                })?;
            }
            // Only object values are matched against a nested schema;
            // anything else passes through unchecked.
            SchemaNode::Nested(_) => {}
        }
    }

    Ok(())
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

// ============================================================================
// TESTS
// ============================================================================
