//! Core traits for the verification system
//!
//! A verifier is a predicate over a JSON value and the label of the field it
//! came from. [`Verify`] is the trait every verifier implements; [`Verifier`]
//! is the shared, type-erased handle that schemas and combinators store.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::combinators::{And, ArrayOf, Not, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VERIFIER TRAIT
// ============================================================================

/// The trait every verifier implements.
///
/// Verifiers must be stateless with respect to a validation: one instance is
/// typically built at startup and then shared by every request, possibly
/// across threads, hence the `Send + Sync` bound.
///
/// Closures and plain functions with the right signature are verifiers too:
///
/// ```
/// use reqshape_validator::foundation::{ValidationError, Verify};
/// use serde_json::{Value, json};
///
/// fn even(value: &Value, name: &str) -> Result<(), ValidationError> {
///     match value.as_i64() {
///         Some(n) if n % 2 == 0 => Ok(()),
///         _ => Err(ValidationError::custom(format!("'{name}' must be even"))),
///     }
/// }
///
/// assert!(even.verify(&json!(4), "count").is_ok());
/// assert!(even.verify(&json!(3), "count").is_err());
/// ```
pub trait Verify: Send + Sync {
    /// Checks `value`, reporting failures against the label `name`.
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError>;
}

impl<F> Verify for F
where
    F: Fn(&Value, &str) -> Result<(), ValidationError> + Send + Sync,
{
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        self(value, name)
    }
}

// ============================================================================
// SHARED HANDLE
// ============================================================================

/// A cheaply clonable, thread-safe handle to any verifier.
#[derive(Clone)]
pub struct Verifier {
    inner: Arc<dyn Verify>,
}

impl Verifier {
    /// Erases a concrete verifier into a shared handle.
    pub fn new<V: Verify + 'static>(verifier: V) -> Self {
        Self {
            inner: Arc::new(verifier),
        }
    }

    /// Wraps a closure as a verifier.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Runs the verifier.
    #[inline]
    pub fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        self.inner.verify(value, name)
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier").finish_non_exhaustive()
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Conversion into a [`Verifier`] handle.
///
/// Implemented for every [`Verify`] type and for `Verifier` itself, so APIs
/// that store verifiers accept either without double wrapping.
pub trait IntoVerifier {
    /// Performs the conversion.
    fn into_verifier(self) -> Verifier;
}

impl<V: Verify + 'static> IntoVerifier for V {
    fn into_verifier(self) -> Verifier {
        Verifier::new(self)
    }
}

impl IntoVerifier for Verifier {
    fn into_verifier(self) -> Verifier {
        self
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods for every verifier.
///
/// ```
/// use reqshape_validator::prelude::*;
/// use serde_json::json;
///
/// let id = is_string().and(is_number());
/// assert!(id.verify(&json!("2455"), "userId").is_ok());
/// assert!(id.verify(&json!("abc"), "userId").is_err());
/// ```
pub trait VerifyExt: IntoVerifier + Sized {
    /// Sequential AND: stops at the first failing verifier.
    fn and<V: IntoVerifier>(self, other: V) -> And {
        And::new(vec![self.into_verifier(), other.into_verifier()])
    }

    /// Exhaustive OR: runs every verifier, passes if any passed.
    fn or<V: IntoVerifier>(self, other: V) -> Or {
        Or::new(vec![self.into_verifier(), other.into_verifier()])
    }

    /// Inverts the verifier.
    fn not(self) -> Not {
        Not::new(self.into_verifier())
    }

    /// Applies the verifier to every element of an array.
    fn array_of(self) -> ArrayOf {
        ArrayOf::new(self.into_verifier())
    }
}

impl<T: IntoVerifier> VerifyExt for T {}

// ============================================================================
// TESTS
// ============================================================================
