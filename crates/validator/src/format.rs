//! Error formatting bound to a matcher.
//!
//! A [`Formatter`] turns the [`ValidationError`] of a failed validation into
//! the error type the surrounding application works with, for example an
//! HTTP `400` response type. Each [`Matcher`](crate::matcher::Matcher)
//! owns one, so matchers with different formatting policies can coexist.

use std::fmt;
use std::sync::Arc;

use crate::foundation::ValidationError;

/// Converts validation failures into an application error type.
///
/// ```
/// use reqshape_validator::format::Formatter;
/// use reqshape_validator::foundation::ValidationError;
///
/// let status = Formatter::new(|err: ValidationError| (400_u16, err.to_string()));
/// let (code, body) = status.format(ValidationError::missing("age"));
/// assert_eq!(code, 400);
/// assert_eq!(body, "parameter 'age' must be provided");
/// ```
pub struct Formatter<E> {
    inner: Arc<dyn Fn(ValidationError) -> E + Send + Sync>,
}

impl Formatter<ValidationError> {
    /// The default formatter: returns the error unchanged.
    pub fn identity() -> Self {
        Self::new(std::convert::identity)
    }
}

impl<E> Formatter<E> {
    /// Wraps a conversion function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(ValidationError) -> E + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Applies the conversion.
    pub fn format(&self, error: ValidationError) -> E {
        (self.inner)(error)
    }
}

impl Default for Formatter<ValidationError> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<E> Clone for Formatter<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for Formatter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("output", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_error_unchanged() {
        let error = ValidationError::unexpected("extra");
        assert_eq!(Formatter::identity().format(error.clone()), error);
    }

    #[test]
    fn clones_share_the_conversion() {
        let formatter = Formatter::new(|err: ValidationError| err.code());
        let clone = formatter.clone();
        assert_eq!(clone.format(ValidationError::missing("a")), "missing_value");
        assert!(Arc::ptr_eq(&formatter.inner, &clone.inner));
    }
}
