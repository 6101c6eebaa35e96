//! OR combinator - exhaustive disjunction of verifiers
//!
//! Unlike [`And`](super::And), [`Or`] does not short-circuit: every branch
//! runs even after one has passed. When all branches fail, the reasons of
//! every branch are aggregated, in declaration order, into one message.
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let id = is_array().or(is_number());
//! assert!(id.verify(&json!([1]), "id").is_ok());
//! assert!(id.verify(&json!(7), "id").is_ok());
//!
//! let err = id.verify(&json!({}), "id").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "or verification for 'id' failed: 'id' is not array; 'id' cannot convert to number",
//! );
//! ```

use serde_json::Value;

use crate::foundation::{ErrorKind, IntoVerifier, ValidationError, Verifier, Verify};

/// Separator between branch reasons in the aggregate message.
const REASON_SEPARATOR: &str = "; ";

/// Combines verifiers with exhaustive OR.
///
/// An empty `Or` has no branch that can pass and always fails.
#[derive(Debug, Clone, Default)]
pub struct Or {
    verifiers: Vec<Verifier>,
}

impl Or {
    /// Creates a new `Or` over the given verifiers.
    pub fn new(verifiers: Vec<Verifier>) -> Self {
        Self { verifiers }
    }

    /// Appends another alternative.
    pub fn or<V: IntoVerifier>(mut self, other: V) -> Self {
        self.verifiers.push(other.into_verifier());
        self
    }

    /// Returns the alternatives.
    pub fn verifiers(&self) -> &[Verifier] {
        &self.verifiers
    }
}

impl Verify for Or {
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        let mut passed = false;
        let mut reasons = Vec::new();

        for verifier in &self.verifiers {
            match verifier.verify(value, name) {
                Ok(()) => passed = true,
                Err(reason) => reasons.push(reason),
            }
        }

        if passed {
            return Ok(());
        }

        let joined = reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(REASON_SEPARATOR);

        Err(ValidationError::new(
            ErrorKind::CompositeFailure,
            format!("or verification for '{name}' failed: {joined}"),
        )
        .with_field(name.to_owned())
        .with_nested(reasons))
    }
}

/// Creates an [`Or`] from any collection of verifiers.
pub fn or<I>(verifiers: I) -> Or
where
    I: IntoIterator,
    I::Item: IntoVerifier,
{
    Or::new(
        verifiers
            .into_iter()
            .map(IntoVerifier::into_verifier)
            .collect(),
    )
}
