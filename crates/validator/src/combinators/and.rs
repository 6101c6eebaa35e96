//! AND combinator - sequential conjunction of verifiers
//!
//! [`And`] runs its verifiers in order and stops at the first failure, so a
//! later verifier never sees a value an earlier one rejected.
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let user_id = and([is_string().into_verifier(), is_number().into_verifier()]);
//! assert!(user_id.verify(&json!("2455"), "userId").is_ok());
//!
//! let err = user_id.verify(&json!(2455), "userId").unwrap_err();
//! assert_eq!(err.to_string(), "and verification for 'userId' failed: userId must be string");
//! ```

use serde_json::Value;

use crate::foundation::{ErrorKind, IntoVerifier, ValidationError, Verifier, Verify};

/// Combines verifiers with sequential AND.
///
/// The first failing verifier's reason is wrapped into a
/// [`ErrorKind::CompositeFailure`] and the remaining verifiers are skipped.
/// An empty `And` passes.
#[derive(Debug, Clone, Default)]
pub struct And {
    verifiers: Vec<Verifier>,
}

impl And {
    /// Creates a new `And` over the given verifiers.
    pub fn new(verifiers: Vec<Verifier>) -> Self {
        Self { verifiers }
    }

    /// Appends another verifier to the chain.
    ///
    /// `a.and(b).and(c)` builds one flat `And` of three verifiers.
    pub fn and<V: IntoVerifier>(mut self, other: V) -> Self {
        self.verifiers.push(other.into_verifier());
        self
    }

    /// Returns the chained verifiers.
    pub fn verifiers(&self) -> &[Verifier] {
        &self.verifiers
    }
}

impl Verify for And {
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        for verifier in &self.verifiers {
            if let Err(reason) = verifier.verify(value, name) {
                return Err(ValidationError::new(
                    ErrorKind::CompositeFailure,
                    format!("and verification for '{name}' failed: {reason}"),
                )
                .with_field(name.to_owned())
                .with_nested_error(reason));
            }
        }
        Ok(())
    }
}

/// Creates an [`And`] from any collection of verifiers.
pub fn and<I>(verifiers: I) -> And
where
    I: IntoIterator,
    I::Item: IntoVerifier,
{
    And::new(
        verifiers
            .into_iter()
            .map(IntoVerifier::into_verifier)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::VerifyExt;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn probe(calls: &Arc<AtomicUsize>, pass: bool) -> Verifier {
        let calls = Arc::clone(calls);
        Verifier::from_fn(move |_, name| {
            calls.fetch_add(1, Ordering::SeqCst);
            if pass {
                Ok(())
            } else {
                Err(ValidationError::custom(format!("{name} rejected")))
            }
        })
    }

    #[test]
    fn all_pass() {
        let calls = Arc::new(AtomicUsize::new(0));
        let v = and([probe(&calls, true), probe(&calls, true)]);
        assert!(v.verify(&json!(1), "x").is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn stops_at_first_failure() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let v = and([probe(&first, false), probe(&second, true)]);

        let err = v.verify(&json!(1), "x").unwrap_err();
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
        assert_eq!(err.kind, ErrorKind::CompositeFailure);
        assert_eq!(err.to_string(), "and verification for 'x' failed: x rejected");
        assert_eq!(err.nested.len(), 1);
    }

    #[test]
    fn chaining_stays_flat() {
        let calls = Arc::new(AtomicUsize::new(0));
        let v = probe(&calls, true)
            .and(probe(&calls, true))
            .and(probe(&calls, false));
        assert_eq!(v.verifiers().len(), 3);

        let err = v.verify(&json!(1), "x").unwrap_err();
        assert_eq!(err.to_string(), "and verification for 'x' failed: x rejected");
    }

    #[test]
    fn empty_and_passes() {
        assert!(And::default().verify(&json!(null), "x").is_ok());
    }
}
