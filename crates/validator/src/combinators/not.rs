//! NOT combinator - logical negation of a verifier
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let not_array = is_array().not();
//! assert!(not_array.verify(&json!("tag"), "tags").is_ok());
//! assert!(not_array.verify(&json!(["tag"]), "tags").is_err());
//! ```

use serde_json::Value;

use crate::foundation::{ErrorKind, IntoVerifier, ValidationError, Verifier, Verify};

/// Inverts a verifier: passes iff the inner verifier fails.
///
/// When the inner verifier passes there is no inner reason to report, so
/// the failure message ends right after `failed: `.
#[derive(Debug, Clone)]
pub struct Not {
    inner: Verifier,
}

impl Not {
    /// Creates a new `Not` around `inner`.
    pub fn new(inner: Verifier) -> Self {
        Self { inner }
    }

    /// Returns the inner verifier.
    pub fn inner(&self) -> &Verifier {
        &self.inner
    }

    /// Extracts the inner verifier.
    pub fn into_inner(self) -> Verifier {
        self.inner
    }
}

impl Verify for Not {
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        match self.inner.verify(value, name) {
            Ok(()) => Err(ValidationError::new(
                ErrorKind::CompositeFailure,
                format!("not verification for {name} failed: "),
            )
            .with_field(name.to_owned())),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a [`Not`] from a verifier.
pub fn not<V: IntoVerifier>(verifier: V) -> Not {
    Not::new(verifier.into_verifier())
}
