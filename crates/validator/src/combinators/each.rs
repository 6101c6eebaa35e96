//! ARRAY-OF combinator - verifies each element of an array

use serde_json::Value;

use crate::foundation::{IntoVerifier, ValidationError, Verifier, Verify};
use crate::verifiers::IsArray;

/// Verifies that a value is an array and that every element passes `child`.
///
/// Elements are labelled `"<name>[<index>]"`. The first failing element
/// aborts verification and its error is returned as is.
///
/// # Examples
///
/// ```
/// use reqshape_validator::prelude::*;
/// use serde_json::json;
///
/// let langs = is_array_of(is_string());
/// assert!(langs.verify(&json!(["ja", "en"]), "langs").is_ok());
///
/// let err = langs.verify(&json!(["a", 2, "c"]), "langs").unwrap_err();
/// assert_eq!(err.to_string(), "langs[1] must be string");
/// assert_eq!(err.field.as_deref(), Some("langs[1]"));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayOf {
    child: Verifier,
}

impl ArrayOf {
    /// Creates a new `ArrayOf` applying `child` to each element.
    pub fn new(child: Verifier) -> Self {
        Self { child }
    }

    /// Returns the element verifier.
    pub fn child(&self) -> &Verifier {
        &self.child
    }
}

impl Verify for ArrayOf {
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        IsArray.verify(value, name)?;
        let Value::Array(items) = value else {
            return Ok(());
        };
        for (index, item) in items.iter().enumerate() {
            self.child.verify(item, &format!("{name}[{index}]"))?;
        }
        Ok(())
    }
}

/// Creates an [`ArrayOf`] from an element verifier.
pub fn is_array_of<V: IntoVerifier>(child: V) -> ArrayOf {
    ArrayOf::new(child.into_verifier())
}

// ============================================================================
// TESTS
// ============================================================================
