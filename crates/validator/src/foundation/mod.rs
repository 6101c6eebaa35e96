//! Core verification types and traits
//!
//! This module contains the building blocks the rest of the crate is made of:
//!
//! - **Traits**: [`Verify`], [`IntoVerifier`], [`VerifyExt`]
//! - **Handle**: [`Verifier`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//! - **Coercion**: [`truthy`], [`to_number`]
//!
//! # Composition
//!
//! Verifiers compose using logical combinators:
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let name = not_null_string().and(is_string_range(1, 20));
//! assert!(name.verify(&json!("foobar"), "userName").is_ok());
//! assert!(name.verify(&json!(""), "userName").is_err());
//! ```

pub mod coerce;
pub mod error;
pub mod traits;

pub use coerce::{to_number, truthy};
pub use error::{ErrorKind, ValidationError};
pub use traits::{IntoVerifier, Verifier, Verify, VerifyExt};

/// A verification result using the standard `ValidationError`.
pub type VerifyResult = Result<(), ValidationError>;
