//! Prelude module for convenient imports.
//!
//! Provides a single `use reqshape_validator::prelude::*;` import that brings
//! in the traits, verifiers, combinators and matching entry points most
//! callers need.
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("userName", not_null_string().and(is_string_range(1, 20)))
//!     .field("tags", is_array_of(is_string()))
//!     .build();
//! assert_eq!(schema.len(), 2);
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, IntoVerifier, ValidationError, Verifier, Verify, VerifyExt, VerifyResult,
};

// ============================================================================
// VERIFIERS: All built-in verifiers
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::verifiers::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};

// ============================================================================
// MATCHING: Schemas, matcher, requests
// ============================================================================

pub use crate::format::Formatter;
pub use crate::matcher::{Matcher, constraint};
pub use crate::request::{Request, RequestSchema, Section, SectionPolicy, verify_params};
pub use crate::schema::{Schema, SchemaBuilder, SchemaNode};
