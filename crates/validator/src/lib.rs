//! # reqshape-validator
//!
//! Declarative allow-schema validation for API request data.
//!
//! A schema lists the keys a data object may carry and pairs each with a
//! verifier or a nested schema. The [`Matcher`] walks data against it,
//! rejecting unlisted keys, reporting missing ones and running verifiers,
//! and stops at the first failure.
//!
//! ## Quick Start
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("userName", not_null_string().and(is_string_range(1, 20)))
//!     .field("age", is_integer().and(is_number_range(0, 150)))
//!     .nested("data", Schema::builder().field("weight", is_number()))
//!     .build();
//!
//! let ok = json!({ "userName": "foobar", "age": 20, "data": { "weight": 60 } });
//! assert!(constraint(ok.as_object().unwrap(), &schema, false).is_ok());
//!
//! let bad = json!({ "userName": "foobar", "age": 20, "data": { "weight": "heavy" } });
//! let err = constraint(bad.as_object().unwrap(), &schema, false).unwrap_err();
//! assert_eq!(err.field.as_deref(), Some("data.weight"));
//! ```
//!
//! ## Creating Verifiers
//!
//! Use the [`verifier!`] macro for zero-boilerplate verifiers, pass a
//! closure, or implement [`Verify`](foundation::Verify) manually.
//!
//! ## Built-in Verifiers
//!
//! - **Type**: [`not_null`](verifiers::not_null), [`is_string`](verifiers::is_string),
//!   [`is_number`](verifiers::is_number), [`is_integer`](verifiers::is_integer),
//!   [`is_array`](verifiers::is_array)
//! - **Range**: [`is_string_range`](verifiers::is_string_range),
//!   [`is_number_range`](verifiers::is_number_range)
//! - **Content**: [`match_regex`](verifiers::match_regex),
//!   [`is_email_address`](verifiers::is_email_address),
//!   [`contains_chars_of_range`](verifiers::contains_chars_of_range)
//! - **Combinators**: [`and`](combinators::and), [`or`](combinators::or),
//!   [`not`](combinators::not), [`is_array_of`](combinators::is_array_of)
//!
//! ## Requests
//!
//! [`verify_params`] validates the `params`, `headers`, `query`, `body` and
//! `cookies` sections of a request, each against its own schema.

// ValidationError is returned by value from every verifier; boxing it
// would add an allocation to each failing check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod format;
pub mod foundation;
mod macros;
pub mod matcher;
pub mod prelude;
pub mod request;
pub mod schema;
pub mod verifiers;

pub use matcher::{Matcher, constraint};
pub use request::verify_params;

#[doc(hidden)]
pub use serde_json;
