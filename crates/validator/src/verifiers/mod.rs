//! Built-in verifiers
//!
//! Ready-to-use leaf predicates for request fields.
//!
//! # Categories
//!
//! - **Primitive**: [`not_null`], [`is_string`], [`is_number`], [`is_integer`],
//!   [`not_null_string`], [`is_array`]
//! - **Range**: [`is_string_range`], [`is_number_range`]
//! - **Content**: [`match_regex`], [`is_email_address`], [`contains_chars_of_range`]
//! - **Collection**: [`is_array_of`]
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::prelude::*;
//! use serde_json::json;
//!
//! let password = not_null_string()
//!     .and(is_string_range(8, 64))
//!     .and(contains_chars_of_range("0-9", 1, 64).unwrap());
//! assert!(password.verify(&json!("hunter22a"), "password").is_ok());
//! assert!(password.verify(&json!("hunter"), "password").is_err());
//! ```

pub mod content;
pub mod primitive;
pub mod range;

pub use content::{
    ContainsCharsOfRange, IsEmailAddress, MatchRegex, contains_chars_of_range, is_email_address,
    match_regex, match_regex_with,
};
pub use primitive::{
    IsArray, IsInteger, IsNumber, IsString, NotNull, NotNullString, is_array, is_integer,
    is_number, is_string, not_null, not_null_string,
};
pub use range::{NumberRange, StringRange, is_number_range, is_string_range};

pub use crate::combinators::{ArrayOf, is_array_of};
