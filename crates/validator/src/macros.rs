//! Macros for declaring verifiers with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`verifier!`]: struct, `Verify` impl and factory fn in one declaration
//! - [`all_of!`]: sequential AND over heterogeneous verifiers
//! - [`any_of!`]: exhaustive OR over heterogeneous verifiers
//!
//! # Examples
//!
//! ```
//! use reqshape_validator::verifier;
//! use reqshape_validator::foundation::ValidationError;
//!
//! verifier! {
//!     /// Passes for JSON booleans.
//!     pub IsBool;
//!     rule(value, name) { value.is_boolean() }
//!     error(value, name) {
//!         ValidationError::type_mismatch(name, format!("{name} must be boolean"))
//!     }
//!     fn is_bool();
//! }
//!
//! use reqshape_validator::foundation::Verify;
//! assert!(is_bool().verify(&serde_json::json!(true), "flag").is_ok());
//! ```

// ============================================================================
// VERIFIER MACRO
// ============================================================================

/// Creates a complete verifier: struct definition, `Verify` implementation,
/// constructor, and factory function.
///
/// An optional `requires <expr>;` clause names a verifier that must pass
/// before the rule is evaluated; its failure is returned unchanged.
///
/// # Variants
///
/// **Unit verifier** (zero-sized, no fields):
/// ```rust,ignore
/// verifier! {
///     pub IsArray;
///     rule(value, name) { value.is_array() }
///     error(value, name) { ValidationError::type_mismatch(name, "not array") }
///     fn is_array();
/// }
/// ```
///
/// **Struct with fields** and a prerequisite:
/// ```rust,ignore
/// verifier! {
///     pub StringRange { min: usize, max: usize };
///     requires IsString;
///     rule(self, value, name) { ... }
///     error(self, value, name) { ... }
///     new(min: usize, max: usize) { Self { min, max } }
///     fn is_string_range(min: usize, max: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// verifier! {
///     pub MatchRegex { pattern: regex::Regex };
///     requires IsString;
///     rule(self, value, name) { ... }
///     error(self, value, name) { ... }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn match_regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! verifier {
    // ── Variant 1: Unit verifier + factory fn ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        $(requires $pre:expr;)?
        rule($val:ident, $label:ident) $rule:block
        error($eval:ident, $elabel:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Verify for $name {
            #[allow(unused_variables)]
            fn verify(
                &self,
                $val: &$crate::serde_json::Value,
                $label: &str,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                $( $crate::foundation::Verify::verify(&$pre, $val, $label)?; )?
                if $rule {
                    Ok(())
                } else {
                    let $eval = $val;
                    let $elabel = $label;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 2: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        $(requires $pre:expr;)?
        rule($self_:ident, $val:ident, $label:ident) $rule:block
        error($self2:ident, $eval:ident, $elabel:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Verify for $name {
            #[allow(unused_variables)]
            fn verify(
                &$self_,
                $val: &$crate::serde_json::Value,
                $label: &str,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                $( $crate::foundation::Verify::verify(&$pre, $val, $label)?; )?
                if $rule {
                    Ok(())
                } else {
                    let $eval = $val;
                    let $elabel = $label;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3: Struct with fields + fallible new + fallible factory ─
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        $(requires $pre:expr;)?
        rule($self_:ident, $val:ident, $label:ident) $rule:block
        error($self2:ident, $eval:ident, $elabel:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Verify for $name {
            #[allow(unused_variables)]
            fn verify(
                &$self_,
                $val: &$crate::serde_json::Value,
                $label: &str,
            ) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                $( $crate::foundation::Verify::verify(&$pre, $val, $label)?; )?
                if $rule {
                    Ok(())
                } else {
                    let $eval = $val;
                    let $elabel = $label;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Sequential AND over verifiers of different types.
///
/// ```
/// use reqshape_validator::{all_of, prelude::*};
/// use serde_json::json;
///
/// let id = all_of![is_string(), is_number(), is_integer()];
/// assert!(id.verify(&json!("2455"), "userId").is_ok());
/// assert!(id.verify(&json!("24.5"), "userId").is_err());
/// ```
#[macro_export]
macro_rules! all_of {
    ($($verifier:expr),+ $(,)?) => {
        $crate::combinators::And::new(::std::vec![
            $($crate::foundation::IntoVerifier::into_verifier($verifier)),+
        ])
    };
}

/// Exhaustive OR over verifiers of different types.
///
/// ```
/// use reqshape_validator::{any_of, prelude::*};
/// use serde_json::json;
///
/// let tags = any_of![is_string(), is_array_of(is_string())];
/// assert!(tags.verify(&json!("a"), "tags").is_ok());
/// assert!(tags.verify(&json!(["a", "b"]), "tags").is_ok());
/// assert!(tags.verify(&json!(3), "tags").is_err());
/// ```
#[macro_export]
macro_rules! any_of {
    ($($verifier:expr),+ $(,)?) => {
        $crate::combinators::Or::new(::std::vec![
            $($crate::foundation::IntoVerifier::into_verifier($verifier)),+
        ])
    };
}
