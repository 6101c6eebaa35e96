//! String content verifiers
//!
//! Verifiers for checking string content against patterns.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{ValidationError, Verify};
use crate::verifiers::IsString;

static EMAIL_REGEX: LazyLock<MatchRegex> = LazyLock::new(|| {
    MatchRegex::with_regex(
        Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
            .expect("email pattern compiles"),
    )
});

// ============================================================================
// REGEX VERIFIER
// ============================================================================

crate::verifier! {
    /// Passes for strings the regular expression matches.
    ///
    /// Matching uses search semantics: anchor the pattern with `^...$` to
    /// require the whole string to match.
    pub MatchRegex { pattern: Regex };
    requires IsString;
    rule(self, value, name) { value.as_str().is_some_and(|s| self.pattern.is_match(s)) }
    error(self, value, name) {
        ValidationError::pattern_mismatch(name, format!("regex verification failed for '{name}'"))
            .with_param("pattern", self.pattern.as_str().to_owned())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self { pattern: Regex::new(pattern)? })
    }
    fn match_regex(pattern: &str) -> regex::Error;
}

impl MatchRegex {
    /// Builds the verifier from an already compiled expression.
    pub fn with_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// The expression values are matched against.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// Creates a [`MatchRegex`] from a compiled expression.
pub fn match_regex_with(pattern: Regex) -> MatchRegex {
    MatchRegex::with_regex(pattern)
}

// ============================================================================
// EMAIL VERIFIER
// ============================================================================

/// Passes for strings shaped like an email address.
///
/// Every failure, including a non-string value, is reported with the same
/// "not a valid email expression" reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsEmailAddress;

impl Verify for IsEmailAddress {
    fn verify(&self, value: &Value, name: &str) -> Result<(), ValidationError> {
        EMAIL_REGEX.verify(value, name).map_err(|_| {
            ValidationError::pattern_mismatch(
                name,
                format!("'{name}' is not a valid email expression"),
            )
        })
    }
}

/// Creates an [`IsEmailAddress`] verifier.
#[must_use]
pub const fn is_email_address() -> IsEmailAddress {
    IsEmailAddress
}

// ============================================================================
// CHARACTER COUNT VERIFIER
// ============================================================================

crate::verifier! {
    /// Passes for strings containing between `min` and `max` (inclusive)
    /// characters from a character class.
    ///
    /// `chars` is the body of a regex character class, so `"a-z"` is a
    /// range and `"!@#"` a set of three symbols. An empty class matches
    /// nothing.
    pub ContainsCharsOfRange { class: Option<Regex>, min: usize, max: usize };
    requires IsString;
    rule(self, value, name) {
        let count = match (&self.class, value.as_str()) {
            (Some(class), Some(s)) => class.find_iter(s).count(),
            _ => 0,
        };
        self.min <= count && count <= self.max
    }
    error(self, value, name) {
        ValidationError::pattern_mismatch(
            name,
            format!("contains chars of range verification failed for {name}"),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
    }
    new(chars: &str, min: usize, max: usize) -> regex::Error {
        let class = if chars.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("[{chars}]"))?)
        };
        Ok(Self { class, min, max })
    }
    fn contains_chars_of_range(chars: &str, min: usize, max: usize) -> regex::Error;
}

// ============================================================================
// TESTS
// ============================================================================
