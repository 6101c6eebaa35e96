//! Range verifiers
//!
//! Both bounds are inclusive. The type prerequisite runs first, so a value of
//! the wrong type reports a type mismatch rather than a range violation.

use crate::foundation::{ValidationError, to_number};
use crate::verifiers::{IsNumber, IsString};

crate::verifier! {
    /// Passes for strings whose length lies in `[min, max]`.
    ///
    /// Length is counted in UTF-16 code units, the way a JavaScript client
    /// measures it: characters outside the Basic Multilingual Plane count
    /// twice.
    #[derive(PartialEq, Eq, Hash)]
    pub StringRange { min: usize, max: usize };
    requires IsString;
    rule(self, value, name) {
        value
            .as_str()
            .map(|s| s.encode_utf16().count())
            .is_some_and(|len| self.min <= len && len <= self.max)
    }
    error(self, value, name) {
        ValidationError::out_of_range(
            name,
            format!("range of '{name}' string length must be [{}, {}]", self.min, self.max),
            self.min,
            self.max,
        )
    }
    new(min: usize, max: usize) { Self { min, max } }
    fn is_string_range(min: usize, max: usize);
}

impl StringRange {
    /// Lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> usize {
        self.max
    }
}

crate::verifier! {
    /// Passes when `Number(value)` lies in `[min, max]`.
    #[derive(PartialEq)]
    pub NumberRange { min: f64, max: f64 };
    requires IsNumber;
    rule(self, value, name) {
        let n = to_number(value);
        self.min <= n && n <= self.max
    }
    error(self, value, name) {
        ValidationError::out_of_range(
            name,
            format!("range of '{name}' must be [{}, {}]", self.min, self.max),
            self.min,
            self.max,
        )
    }
    new(min: impl Into<f64>, max: impl Into<f64>) {
        Self { min: min.into(), max: max.into() }
    }
    fn is_number_range(min: impl Into<f64>, max: impl Into<f64>);
}

impl NumberRange {
    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, Verify};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case("", false)]
    #[case("h", true)]
    #[case("hello", true)]
    #[case("hello!", false)]
    fn string_range_bounds(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(is_string_range(1, 5).verify(&json!(input), "name").is_ok(), ok);
    }

    #[rstest]
    #[case("h\u{e9}llo", 5, true)]
    #[case("\u{1F600}", 2, true)]
    #[case("\u{1F600}", 1, false)]
    #[case("a\u{1D11E}b", 4, true)]
    fn string_range_counts_utf16_units(
        #[case] input: &str,
        #[case] len: usize,
        #[case] ok: bool,
    ) {
        assert_eq!(is_string_range(len, len).verify(&json!(input), "s").is_ok(), ok);
    }

    #[test]
    fn string_range_error() {
        let err = is_string_range(1, 5).verify(&json!("hello!"), "name").unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeViolation);
        assert_eq!(err.to_string(), "range of 'name' string length must be [1, 5]");
        assert_eq!(err.param("min"), Some("1"));
        assert_eq!(err.param("max"), Some("5"));
    }

    #[test]
    fn string_range_requires_string() {
        let err = is_string_range(1, 5).verify(&json!(3), "name").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "name must be string");
    }

    #[rstest]
    #[case(json!(0), true)]
    #[case(json!(150), true)]
    #[case(json!("42"), true)]
    #[case(json!(-1), false)]
    #[case(json!(150.5), false)]
    fn number_range_bounds(#[case] value: Value, #[case] ok: bool) {
        assert_eq!(is_number_range(0, 150).verify(&value, "age").is_ok(), ok);
    }

    #[test]
    fn number_range_errors() {
        let err = is_number_range(0, 150).verify(&json!(200), "age").unwrap_err();
        assert_eq!(err.to_string(), "range of 'age' must be [0, 150]");

        let err = is_number_range(0.5, 1.5).verify(&json!("x"), "ratio").unwrap_err();
        assert_eq!(err.to_string(), "'ratio' cannot convert to number");
    }
}
