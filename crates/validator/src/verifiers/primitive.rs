//! Primitive type verifiers
//!
//! These judge values the way a JavaScript client would: truthiness for
//! [`NotNull`], `Number(value)` for [`IsNumber`] and [`IsInteger`].

use crate::foundation::{ValidationError, to_number, truthy};

crate::verifier! {
    /// Passes for truthy values.
    ///
    /// `null`, `false`, `0`, `""` and NaN all count as null. Empty arrays and
    /// objects are truthy and pass.
    pub NotNull;
    rule(value, name) { truthy(value) }
    error(value, name) {
        ValidationError::type_mismatch(name, format!("{name} must not be null"))
    }
    fn not_null();
}

crate::verifier! {
    /// Passes for JSON strings.
    pub IsString;
    rule(value, name) { value.is_string() }
    error(value, name) {
        ValidationError::type_mismatch(name, format!("{name} must be string"))
    }
    fn is_string();
}

crate::verifier! {
    /// Passes when `Number(value)` is not NaN, so `"42"` passes and `"abc"`
    /// does not.
    pub IsNumber;
    rule(value, name) { !to_number(value).is_nan() }
    error(value, name) {
        ValidationError::type_mismatch(name, format!("'{name}' cannot convert to number"))
    }
    fn is_number();
}

crate::verifier! {
    /// Passes when `Number(value)` is finite with no fractional part.
    ///
    /// Values that do not convert to a number (NaN) and infinities are
    /// rejected.
    pub IsInteger;
    rule(value, name) {
        let n = to_number(value);
        n.is_finite() && n % 1.0 == 0.0
    }
    error(value, name) {
        ValidationError::type_mismatch(name, format!("'{name}' is not integer"))
    }
    fn is_integer();
}

crate::verifier! {
    /// [`NotNull`] then [`IsString`], stopping at the first failure.
    pub NotNullString;
    requires NotNull;
    rule(value, name) { value.is_string() }
    error(value, name) {
        ValidationError::type_mismatch(name, format!("{name} must be string"))
    }
    fn not_null_string();
}

crate::verifier! {
    /// Passes for JSON arrays.
    pub IsArray;
    rule(value, name) { value.is_array() }
    error(value, name) {
        ValidationError::type_mismatch(name, format!("'{name}' is not array"))
    }
    fn is_array();
}

// ============================================================================
// TESTS
// ============================================================================
