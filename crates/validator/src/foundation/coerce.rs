//! JavaScript-compatible value coercion.
//!
//! Request data usually originates from JavaScript clients and from query
//! strings, where `"42"` is as much a number as `42`. The primitive
//! verifiers therefore judge values with the same truthiness and
//! number-conversion rules a browser applies.

use serde_json::Value;

/// JavaScript truthiness: `null`, `false`, `0`, `-0`, NaN and `""` are falsy;
/// everything else, including empty arrays and objects, is truthy.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// JavaScript `Number(value)`.
///
/// Returns NaN when the value has no numeric reading.
///
/// # Examples
///
/// ```
/// use reqshape_validator::foundation::to_number;
/// use serde_json::json;
///
/// assert_eq!(to_number(&json!("42")), 42.0);
/// assert_eq!(to_number(&json!(" 0x1F ")), 31.0);
/// assert_eq!(to_number(&json!(null)), 0.0);
/// assert!(to_number(&json!("abc")).is_nan());
/// ```
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        // `[x]` stringifies to `String(x)`; two or more elements always
        // contain a comma and never parse.
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => element_to_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Number reading of an array element after `Array.prototype.join`.
fn element_to_number(value: &Value) -> f64 {
    match value {
        // null joins as the empty string
        Value::Null => 0.0,
        // "true" / "false" / "[object Object]"
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        other => to_number(other),
    }
}

fn string_to_number(raw: &str) -> f64 {
    let s = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return radix_to_number(&s[2..], radix);
    }

    if is_decimal_literal(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn radix_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc.mul_add(f64::from(radix), f64::from(d)),
            None => return f64::NAN,
        }
    }
    acc
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
///
/// Rejects the `inf` / `nan` spellings that `f64::from_str` would accept.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(0), false)]
    #[case(json!(-0.0), false)]
    #[case(json!(""), false)]
    #[case(json!(true), true)]
    #[case(json!(1), true)]
    #[case(json!("0"), true)]
    #[case(json!([]), true)]
    #[case(json!({}), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(truthy(&value), expected);
    }

    #[rstest]
    #[case(json!(null), 0.0)]
    #[case(json!(true), 1.0)]
    #[case(json!(false), 0.0)]
    #[case(json!(20), 20.0)]
    #[case(json!(1.5), 1.5)]
    #[case(json!("42"), 42.0)]
    #[case(json!("  -3.25 "), -3.25)]
    #[case(json!(""), 0.0)]
    #[case(json!("   "), 0.0)]
    #[case(json!(".5"), 0.5)]
    #[case(json!("5."), 5.0)]
    #[case(json!("1e3"), 1000.0)]
    #[case(json!("0x1F"), 31.0)]
    #[case(json!("0b101"), 5.0)]
    #[case(json!("0o17"), 15.0)]
    #[case(json!([]), 0.0)]
    #[case(json!([7]), 7.0)]
    #[case(json!(["8"]), 8.0)]
    #[case(json!([null]), 0.0)]
    #[case(json!([[9]]), 9.0)]
    fn numeric_readings(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(to_number(&value), expected);
    }

    #[rstest]
    #[case(json!("abc"))]
    #[case(json!("12abc"))]
    #[case(json!("inf"))]
    #[case(json!("NaN"))]
    #[case(json!("1e"))]
    #[case(json!("."))]
    #[case(json!("-0x10"))]
    #[case(json!("0x"))]
    #[case(json!([1, 2]))]
    #[case(json!([true]))]
    #[case(json!({}))]
    fn non_numeric_readings(#[case] value: Value) {
        assert!(to_number(&value).is_nan());
    }

    #[test]
    fn infinity_spellings() {
        assert_eq!(to_number(&json!("Infinity")), f64::INFINITY);
        assert_eq!(to_number(&json!("-Infinity")), f64::NEG_INFINITY);
        assert!(to_number(&json!("infinity")).is_nan());
    }
}
