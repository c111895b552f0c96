// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shared predicates and value coercions.
//!
//! Values are never trimmed; trimming is up to the caller.

use serde_json::{Number, Value};
use std::borrow::Cow;

use super::pattern::INTEGER_TEXT;

/// Whether a value counts as absent: `null` or the empty string.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Whether a value is an integral number, or text spelling a signed integer.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(is_integral),
        Value::String(s) => INTEGER_TEXT.is_match(s),
        _ => false,
    }
}

/// Whether a value is a finite number.
pub fn is_finite_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
        _ => false,
    }
}

/// Whether a float is finite and has no fractional part.
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// Keep a bound only if it is an integer.
pub(crate) fn integer_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|x| is_integral(*x))
}

/// Keep a bound only if it is a finite number.
pub(crate) fn finite_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|x| x.is_finite())
}

/// Text form of a scalar value; numbers use plain decimal notation.
pub fn to_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(format_number(n))),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Format a number the way a form would display it: `5` rather than `5.0`.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Numeric reading of a value, for bound comparisons.
///
/// Text is parsed after trimming, mirroring how form inputs are coerced.
/// Anything that does not read as a finite number yields `None`.
pub fn to_number(value: &Value) -> Option<f64> {
    let x = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    x.is_finite().then_some(x)
}

/// Length of text in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
