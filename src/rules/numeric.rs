// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Decimal and money format matchers.

use serde_json::Value;

use super::pattern::{MONEY, NUMBER_TEXT};
use super::predicates::to_text;

/// Check that text is a signed integer or decimal with at most `precision`
/// fractional digits. Without a precision any number of digits is accepted.
pub fn is_number_with_precision(text: &str, precision: Option<u32>) -> bool {
    if !NUMBER_TEXT.is_match(text) {
        return false;
    }

    match (precision, text.split_once('.')) {
        (Some(p), Some((_, fraction))) => fraction.len() <= p as usize,
        _ => true,
    }
}

/// Value form of [`is_number_with_precision`]; numbers are formatted first.
pub fn value_has_precision(value: &Value, precision: Option<u32>) -> bool {
    to_text(value).is_some_and(|text| is_number_with_precision(&text, precision))
}

/// Check that text is a non-negative amount with at most two decimals.
///
/// Leading zeros (`01`), a bare zero fraction (`0.00`) and negative amounts
/// are all rejected.
pub fn is_money(text: &str) -> bool {
    MONEY.is_match(text)
}

/// Value form of [`is_money`].
pub fn value_is_money(value: &Value) -> bool {
    to_text(value).is_some_and(|text| is_money(&text))
}
