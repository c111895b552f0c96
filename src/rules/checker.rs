// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Procedural checkers attached to rule descriptors.
//!
//! Every checker owns its label, required flag and constraints, captured
//! when the rule was built. A checker reports at most one failure per run.

use serde::Serialize;
use serde_json::Value;

use crate::error::CheckFailure;

use super::idcard::{verify_id_card, ChecksumMode};
use super::messages;
use super::numeric::{value_has_precision, value_is_money};
use super::pattern::LETTER_OR_DIGIT;
use super::predicates::{char_len, is_empty, is_integer, to_number, to_text};

/// Outcome of a single checker run.
pub type CheckResult = Result<(), CheckFailure>;

/// Presence guard shared by every checker.
///
/// Returns `Some` when the value is empty and the outcome is already known.
fn presence(label: &str, required: bool, value: &Value) -> Option<CheckResult> {
    if !is_empty(value) {
        return None;
    }

    if required {
        Some(Err(CheckFailure::new(messages::cannot_be_empty(label))))
    } else {
        Some(Ok(()))
    }
}

/// Length bounds, optionally restricted to ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthCheck {
    pub label: String,
    pub required: bool,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub letters_or_digits: bool,
}

impl LengthCheck {
    pub fn check(&self, value: &Value) -> CheckResult {
        if let Some(outcome) = presence(&self.label, self.required, value) {
            return outcome;
        }

        let text = to_text(value);

        if self.letters_or_digits && !text.as_deref().is_some_and(|t| LETTER_OR_DIGIT.is_match(t))
        {
            return Err(CheckFailure::new(messages::letters_or_digits(&self.label)));
        }

        let Some(text) = text else {
            return Ok(());
        };
        let len = char_len(&text);

        if let Some(max) = self.max_length {
            if len > max {
                return Err(CheckFailure::new(messages::length_above(&self.label, max)));
            }
        }
        if let Some(min) = self.min_length {
            if len < min {
                return Err(CheckFailure::new(messages::length_below(&self.label, min)));
            }
        }

        Ok(())
    }
}

/// Signed integers, as numbers or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerCheck {
    pub label: String,
    pub required: bool,
}

impl IntegerCheck {
    pub fn check(&self, value: &Value) -> CheckResult {
        if let Some(outcome) = presence(&self.label, self.required, value) {
            return outcome;
        }

        if is_integer(value) {
            Ok(())
        } else {
            Err(CheckFailure::new(messages::integer_only(&self.label)))
        }
    }
}

/// Integers or decimals with an optional cap on fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecimalCheck {
    pub label: String,
    pub required: bool,
    pub precision: Option<u32>,
}

impl DecimalCheck {
    pub fn check(&self, value: &Value) -> CheckResult {
        if let Some(outcome) = presence(&self.label, self.required, value) {
            return outcome;
        }

        if value_has_precision(value, self.precision) {
            Ok(())
        } else {
            Err(CheckFailure::new(messages::integer_or_decimal(
                &self.label,
                self.precision,
            )))
        }
    }
}

/// Non-negative amounts with at most two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyCheck {
    pub label: String,
    pub required: bool,
}

impl MoneyCheck {
    pub fn check(&self, value: &Value) -> CheckResult {
        if let Some(outcome) = presence(&self.label, self.required, value) {
            return outcome;
        }

        if value_is_money(value) {
            Ok(())
        } else {
            Err(CheckFailure::new(messages::money_only(&self.label)))
        }
    }
}

/// Inclusive numeric bounds.
///
/// Values that do not read as numbers pass; the format checker that
/// precedes this one reports them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsCheck {
    pub label: String,
    pub required: bool,
    pub maximum: Option<f64>,
    pub minimum: Option<f64>,
}

impl BoundsCheck {
    pub fn check(&self, value: &Value) -> CheckResult {
        if let Some(outcome) = presence(&self.label, self.required, value) {
            return outcome;
        }

        let Some(number) = to_number(value) else {
            return Ok(());
        };

        if let Some(max) = self.maximum {
            if number > max {
                return Err(CheckFailure::new(messages::above(&self.label, max)));
            }
        }
        if let Some(min) = self.minimum {
            if number < min {
                return Err(CheckFailure::new(messages::below(&self.label, min)));
            }
        }

        Ok(())
    }
}

/// Resident ID card numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdCardCheck {
    pub label: String,
    pub required: bool,
    pub checksum: ChecksumMode,
}

impl IdCardCheck {
    pub fn check(&self, value: &Value) -> CheckResult {
        if let Some(outcome) = presence(&self.label, self.required, value) {
            return outcome;
        }

        let text = to_text(value).unwrap_or_default();
        verify_id_card(&text, self.checksum)
            .map_err(|e| CheckFailure::new(messages::id_card(&self.label, e)))
    }
}

/// A checker of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Checker {
    Length(LengthCheck),
    Integer(IntegerCheck),
    Decimal(DecimalCheck),
    Money(MoneyCheck),
    Bounds(BoundsCheck),
    IdCard(IdCardCheck),
}

impl Checker {
    /// Check a raw field value.
    pub fn check(&self, value: &Value) -> CheckResult {
        let result = match self {
            Checker::Length(c) => c.check(value),
            Checker::Integer(c) => c.check(value),
            Checker::Decimal(c) => c.check(value),
            Checker::Money(c) => c.check(value),
            Checker::Bounds(c) => c.check(value),
            Checker::IdCard(c) => c.check(value),
        };

        if let Err(ref e) = result {
            tracing::trace!("Check failed for '{}': {}", self.label(), e);
        }
        result
    }

    /// Check a value and report through continuations.
    ///
    /// Exactly one of `on_success` and `on_failure` is called, exactly once.
    pub fn run<S, F>(&self, value: &Value, on_success: S, on_failure: F)
    where
        S: FnOnce(),
        F: FnOnce(CheckFailure),
    {
        match self.check(value) {
            Ok(()) => on_success(),
            Err(e) => on_failure(e),
        }
    }

    /// The field label used in messages.
    pub fn label(&self) -> &str {
        match self {
            Checker::Length(c) => &c.label,
            Checker::Integer(c) => &c.label,
            Checker::Decimal(c) => &c.label,
            Checker::Money(c) => &c.label,
            Checker::Bounds(c) => &c.label,
            Checker::IdCard(c) => &c.label,
        }
    }
}
