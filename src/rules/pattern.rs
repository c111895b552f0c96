// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Compiled regular expressions carried by rule descriptors.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::fmt;

lazy_static! {
    /// Mainland mobile numbers.
    pub static ref PHONE: Pattern = Pattern::new(r"^1[3-9]\d{9}$").unwrap();

    /// 16 or 19 digit bank card numbers.
    pub static ref BANK_CARD: Pattern = Pattern::new(r"^(\d{16}|\d{19})$").unwrap();

    /// Email addresses.
    pub static ref EMAIL: Pattern =
        Pattern::case_insensitive(r"^([\w.-])+@(([a-z0-9-])+\.)+[a-z0-9]{2,4}$").unwrap();

    /// QQ numbers.
    pub static ref QQ: Pattern = Pattern::new(r"^[1-9]\d{4,10}$").unwrap();

    /// ASCII letters and digits only.
    pub static ref LETTER_OR_DIGIT: Pattern = Pattern::new(r"^[0-9a-zA-Z]*$").unwrap();

    /// Signed integer text.
    pub static ref INTEGER_TEXT: Pattern = Pattern::new(r"^-?\d+$").unwrap();

    /// Signed integer or decimal text.
    pub static ref NUMBER_TEXT: Pattern = Pattern::new(r"^-?\d+(\.\d+)?$").unwrap();

    /// Non-negative amounts with at most two decimal places.
    pub static ref MONEY: Pattern = Pattern::new(
        r"^((0)|([1-9]\d*)|([1-9]\d*)(\.\d{1,2})|(0\.0[1-9])|(0\.[1-9]\d?))$"
    )
    .unwrap();

    /// Region code, optional century, birth date, sequence and check digit.
    pub static ref ID_CARD: Pattern = Pattern::case_insensitive(
        r"^\d{6}(18|19|20)?\d{2}(0[1-9]|1[012])(0[1-9]|[12]\d|3[01])\d{3}(\d|X)$"
    )
    .unwrap();
}

/// A compiled, ASCII-only regular expression.
///
/// `\d` and `\w` only match ASCII characters, so full-width digits never
/// satisfy a numeric pattern. Two patterns are equal when their source and
/// case sensitivity are equal.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    regex: Regex,
}

impl Pattern {
    /// Compile a case-sensitive pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Self::build(source, false)
    }

    /// Compile a case-insensitive pattern.
    pub fn case_insensitive(source: &str) -> Result<Self, regex::Error> {
        Self::build(source, true)
    }

    fn build(source: &str, case_insensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source)
            .unicode(false)
            .case_insensitive(case_insensitive)
            .build()?;

        Ok(Self {
            source: source.to_string(),
            case_insensitive,
            regex,
        })
    }

    /// Test the whole text against the pattern.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern source without flags.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern ignores ASCII case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)?;
        if self.case_insensitive {
            write!(f, "i")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE.is_match("13333333333"));
        assert!(!PHONE.is_match("1333333333"));
        assert!(!PHONE.is_match("12333333333"));
    }

    #[test]
    fn test_bank_card_lengths() {
        assert!(BANK_CARD.is_match(&"6".repeat(16)));
        assert!(BANK_CARD.is_match(&"6".repeat(19)));
        assert!(!BANK_CARD.is_match(&"6".repeat(17)));
    }

    #[test]
    fn test_email_ignores_case() {
        assert!(EMAIL.is_match("1333333333@qq.com"));
        assert!(EMAIL.is_match("Someone@Example.COM"));
        assert!(!EMAIL.is_match("1333333333@qq"));
    }

    #[test]
    fn test_qq_pattern() {
        assert!(QQ.is_match("1333333"));
        assert!(!QQ.is_match("13333qq"));
        assert!(!QQ.is_match("0123456"));
        assert!(!QQ.is_match("1234"));
    }

    #[test]
    fn test_digits_are_ascii_only() {
        assert!(INTEGER_TEXT.is_match("-42"));
        assert!(!INTEGER_TEXT.is_match("４２"));
        assert!(!INTEGER_TEXT.is_match("٤٢"));
    }

    #[test]
    fn test_equality_and_display() {
        let a = Pattern::case_insensitive("^a$").unwrap();
        let b = Pattern::case_insensitive("^a$").unwrap();
        let c = Pattern::new("^a$").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "/^a$/i");
        assert_eq!(c.to_string(), "/^a$/");
    }

    #[test]
    fn test_invalid_source_is_an_error() {
        assert!(Pattern::new("(").is_err());
    }
}
