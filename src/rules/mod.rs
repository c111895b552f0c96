// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation rule builders.
//!
//! This module turns a field kind, a label and a set of constraints into an
//! ordered list of rule descriptors. Declarative descriptors are checked by
//! the engine itself; the rest carry a checker with the domain logic.

mod builders;
mod checker;
mod descriptor;
mod idcard;
pub mod messages;
mod numeric;
mod pattern;
mod predicates;

pub use builders::{Constraints, FieldKind, Rules, DEFAULT_ID_CARD_LABEL, DEFAULT_MONEY_LABEL};
pub use checker::{
    BoundsCheck, CheckResult, Checker, DecimalCheck, IdCardCheck, IntegerCheck, LengthCheck,
    MoneyCheck,
};
pub use descriptor::{RuleDescriptor, RuleKind, Trigger, Triggers};
pub use idcard::{check_digit, province_name, verify_id_card, ChecksumMode};
pub use numeric::{is_money, is_number_with_precision, value_has_precision, value_is_money};
pub use pattern::Pattern;
pub use predicates::{
    char_len, format_number, is_empty, is_finite_number, is_integer, is_integral, to_number,
    to_text,
};

/// Built-in patterns.
pub mod patterns {
    pub use super::pattern::{
        BANK_CARD, EMAIL, ID_CARD, INTEGER_TEXT, LETTER_OR_DIGIT, MONEY, NUMBER_TEXT, PHONE, QQ,
    };
}
