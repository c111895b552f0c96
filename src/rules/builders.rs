// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule builders, one per field kind.
//!
//! Builders are pure: the same label and constraints always produce equal
//! descriptor lists, and they never fail. Constraints that do not apply to
//! a kind are ignored, and numeric bounds that are not integers (or, for
//! money, not finite) are treated as absent.

use serde::{Deserialize, Serialize};

use super::checker::{
    BoundsCheck, Checker, DecimalCheck, IdCardCheck, IntegerCheck, LengthCheck, MoneyCheck,
};
use super::descriptor::{RuleDescriptor, RuleKind, Trigger, Triggers};
use super::idcard::ChecksumMode;
use super::messages;
use super::pattern::{BANK_CARD, EMAIL, PHONE, QQ};
use super::predicates::{finite_bound, integer_bound};

/// Label used by [`Rules::money`] when none is given.
pub const DEFAULT_MONEY_LABEL: &str = "金额";

/// Label used by [`Rules::id_card`] when none is given.
pub const DEFAULT_ID_CARD_LABEL: &str = "身份证号码";

/// Field kinds with a dedicated builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    LetterOrDigit,
    Select,
    Url,
    Integer,
    Decimal,
    Money,
    Phone,
    BankCard,
    Email,
    Qq,
    IdCard,
}

impl FieldKind {
    /// Get the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::LetterOrDigit => "letter_or_digit",
            FieldKind::Select => "select",
            FieldKind::Url => "url",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Money => "money",
            FieldKind::Phone => "phone",
            FieldKind::BankCard => "bank_card",
            FieldKind::Email => "email",
            FieldKind::Qq => "qq",
            FieldKind::IdCard => "id_card",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-field constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Whether an empty value is a failure.
    pub required: bool,

    /// When the engine re-evaluates checker rules.
    pub trigger: Triggers,

    /// Maximum length in characters.
    pub max_length: Option<usize>,

    /// Minimum length in characters.
    pub min_length: Option<usize>,

    /// Inclusive upper bound.
    pub maximum: Option<f64>,

    /// Inclusive lower bound.
    pub minimum: Option<f64>,

    /// Maximum number of fractional digits.
    pub precision: Option<u32>,

    /// Whether a selection holds several values.
    pub multiple: bool,

    /// ID card check digit comparison.
    pub checksum: ChecksumMode,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            required: true,
            trigger: Triggers::default(),
            max_length: None,
            min_length: None,
            maximum: None,
            minimum: None,
            precision: None,
            multiple: false,
            checksum: ChecksumMode::default(),
        }
    }
}

impl Constraints {
    /// Constraints for an optional field.
    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::default()
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_trigger(mut self, trigger: impl Into<Triggers>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_checksum(mut self, checksum: ChecksumMode) -> Self {
        self.checksum = checksum;
        self
    }
}

/// Rule builders.
pub struct Rules;

impl Rules {
    /// Build the rules for any field kind.
    pub fn build(kind: FieldKind, label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        match kind {
            FieldKind::Text => Self::text(label, constraints),
            FieldKind::LetterOrDigit => Self::letter_or_digit(label, constraints),
            FieldKind::Select => Self::select(label, constraints),
            FieldKind::Url => Self::url(label, constraints),
            FieldKind::Integer => Self::integer(label, constraints),
            FieldKind::Decimal => Self::decimal(label, constraints),
            FieldKind::Money => Self::money(label, constraints),
            FieldKind::Phone => Self::phone(label, constraints),
            FieldKind::BankCard => Self::bank_card(label, constraints),
            FieldKind::Email => Self::email(label, constraints),
            FieldKind::Qq => Self::qq(label, constraints),
            FieldKind::IdCard => Self::id_card(label, constraints),
        }
    }

    /// Free text with optional length bounds.
    pub fn text(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let mut rules = vec![RuleDescriptor::presence(
            constraints.required,
            messages::please_enter(label),
            constraints.trigger.clone(),
        )
        .with_kind(RuleKind::Text)];

        if let Some(checker) = length_checker(label, constraints, false) {
            rules.push(RuleDescriptor::checked(
                constraints.required,
                checker,
                constraints.trigger.clone(),
            ));
        }

        rules
    }

    /// ASCII letters and digits with length bounds.
    ///
    /// The character check runs inside the length checker, so it is only
    /// present when at least one length bound is given.
    pub fn letter_or_digit(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let mut rules = vec![RuleDescriptor::presence(
            constraints.required,
            messages::please_enter(label),
            constraints.trigger.clone(),
        )];

        if let Some(checker) = length_checker(label, constraints, true) {
            rules.push(RuleDescriptor::checked(
                constraints.required,
                checker,
                constraints.trigger.clone(),
            ));
        }

        rules
    }

    /// Radio buttons, checkboxes and drop-downs. Always required.
    pub fn select(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let rule = RuleDescriptor::presence(true, messages::please_select(label), Trigger::Change);

        if constraints.multiple {
            vec![rule.with_kind(RuleKind::Array)]
        } else {
            vec![rule]
        }
    }

    /// Absolute URLs, checked by the engine's URL type.
    pub fn url(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        vec![RuleDescriptor::presence(
            constraints.required,
            messages::format_incorrect(label),
            Trigger::Blur,
        )
        .with_kind(RuleKind::Url)]
    }

    /// Signed integers with optional bounds.
    pub fn integer(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let format = Checker::Integer(IntegerCheck {
            label: label.to_string(),
            required: constraints.required,
        });

        numeric_rules(
            label,
            constraints,
            format,
            integer_bound(constraints.maximum),
            integer_bound(constraints.minimum),
        )
    }

    /// Integers or decimals with optional precision and bounds.
    pub fn decimal(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let format = Checker::Decimal(DecimalCheck {
            label: label.to_string(),
            required: constraints.required,
            precision: constraints.precision,
        });

        numeric_rules(
            label,
            constraints,
            format,
            integer_bound(constraints.maximum),
            integer_bound(constraints.minimum),
        )
    }

    /// Amounts with at most two decimals; bounds may be fractional.
    pub fn money(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let label = if label.is_empty() {
            DEFAULT_MONEY_LABEL
        } else {
            label
        };

        let format = Checker::Money(MoneyCheck {
            label: label.to_string(),
            required: constraints.required,
        });

        numeric_rules(
            label,
            constraints,
            format,
            finite_bound(constraints.maximum),
            finite_bound(constraints.minimum),
        )
    }

    /// Mainland mobile numbers.
    pub fn phone(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        vec![
            RuleDescriptor::presence(
                constraints.required,
                messages::please_enter(label),
                Trigger::Blur,
            ),
            RuleDescriptor::pattern(
                PHONE.clone(),
                messages::format_incorrect(label),
                Trigger::Blur,
            ),
        ]
    }

    /// 16 or 19 digit bank card numbers.
    pub fn bank_card(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        vec![
            RuleDescriptor::presence(
                constraints.required,
                messages::please_enter(label),
                Trigger::Blur,
            ),
            RuleDescriptor::pattern(
                BANK_CARD.clone(),
                messages::format_incorrect(label),
                Trigger::Blur,
            ),
        ]
    }

    /// Email addresses.
    pub fn email(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        vec![
            RuleDescriptor::presence(
                constraints.required,
                messages::cannot_be_empty(label),
                Trigger::Blur,
            ),
            RuleDescriptor::pattern(
                EMAIL.clone(),
                messages::format_incorrect(label),
                Trigger::Blur,
            ),
        ]
    }

    /// QQ numbers.
    pub fn qq(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        vec![
            RuleDescriptor::presence(
                constraints.required,
                messages::cannot_be_empty(label),
                Trigger::Blur,
            ),
            RuleDescriptor::pattern(QQ.clone(), messages::format_incorrect(label), Trigger::Blur),
        ]
    }

    /// Resident ID card numbers.
    pub fn id_card(label: &str, constraints: &Constraints) -> Vec<RuleDescriptor> {
        let label = if label.is_empty() {
            DEFAULT_ID_CARD_LABEL
        } else {
            label
        };

        let checker = Checker::IdCard(IdCardCheck {
            label: label.to_string(),
            required: constraints.required,
            checksum: constraints.checksum,
        });

        vec![RuleDescriptor::checked(
            constraints.required,
            checker,
            Trigger::Blur,
        )]
    }
}

fn length_checker(label: &str, constraints: &Constraints, letters_or_digits: bool) -> Option<Checker> {
    if constraints.max_length.is_none() && constraints.min_length.is_none() {
        return None;
    }

    Some(Checker::Length(LengthCheck {
        label: label.to_string(),
        required: constraints.required,
        max_length: constraints.max_length,
        min_length: constraints.min_length,
        letters_or_digits,
    }))
}

/// Format checker first, then a bounds checker if any bound survived.
fn numeric_rules(
    label: &str,
    constraints: &Constraints,
    format: Checker,
    maximum: Option<f64>,
    minimum: Option<f64>,
) -> Vec<RuleDescriptor> {
    let mut rules = vec![RuleDescriptor::checked(
        constraints.required,
        format,
        constraints.trigger.clone(),
    )];

    if maximum.is_some() || minimum.is_some() {
        let bounds = Checker::Bounds(BoundsCheck {
            label: label.to_string(),
            required: constraints.required,
            maximum,
            minimum,
        });
        rules.push(RuleDescriptor::checked(
            constraints.required,
            bounds,
            constraints.trigger.clone(),
        ));
    }

    rules
}
