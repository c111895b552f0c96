// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule descriptors handed to a validation engine.

use serde::{Deserialize, Serialize};

use super::checker::Checker;
use super::pattern::Pattern;

/// Built-in type check the engine applies to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Text,
    Url,
    Array,
}

/// When the engine should re-run a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Change,
    Blur,
}

/// One trigger or several.
///
/// Deserializes from either `"blur"` or `["change", "blur"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Triggers {
    One(Trigger),
    Many(Vec<Trigger>),
}

impl Triggers {
    /// The triggers as a slice.
    pub fn as_slice(&self) -> &[Trigger] {
        match self {
            Triggers::One(trigger) => std::slice::from_ref(trigger),
            Triggers::Many(triggers) => triggers,
        }
    }

    /// Whether the given trigger is included.
    pub fn contains(&self, trigger: Trigger) -> bool {
        self.as_slice().contains(&trigger)
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Triggers::Many(vec![Trigger::Change, Trigger::Blur])
    }
}

impl From<Trigger> for Triggers {
    fn from(trigger: Trigger) -> Self {
        Triggers::One(trigger)
    }
}

impl From<Vec<Trigger>> for Triggers {
    fn from(triggers: Vec<Trigger>) -> Self {
        Triggers::Many(triggers)
    }
}

/// A single validation rule for one field.
///
/// Declarative rules carry a `kind`, `pattern` and `message`; procedural
/// rules carry a `checker` that reports its own messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDescriptor {
    /// Whether an absent value is itself a failure.
    pub required: bool,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RuleKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub trigger: Triggers,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checker: Option<Checker>,
}

impl RuleDescriptor {
    /// A presence rule: fails with `message` when a required value is absent.
    pub fn presence(required: bool, message: String, trigger: impl Into<Triggers>) -> Self {
        Self {
            required,
            kind: None,
            pattern: None,
            message: Some(message),
            trigger: trigger.into(),
            checker: None,
        }
    }

    /// A text pattern rule.
    pub fn pattern(pattern: Pattern, message: String, trigger: impl Into<Triggers>) -> Self {
        Self {
            required: false,
            kind: Some(RuleKind::Text),
            pattern: Some(pattern),
            message: Some(message),
            trigger: trigger.into(),
            checker: None,
        }
    }

    /// A rule delegated to a checker.
    pub fn checked(required: bool, checker: Checker, trigger: impl Into<Triggers>) -> Self {
        Self {
            required,
            kind: None,
            pattern: None,
            message: None,
            trigger: trigger.into(),
            checker: Some(checker),
        }
    }

    /// Set the built-in type check.
    pub fn with_kind(mut self, kind: RuleKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether the rule is fully described by its static fields.
    pub fn is_declarative(&self) -> bool {
        self.checker.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_triggers() {
        let triggers = Triggers::default();
        assert!(triggers.contains(Trigger::Change));
        assert!(triggers.contains(Trigger::Blur));
    }

    #[test]
    fn test_single_trigger_slice() {
        let triggers = Triggers::from(Trigger::Blur);
        assert_eq!(triggers.as_slice(), &[Trigger::Blur]);
        assert!(!triggers.contains(Trigger::Change));
    }

    #[test]
    fn test_triggers_deserialize_one_or_many() {
        let one: Triggers = serde_json::from_str("\"blur\"").unwrap();
        assert_eq!(one, Triggers::One(Trigger::Blur));

        let many: Triggers = serde_json::from_str("[\"change\", \"blur\"]").unwrap();
        assert_eq!(many, Triggers::default());
    }

    #[test]
    fn test_presence_serializes_without_empty_fields() {
        let rule = RuleDescriptor::presence(true, "请输入姓名".to_string(), Trigger::Blur);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "required": true,
                "message": "请输入姓名",
                "trigger": "blur",
            })
        );
        assert!(rule.is_declarative());
    }

    #[test]
    fn test_with_kind() {
        let rule = RuleDescriptor::presence(true, "请选择x".to_string(), Trigger::Change)
            .with_kind(RuleKind::Array);
        assert_eq!(rule.kind, Some(RuleKind::Array));
    }
}
