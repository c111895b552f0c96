// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form validator for rule descriptors.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::error::{CheckFailure, FormError, ValidationError};
use crate::rules::{is_empty, to_text, RuleDescriptor, RuleKind};

use super::result::{FieldIssue, ValidationResult};

lazy_static! {
    /// Absolute http, https or ftp URLs.
    static ref URL: Regex = Regex::new(
        r"(?i)^(?:https?|ftp)://(?:\S+(?::\S*)?@)?(?:localhost|\[[0-9a-f:.]+\]|(?:[a-z0-9\x{00a1}-\x{ffff}](?:[a-z0-9\x{00a1}-\x{ffff}-]*[a-z0-9\x{00a1}-\x{ffff}])?\.)*[a-z0-9\x{00a1}-\x{ffff}](?:[a-z0-9\x{00a1}-\x{ffff}-]*[a-z0-9\x{00a1}-\x{ffff}])?)(?::\d{2,5})?(?:[/?#]\S*)?$"
    )
    .unwrap();
}

/// Validates whole forms against per-field rule lists.
///
/// Fields are checked in the order they were added; every rule of a field
/// runs, and each failure is recorded.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: Vec<(String, Vec<RuleDescriptor>)>,
}

impl FormValidator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any rules already registered under its name.
    pub fn add_field(&mut self, name: impl Into<String>, rules: Vec<RuleDescriptor>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, existing)) => *existing = rules,
            None => self.fields.push((name, rules)),
        }
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, rules: Vec<RuleDescriptor>) -> Self {
        self.add_field(name, rules);
        self
    }

    /// Field names in validation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Rules registered for a field.
    pub fn rules_for(&self, name: &str) -> Option<&[RuleDescriptor]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Validate a form given as a JSON object. Missing fields read as `null`.
    pub fn validate(&self, form: &Value) -> ValidationResult {
        tracing::debug!("Validating form with {} fields", self.fields.len());

        let mut result = ValidationResult::new();
        for (name, rules) in &self.fields {
            let value = form.get(name).unwrap_or(&Value::Null);
            for (index, rule) in rules.iter().enumerate() {
                if let Err(e) = apply_rule(name, rule, value) {
                    tracing::trace!("Field '{}' failed rule {}: {}", name, index, e);
                    result.errors.push(FieldIssue {
                        field: name.clone(),
                        rule: index,
                        message: e.message,
                    });
                }
            }
        }

        tracing::debug!("Form validation finished: {}", result.summary());
        result
    }

    /// Validate a single field value.
    pub fn validate_field(&self, name: &str, value: &Value) -> Vec<CheckFailure> {
        self.rules_for(name)
            .unwrap_or_default()
            .iter()
            .filter_map(|rule| apply_rule(name, rule, value).err())
            .collect()
    }

    /// Validate a form, failing if any field is invalid.
    pub fn check(&self, form: &Value) -> crate::error::Result<ValidationResult> {
        let result = self.validate(form);
        if result.is_valid() {
            Ok(result)
        } else {
            Err(FormError::Validation(ValidationError::Failed {
                count: result.invalid_fields().len(),
            }))
        }
    }
}

impl FromIterator<(String, Vec<RuleDescriptor>)> for FormValidator {
    fn from_iter<I: IntoIterator<Item = (String, Vec<RuleDescriptor>)>>(iter: I) -> Self {
        let mut validator = Self::new();
        for (name, rules) in iter {
            validator.add_field(name, rules);
        }
        validator
    }
}

/// Apply one rule to one value.
///
/// Checker rules handle presence themselves. Declarative rules skip absent
/// optional values, then apply the type check and the pattern.
pub fn apply_rule(field: &str, rule: &RuleDescriptor, value: &Value) -> Result<(), CheckFailure> {
    if let Some(checker) = &rule.checker {
        return checker.check(value);
    }

    let fail = || {
        CheckFailure::new(
            rule.message
                .clone()
                .unwrap_or_else(|| format!("{}格式不正确", field)),
        )
    };

    if is_missing(value) {
        return if rule.required { Err(fail()) } else { Ok(()) };
    }

    if let Some(kind) = rule.kind {
        if !kind_matches(kind, value) {
            return Err(fail());
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !to_text(value).is_some_and(|text| pattern.is_match(&text)) {
            return Err(fail());
        }
    }

    Ok(())
}

fn is_missing(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        _ => is_empty(value),
    }
}

fn kind_matches(kind: RuleKind, value: &Value) -> bool {
    match kind {
        RuleKind::Text => value.is_string(),
        RuleKind::Url => value.as_str().is_some_and(|s| URL.is_match(s)),
        RuleKind::Array => value.is_array(),
    }
}
