// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form validation result types.

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field the rule belongs to.
    pub field: String,
    /// Position of the rule within the field's rule list.
    pub rule: usize,
    /// Human-readable message.
    pub message: String,
}

/// Result of validating a form.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Failures, in field order and then rule order.
    pub errors: Vec<FieldIssue>,
}

impl ValidationResult {
    /// Create an empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len()
    }

    /// Fields with at least one failure, in field order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for issue in &self.errors {
            if fields.last() != Some(&issue.field.as_str()) {
                fields.push(&issue.field);
            }
        }
        fields
    }

    /// All messages for one field.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    /// The first message of each failing field, in field order.
    pub fn first_messages(&self) -> Vec<&str> {
        let mut messages = Vec::new();
        let mut last_field: Option<&str> = None;

        for issue in &self.errors {
            if last_field != Some(issue.field.as_str()) {
                messages.push(issue.message.as_str());
                last_field = Some(issue.field.as_str());
            }
        }

        messages
    }

    /// Field-to-messages map suitable for returning to a front end.
    pub fn to_json(&self) -> serde_json::Value {
        let mut fields = serde_json::Map::new();
        for issue in &self.errors {
            let entry = fields
                .entry(issue.field.clone())
                .or_insert_with(|| serde_json::Value::Array(Vec::new()));
            if let serde_json::Value::Array(messages) = entry {
                messages.push(serde_json::Value::String(issue.message.clone()));
            }
        }

        serde_json::json!({
            "valid": self.is_valid(),
            "fields": fields,
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            "Valid".to_string()
        } else {
            format!(
                "Invalid ({} errors in {} fields)",
                self.errors.len(),
                self.invalid_fields().len()
            )
        }
    }
}
