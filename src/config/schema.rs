// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form definition schema.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::engine::FormValidator;
use crate::error::{ConfigError, Result};
use crate::rules::{Constraints, FieldKind, RuleDescriptor, Rules};

/// A declarative form: an ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Fields, in validation order.
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    /// Parse a form definition from TOML.
    pub fn parse(content: &str) -> Result<Self> {
        super::loader::parse_config(content)
    }

    /// Load a form definition from a file.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check that field names are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "name".to_string(),
                    message: "field name must not be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField {
                    name: field.name.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build a validator with the rules for every field.
    pub fn build(&self) -> Result<FormValidator> {
        self.validate()?;

        Ok(self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.rules()))
            .collect())
    }
}

/// One field of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Key of the value in the submitted form.
    pub name: String,

    /// Label used in messages; defaults to the name.
    #[serde(default)]
    pub label: Option<String>,

    /// Which builder produces the rules.
    pub kind: FieldKind,

    #[serde(flatten)]
    pub constraints: Constraints,
}

impl FieldConfig {
    /// The label used in messages.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Rules for this field.
    pub fn rules(&self) -> Vec<RuleDescriptor> {
        Rules::build(self.kind, self.label(), &self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::rules::{ChecksumMode, Trigger, Triggers};

    #[test]
    fn test_field_defaults() {
        let config = FormConfig::parse(
            r#"
            [[fields]]
            name = "age"
            kind = "integer"
            "#,
        )
        .unwrap();

        let field = &config.fields[0];
        assert_eq!(field.label(), "age");
        assert_eq!(field.constraints, Constraints::default());
    }

    #[test]
    fn test_field_constraints() {
        let config = FormConfig::parse(
            r#"
            [[fields]]
            name = "amount"
            label = "金额"
            kind = "money"
            required = false
            maximum = 99.5
            minimum = 1
            trigger = "blur"

            [[fields]]
            name = "id"
            kind = "id_card"
            checksum = "standard"
            trigger = ["change"]
            "#,
        )
        .unwrap();

        let amount = &config.fields[0];
        assert_eq!(amount.label(), "金额");
        assert!(!amount.constraints.required);
        assert_eq!(amount.constraints.maximum, Some(99.5));
        assert_eq!(amount.constraints.minimum, Some(1.0));
        assert_eq!(amount.constraints.trigger, Triggers::One(Trigger::Blur));

        let id = &config.fields[1];
        assert_eq!(id.kind, FieldKind::IdCard);
        assert_eq!(id.constraints.checksum, ChecksumMode::Standard);
        assert_eq!(id.constraints.trigger, Triggers::Many(vec![Trigger::Change]));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = FormConfig::parse(
            r#"
            [[fields]]
            name = "x"
            kind = "zipcode"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, FormError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_duplicate_fields_are_rejected() {
        let config = FormConfig::parse(
            r#"
            [[fields]]
            name = "x"
            kind = "text"

            [[fields]]
            name = "x"
            kind = "qq"
            "#,
        )
        .unwrap();

        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            FormError::Config(ConfigError::DuplicateField { ref name }) if name == "x"
        ));
    }

    #[test]
    fn test_build_keeps_field_order() {
        let config = FormConfig::parse(
            r#"
            [[fields]]
            name = "b"
            kind = "phone"

            [[fields]]
            name = "a"
            kind = "email"
            "#,
        )
        .unwrap();

        let validator = config.build().unwrap();
        assert_eq!(validator.field_names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(
            validator.rules_for("a"),
            Some(Rules::email("a", &Constraints::default()).as_slice())
        );
    }
}
