// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! formrules - Validation rule builders for form fields
//!
//! Turns a field label and a few constraints into an ordered list of rule
//! descriptors for a form validation engine.
//!
//! # Features
//!
//! - **Rule Builders**: Text, letters/digits, selections, URLs, integers,
//!   decimals, money, phone, bank card, email, QQ and ID card numbers
//! - **Domain Checkers**: Precision-aware decimals, strict money amounts and
//!   ID card region and check digit verification
//! - **Form Validator**: A reference engine that runs descriptors against
//!   submitted JSON values
//! - **Form Definitions**: Declare whole forms in TOML
//!
//! # Example
//!
//! ```
//! use formrules::{Constraints, FormValidator, Rules};
//! use serde_json::json;
//!
//! let validator = FormValidator::new()
//!     .with_field("name", Rules::text("姓名", &Constraints::default().with_max_length(3)))
//!     .with_field("age", Rules::integer("年龄", &Constraints::default().with_maximum(99.0)));
//!
//! let result = validator.validate(&json!({ "name": "muji", "age": 16 }));
//! assert_eq!(result.first_messages(), vec!["姓名长度不能大于3"]);
//! ```

// Module declarations
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::FormConfig;
pub use engine::{FormValidator, ValidationResult};
pub use error::{CheckFailure, FormError, Result};
pub use rules::{ChecksumMode, Constraints, FieldKind, RuleDescriptor, Rules};
