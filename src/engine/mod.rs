// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reference form validator.
//!
//! Runs rule descriptors against submitted form values the way a host
//! validation engine would: declarative rules are checked here, checker
//! rules are delegated to their checker.

mod result;
mod validator;

pub use result::{FieldIssue, ValidationResult};
pub use validator::{apply_rule, FormValidator};
