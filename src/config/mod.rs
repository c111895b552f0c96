// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for formrules.
//!
//! Forms can be declared in TOML, one `[[fields]]` table per field, and
//! turned into a ready-to-use validator.

pub mod default;
mod loader;
mod schema;

pub use default::example_config;
pub use loader::{load_config_from, parse_config};
pub use schema::*;
