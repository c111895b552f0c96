// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Form definition loading.

use crate::error::{ConfigError, FormError, Result};
use std::path::Path;

use super::schema::FormConfig;

/// Load a form definition from a specific path.
pub fn load_config_from(path: &Path) -> Result<FormConfig> {
    tracing::debug!("Loading form definition from: {:?}", path);

    if !path.exists() {
        return Err(FormError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        FormError::Config(ConfigError::ParseError {
            message: format!("Failed to read form definition: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse a form definition from a TOML string.
pub fn parse_config(content: &str) -> Result<FormConfig> {
    let config: FormConfig = toml::from_str(content).map_err(|e| {
        FormError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    tracing::debug!("Parsed form definition with {} fields", config.fields.len());
    Ok(config)
}
