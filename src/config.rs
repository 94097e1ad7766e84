use crate::{ConfigError, TableLayout, TableRules};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a host can tune about a table, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rules: TableRules,
    pub layout: TableLayout,
}

impl TableConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.rules.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
