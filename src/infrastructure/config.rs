//! Configuration management

use crate::error::{DaybookError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// chrono format string used for day labels in lists and series
    pub date_format: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".daybook").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daybook_dir = path.join(".daybook");
        let config_path = daybook_dir.join("config.toml");

        if !daybook_dir.exists() {
            fs::create_dir(&daybook_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get a config value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "date_format" => Ok(self.date_format.clone()),
            "created" => Ok(self.created.to_rfc3339()),
            _ => Err(DaybookError::Config(format!("Unknown config key: '{}'", key))),
        }
    }

    /// Set a config value by key; `created` is immutable
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "date_format" => {
                validate_date_format(value)?;
                self.date_format = value.to_string();
                Ok(())
            }
            "created" => Err(DaybookError::Config(
                "Config key 'created' is read-only".to_string(),
            )),
            _ => Err(DaybookError::Config(format!("Unknown config key: '{}'", key))),
        }
    }
}

/// Reject format strings chrono cannot render; formatting an entry with an
/// unparsable specifier would otherwise panic on every listing command.
fn validate_date_format(value: &str) -> Result<()> {
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        return Err(DaybookError::Config(format!(
            "Invalid date format: '{}'",
            value
        )));
    }
    Ok(())
}
