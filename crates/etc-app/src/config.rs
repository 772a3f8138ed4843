//! Configuration management for the ETC dashboard
//!
//! Config stored at: ~/.config/etc-dashboard/config.json

use etc_domain::model::{RowsPerPage, TableState};
use etc_types::{ConfigError, OutputFormat, Result, SortScope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Vehicle listing endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (table, json, csv)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Initial page size (5, 10 or 15)
    #[serde(default)]
    pub rows_per_page: RowsPerPage,

    /// Whether sorting reorders the current page or the whole result
    #[serde(default)]
    pub sort_scope: SortScope,
}

fn default_api_url() -> String {
    "http://localhost:5115/api/Vehicle".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            store_dir: None,
            output_format: OutputFormat::default(),
            rows_per_page: RowsPerPage::default(),
            sort_scope: SortScope::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("etc-dashboard");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("etc-dashboard");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Initial table state honoring the configured page size and sort scope
    pub fn table_state(&self) -> TableState {
        TableState::default()
            .with_rows_per_page(self.rows_per_page)
            .with_sort_scope(self.sort_scope)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ETC Dashboard Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "API URL:        {}", self.api_url)?;
        writeln!(
            f,
            "Store dir:      {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Rows per page:  {}", self.rows_per_page.get())?;
        writeln!(f, "Sort scope:     {}", self.sort_scope)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:5115/api/Vehicle");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_url: "http://etc.internal/api/Vehicle".to_string(),
            rows_per_page: RowsPerPage::Fifteen,
            sort_scope: SortScope::All,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"rows_per_page": 10}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.rows_per_page, RowsPerPage::Ten);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.table_state().page.rows_per_page.get(), 10);
    }

    #[test]
    fn test_invalid_rows_per_page_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"rows_per_page": 7}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
