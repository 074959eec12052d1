//! Persistent application preferences: where the budget lives and how new budgets are seeded.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{config_file_in, ensure_dir},
    currency::DEFAULT_CURRENCY,
    errors::BudgetError,
};

const DEFAULT_STORE_FILE: &str = "budget.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Currency applied to freshly seeded budgets.
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Overrides the directory holding the budget slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_store_file")]
    pub store_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            data_dir: None,
            store_file: Self::default_store_file(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        DEFAULT_CURRENCY.into()
    }

    pub fn default_store_file() -> String {
        DEFAULT_STORE_FILE.into()
    }

    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| base.to_path_buf())
    }

    /// Full path of the budget slot.
    pub fn store_path(&self, base: &Path) -> PathBuf {
        self.resolve_data_dir(base).join(&self.store_file)
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(config_file_in(base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored configuration, or defaults when none has been written.
    pub fn load(&self) -> Result<Config, BudgetError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            BudgetError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path());
        let config = manager.load().expect("load config");
        assert_eq!(config, Config::default());
        assert_eq!(config.currency, "AUD");
        assert_eq!(config.store_path(dir.path()), dir.path().join("budget.json"));
    }

    #[test]
    fn persists_and_reloads_config() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path());
        let config = Config {
            currency: "EUR".into(),
            data_dir: Some(dir.path().join("elsewhere")),
            ..Config::default()
        };
        manager.save(&config).expect("save config");
        assert!(manager.path().exists());
        assert_eq!(manager.load().expect("reload"), config);
        assert_eq!(
            config.store_path(dir.path()),
            dir.path().join("elsewhere").join("budget.json")
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path());
        ensure_dir(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), r#"{"currency":"GBP"}"#).unwrap();
        let config = manager.load().expect("load");
        assert_eq!(config.currency, "GBP");
        assert_eq!(config.store_file, "budget.json");
    }
}
