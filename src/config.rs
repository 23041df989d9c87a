use crate::model::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rows per table page; must be at least 1
    pub page_size: usize,
    /// Directory CSV exports are written to
    pub export_dir: String,
    /// Currency symbol for money columns
    pub currency: String,
    /// Dataset seed; 0 means derive one from the clock at startup
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_dir: ".".to_string(),
            currency: "$".to_string(),
            seed: 0,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".adlens"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok().map(Config::sanitized)
    }

    /// Reject out-of-contract values from a hand-edited config file.
    /// A zero page size would make the query pipeline's page math
    /// meaningless, so it falls back to the default here rather than
    /// being checked inside the engine.
    fn sanitized(mut self) -> Config {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.currency.is_empty() {
            self.currency = "$".to_string();
        }
        if self.export_dir.is_empty() {
            self.export_dir = ".".to_string();
        }
        self
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_rejects_zero_page_size() {
        let config = Config {
            page_size: 0,
            export_dir: String::new(),
            currency: String::new(),
            seed: 5,
        }
        .sanitized();

        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.currency, "$");
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.seed, 5);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let config = Config {
            page_size: 25,
            export_dir: "/tmp".to_string(),
            currency: "€".to_string(),
            seed: 1,
        }
        .sanitized();

        assert_eq!(config.page_size, 25);
        assert_eq!(config.export_dir, "/tmp");
    }
}
