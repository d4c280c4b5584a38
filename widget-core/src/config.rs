use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com key. Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// API key with the environment override applied: `WEATHER_API_KEY`
    /// wins over the config file.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key_with_env(env::var(API_KEY_ENV).ok())
    }

    /// Precedence rule behind [`Config::resolved_api_key`]: a non-blank
    /// environment value wins, otherwise the config file key is used.
    fn api_key_with_env(&self, env_key: Option<String>) -> Option<String> {
        match env_key {
            Some(key) if !key.trim().is_empty() => Some(key),
            _ => self.api_key.clone(),
        }
    }

    /// Like [`Config::resolved_api_key`], but errors with a configuration
    /// hint when no key is available anywhere.
    pub fn require_api_key(&self) -> Result<String> {
        self.resolved_api_key().ok_or_else(|| {
            anyhow!(
                "No WeatherAPI.com key configured.\n\
                 Hint: run `weather-widget configure` or set the {API_KEY_ENV} environment variable."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let cfg = Config::default();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn require_api_key_errors_with_hint_when_missing() {
        // Only meaningful when the override is not set in the test environment.
        if env::var(API_KEY_ENV).is_ok() {
            return;
        }

        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();
        assert!(err.to_string().contains("weather-widget configure"));
    }

    #[test]
    fn set_api_key_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET".into());

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must parse back");

        assert_eq!(parsed.api_key.as_deref(), Some("SECRET"));
    }

    #[test]
    fn file_key_is_used_when_env_is_absent() {
        if env::var(API_KEY_ENV).is_ok() {
            return;
        }

        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());
        assert_eq!(cfg.resolved_api_key().as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn env_key_wins_over_a_populated_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let resolved = cfg.api_key_with_env(Some("ENV_KEY".into()));
        assert_eq!(resolved.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn blank_env_value_falls_back_to_the_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.api_key_with_env(Some("   ".into())).as_deref(), Some("FILE_KEY"));
        assert_eq!(cfg.api_key_with_env(None).as_deref(), Some("FILE_KEY"));
    }
}
