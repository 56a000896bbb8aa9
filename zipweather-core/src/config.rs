use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable that overrides the stored credential.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Placeholder values that ship in setup instructions and mean "no real
/// credential". Seeing one of these engages demo mode instead of a request
/// that is guaranteed to fail authentication. This list is configuration,
/// not protocol: a provider never hands out such keys in practice.
pub const PLACEHOLDER_KEYS: [&str; 2] = ["demo_key", "PASTE_YOUR_API_KEY_HERE"];

/// Credential configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key, if one has been configured.
    pub api_key: Option<String>,
}

impl Config {
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
        let dirs = ProjectDirs::from("dev", "zipweather", "zipweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// The configured credential: environment variable first, then the file.
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    /// The credential to use for live requests, or `None` when demo mode
    /// should engage (credential absent, blank, or a known placeholder).
    pub fn live_api_key(&self) -> Option<String> {
        self.resolve_api_key().filter(|k| is_live_key(k))
    }
}

/// Whether a credential value can be sent to the provider: present,
/// non-blank, and not one of [`PLACEHOLDER_KEYS`].
pub fn is_live_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !PLACEHOLDER_KEYS.contains(&key)
}
