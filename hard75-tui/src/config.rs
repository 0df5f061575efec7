use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardConfig {
    /// Base URL of the tracker backend, e.g. "http://localhost:8917"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Identity sent with photo requests. The backend has no real
    /// authentication; this is a placeholder.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_api_url() -> String {
    "http://localhost:8917".to_string()
}

fn default_user_id() -> String {
    hard75::DEFAULT_USER_ID.to_string()
}

impl Default for HardConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_id: default_user_id(),
        }
    }
}

impl HardConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("hard75-tui")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    /// `HARD75_API_URL` in the environment overrides the file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };
        if let Ok(url) = std::env::var("HARD75_API_URL") {
            config.api_url = url;
        }
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
