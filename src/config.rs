//! Configuration types and loading

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::DEFAULT_PROFILE_PATH;

/// Config file looked up in the working directory when no path is given
pub const LOCAL_CONFIG_FILE: &str = "family_helper.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Completion service settings
    pub llm: LlmConfig,

    /// Where the family profile lives
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// "openai" or "fake"
    pub provider: String,
    pub model: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub profile_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
        }
    }
}

impl Config {
    /// Load from an explicit path, else the local config file, else defaults.
    /// Environment overrides are applied last.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_local(config_path, Path::new(LOCAL_CONFIG_FILE))
    }

    fn load_with_local(config_path: Option<&Path>, local: &Path) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                if local.exists() {
                    Self::load_from_file(local).with_context(|| {
                        format!("Failed to load config from {}", local.display())
                    })?
                } else {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = serde_json::from_str(&content).context("Failed to parse config file")?;
        log::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(model) = lookup("FAMILY_HELPER_MODEL") {
            self.llm.model = model;
        }
        if let Some(path) = lookup("FAMILY_HELPER_PROFILE_PATH") {
            self.storage.profile_path = PathBuf::from(path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            anyhow::bail!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            );
        }
        if self.llm.timeout_secs == 0 {
            anyhow::bail!("llm.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
