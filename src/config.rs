//! Configuration for leaderboard runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::leaderboard::DeliveryPolicy;

/// Base trait for configuration types.
pub trait Config: Send + Sync {
    /// Returns the configuration name/identifier.
    fn name(&self) -> &str {
        "default"
    }

    /// Returns whether verbose output is enabled.
    fn is_verbose(&self) -> bool {
        false
    }

    /// Validates the configuration.
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

/// Trait for configurations that support file-based loading.
pub trait FileConfig: Config {
    /// Load configuration from a file path.
    fn from_file(path: &Path) -> ConfigResult<Self>
    where
        Self: Sized;

    /// Save configuration to a file path.
    fn to_file(&self, path: &Path) -> ConfigResult<()>;
}

/// Settings for a [`Leaderboard`](crate::Leaderboard).
///
/// Every field is optional in TOML; missing keys take their defaults.
///
/// ```toml
/// name = "weekly"
/// top_count = 5
/// policy = "best-effort"
/// verbose = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Configuration name, used in log output
    pub name: String,
    /// How many top players a plain `run()` notifies
    pub top_count: usize,
    /// What to do when a delivery fails
    pub policy: DeliveryPolicy,
    /// Verbose output flag
    pub verbose: bool,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            name: "leaderboard".to_string(),
            top_count: 3,
            policy: DeliveryPolicy::default(),
            verbose: false,
        }
    }
}

impl LeaderboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_top_count(mut self, top_count: usize) -> Self {
        self.top_count = top_count;
        self
    }

    pub fn with_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable verbose output.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render configuration as TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}

impl Config for LeaderboardConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl FileConfig for LeaderboardConfig {
    fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn to_file(&self, path: &Path) -> ConfigResult<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
