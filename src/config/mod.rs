// ABOUTME: Configuration types and parsing for stagehand.yml.
// ABOUTME: Handles YAML parsing, file discovery, and environment overrides.

mod target;

pub use target::TargetConfig;

use crate::error::{Error, Result};
use crate::output::OutputMode;
use crate::types::SpaceGuid;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "stagehand.yml";
pub const CONFIG_FILENAME_ALT: &str = "stagehand.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".stagehand/config.yml";

pub const ENV_STRATEGY: &str = "STAGEHAND_STRATEGY";
pub const ENV_NO_WAIT: &str = "STAGEHAND_NO_WAIT";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub target: TargetConfig,

    #[serde(default)]
    pub strategy: Option<StrategyConfig>,

    /// Return from health polling once instances are dispatched.
    #[serde(default)]
    pub no_wait: bool,

    /// Redact environment values in the app summary.
    #[serde(default)]
    pub obfuscate_env: bool,

    #[serde(default)]
    pub output: OutputMode,
}

/// Deployment strategy as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StrategyConfig {
    #[serde(rename = "rolling")]
    Rolling,
    #[serde(rename = "default", alias = "direct-replace")]
    DirectReplace,
}

impl FromStr for StrategyConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rolling" => Ok(StrategyConfig::Rolling),
            "" | "default" | "direct-replace" => Ok(StrategyConfig::DirectReplace),
            other => Err(Error::InvalidConfig(format!(
                "unknown deployment strategy '{other}' (expected 'rolling' or 'default')"
            ))),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Apply `STAGEHAND_STRATEGY` and `STAGEHAND_NO_WAIT` on top of the file values.
    pub fn apply_env_overrides(mut self) -> Result<Self> {
        if let Ok(raw) = std::env::var(ENV_STRATEGY) {
            self.strategy = Some(raw.parse()?);
        }

        if let Ok(raw) = std::env::var(ENV_NO_WAIT) {
            self.no_wait = parse_bool(ENV_NO_WAIT, &raw)?;
        }

        Ok(self)
    }

    /// A minimal configuration with placeholder target values.
    pub fn template() -> Self {
        Config {
            target: TargetConfig {
                org: "my-org".to_string(),
                space: "my-space".to_string(),
                space_guid: SpaceGuid::new("my-space-guid"),
                user: "admin".to_string(),
            },
            strategy: None,
            no_wait: false,
            obfuscate_env: false,
            output: OutputMode::Normal,
        }
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(Error::InvalidConfig(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
