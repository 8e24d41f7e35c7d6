// ABOUTME: Deployment strategy selection based on configuration.
// ABOUTME: Determines whether to use a rolling deployment or a direct stop/swap/start.

use crate::config::{Config, StrategyConfig};

/// How a freshly staged build is activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeployStrategy {
    /// Rolling deployment: the platform gradually cuts instances over to the new build.
    Rolling,

    /// Direct replace: stop the app, swap its current build, start it again.
    /// Causes downtime between stop and start.
    #[default]
    DirectReplace,
}

impl DeployStrategy {
    /// Strategy from configuration, falling back to direct replace when unset.
    pub fn for_config(config: &Config) -> Self {
        match config.strategy {
            Some(StrategyConfig::Rolling) => DeployStrategy::Rolling,
            Some(StrategyConfig::DirectReplace) | None => DeployStrategy::DirectReplace,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            DeployStrategy::Rolling => "rolling",
            DeployStrategy::DirectReplace => "default",
        }
    }
}

impl std::fmt::Display for DeployStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
