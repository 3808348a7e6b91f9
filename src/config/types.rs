// Configuration type definitions

use serde::Deserialize;

use crate::alert::ReplacePolicy;
use crate::labels::Labels;
use crate::notification::DEFAULT_DURATION_MS;

/// Alert configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AlertConfig {
    #[serde(default)]
    pub replace_policy: ReplacePolicy,
}

/// Notification configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub alert: AlertConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub labels: Labels,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
