// Configuration module for berber-feedback
// This module handles loading and parsing configuration from ~/.config/berber/feedback.toml

mod types;

pub use types::{AlertConfig, Config, NotificationConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FeedbackError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/berber/feedback.toml
/// Returns default configuration if file doesn't exist or on read/parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from `path`, falling back to defaults like [`load_config`]
pub fn load_config_from(path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", path);

    if !path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::error!("Failed to load config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, FeedbackError> {
    let contents = fs::read_to_string(path)?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    Ok(toml::from_str::<Config>(&contents)?)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/berber/feedback.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("berber")
        .join("feedback.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::ReplacePolicy;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("feedback.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("missing.toml"));
        assert!(result.warning.is_none());
        assert_eq!(result.config.alert.replace_policy, ReplacePolicy::Orphan);
        assert_eq!(result.config.notification.default_duration_ms, 5000);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[alert]
replace_policy = "cancel"

[notification]
default_duration_ms = 2500
"#,
        );

        let result = load_config_from(&path);
        assert!(result.warning.is_none());
        assert_eq!(result.config.alert.replace_policy, ReplacePolicy::Cancel);
        assert_eq!(result.config.notification.default_duration_ms, 2500);
    }

    #[test]
    fn test_malformed_file_falls_back_with_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[alert\nreplace_policy = \"cancel\"");

        let result = load_config_from(&path);
        let warning = result.warning.expect("malformed config should warn");
        assert!(warning.starts_with("Invalid config"));
        assert_eq!(result.config.alert.replace_policy, ReplacePolicy::Orphan);
    }

    #[test]
    fn test_unreadable_path_falls_back_with_warning() {
        // A directory exists but cannot be read as a file
        let dir = TempDir::new().unwrap();

        let result = load_config_from(dir.path());
        let warning = result.warning.expect("read failure should warn");
        assert!(warning.starts_with("Failed to read config"));
        assert_eq!(result.config.notification.default_duration_ms, 5000);
    }

    #[test]
    fn test_config_path_consistency() {
        let path = get_config_path();
        assert_eq!(path, get_config_path());

        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("berber/feedback.toml")
                || path_str.ends_with("berber\\feedback.toml"),
            "Config path should end with berber/feedback.toml, got: {}",
            path_str
        );
    }
}
