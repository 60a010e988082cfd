//! Configuration for the helpdesk front-end
//!
//! Settings are layered: built-in defaults, then an optional YAML file
//! (`--config`, or `helpdesk.yaml` in the platform config directory), then
//! `HELPDESK_*` environment variables such as
//! `HELPDESK_NOTIFICATIONS__PROBABILITY=0.5`.

use crate::error::{HelpdeskError, Result};
use crate::views::Role;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "helpdesk.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub desk: DeskConfig,
    pub notifications: NotificationConfig,
    pub output: OutputConfig,
}

/// Who is signed in to each dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub technician: String,
    pub end_user: String,
    pub default_role: Role,
}

/// Simulated notification feed settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Milliseconds between polls of the notification source
    pub interval_ms: u64,
    /// Chance per poll that a notification arrives
    pub probability: f64,
    /// Unread count the technician dashboard starts with
    pub initial_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            desk: DeskConfig::default(),
            notifications: NotificationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            technician: "John Smith".to_string(),
            end_user: "End User".to_string(),
            default_role: Role::Technician,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 10_000,
            probability: crate::notify::DEFAULT_PROBABILITY,
            initial_count: 2,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl NotificationConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Config {
    /// Load configuration, reading `path` if given (it must exist) or the
    /// default config file if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                builder = builder.add_source(config::File::from(path).required(true));
            },
            None => {
                if let Some(default_path) = Self::default_path() {
                    builder = builder.add_source(config::File::from(default_path).required(false));
                }
            },
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HELPDESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// `helpdesk.yaml` in the platform config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "helpdesk").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Check value ranges the type system can't express
    pub fn validate(&self) -> Result<()> {
        let probability = self.notifications.probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(HelpdeskError::InvalidConfig(format!(
                "notifications.probability must be between 0 and 1, got {probability}"
            )));
        }
        if self.notifications.interval_ms == 0 {
            return Err(HelpdeskError::InvalidConfig(
                "notifications.interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.desk.technician.trim().is_empty() {
            return Err(HelpdeskError::InvalidConfig(
                "desk.technician cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.desk.technician, "John Smith");
        assert_eq!(config.notifications.interval(), Duration::from_secs(10));
        assert!((config.notifications.probability - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.notifications.initial_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_from_file_overrides_defaults() {
        let file = yaml_file(
            "desk:\n  technician: Sarah Johnson\nnotifications:\n  interval_ms: 500\n",
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.desk.technician, "Sarah Johnson");
        assert_eq!(config.notifications.interval_ms, 500);
        assert_eq!(config.notifications.initial_count, 2);
        assert_eq!(config.desk.default_role, Role::Technician);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    #[serial]
    fn test_invalid_probability_rejected() {
        let file = yaml_file("notifications:\n  probability: 1.5\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, HelpdeskError::InvalidConfig(_)));
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let file = yaml_file("notifications:\n  probability: 0.1\n");
        // SAFETY: serialized test, no other thread reads the environment
        unsafe { std::env::set_var("HELPDESK_NOTIFICATIONS__PROBABILITY", "0.75") };
        let result = Config::load(Some(file.path()));
        unsafe { std::env::remove_var("HELPDESK_NOTIFICATIONS__PROBABILITY") };

        let config = result.unwrap();
        assert!((config.notifications.probability - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_yaml_round_trip_of_defaults() {
        let yaml = Config::default().to_yaml().unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
