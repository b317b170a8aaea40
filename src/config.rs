//! TOML-based runtime configuration: file locations and logging.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

/// Configuration file looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "satellite.toml";

/// Top-level configuration parsed from TOML.
///
/// All fields have defaults, so an absent file or an empty document both
/// yield [`SatelliteConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SatelliteConfig {
    /// Where the state record lives.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Log sinks and verbosity.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-session outputs.
    #[serde(default)]
    pub session: SessionConfig,
}

/// State record location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the three-line state record.
    pub state_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("satellite_state.txt"),
        }
    }
}

/// Log sinks and verbosity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log file, appended to across runs.
    pub log_file: PathBuf,
    /// Maximum level: `"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`.
    pub level: String,
    /// Mirror log lines to the terminal (stderr).
    pub terminal: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("satellite_logs.txt"),
            level: "info".to_string(),
            terminal: true,
        }
    }
}

/// Per-session outputs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Optional CSV path receiving the session transcript on exit.
    pub history_out: Option<PathBuf>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"logging.level"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl SatelliteConfig {
    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_toml_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.storage.state_file.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "storage.state_file".into(),
                message: "must not be empty".into(),
            });
        }

        let log = &self.logging;
        if log.log_file.file_name().is_none() {
            errors.push(ConfigError {
                field: "logging.log_file".into(),
                message: "must name a file".into(),
            });
        }
        if log.level.parse::<LevelFilter>().is_err() {
            errors.push(ConfigError {
                field: "logging.level".into(),
                message: format!(
                    "must be one of off, error, warn, info, debug, trace; got \"{}\"",
                    log.level
                ),
            });
        }

        if let Some(out) = &self.session.history_out {
            if out.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: "session.history_out".into(),
                    message: "must not be empty when set".into(),
                });
            } else if out == &self.storage.state_file {
                errors.push(ConfigError {
                    field: "session.history_out".into(),
                    message: "must differ from storage.state_file".into(),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = SatelliteConfig::default();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "defaults should be valid: {errors:?}");
        assert_eq!(cfg.storage.state_file, PathBuf::from("satellite_state.txt"));
        assert_eq!(cfg.logging.log_file, PathBuf::from("satellite_logs.txt"));
        assert!(cfg.session.history_out.is_none());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = SatelliteConfig::from_toml_str("");
        assert_eq!(
            cfg.as_ref().map(|c| c.logging.level.as_str()).ok(),
            Some("info")
        );
    }

    #[test]
    fn full_toml_parses() {
        let toml = r#"
[storage]
state_file = "/var/lib/sat/state.txt"

[logging]
log_file = "logs/sat.log"
level = "debug"
terminal = false

[session]
history_out = "history.csv"
"#;
        let cfg = SatelliteConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(
            cfg.as_ref().map(|c| c.storage.state_file.clone()),
            Some(PathBuf::from("/var/lib/sat/state.txt"))
        );
        assert_eq!(cfg.as_ref().map(|c| c.logging.terminal), Some(false));
        assert_eq!(
            cfg.as_ref().and_then(|c| c.session.history_out.clone()),
            Some(PathBuf::from("history.csv"))
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = SatelliteConfig::from_toml_str("[logging]\nlevel = \"warn\"\n");
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.logging.level.as_str()), Some("warn"));
        assert_eq!(cfg.as_ref().map(|c| c.logging.terminal), Some(true));
        assert_eq!(
            cfg.as_ref().map(|c| c.storage.state_file.clone()),
            Some(PathBuf::from("satellite_state.txt"))
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = SatelliteConfig::from_toml_str("[storage]\nstate_fle = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn validation_catches_bad_level() {
        let mut cfg = SatelliteConfig::default();
        cfg.logging.level = "loud".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "logging.level"));
    }

    #[test]
    fn validation_catches_history_over_state_file() {
        let mut cfg = SatelliteConfig::default();
        cfg.session.history_out = Some(cfg.storage.state_file.clone());
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "session.history_out"));
    }

    #[test]
    fn validation_catches_empty_state_file() {
        let mut cfg = SatelliteConfig::default();
        cfg.storage.state_file = PathBuf::new();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "storage.state_file"));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = SatelliteConfig::load_or_default(&dir.path().join(CONFIG_FILE));
        assert!(cfg.is_ok());
    }

    #[test]
    fn unparseable_config_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[logging\nlevel = ").expect("seed");
        let err = SatelliteConfig::load_or_default(&path).expect_err("must fail");
        assert_eq!(err.field, "toml");
    }
}
