use crate::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: SIRIUS_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error
    /// Default: info
    #[serde(default = "default_level")]
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: SIRIUS_LOG_JSON
    /// Default: false
    #[serde(default = "default_json")]
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: SIRIUS_LOG_STRIP_ANSI
    /// Default: false
    #[serde(default = "default_strip_ansi")]
    pub strip_ansi: bool,

    /// Write logs to a size-rotated file in addition to the console
    ///
    /// Env: SIRIUS_LOG_WRITE_TO_FILE
    /// Default: false
    #[serde(default = "default_write_to_file")]
    pub write_to_file: bool,

    /// Directory for log files
    ///
    /// Env: SIRIUS_LOG_WRITE_PATH
    /// Default: ./logs
    #[serde(default = "default_write_path")]
    pub write_path: String,

    /// Maximum log file size in bytes before rotation
    ///
    /// Env: SIRIUS_LOG_WRITE_MAX_FILE_SIZE
    /// Default: 5242880 (5 MiB)
    #[serde(default = "default_write_max_file_size")]
    pub write_max_file_size: u64,

    /// Number of log files to keep, including the current one
    ///
    /// Env: SIRIUS_LOG_WRITE_MAX_FILES
    /// Default: 5
    #[serde(default = "default_write_max_files")]
    pub write_max_files: usize,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}

fn default_strip_ansi() -> bool {
    false
}

fn default_write_to_file() -> bool {
    false
}

fn default_write_path() -> String {
    "./logs".to_string()
}

fn default_write_max_file_size() -> u64 {
    5_242_880
}

fn default_write_max_files() -> usize {
    5
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];

        if !valid_levels.contains(&self.level.as_str()) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            )));
        }

        if self.write_to_file {
            if self.write_max_file_size == 0 {
                return Err(ConfigError::ValidateError(
                    "Log file max size cannot be 0".to_string(),
                ));
            }
            if self.write_max_files == 0 {
                return Err(ConfigError::ValidateError(
                    "Log file count cannot be 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: default_json(),
            strip_ansi: default_strip_ansi(),
            write_to_file: default_write_to_file(),
            write_path: default_write_path(),
            write_max_file_size: default_write_max_file_size(),
            write_max_files: default_write_max_files(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.json, false);
        assert_eq!(config.strip_ansi, false);
        assert_eq!(config.write_to_file, false);
    }

    #[test]
    fn test_validate_valid_levels() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let config = LogConfig {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Level {} should be valid", level);
        }
    }

    #[test]
    fn test_validate_invalid_level() {
        let config = LogConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_file_rotation_limits() {
        let config = LogConfig {
            write_to_file: true,
            write_max_files: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LogConfig {
            write_to_file: true,
            write_max_file_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rotation_limits_ignored_without_file_output() {
        // Limits only apply when file output is enabled
        let config = LogConfig {
            write_to_file: false,
            write_max_files: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
