mod args;
mod error;
mod http;
mod log;

pub use args::Args;
pub use error::ConfigError;
pub use http::HttpConfig;
pub use log::LogConfig;

#[derive(Debug, Clone)]
pub struct SiriusConfig {
    pub http: HttpConfig,
    pub log: LogConfig,
}

impl SiriusConfig {
    /// Load configuration from `SIRIUS_`-prefixed environment variables.
    ///
    /// Each section is read with its own prefix (`SIRIUS_HTTP_*`,
    /// `SIRIUS_LOG_*`); envy does not descend into nested structs, so the
    /// sections are deserialized independently and composed here.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            http: envy::prefixed("SIRIUS_HTTP_").from_env::<HttpConfig>()?,
            log: envy::prefixed("SIRIUS_LOG_").from_env::<LogConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Default for SiriusConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Load environment variables from a dotenv file, if it exists.
///
/// Variables already present in the environment are not overridden. A
/// missing file is not an error so the default `.env` path works in
/// environments that configure everything through real env vars.
pub fn load_env_file(path: &str) -> Option<std::path::PathBuf> {
    dotenv::from_filename(path).ok()
}
