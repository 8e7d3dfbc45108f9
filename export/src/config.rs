//! Settings for the export run.
//!
//! Loaded with figment from a YAML file, then overridden by `WZS_`-prefixed
//! environment variables (`WZS_URI`, `WZS_PASSWORD`, ...). The YAML path
//! defaults to `start-residents.yaml` and can be moved with `WZS_CONFIG`.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wzs_core::types::LoginParams;

pub const DEFAULT_CONFIG_FILE: &str = "start-residents.yaml";
pub const CONFIG_PATH_ENV: &str = "WZS_CONFIG";
pub const ENV_PREFIX: &str = "WZS_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(Box<figment::Error>),

    #[error("configuration error: uri must not be empty")]
    MissingUri,

    #[error("configuration error: delimiter must not be empty")]
    EmptyDelimiter,
}

/// Keys are read in lower snake case (`process_full_name`) or in the
/// upper-case spelling of the legacy app settings (`PROCESS_FULL_NAME`).
/// A file that sets both spellings of one key is rejected.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Service root, e.g. `http://csmain.caresolutions.be:9000/`.
    #[serde(alias = "URI")]
    pub uri: String,
    #[serde(alias = "FILENAME")]
    pub filename: String,
    /// Output directory; created when missing.
    #[serde(alias = "FILEPATH")]
    pub filepath: PathBuf,
    /// Executable started with the exported file as its only argument.
    #[serde(alias = "PROCESS_FULL_NAME")]
    pub process_full_name: String,
    #[serde(alias = "DELIMITER")]
    pub delimiter: String,
    /// User initials; combined with `domain` into `login@domain`.
    #[serde(alias = "LOGIN")]
    pub login: String,
    #[serde(alias = "DOMAIN")]
    pub domain: String,
    #[serde(alias = "PASSWORD")]
    pub password: String,
    #[serde(alias = "APPLICATION_KEY")]
    pub application_key: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("uri", &self.uri)
            .field("filename", &self.filename)
            .field("filepath", &self.filepath)
            .field("process_full_name", &self.process_full_name)
            .field("delimiter", &self.delimiter)
            .field("login", &self.login)
            .field("domain", &self.domain)
            .field("password", &"***")
            .field("application_key", &"***")
            .finish()
    }
}

/// Provider stack: the YAML file at `path`, then the environment.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
}

impl AppConfig {
    /// Load from the default provider stack.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::from_figment(&figment(&path))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.trim().is_empty() {
            return Err(ConfigError::MissingUri);
        }
        self.validated_delimiter()?;
        Ok(())
    }

    /// Field separator. Any non-empty string, multi-character ones included.
    pub fn validated_delimiter(&self) -> Result<&str, ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(&self.delimiter)
    }

    pub fn login_params(&self) -> LoginParams {
        LoginParams::new(&self.login, &self.domain, &self.password, &self.application_key)
    }

    pub fn output_path(&self) -> PathBuf {
        self.filepath.join(&self.filename)
    }
}
