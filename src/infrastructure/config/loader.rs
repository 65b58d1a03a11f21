use std::collections::BTreeMap;
use std::env::{self, VarError};
use std::fmt::Display;
use std::path::PathBuf;
use std::process;

use figment::providers::Serialized;
use figment::Figment;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info};

use super::dotenv::DotenvFile;
use crate::domain::models::config::{AppConfig, RECOGNIZED_KEYS};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable name was rejected at registration
    #[error("failed to bind {key}: {reason}")]
    Registration {
        /// The rejected name
        key: String,
        /// Why the name is invalid
        reason: &'static str,
    },

    /// A registered variable the file does not define holds non-Unicode data
    #[error("failed to read environment: {key} is not valid unicode")]
    InvalidValue {
        /// The variable that could not be read
        key: String,
    },

    /// The merged values do not fit the target type
    #[error("failed to read environment: {0}")]
    Extract(#[source] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

/// Loads [`AppConfig`] from an optional `.env` file and the process environment
///
/// Precedence (lowest to highest):
/// 1. Empty defaults
/// 2. Environment variables
/// 3. `.env` file in the search path
///
/// Only registered keys are resolved. File keys match them regardless of
/// case. A missing or unreadable file is logged and skipped.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    keys: Vec<String>,
    search_path: PathBuf,
    file_name: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// File name looked up in the search path
    pub const DEFAULT_FILE_NAME: &'static str = ".env";

    /// Loader with no registered keys, reading `./.env`
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            search_path: PathBuf::from("."),
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Loader with every key of [`AppConfig`] registered
    pub fn recognized() -> Result<Self, ConfigError> {
        let mut loader = Self::new();
        for key in RECOGNIZED_KEYS {
            loader.register(key)?;
        }
        Ok(loader)
    }

    /// Directory holding the configuration file
    #[must_use]
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_path = path.into();
        self
    }

    /// Name of the configuration file inside the search path
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Register a variable name to resolve
    ///
    /// Names are `A-Z`, `0-9` and `_`, not starting with a digit.
    /// Registering a name twice has no effect.
    pub fn register(&mut self, key: &str) -> Result<(), ConfigError> {
        validate_key(key).map_err(|reason| ConfigError::Registration {
            key: key.to_string(),
            reason,
        })?;

        if !self.keys.iter().any(|k| k == key) {
            self.keys.push(key.to_string());
        }
        Ok(())
    }

    /// Names registered so far, in registration order
    pub fn registered_keys(&self) -> &[String] {
        &self.keys
    }

    /// Path of the configuration file this loader reads
    pub fn file_path(&self) -> PathBuf {
        self.search_path.join(&self.file_name)
    }

    /// Resolve the registered keys into an [`AppConfig`]
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        self.extract()
    }

    /// Resolve the registered keys into any deserializable type
    ///
    /// Field names are the lowercase form of the registered keys.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        let value: T = self.figment()?.extract()?;
        debug!(keys = ?self.keys, "configuration extracted");
        Ok(value)
    }

    /// Build the merged figment without extracting it
    ///
    /// The environment is only consulted for keys the file leaves undefined.
    pub fn figment(&self) -> Result<Figment, ConfigError> {
        let from_file = self.read_file();
        let from_env = self.read_environment(&from_file)?;

        Ok(Figment::new()
            .merge(Serialized::defaults(from_env))
            .merge(Serialized::defaults(from_file)))
    }

    fn read_environment(
        &self,
        from_file: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, ConfigError> {
        let mut values = BTreeMap::new();
        for key in &self.keys {
            let field = key.to_lowercase();
            if from_file.contains_key(&field) {
                continue;
            }
            match env::var(key) {
                Ok(value) => {
                    values.insert(field, value);
                }
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(ConfigError::InvalidValue { key: key.clone() });
                }
            }
        }
        Ok(values)
    }

    fn read_file(&self) -> BTreeMap<String, String> {
        let file = DotenvFile::in_dir(&self.search_path, &self.file_name);
        match file.read() {
            Ok(entries) => entries
                .into_iter()
                .filter(|(key, _)| self.keys.iter().any(|k| k.eq_ignore_ascii_case(key)))
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
            Err(err) => {
                info!(
                    path = %file.path().display(),
                    error = %err,
                    "no configuration file found, loading from environment variables"
                );
                BTreeMap::new()
            }
        }
    }
}

fn validate_key(key: &str) -> Result<(), &'static str> {
    let Some(first) = key.chars().next() else {
        return Err("name is empty");
    };
    if first.is_ascii_digit() {
        return Err("name starts with a digit");
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return Err("name may only contain A-Z, 0-9 and _");
    }
    Ok(())
}

/// Load the application configuration from `./.env` and the environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ConfigLoader::recognized()?.load()
}

/// Unwrap a startup result, or log `<context>: <cause>` and exit with status 1
pub fn fail_on_error<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("{err:#}");
            process::exit(1);
        }
    }
}
