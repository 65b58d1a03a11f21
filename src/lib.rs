//! appconfig - startup configuration for a New Relic instrumented service
//!
//! Resolves `NEW_RELIC_KEY`, `NEW_RELIC_LICENSE_KEY` and `APP_NAME` from an
//! optional `.env` file and the process environment into an immutable
//! [`AppConfig`]. The file wins when both define a key.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! let config = Arc::new(appconfig::load_config()?);
//! println!("running as {}", config.app_name);
//! # Ok::<(), appconfig::ConfigError>(())
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::models::{AppConfig, RECOGNIZED_KEYS};
pub use infrastructure::config::{fail_on_error, load_config, ConfigError, ConfigLoader};
pub use infrastructure::logging::{LogConfig, LoggerImpl};
