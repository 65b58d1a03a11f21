//! Configuration management infrastructure
//!
//! Startup configuration using figment:
//! - Optional `.env` file in the working directory
//! - Process environment variables
//! - Explicit registration of the variable names to resolve

pub mod dotenv;
pub mod loader;

pub use dotenv::DotenvFile;
pub use loader::{fail_on_error, load_config, ConfigError, ConfigLoader};
