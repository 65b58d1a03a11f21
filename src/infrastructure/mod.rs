//! Infrastructure layer module
//!
//! - Configuration loading (figment, dotenvy)
//! - Logging setup (tracing-subscriber)

pub mod config;
pub mod logging;
