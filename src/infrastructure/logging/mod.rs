//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Human-readable output on stderr
//! - `RUST_LOG` filter overrides

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::LoggerImpl;
