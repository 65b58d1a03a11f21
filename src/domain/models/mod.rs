pub mod config;

pub use config::{AppConfig, APP_NAME, NEW_RELIC_KEY, NEW_RELIC_LICENSE_KEY, RECOGNIZED_KEYS};
