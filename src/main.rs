//! appconfig entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use appconfig::{fail_on_error, load_config, AppConfig, LogConfig, LoggerImpl};

fn main() {
    if let Err(err) = LoggerImpl::init(&LogConfig::default()) {
        eprintln!("{err:#}");
    }

    let config: Arc<AppConfig> = Arc::new(fail_on_error(
        load_config().context("failed to load configuration"),
    ));

    info!(
        app_name = %config.app_name,
        new_relic_enabled = config.has_new_relic_credentials(),
        "configuration loaded"
    );
}
