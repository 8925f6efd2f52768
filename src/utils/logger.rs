/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Maps a `LOGLEVEL` value to a tracing level, defaulting to INFO
#[must_use]
pub fn parse_log_level(value: &str) -> Level {
    match value.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global fmt subscriber
///
/// Safe to call many times; only the first call has an effect. The level is read
/// from `LOGLEVEL`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .map(|v| parse_log_level(&v))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        // Another subscriber may already be installed by the host application.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
