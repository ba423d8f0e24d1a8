mod bootstrap;
mod chat;
mod health;

use std::time::Duration;

use anyhow::Result;
use campus_core::config::{AppConfig, LoadOptions};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use crate::bootstrap::BootstrapError;

/// A valid `RUST_LOG` directive replaces the configured level.
fn log_filter(config: &AppConfig, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(config.logging.level.trim().to_ascii_lowercase()))
}

fn init_logging(config: &AppConfig) {
    use campus_core::config::LogFormat;

    let filter = log_filter(config, std::env::var("RUST_LOG").ok().as_deref());
    let subscriber = tracing_subscriber::fmt().with_target(false).with_env_filter(filter);

    match config.logging.format {
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default()).map_err(BootstrapError::Config)?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;
    let listener = app.bind().await?;
    let drain_deadline = Duration::from_secs(app.config.server.graceful_shutdown_secs);

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %app.config.listen_address(),
        "campus-server listening"
    );

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let router = app.router();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined??;
            return Ok(());
        }
        signal = wait_for_shutdown() => signal?,
    }

    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        drain_deadline_secs = drain_deadline.as_secs(),
        "campus-server stopping"
    );
    let _ = stop_tx.send(());

    match tokio::time::timeout(drain_deadline, server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(
            event_name = "system.server.drain_timeout",
            correlation_id = "shutdown",
            "in-flight requests did not finish before the drain deadline"
        ),
    }

    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use campus_core::config::AppConfig;

    use super::log_filter;

    fn config_with_level(level: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.logging.level = level.to_string();
        config
    }

    #[test]
    fn configured_level_becomes_the_filter() {
        assert_eq!(log_filter(&config_with_level("WARN"), None).to_string(), "warn");
    }

    #[test]
    fn rust_log_directive_overrides_configured_level() {
        let filter = log_filter(&config_with_level("info"), Some("campus_server=debug"));
        assert_eq!(filter.to_string(), "campus_server=debug");
    }

    #[test]
    fn unparseable_rust_log_falls_back_to_configured_level() {
        let filter = log_filter(&config_with_level("error"), Some("campus_server=loud"));
        assert_eq!(filter.to_string(), "error");
    }
}
