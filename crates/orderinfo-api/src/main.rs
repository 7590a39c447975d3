//! Orderinfo Server Binary
//!
//! HTTP service that validates and aggregates customer order batches.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! orderinfo --config config.yaml
//!
//! # With environment variables only
//! ORDERINFO_SERVER__PORT=9090 orderinfo
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, Level};

use orderinfo_api::http::{
    create_router_with_body_limit, create_router_with_observability_and_limit, AppState,
};
use orderinfo_api::observability::{init_logging, init_metrics, LoggingConfig};
use orderinfo_server::ServerConfig;

/// Orderinfo - order batch validation and aggregation service
#[derive(Parser, Debug)]
#[command(name = "orderinfo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(config_path) = args.config {
        ServerConfig::load(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    // Initialize logging
    init_logging(LoggingConfig {
        json_format: config.logging.json,
        default_level: parse_log_level(&config.logging.level),
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting orderinfo server"
    );

    let state = AppState::new();

    // Note: metrics.path is currently hardcoded to /metrics in the router
    let router = if config.metrics.enabled {
        let metrics_state = init_metrics()?;
        info!("Metrics enabled at /metrics");
        create_router_with_observability_and_limit(
            state,
            metrics_state,
            config.server.body_limit_bytes,
        )
    } else {
        create_router_with_body_limit(state, config.server.body_limit_bytes)
    };

    let router = router.layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "HTTP server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

/// Parse log level from string.
fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace"), Level::TRACE);
        assert_eq!(parse_log_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_log_level("Info"), Level::INFO);
        assert_eq!(parse_log_level("WARN"), Level::WARN);
        assert_eq!(parse_log_level("error"), Level::ERROR);
        assert_eq!(parse_log_level("unknown"), Level::INFO);
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = Args::try_parse_from(["orderinfo"]).unwrap();
        assert!(args.config.is_none());

        let args = Args::try_parse_from(["orderinfo", "--config", "config.yaml"]).unwrap();
        assert_eq!(args.config, Some("config.yaml".to_string()));

        let args = Args::try_parse_from(["orderinfo", "-c", "test.yaml"]).unwrap();
        assert_eq!(args.config, Some("test.yaml".to_string()));
    }
}
