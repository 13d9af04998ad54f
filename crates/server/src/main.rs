use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use portico_client::ClientManager;
use portico_core::{Allowlist, Exemptions};
use portico_gatekeeper::GatekeeperBuilder;
use portico_server::api::AppState;
use portico_server::config::PorticoConfig;

/// Portico edge HTTP server.
#[derive(Parser, Debug)]
#[command(name = "portico-server", about = "Request-gatekeeping edge for the marketplace")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "portico.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber from RUST_LOG or default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration from TOML file, or use defaults if the file does not exist.
    let config: PorticoConfig = if Path::new(&cli.config).exists() {
        let contents = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&contents)?
    } else {
        info!(
            path = %cli.config,
            "config file not found, using defaults"
        );
        PorticoConfig::default()
    };

    // Build the gatekeeper from the configured policy.
    let gatekeeper = GatekeeperBuilder::new()
        .allowlist(Allowlist::new(config.gate.allowlist.clone()))
        .exemptions(Exemptions::new(config.gate.exempt.clone()))
        .landing_route(config.gate.landing_route.clone())
        .auth_cookie(config.gate.auth_cookie.clone())
        .uid_cookie(config.gate.uid_cookie.clone())
        .user_id_header(config.gate.user_id_header.clone())
        .build()?;
    info!(
        allowlist = config.gate.allowlist.len(),
        landing = %config.gate.landing_route,
        "gatekeeper initialized"
    );

    // Build the backend client manager if an upstream is configured.
    let clients = config.upstream.base_url.as_ref().map(|base_url| {
        info!(upstream = %base_url, "backend client manager initialized");
        Arc::new(ClientManager::new(
            base_url.clone(),
            Duration::from_secs(config.upstream.timeout_seconds),
        ))
    });

    let state = AppState {
        gatekeeper: Arc::new(gatekeeper),
        clients,
    };
    let app = portico_server::api::router(state);

    // Resolve the bind address (CLI overrides take precedence).
    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "portico-server listening");

    // Serve with graceful shutdown on SIGINT / SIGTERM.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("portico-server shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM, then return to trigger graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!("received SIGINT"); }
        () = terminate => { info!("received SIGTERM"); }
    }
}
