use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use estoque::bootstrap::check_database;
use estoque::logging::init_tracing;
use estoque::router::init_router;
use estoque::state::AppState;
use estoque_config::{DatabaseConfig, ServerConfig, StartupPolicy};
use estoque_db::Database;
use tracing::info;

#[derive(Parser)]
#[command(name = "estoque")]
#[command(about = "Estoque API - Inventory management backend", long_about = None)]
struct Cli {
    /// Load environment variables from this file instead of `.env`
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// What to do when the database is unreachable at startup (fail-fast, degrade, background)
    #[arg(long, value_name = "POLICY")]
    on_db_failure: Option<StartupPolicy>,

    /// Connectivity check timeout in seconds (at least 1)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    probe_timeout: Option<u64>,

    /// Address to bind the HTTP server to
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,
}

impl Cli {
    fn apply(&self, config: &mut ServerConfig) {
        if let Some(policy) = self.on_db_failure {
            config.startup_policy = policy;
        }
        if let Some(secs) = self.probe_timeout {
            config.probe_timeout = Duration::from_secs(secs);
        }
        if let Some(addr) = self.bind {
            config.addr = addr;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    init_tracing();

    let db_config = DatabaseConfig::from_env().context("invalid database configuration")?;
    let mut server_config = ServerConfig::from_env().context("invalid server configuration")?;
    cli.apply(&mut server_config);

    let db = Database::initialize(&db_config);

    check_database(&db, server_config.startup_policy, server_config.probe_timeout)
        .await
        .context("database is not available")?;

    let state = AppState::new(db.clone(), server_config.probe_timeout);
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.addr)
        .await
        .with_context(|| format!("failed to bind {}", server_config.addr))?;

    info!(addr = %server_config.addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", server_config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Database connections closed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
