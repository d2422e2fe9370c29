//! Portal webserver entry point
//!
//! Loads configuration from the environment, lets command line arguments
//! override it, and serves the JSON API until Ctrl+C.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::signal;

use portal::{KeyValueStore, MemoryKeyValueStore, Portal, PortalConfig};
use shared::{component_info, logging, Component};
use webserver::WebServer;

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Tournament registration portal API")]
struct Args {
    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Directory for persisted JSON data (overrides PORTAL_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Delay per checkout processing phase in milliseconds (overrides PORTAL_CHECKOUT_PHASE_MS)
    #[arg(long)]
    checkout_phase_ms: Option<u64>,

    /// Keep all state in memory; nothing survives a restart
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = PortalConfig::from_env().context("loading portal configuration")?;
    if let Some(data_dir) = args.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if let Some(millis) = args.checkout_phase_ms {
        config = config.with_checkout_phase_delay(Duration::from_millis(millis));
    }

    let bind_address = SocketAddr::from(([127, 0, 0, 1], args.port));

    if args.in_memory {
        component_info!(Component::WebServer, "🧪 Running with in-memory storage");
        let portal = Portal::load(Arc::new(MemoryKeyValueStore::new()), config).await;
        serve(portal, bind_address).await
    } else {
        component_info!(
            Component::WebServer,
            "📁 Persisting to {}",
            config.data_dir.display()
        );
        let portal = Portal::open(config).await.context("opening data directory")?;
        serve(portal, bind_address).await
    }
}

async fn serve<K: KeyValueStore + 'static>(portal: Portal<K>, bind_address: SocketAddr) -> anyhow::Result<()> {
    let mut webserver = WebServer::new(portal, bind_address);

    // Set up graceful shutdown
    let shutdown_sender = webserver.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(Component::WebServer, "Signal handling", &err);
            }
        }
    });

    webserver.run().await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}
