//! Folio OS web server
//!
//! Serves the site, the song library, and the contact API.

use std::net::SocketAddr;
use folio_server::{app, AppState, Config};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio_server=debug,tower_http=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_line_number(true))
        .init();

    let config = Config::from_env()?;
    let addr = config.addr();
    info!(web_root = %config.web_root.display(), songs_dir = %config.songs_dir.display(), "configuration loaded");

    let router = app(AppState::from_config(config));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║                  Folio OS Server                  ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://{:<37}║", addr);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
