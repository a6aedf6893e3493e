use anyhow::Context;
use clap::Parser;
use terminos::config::ServerConfig;
use terminos::http::{routes::HEALTH_MESSAGE, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr();
    let server = Server::bind(addr.as_str(), config.dispatcher())
        .with_context(|| format!("Failed to bind to {addr}"))?
        .with_max_connections(config.max_connections);

    info!(
        addr = %server.local_addr()?,
        legacy_silencio = config.legacy_silencio,
        version = env!("CARGO_PKG_VERSION"),
        "{HEALTH_MESSAGE}"
    );
    server.run()?;
    Ok(())
}
