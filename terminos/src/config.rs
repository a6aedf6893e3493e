//! Server configuration, read from command-line flags or the environment.

use clap::Parser;
use crate::http::server::DEFAULT_MAX_CONNECTIONS;
use tp_rules::Dispatcher;

/// Settings for the `terminos` HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "terminos", version)]
#[command(about = "Calculadora de términos procesales (Colombia)", long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Also accept the legacy SILENCIO action code
    #[arg(long, env = "TERMINOS_LEGACY_SILENCIO")]
    pub legacy_silencio: bool,

    /// Connections handled at once; extra ones get a 503
    #[arg(long, env = "TERMINOS_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: usize,
}

impl ServerConfig {
    /// The `host:port` pair to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// A dispatcher honoring these settings.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new().with_legacy_codes(self.legacy_silencio)
    }
}
