//! HTTP server command
//!
//! Resolves configuration (environment, then flags), connects to the
//! topic store and runs the web app until Ctrl+C / SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linc_core::AppConfig;
use linc_server::{create_pool, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (overrides PORT, default 3000)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Directory with static assets (overrides PUBLIC_DIR)
    #[arg(long, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply flag overrides on top of the environment configuration.
    fn server_config(self, config: &AppConfig) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port.unwrap_or(config.port)),
            public_dir: self.public_dir.unwrap_or_else(|| config.public_dir.clone()),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server = args.server_config(&config);

    tracing::info!(
        host = %config.store.host,
        port = config.store.port,
        database = %config.store.database,
        "Connecting to topic store"
    );

    let pool = create_pool(&config.store).await.with_context(|| {
        format!(
            "Failed to connect to postgres at {}:{}/{}",
            config.store.host, config.store.port, config.store.database
        )
    })?;

    tracing::info!("Starting linc server on {}", server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, server).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let args = ServeArgs::parse_from(["serve", "--port", "8080", "--public-dir", "/srv/assets"]);
        let server = args.server_config(&AppConfig::default());

        assert_eq!(server.bind_addr.port(), 8080);
        assert_eq!(server.public_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn environment_used_without_flags() {
        let config = AppConfig {
            port: 4000,
            ..AppConfig::default()
        };
        let server = ServeArgs::parse_from(["serve"]).server_config(&config);

        assert_eq!(server.bind_addr, "0.0.0.0:4000".parse().unwrap());
        assert_eq!(server.public_dir, PathBuf::from("public"));
    }
}
