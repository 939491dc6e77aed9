use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use weather_proxy::config::{self, ApiKey, CREDENTIAL_ENV_VAR};
use weather_proxy::http::HttpServer;
use weather_proxy::lifecycle::{signals, Shutdown};
use weather_proxy::observability::init_logging;

#[derive(Debug, Parser)]
#[command(name = "weather-proxy", about = "Proxy between a weather UI and the OpenWeather API")]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args = Args::parse();
    let config = config::load_config(args.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let credential = ApiKey::from_env();
    if credential.is_none() {
        tracing::warn!(
            "{CREDENTIAL_ENV_VAR} is not set; lookups will fail until it is configured"
        );
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, credential);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
