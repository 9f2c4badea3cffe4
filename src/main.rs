use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aviation_weather_mcp_server::cli::{Cli, Transport};
use aviation_weather_mcp_server::transport::{serve_http, serve_stdio};
use aviation_weather_mcp_server::AviationWeather;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aviation_weather_mcp_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting aviation weather MCP server ({:?})", cli.transport);

    let service = AviationWeather::new(cli.weather_config(), cli.atis_config())?;

    match cli.transport {
        Transport::Stdio => serve_stdio(service).await?,
        Transport::Http => serve_http(service, &cli.bind_address()).await?,
    }

    tracing::info!("Server shutdown complete");
    Ok(())
}
