use clap::{Parser, ValueEnum};

use crate::config::ProviderConfig;
use crate::constants::{AVIATION_WEATHER_API_BASE, DATIS_API_BASE};

#[derive(Parser, Debug)]
#[command(
    name = "aviation-weather-mcp-server",
    version,
    about = "MCP server for aviation weather (aviationweather.gov) and D-ATIS data"
)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,
    /// Listen host for the HTTP transport
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    /// Listen port for the HTTP transport
    #[arg(long, default_value_t = 8000)]
    pub port: u16,
    #[arg(long, env = "AVIATION_WEATHER_BASE_URL", default_value = AVIATION_WEATHER_API_BASE)]
    pub weather_base_url: String,
    #[arg(long, env = "DATIS_BASE_URL", default_value = DATIS_API_BASE)]
    pub atis_base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Http,
}

impl Cli {
    pub fn weather_config(&self) -> ProviderConfig {
        ProviderConfig::aviation_weather().base_url(&self.weather_base_url)
    }

    pub fn atis_config(&self) -> ProviderConfig {
        ProviderConfig::datis().base_url(&self.atis_base_url)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["aviation-weather-mcp-server"]);
        assert_eq!(cli.transport, Transport::Stdio);
        assert_eq!(cli.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_http_with_overrides() {
        let cli = Cli::parse_from([
            "aviation-weather-mcp-server",
            "--transport",
            "http",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--atis-base-url",
            "http://localhost:4000/api/",
        ]);

        assert_eq!(cli.transport, Transport::Http);
        assert_eq!(cli.bind_address(), "127.0.0.1:9000");
        assert_eq!(cli.atis_config().base_url, "http://localhost:4000/api");
    }
}
