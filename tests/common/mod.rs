#![allow(dead_code)]

use aviation_weather_mcp_server::{AtisClient, AviationWeather, ProviderConfig, WeatherClient};
use wiremock::{MockServer, Request};

/// Nothing listens here; connections are refused immediately
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

pub fn weather_client(server: &MockServer) -> WeatherClient {
    WeatherClient::new(ProviderConfig::aviation_weather().base_url(server.uri())).unwrap()
}

pub fn atis_client(server: &MockServer) -> AtisClient {
    AtisClient::new(ProviderConfig::datis().base_url(server.uri())).unwrap()
}

pub fn service(weather: &MockServer, atis: &MockServer) -> AviationWeather {
    AviationWeather::with_clients(weather_client(weather), atis_client(atis))
}

pub async fn requests(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
