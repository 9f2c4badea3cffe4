use aviation_weather_mcp_server::transport::http_app;
use aviation_weather_mcp_server::{AviationWeather, ProviderConfig};
use serde_json::{json, Value};

#[tokio::test]
async fn test_liveness_route() {
    let service =
        AviationWeather::new(ProviderConfig::aviation_weather(), ProviderConfig::datis()).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http_app(service)).await.unwrap();
    });

    let response = reqwest::get(format!("http://{}/mcp/", addr)).await.unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"ok": true}));
}
