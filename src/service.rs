use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::{json, Map, Value};

use crate::atis::AtisClient;
use crate::config::ProviderConfig;
use crate::error::ClientResult;
use crate::models::{
    GetAirportRequest, GetAtisRequest, GetMetarRequest, GetPirepRequest, GetTafRequest,
    LocationQuery, MetarQuery, PirepQuery, TafQuery,
};
use crate::normalize::ensure_object;
use crate::params::normalize_identifier;
use crate::weather::WeatherClient;

/// Main aviation weather service that handles MCP requests
#[derive(Clone)]
pub struct AviationWeather {
    weather: WeatherClient,
    atis: AtisClient,
    tool_router: ToolRouter<Self>,
}

impl AviationWeather {
    /// Creates a service talking to the given providers
    pub fn new(weather: ProviderConfig, atis: ProviderConfig) -> ClientResult<Self> {
        Ok(Self::with_clients(
            WeatherClient::new(weather)?,
            AtisClient::new(atis)?,
        ))
    }

    pub fn with_clients(weather: WeatherClient, atis: AtisClient) -> Self {
        Self {
            weather,
            atis,
            tool_router: Self::tool_router(),
        }
    }

    /// METAR for one station, never bundling TAF text
    pub async fn metar_report(&self, request: GetMetarRequest) -> Map<String, Value> {
        let station_id = normalize_identifier(&request.station_id);
        tracing::info!("Getting METAR for station: {}", station_id);

        let query = MetarQuery {
            format: request.format,
            taf: Some(false),
            hours: request.hours_back,
            date: request.date,
            ..MetarQuery::for_station(&station_id)
        };

        ensure_object(self.weather.metar(&query).await.into())
    }

    /// TAF for one station, never bundling METAR text
    pub async fn taf_report(&self, request: GetTafRequest) -> Map<String, Value> {
        let station_id = normalize_identifier(&request.station_id);
        tracing::info!("Getting TAF for station: {}", station_id);

        let query = TafQuery {
            format: request.format,
            metar: Some(false),
            time: request.time,
            date: request.date,
            ..TafQuery::for_station(&station_id)
        };

        ensure_object(self.weather.taf(&query).await.into())
    }

    pub async fn pirep_report(&self, request: GetPirepRequest) -> Map<String, Value> {
        let station_id = request.station_id.as_deref().map(normalize_identifier);
        tracing::info!(
            "Getting PIREPs near station: {}",
            station_id.as_deref().unwrap_or("<any>")
        );

        let query = PirepQuery {
            id: station_id,
            format: request.format,
            age: request.age,
            distance: request.distance,
            level: request.level,
            inten: request.intensity,
            date: request.date,
            ..PirepQuery::default()
        };

        ensure_object(self.weather.pirep(&query).await.into())
    }

    pub async fn airport_report(&self, request: GetAirportRequest) -> Map<String, Value> {
        let airport_id = normalize_identifier(&request.airport_id);
        tracing::info!("Getting airport information for: {}", airport_id);

        let query = LocationQuery {
            format: request.format,
            ..LocationQuery::for_id(&airport_id)
        };

        ensure_object(self.weather.airport(&query).await.into())
    }

    pub async fn atis_report(&self, request: GetAtisRequest) -> Map<String, Value> {
        let airport_id = normalize_identifier(&request.airport_id);
        tracing::info!("Getting ATIS for airport: {}", airport_id);

        let result = self.atis.airport_with_metadata(&airport_id).await;
        ensure_object(Value::Object(result))
    }
}

/// Fixed acknowledgement for existence checks
pub fn liveness() -> Value {
    json!({ "ok": true })
}

fn json_result(map: Map<String, Value>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::json(map)?]))
}

#[tool_handler]
impl ServerHandler for AviationWeather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "aviation-weather-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A server for getting aviation weather data from aviationweather.gov's API \
                and ATIS data from the FAA Digital ATIS API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl AviationWeather {
    #[tool(description = "Get METAR (Meteorological Terminal Air Report) data for a single aviation weather station. Provide a station ID (e.g., 'KJFK', 'CYYZ'); optionally an output format (raw, json, geojson, xml, html), hours_back for history, or a date in yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ format.")]
    pub async fn get_metar_data(
        &self,
        Parameters(request): Parameters<GetMetarRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(self.metar_report(request).await)
    }

    #[tool(description = "Get TAF (Terminal Aerodrome Forecast) data for a single aviation weather station. Provide a station ID (e.g., 'KJFK', 'CYYZ'); optionally an output format (raw, json, geojson, xml, html), time ('valid' or 'issue'), or a date in yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ format.")]
    pub async fn get_taf_data(
        &self,
        Parameters(request): Parameters<GetTafRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(self.taf_report(request).await)
    }

    #[tool(description = "Get PIREP (Pilot Report) data. All parameters are optional: station_id, format (raw, json, geojson, xml), age in hours, distance in nautical miles, level (+/-3000 ft), minimum intensity (lgt, mod, sev), and a date in yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ format.")]
    pub async fn get_pirep_data(
        &self,
        Parameters(request): Parameters<GetPirepRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(self.pirep_report(request).await)
    }

    #[tool(description = "Get information about a single airport. Provide an airport ID (e.g., 'KJFK', 'CYYZ') and optionally an output format (decoded, json, geojson).")]
    pub async fn get_airport_information(
        &self,
        Parameters(request): Parameters<GetAirportRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(self.airport_report(request).await)
    }

    #[tool(description = "Get D-ATIS (Digital Automatic Terminal Information Service) data for a specific airport. Provide an airport ID (e.g., 'KLAX', 'KJFK').")]
    pub async fn get_atis_data(
        &self,
        Parameters(request): Parameters<GetAtisRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(self.atis_report(request).await)
    }
}
