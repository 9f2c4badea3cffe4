use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "AviationWeatherMCP/1.0";

/// aviationweather.gov data API base URL
pub const AVIATION_WEATHER_API_BASE: &str = "https://aviationweather.gov/api";

/// FAA Digital ATIS API base URL
pub const DATIS_API_BASE: &str = "https://datis.clowd.io/api";

/// Per-request timeout; there is no retry
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source label attached to ATIS metadata
pub const DATIS_SOURCE: &str = "FAA Digital ATIS API";
