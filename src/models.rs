use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedResponse;
use crate::params::normalize_identifier;

// ============================================================================
// Aviation Weather API Queries
// ============================================================================

/// `/data/metar`
#[derive(Debug, Clone, Default)]
pub struct MetarQuery {
    /// Station ID(s), comma separated
    pub ids: Option<String>,
    /// raw, json, geojson, xml, html (default json)
    pub format: Option<String>,
    /// Bundle TAF text with each METAR
    pub taf: Option<bool>,
    /// Hours back to search
    pub hours: Option<u32>,
    /// lat0,lon0,lat1,lon1
    pub bbox: Option<String>,
    /// yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ
    pub date: Option<String>,
}

impl MetarQuery {
    pub fn for_station(station_id: &str) -> Self {
        Self {
            ids: Some(normalize_identifier(station_id)),
            ..Self::default()
        }
    }
}

/// `/data/taf`
#[derive(Debug, Clone, Default)]
pub struct TafQuery {
    pub ids: Option<String>,
    /// raw, json, geojson, xml, html (default json)
    pub format: Option<String>,
    /// Bundle METAR text with each TAF
    pub metar: Option<bool>,
    pub bbox: Option<String>,
    /// Process time by "valid" or "issue"
    pub time: Option<String>,
    pub date: Option<String>,
}

impl TafQuery {
    pub fn for_station(station_id: &str) -> Self {
        Self {
            ids: Some(normalize_identifier(station_id)),
            ..Self::default()
        }
    }
}

/// `/data/pirep`
#[derive(Debug, Clone, Default)]
pub struct PirepQuery {
    /// Station ID
    pub id: Option<String>,
    /// raw, json, geojson, xml (default raw)
    pub format: Option<String>,
    pub raw: Option<bool>,
    /// Hours back to search
    pub age: Option<u32>,
    /// Distance in nautical miles
    pub distance: Option<u32>,
    /// Level +/-3000' to search
    pub level: Option<i32>,
    /// Minimum intensity (lgt, mod, sev)
    pub inten: Option<String>,
    pub date: Option<String>,
}

/// `/data/airsigmet` and `/data/isigmet`
#[derive(Debug, Clone, Default)]
pub struct SigmetQuery {
    /// raw, json, xml (default json)
    pub format: Option<String>,
    /// conv, turb, ice, ifr
    pub hazard: Option<String>,
    pub level: Option<i32>,
    pub date: Option<String>,
}

/// `/data/gairmet`
#[derive(Debug, Clone, Default)]
pub struct GairmetQuery {
    /// sierra, tango, zulu
    pub product: Option<String>,
    /// decoded, json, geojson, xml (default decoded)
    pub format: Option<String>,
    /// turb-hi, turb-lo, llws, sfc_wind, ifr, mtn_obs, ice, fzlvl
    pub hazard: Option<String>,
    pub date: Option<String>,
}

/// `/data/cwa`
#[derive(Debug, Clone, Default)]
pub struct CwaQuery {
    /// ts, turb, ice, ifr, pcpn, unk
    pub hazard: Option<String>,
    pub date: Option<String>,
}

/// `/data/windtemp`
#[derive(Debug, Clone, Default)]
pub struct WindTempQuery {
    /// us, bos, mia, chi, dfw, slc, sfo, alaska, hawaii, other_pac (default us)
    pub region: Option<String>,
    /// low, high
    pub level: Option<String>,
    /// Forecast cycle: 06, 12, 24
    pub fcst: Option<String>,
}

/// `/data/fcstdisc`
#[derive(Debug, Clone, Default)]
pub struct ForecastDiscussionQuery {
    /// County warning area (WFO)
    pub cwa: Option<String>,
    /// afd or af (default afd)
    pub kind: Option<String>,
}

/// `/data/stationinfo`, `/data/airport`, `/data/navaid` and `/data/fix`
#[derive(Debug, Clone, Default)]
pub struct LocationQuery {
    pub ids: Option<String>,
    pub bbox: Option<String>,
    /// Default json
    pub format: Option<String>,
}

impl LocationQuery {
    pub fn for_id(id: &str) -> Self {
        Self {
            ids: Some(normalize_identifier(id)),
            ..Self::default()
        }
    }

    pub fn for_bbox(bbox: &str) -> Self {
        Self {
            bbox: Some(bbox.to_string()),
            ..Self::default()
        }
    }
}

/// `/data/feature` and `/data/obstacle`
#[derive(Debug, Clone, Default)]
pub struct AreaQuery {
    pub bbox: Option<String>,
    /// Default json
    pub format: Option<String>,
}

// ============================================================================
// Composite Summaries
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    pub metar: NormalizedResponse,
    /// `None` when TAF was not requested
    pub taf: Option<NormalizedResponse>,
    pub station_info: NormalizedResponse,
    pub timestamp: String,
    pub stations_requested: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaSummary {
    pub metar: NormalizedResponse,
    pub taf: Option<NormalizedResponse>,
    pub sigmet: Option<NormalizedResponse>,
    pub station_info: NormalizedResponse,
    pub bbox: String,
    pub timestamp: String,
}

// ============================================================================
// ATIS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtisMetadata {
    pub airport_id: String,
    /// Request time, RFC 3339
    pub timestamp: String,
    pub source: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetMetarRequest {
    /// Single station ID (e.g. "CYYZ", "KJFK")
    pub station_id: String,
    /// Output format: raw, json, geojson, xml, html (default json)
    pub format: Option<String>,
    /// Hours back to search for historical data
    pub hours_back: Option<u32>,
    /// Date in yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ format
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetTafRequest {
    /// Single station ID (e.g. "CYYZ", "KJFK")
    pub station_id: String,
    /// Output format: raw, json, geojson, xml, html (default json)
    pub format: Option<String>,
    /// Process time by "valid" or "issue"
    pub time: Option<String>,
    /// Date in yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ format
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetPirepRequest {
    /// Station ID the reports are centred on
    pub station_id: Option<String>,
    /// Output format: raw, json, geojson, xml (default raw)
    pub format: Option<String>,
    /// Hours back to search
    pub age: Option<u32>,
    /// Distance in nautical miles
    pub distance: Option<u32>,
    /// Flight level +/-3000 ft to search
    pub level: Option<i32>,
    /// Minimum intensity: lgt, mod, sev
    pub intensity: Option<String>,
    /// Date in yyyymmdd_hhmm or yyyy-mm-ddThh:mm:ssZ format
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetAirportRequest {
    /// Single airport ID (e.g. "CYYZ", "KJFK")
    pub airport_id: String,
    /// Output format: decoded, json, geojson (default json)
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetAtisRequest {
    /// Airport identifier (e.g. "KLAX", "CYYZ", "KJFK")
    pub airport_id: String,
}
