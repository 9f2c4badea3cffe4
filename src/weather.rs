//! aviationweather.gov data API client

use chrono::{SecondsFormat, Utc};

use crate::config::ProviderConfig;
use crate::error::ClientResult;
use crate::models::{
    AreaQuery, AreaSummary, CwaQuery, ForecastDiscussionQuery, GairmetQuery, LocationQuery,
    MetarQuery, PirepQuery, SigmetQuery, TafQuery, WeatherSummary, WindTempQuery,
};
use crate::normalize::{ErrorField, NormalizedResponse};
use crate::params::{identifier_param, join_identifiers, QueryParams};
use crate::upstream::Upstream;

const DEFAULT_SUMMARY_HOURS: u32 = 2;

/// One method per `/data/*` endpoint. Failures come back as
/// [`NormalizedResponse::Error`], never as `Err`.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    upstream: Upstream,
}

impl WeatherClient {
    pub fn new(config: ProviderConfig) -> ClientResult<Self> {
        Ok(Self {
            upstream: Upstream::new(config, ErrorField::Ignore)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.upstream.base_url()
    }

    pub async fn metar(&self, query: &MetarQuery) -> NormalizedResponse {
        let ids = identifier_param(query.ids.as_deref());
        let params = QueryParams::new()
            .text("ids", ids.as_deref())
            .text("format", Some(query.format.as_deref().unwrap_or("json")))
            .flag("taf", query.taf)
            .number("hours", query.hours)
            .text("bbox", query.bbox.as_deref())
            .text("date", query.date.as_deref());

        self.upstream.get("/data/metar", &params).await
    }

    pub async fn taf(&self, query: &TafQuery) -> NormalizedResponse {
        let ids = identifier_param(query.ids.as_deref());
        let params = QueryParams::new()
            .text("ids", ids.as_deref())
            .text("format", Some(query.format.as_deref().unwrap_or("json")))
            .flag("metar", query.metar)
            .text("bbox", query.bbox.as_deref())
            .text("time", query.time.as_deref())
            .text("date", query.date.as_deref());

        self.upstream.get("/data/taf", &params).await
    }

    pub async fn pirep(&self, query: &PirepQuery) -> NormalizedResponse {
        let id = identifier_param(query.id.as_deref());
        let params = QueryParams::new()
            .text("id", id.as_deref())
            .text("format", Some(query.format.as_deref().unwrap_or("raw")))
            .flag("raw", query.raw)
            .number("age", query.age)
            .number("distance", query.distance)
            .number("level", query.level)
            .text("inten", query.inten.as_deref())
            .text("date", query.date.as_deref());

        self.upstream.get("/data/pirep", &params).await
    }

    /// Domestic SIGMETs
    pub async fn airsigmet(&self, query: &SigmetQuery) -> NormalizedResponse {
        self.upstream
            .get("/data/airsigmet", &sigmet_params(query))
            .await
    }

    /// International SIGMETs
    pub async fn isigmet(&self, query: &SigmetQuery) -> NormalizedResponse {
        self.upstream.get("/data/isigmet", &sigmet_params(query)).await
    }

    /// US graphical AIRMETs
    pub async fn gairmet(&self, query: &GairmetQuery) -> NormalizedResponse {
        let params = QueryParams::new()
            .text("type", query.product.as_deref())
            .text("format", Some(query.format.as_deref().unwrap_or("decoded")))
            .text("hazard", query.hazard.as_deref())
            .text("date", query.date.as_deref());

        self.upstream.get("/data/gairmet", &params).await
    }

    /// Center weather advisories
    pub async fn cwa(&self, query: &CwaQuery) -> NormalizedResponse {
        let params = QueryParams::new()
            .text("hazard", query.hazard.as_deref())
            .text("date", query.date.as_deref());

        self.upstream.get("/data/cwa", &params).await
    }

    /// Winds and temperatures aloft
    pub async fn windtemp(&self, query: &WindTempQuery) -> NormalizedResponse {
        let params = QueryParams::new()
            .required("region", query.region.as_deref().unwrap_or("us"))
            .text("level", query.level.as_deref())
            .text("fcst", query.fcst.as_deref());

        self.upstream.get("/data/windtemp", &params).await
    }

    /// Alaska area forecasts
    pub async fn areafcst(&self, region: &str) -> NormalizedResponse {
        let params = QueryParams::new().required("region", region);
        self.upstream.get("/data/areafcst", &params).await
    }

    pub async fn fcstdisc(&self, query: &ForecastDiscussionQuery) -> NormalizedResponse {
        let params = QueryParams::new()
            .required("type", query.kind.as_deref().unwrap_or("afd"))
            .text("cwa", query.cwa.as_deref());

        self.upstream.get("/data/fcstdisc", &params).await
    }

    /// Meteorological impact statements
    pub async fn mis(&self, loc: Option<&str>) -> NormalizedResponse {
        let params = QueryParams::new().text("loc", loc);
        self.upstream.get("/data/mis", &params).await
    }

    pub async fn stationinfo(&self, query: &LocationQuery) -> NormalizedResponse {
        self.upstream
            .get("/data/stationinfo", &location_params(query))
            .await
    }

    pub async fn airport(&self, query: &LocationQuery) -> NormalizedResponse {
        self.upstream.get("/data/airport", &location_params(query)).await
    }

    pub async fn navaid(&self, query: &LocationQuery) -> NormalizedResponse {
        self.upstream.get("/data/navaid", &location_params(query)).await
    }

    pub async fn fix(&self, query: &LocationQuery) -> NormalizedResponse {
        self.upstream.get("/data/fix", &location_params(query)).await
    }

    pub async fn feature(&self, query: &AreaQuery) -> NormalizedResponse {
        self.upstream.get("/data/feature", &area_params(query)).await
    }

    pub async fn obstacle(&self, query: &AreaQuery) -> NormalizedResponse {
        self.upstream.get("/data/obstacle", &area_params(query)).await
    }

    /// METAR, optional TAF and station info for a list of stations.
    ///
    /// Sub-requests run one after another; a failed one is embedded in its
    /// slot and the rest still run. Entries are joined as given, so only a
    /// single-station list gets the lone-identifier normalization.
    pub async fn weather_summary(
        &self,
        station_ids: &[String],
        include_taf: bool,
        hours_back: Option<u32>,
    ) -> WeatherSummary {
        let ids = join_identifiers(station_ids);
        tracing::info!("Building weather summary for {}", ids);

        let metar = self
            .metar(&MetarQuery {
                ids: Some(ids.clone()),
                format: Some("json".into()),
                taf: Some(include_taf),
                hours: Some(hours_back.unwrap_or(DEFAULT_SUMMARY_HOURS)),
                ..MetarQuery::default()
            })
            .await;

        let taf = if include_taf {
            Some(self.taf(&summary_taf_query(Some(ids.clone()), None)).await)
        } else {
            None
        };

        let station_info = self
            .stationinfo(&LocationQuery {
                ids: Some(ids),
                format: Some("json".into()),
                ..LocationQuery::default()
            })
            .await;

        WeatherSummary {
            metar,
            taf,
            station_info,
            timestamp: request_timestamp(),
            stations_requested: station_ids.to_vec(),
        }
    }

    /// METAR, optional TAF, optional domestic SIGMETs and station info for a
    /// bounding box.
    pub async fn area_summary(
        &self,
        bbox: &str,
        include_taf: bool,
        include_sigmet: bool,
    ) -> AreaSummary {
        tracing::info!("Building area summary for bbox {}", bbox);

        let metar = self
            .metar(&MetarQuery {
                bbox: Some(bbox.to_string()),
                format: Some("json".into()),
                taf: Some(include_taf),
                ..MetarQuery::default()
            })
            .await;

        let taf = if include_taf {
            Some(self.taf(&summary_taf_query(None, Some(bbox.to_string()))).await)
        } else {
            None
        };

        let sigmet = if include_sigmet {
            let query = SigmetQuery {
                format: Some("json".into()),
                ..SigmetQuery::default()
            };
            Some(self.airsigmet(&query).await)
        } else {
            None
        };

        let station_info = self.stationinfo(&LocationQuery::for_bbox(bbox)).await;

        AreaSummary {
            metar,
            taf,
            sigmet,
            station_info,
            bbox: bbox.to_string(),
            timestamp: request_timestamp(),
        }
    }
}

fn summary_taf_query(ids: Option<String>, bbox: Option<String>) -> TafQuery {
    TafQuery {
        ids,
        bbox,
        format: Some("json".into()),
        metar: Some(false),
        ..TafQuery::default()
    }
}

fn sigmet_params(query: &SigmetQuery) -> QueryParams {
    QueryParams::new()
        .text("format", Some(query.format.as_deref().unwrap_or("json")))
        .text("hazard", query.hazard.as_deref())
        .number("level", query.level)
        .text("date", query.date.as_deref())
}

fn location_params(query: &LocationQuery) -> QueryParams {
    let ids = identifier_param(query.ids.as_deref());
    QueryParams::new()
        .required("format", query.format.as_deref().unwrap_or("json"))
        .text("ids", ids.as_deref())
        .text("bbox", query.bbox.as_deref())
}

fn area_params(query: &AreaQuery) -> QueryParams {
    QueryParams::new()
        .required("format", query.format.as_deref().unwrap_or("json"))
        .text("bbox", query.bbox.as_deref())
}

pub(crate) fn request_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_params_defaults_format() {
        let params = location_params(&LocationQuery::for_id(" kjfk "));
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(params.get("ids"), Some("KJFK"));
        assert_eq!(params.get("bbox"), None);
    }

    #[test]
    fn test_location_params_normalizes_raw_ids() {
        let query = LocationQuery {
            ids: Some(" kjfk ".into()),
            ..LocationQuery::default()
        };
        assert_eq!(location_params(&query).get("ids"), Some("KJFK"));
    }

    #[test]
    fn test_sigmet_params_keep_zero_level() {
        let params = sigmet_params(&SigmetQuery {
            hazard: Some("turb".into()),
            level: Some(0),
            ..SigmetQuery::default()
        });
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(params.get("hazard"), Some("turb"));
        assert_eq!(params.get("level"), Some("0"));
    }

    #[test]
    fn test_summary_taf_query_never_bundles_metar() {
        let query = summary_taf_query(Some("KJFK,KLAX".into()), None);
        assert_eq!(query.metar, Some(false));
        assert_eq!(query.ids.as_deref(), Some("KJFK,KLAX"));
    }

    #[test]
    fn test_request_timestamp_parses() {
        let timestamp = request_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }
}
