//! FAA Digital ATIS API client

use serde_json::{Map, Value};

use crate::config::ProviderConfig;
use crate::constants::DATIS_SOURCE;
use crate::error::ClientResult;
use crate::models::AtisMetadata;
use crate::normalize::{ErrorField, NormalizedResponse};
use crate::params::{normalize_identifier, QueryParams};
use crate::upstream::Upstream;
use crate::weather::request_timestamp;

#[derive(Debug, Clone)]
pub struct AtisClient {
    upstream: Upstream,
}

impl AtisClient {
    pub fn new(config: ProviderConfig) -> ClientResult<Self> {
        Ok(Self {
            upstream: Upstream::new(config, ErrorField::Inspect)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.upstream.base_url()
    }

    /// Airport identifiers that publish a D-ATIS
    pub async fn stations(&self) -> NormalizedResponse {
        self.upstream.get("/stations", &QueryParams::new()).await
    }

    /// Current D-ATIS for every airport
    pub async fn all(&self) -> NormalizedResponse {
        self.upstream.get("/all", &QueryParams::new()).await
    }

    pub async fn airport(&self, airport_id: &str) -> NormalizedResponse {
        let airport_id = normalize_identifier(airport_id);
        self.upstream
            .get(&format!("/{}", airport_id), &QueryParams::new())
            .await
    }

    /// Like [`airport`](Self::airport), with a `metadata` block added on
    /// success. Error responses come back untouched.
    pub async fn airport_with_metadata(&self, airport_id: &str) -> Map<String, Value> {
        let airport_id = normalize_identifier(airport_id);
        let response = self.airport(&airport_id).await;

        if response.is_error() {
            return response.into_map();
        }

        let metadata = AtisMetadata {
            airport_id,
            timestamp: request_timestamp(),
            source: DATIS_SOURCE.to_string(),
        };

        let mut map = response.into_map();
        match serde_json::to_value(&metadata) {
            Ok(value) => {
                map.insert("metadata".into(), value);
            }
            Err(e) => tracing::warn!("Could not encode ATIS metadata: {}", e),
        }
        map
    }
}
