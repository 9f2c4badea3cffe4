//! Aviation weather and D-ATIS data exposed as MCP tools.
//!
//! Two thin clients wrap the aviationweather.gov data API and the FAA
//! Digital ATIS API; every response, including failures, is normalized into
//! a JSON object before it reaches the tool surface.

pub mod atis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalize;
pub mod params;
pub mod service;
pub mod transport;
pub mod upstream;
pub mod weather;

pub use atis::AtisClient;
pub use config::ProviderConfig;
pub use error::{ClientError, ClientResult};
pub use normalize::{ErrorOrigin, NormalizedResponse};
pub use service::AviationWeather;
pub use weather::WeatherClient;
