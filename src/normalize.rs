//! Response normalization.
//!
//! Every upstream exchange, whatever came back, is reshaped into a
//! [`NormalizedResponse`], which always serializes to a JSON object:
//!
//! | upstream                 | normalized                            |
//! |--------------------------|---------------------------------------|
//! | object                   | the object, unchanged                 |
//! | array of length N        | `{"data": [...], "count": N}`         |
//! | scalar                   | `{"data": v, "raw_value": "v"}`       |
//! | non-JSON body            | `{"raw_data": text}`                  |
//! | transport / HTTP failure | `{"error": msg, "status_code": code}` |

use serde::Serialize;
use serde_json::{Map, Value};

/// Whether a decoded object's top-level `error` key is treated as a failure.
///
/// The ATIS provider reports lookup failures in-band; the weather provider
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Ignore,
    Inspect,
}

/// Where an error response came from. Not part of the serialized shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// Connection failure, timeout, unreadable body or non-2xx status
    Transport,
    /// The provider answered with its own `error` field
    Upstream,
}

/// Outcome of a single HTTP GET, before any decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// 2xx answer
    Completed { status: u16, body: String },
    /// Non-2xx answer; `message` describes the status failure
    Rejected {
        status: u16,
        message: String,
        body: String,
    },
    /// No usable answer at all
    Failed {
        message: String,
        status: Option<u16>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Map<String, Value>")]
pub enum NormalizedResponse {
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Scalar(Value),
    RawText(String),
    Error {
        error: Value,
        status_code: Option<u16>,
        origin: ErrorOrigin,
    },
}

impl NormalizedResponse {
    pub fn transport_error(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Error {
            error: Value::String(message.into()),
            status_code,
            origin: ErrorOrigin::Transport,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn origin(&self) -> Option<ErrorOrigin> {
        match self {
            Self::Error { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        match self {
            Self::Object(map) => map,
            Self::Array(items) => {
                let count = items.len();
                let mut map = Map::new();
                map.insert("data".into(), Value::Array(items));
                map.insert("count".into(), Value::from(count));
                map
            }
            Self::Scalar(value) => {
                let raw_value = scalar_text(&value);
                let mut map = Map::new();
                map.insert("data".into(), value);
                map.insert("raw_value".into(), Value::String(raw_value));
                map
            }
            Self::RawText(text) => {
                let mut map = Map::new();
                map.insert("raw_data".into(), Value::String(text));
                map
            }
            Self::Error {
                error, status_code, ..
            } => {
                let mut map = Map::new();
                map.insert("error".into(), error);
                map.insert("status_code".into(), status_code.map_or(Value::Null, Value::from));
                map
            }
        }
    }
}

impl From<NormalizedResponse> for Value {
    fn from(response: NormalizedResponse) -> Self {
        Value::Object(response.into_map())
    }
}

impl From<NormalizedResponse> for Map<String, Value> {
    fn from(response: NormalizedResponse) -> Self {
        response.into_map()
    }
}

/// Reshape an already decoded value by its JSON type
pub fn classify(value: Value) -> NormalizedResponse {
    match value {
        Value::Object(map) => NormalizedResponse::Object(map),
        Value::Array(items) => NormalizedResponse::Array(items),
        scalar => NormalizedResponse::Scalar(scalar),
    }
}

/// Reshape a finished exchange into its canonical response
pub fn normalize(exchange: Exchange, errors: ErrorField) -> NormalizedResponse {
    match exchange {
        Exchange::Failed { message, status } => NormalizedResponse::transport_error(message, status),
        Exchange::Rejected {
            status,
            message,
            body,
        } => match (errors, serde_json::from_str::<Value>(&body)) {
            (ErrorField::Inspect, Ok(Value::Object(mut map))) if map.contains_key("error") => {
                upstream_error(&mut map, status)
            }
            _ => NormalizedResponse::transport_error(message, Some(status)),
        },
        Exchange::Completed { status, body } => match serde_json::from_str::<Value>(&body) {
            Err(_) => NormalizedResponse::RawText(body),
            Ok(Value::Object(mut map))
                if errors == ErrorField::Inspect && map.contains_key("error") =>
            {
                upstream_error(&mut map, status)
            }
            Ok(value) => classify(value),
        },
    }
}

fn upstream_error(map: &mut Map<String, Value>, status: u16) -> NormalizedResponse {
    NormalizedResponse::Error {
        error: map.remove("error").unwrap_or(Value::Null),
        status_code: Some(status),
        origin: ErrorOrigin::Upstream,
    }
}

/// Strings render bare, booleans and null as `True`/`False`/`None`,
/// numbers as their JSON text
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Defensive reshape for anything that should already be a mapping
pub fn ensure_object(value: Value) -> Map<String, Value> {
    classify(value).into_map()
}
