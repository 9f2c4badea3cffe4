//! Shared HTTP plumbing for both providers

use reqwest::{Client, Url};
use std::error::Error;
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::{ClientError, ClientResult};
use crate::normalize::{normalize, ErrorField, Exchange, NormalizedResponse};
use crate::params::QueryParams;

/// One provider's base URL plus a reusable reqwest client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Arc<Client>,
    config: ProviderConfig,
    errors: ErrorField,
}

impl Upstream {
    pub fn new(config: ProviderConfig, errors: ErrorField) -> ClientResult<Self> {
        Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
            errors,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issues a single GET and normalizes whatever comes back
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> NormalizedResponse {
        let exchange = self.exchange(endpoint, params).await;
        normalize(exchange, self.errors)
    }

    async fn exchange(&self, endpoint: &str, params: &QueryParams) -> Exchange {
        let url = format!("{}{}", self.config.base_url, endpoint);
        tracing::debug!("GET {} ({} params)", url, params.len());

        let response = match self.client.get(&url).query(params.pairs()).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = error_message(&e);
                tracing::warn!("Request to {} failed: {}", url, message);
                return Exchange::Failed {
                    message,
                    status: e.status().map(|s| s.as_u16()),
                };
            }
        };

        let status = response.status().as_u16();
        let rejection = response.error_for_status_ref().err().map(|e| e.to_string());

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let message = error_message(&e);
                tracing::warn!("Reading body from {} failed: {}", url, message);
                return Exchange::Failed {
                    message,
                    status: Some(status),
                };
            }
        };

        match rejection {
            Some(message) => {
                tracing::warn!("Request to {} returned status {}", url, status);
                Exchange::Rejected {
                    status,
                    message,
                    body,
                }
            }
            None => Exchange::Completed { status, body },
        }
    }
}

/// The reqwest error with its whole source chain, e.g.
/// "error sending request for url (...): operation timed out"
fn error_message(error: &reqwest::Error) -> String {
    let mut message = error_chain(error);
    if error.is_timeout() && !message.contains("timed out") {
        message.push_str(": request timed out");
    }
    message
}

fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(thiserror::Error, Debug)]
    enum Outer {
        #[error("error sending request")]
        Send(#[source] Inner),
    }

    #[derive(thiserror::Error, Debug)]
    #[error("operation timed out")]
    struct Inner;

    #[test]
    fn test_error_chain_includes_causes() {
        assert_eq!(
            error_chain(&Outer::Send(Inner)),
            "error sending request: operation timed out"
        );
        assert_eq!(error_chain(&Inner), "operation timed out");
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let config = ProviderConfig::new("not a url");
        let err = Upstream::new(config, ErrorField::Ignore).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_keeps_configured_base_url() {
        let upstream = Upstream::new(ProviderConfig::datis(), ErrorField::Inspect).unwrap();
        assert_eq!(upstream.base_url(), "https://datis.clowd.io/api");
    }
}
