//! reqwest-backed transport.

use crate::transport::SimplifyTransport;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, warn};
use ts_core::config::ClientConfig;
use ts_core::{Result, SimplifierError, SimplifyRequest, SimplifyResponse};

/// Posts JSON requests to a simplify endpoint over HTTP.
///
/// No request timeout is configured; calls wait as long as the underlying
/// connection does.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: Client::new(), endpoint: endpoint.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint_url())
    }

    /// Use a preconfigured client (proxies, custom TLS roots, timeouts).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SimplifyTransport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn simplify(&self, request: &SimplifyRequest) -> Result<SimplifyResponse> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SimplifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(endpoint = %self.endpoint, status = status.as_u16(), error = %e, "failed to read error body");
                    return Err(SimplifierError::Transport(format!(
                        "HTTP {status} with unreadable body: {e}"
                    )));
                }
            };
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "simplify endpoint returned an error");
            return Err(SimplifierError::Server { status: status.as_u16(), body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SimplifierError::Transport(e.to_string()))?;
        let parsed: SimplifyResponse =
            serde_json::from_slice(&bytes).map_err(|e| SimplifierError::Decode(e.to_string()))?;

        debug!(
            endpoint = %self.endpoint,
            orig_len = parsed.orig_len,
            new_len = parsed.new_len,
            removed = parsed.removed.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "simplify response received"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_from_config() {
        let transport = HttpTransport::from_config(&ClientConfig::default());
        assert_eq!(transport.endpoint(), "http://127.0.0.1:8080/api/simplify");
        assert_eq!(transport.name(), "http");
    }
}
