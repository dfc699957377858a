//! Transport seam: one GET per logical fetch.

use std::time::Duration;

use async_trait::async_trait;
use cadenza_core::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, ACCEPT_LANGUAGE, COOKIE, USER_AGENT};
use tracing::debug;

use crate::config;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What one GET yields: status, raw body bytes, and the crypto-IV header
/// when the store encrypted the response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
    /// Hex-encoded AES IV from the response headers, if present.
    pub crypto_iv: Option<String>,
}

impl TransportResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A transport performs one GET request per call and reports the raw
/// outcome. It never retries, decodes, or interprets the body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// Production transport on reqwest, with the store's outbound headers
/// installed once at build time.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(config::ACCEPT_LANGUAGE),
        );
        headers.insert(
            ACCEPT_ENCODING,
            HeaderValue::from_static(config::ACCEPT_ENCODING),
        );
        headers.insert(COOKIE, HeaderValue::from_static(config::STORE_COOKIE));
        headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(DEFAULT_TIMEOUT)
            .no_gzip()
            .build()
            .map_err(|e| {
                Error::transport("", None, format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, None, e.to_string()))?;

        let status = response.status().as_u16();
        let crypto_iv = response
            .headers()
            .get(config::CRYPTO_IV_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(url, Some(status), e.to_string()))?
            .to_vec();

        Ok(TransportResponse {
            status,
            body,
            crypto_iv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = TransportResponse {
            status: 200,
            body: Vec::new(),
            crypto_iv: None,
        };
        assert!(ok.is_success());

        let missing = TransportResponse {
            status: 404,
            body: Vec::new(),
            crypto_iv: None,
        };
        assert!(!missing.is_success());
    }
}
