//! Authenticated GET requests against the configured base URL.

use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;

use super::ApiError;

/// A `reqwest` blocking client with the auth and JSON headers preset.
/// Clone is cheap - the connection pool is shared.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(Self::default_headers(&config.api_key)?)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn default_headers(api_key: &str) -> Result<HeaderMap, ApiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| ApiError::Config("API key is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Check if response is successful, returning an error with body if not.
    fn check_response(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().unwrap_or_default();
        warn!(status = status.as_u16(), "Request failed");
        Err(ApiError::from_status(status, &body))
    }

    /// GET `endpoint` with `query` and parse the body as JSON.
    pub fn get_json(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        debug!(url = %url, params = query.len(), "Sending GET request");

        let response = self.client.get(&url).query(query).send()?;
        debug!(url = %url, status = response.status().as_u16(), "Received response");

        let text = Self::check_response(response)?.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}
