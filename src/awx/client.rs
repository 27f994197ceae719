//! AWX HTTP client for API interactions

use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{AwxError, Result};

use super::validate::require_fields;
use super::{Payload, QueryParams};

/// AWX API client
///
/// Wraps a reqwest [`Client`] with the base URL and the bearer token.
/// The client keeps no per-call state, so one instance can be shared by
/// any number of concurrent calls.
pub struct AwxClient {
    client: Client,
    token: Option<String>,
    base_url: Url,
}

impl AwxClient {
    /// Create a new AWX client
    ///
    /// `host` is either a bare host name (`awx.example.com`, served over
    /// HTTPS) or a full URL (`http://localhost:8043`).
    pub fn new(host: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            token,
            base_url: Self::parse_base_url(host)?,
        })
    }

    fn parse_base_url(host: &str) -> Result<Url> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(AwxError::Config("AWX host must not be empty".to_string()));
        }
        let raw = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };
        Url::parse(&raw).map_err(|e| AwxError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Base URL all endpoint paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path (or an absolute URL) against the base URL
    pub(crate) fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AwxError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: Url) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Check the status of an API response
    ///
    /// Returns the response untouched on 2xx. Otherwise the body is read
    /// only to extract AWX's `detail` message and no payload is decoded.
    pub(crate) async fn check_response(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["detail"].as_str().map(str::to_string));

        let message = match detail {
            Some(detail) => format!("Failed to {}: {}", error_context, detail),
            None => format!("Failed to {}", error_context),
        };

        Err(AwxError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.check_response(response, error_context).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Parse a response whose body may legitimately be empty (204 No Content)
    pub(crate) async fn parse_optional_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.check_response(response, error_context).await?;
        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// GET a single resource
    pub async fn get_resource<T>(
        &self,
        path: &str,
        params: &QueryParams,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.url_for(path)?;
        set_query(&mut url, params);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(url).send().await?;
        self.parse_api_response(response, &format!("fetch {}", resource_label))
            .await
    }

    /// POST a new resource after checking its mandatory fields
    ///
    /// Validation happens before anything is sent, so a malformed payload
    /// never costs a round trip.
    pub async fn create_resource<T>(
        &self,
        path: &str,
        data: &Payload,
        mandatory_fields: &[&str],
        params: &QueryParams,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        require_fields(data, mandatory_fields)?;

        let mut url = self.url_for(path)?;
        set_query(&mut url, params);
        debug!("Creating {} at: {}", resource_label, url);

        let response = self.post(url).json(data).send().await?;
        self.parse_api_response(response, &format!("create {}", resource_label))
            .await
    }

    /// PATCH an existing resource
    pub async fn update_resource<T>(
        &self,
        path: &str,
        data: &Payload,
        params: &QueryParams,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.url_for(path)?;
        set_query(&mut url, params);
        debug!("Updating {} at: {}", resource_label, url);

        let response = self.patch(url).json(data).send().await?;
        self.parse_api_response(response, &format!("update {}", resource_label))
            .await
    }

    /// PUT (full replacement of) an existing resource
    pub async fn replace_resource<T>(
        &self,
        path: &str,
        data: &Payload,
        params: &QueryParams,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut url = self.url_for(path)?;
        set_query(&mut url, params);
        debug!("Replacing {} at: {}", resource_label, url);

        let response = self.put(url).json(data).send().await?;
        self.parse_api_response(response, &format!("replace {}", resource_label))
            .await
    }

    /// DELETE a resource
    pub async fn delete_resource(&self, path: &str, resource_label: &str) -> Result<()> {
        let url = self.url_for(path)?;
        debug!("Deleting {} at: {}", resource_label, url);

        let response = self.delete(url).send().await?;
        self.check_response(response, &format!("delete {}", resource_label))
            .await?;

        debug!("Successfully deleted {}", resource_label);
        Ok(())
    }
}

/// Replace the query string of `url` with `params` (no-op when empty)
pub(crate) fn set_query(url: &mut Url, params: &QueryParams) {
    if params.is_empty() {
        return;
    }
    url.set_query(None);
    url.query_pairs_mut().extend_pairs(params.iter());
}

#[cfg(test)]
impl AwxClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, Some("test-token".to_string())).unwrap()
    }
}
