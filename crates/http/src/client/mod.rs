//! Brayam HTTP client

pub mod auth;
pub mod error;

use error::ClientError;
use reqwest::{header, Client, ClientBuilder};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::config::api_base_url;
use crate::endpoints::join_api_url;

/// Brayam API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against the configured base URL, without a token
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Create a client against the configured base URL, authenticated
    /// with the given bearer token
    pub fn with_token(token: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().bearer_token(token).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = join_api_url(&self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Execute a request and deserialize the JSON response
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request where the response body is irrelevant
    pub async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Override the base URL (defaults to the configured backend)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token for authenticated endpoints
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout (native targets only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| api_base_url().to_string())
            .trim_end_matches('/')
            .to_string();

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|err| ClientError::Configuration(err.to_string()))?;

        Ok(ApiClient {
            client,
            base_url,
            token: self.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_configured_backend() {
        let client = ApiClient::new().unwrap();
        assert_eq!(client.base_url(), api_base_url());
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let client = ApiClient::builder()
            .base_url("https://backend.example.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://backend.example.com");
    }
}
