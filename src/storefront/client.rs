//! Client for the storefront GraphQL endpoint.

use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::time::timeout;

use super::error::StorefrontError;
use super::fallback::DemoFallback;
use super::graphql::{GraphQlRequest, GraphQlResponse};
use super::types::{RegistrationInput, SubmissionResult};
use crate::config::{resolve_shop_domain, Config};

pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Builds `https://{shop}/api/{version}/graphql.json`.
pub fn storefront_endpoint(shop_domain: &str, api_version: &str) -> String {
    format!("https://{}/api/{}/graphql.json", shop_domain, api_version)
}

/// Issues the `customerCreate` mutation and interprets the answer.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: Client,
    endpoint: String,
    access_token: String,
    request_timeout: Duration,
    fallback: Option<DemoFallback>,
}

impl StorefrontClient {
    /// Creates a client from configuration and the current page host.
    pub fn from_config(config: &Config, page_host: &str) -> Result<Self, StorefrontError> {
        let endpoint = match config.storefront.endpoint.as_deref().filter(|e| !e.is_empty()) {
            Some(endpoint) => endpoint.to_string(),
            None => {
                let shop = resolve_shop_domain(&config.shop, page_host);
                tracing::debug!(domain = %shop.domain, source = ?shop.source, "Resolved shop domain");
                storefront_endpoint(&shop.domain, &config.storefront.api_version)
            }
        };

        let client = Client::builder()
            .build()
            .map_err(StorefrontError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint,
            access_token: config.storefront.access_token.clone(),
            request_timeout: Duration::from_secs(u64::from(config.storefront.timeout_seconds)),
            fallback: DemoFallback::from_config(&config.fallback),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback.is_some()
    }

    /// Registers a customer.
    ///
    /// Backend-reported failures come back as `Ok` with `success == false`.
    /// Transport failures go to the demo fallback when one is configured
    /// and are returned as `Err` otherwise.
    pub async fn register(&self, input: &RegistrationInput) -> Result<SubmissionResult, StorefrontError> {
        tracing::info!(
            email = %input.email,
            first_name = %input.first_name,
            last_name = %input.last_name,
            "Submitting registration"
        );

        match self.create_customer(input).await {
            Ok(result) => Ok(result),
            Err(err) if err.is_transport() => {
                tracing::error!(error = %err, kind = err.error_type(), "Registration request failed");
                match &self.fallback {
                    Some(fallback) => Ok(fallback.recover(input).await),
                    None => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Sends the mutation under the configured timeout.
    ///
    /// On expiry the request future is dropped, which aborts the exchange.
    pub async fn create_customer(&self, input: &RegistrationInput) -> Result<SubmissionResult, StorefrontError> {
        match timeout(self.request_timeout, self.send(input)).await {
            Ok(result) => result,
            Err(_) => Err(StorefrontError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn send(&self, input: &RegistrationInput) -> Result<SubmissionResult, StorefrontError> {
        tracing::debug!(url = %self.endpoint, "Making request");

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&GraphQlRequest::customer_create(input))
            .send()
            .await
            .map_err(|e| StorefrontError::Connection {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, latency_ms, error = %body, "Storefront API error");
            return Err(StorefrontError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| StorefrontError::Decode(format!("Failed to read response body: {}", e)))?;
        tracing::debug!(status = %status, latency_ms, "Storefront GraphQL response");

        let decoded: GraphQlResponse = serde_json::from_str(&text)
            .map_err(|e| StorefrontError::Decode(format!("Failed to parse response JSON: {}", e)))?;

        decoded.into_result()
    }
}
