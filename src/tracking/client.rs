//! 17TRACK API Client
//!
//! Thin HTTP client for the 17TRACK v2.2 `register` and `gettrackinfo`
//! endpoints. No retries and no caching.

use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::error::TrackingError;
use super::gateway::TrackingGateway;
use super::types::TrackingIdentity;
use crate::config::TrackingConfig;

/// Header carrying the API token
pub const TOKEN_HEADER: &str = "17token";

const REGISTER_PATH: &str = "register";
const STATUS_PATH: &str = "gettrackinfo";

/// Longest error body kept in a `TrackingError::Status`
const MAX_ERROR_BODY: usize = 512;

pub struct Track17Client {
    client: Client,
    base_url: String,
    token: String,
}

impl Track17Client {
    pub fn new(config: &TrackingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post(&self, path: &str, identity: &TrackingIdentity) -> Result<Value, TrackingError> {
        let url = self.endpoint(path);
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .header(TOKEN_HEADER, &self.token)
            .json(&identity.request_body())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "17TRACK call"
        );

        if !status.is_success() {
            return Err(TrackingError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl TrackingGateway for Track17Client {
    async fn register(&self, identity: &TrackingIdentity) -> Result<Value, TrackingError> {
        self.post(REGISTER_PATH, identity).await
    }

    async fn get_status(&self, identity: &TrackingIdentity) -> Result<Value, TrackingError> {
        self.post(STATUS_PATH, identity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = TrackingConfig {
            base_url: "http://localhost:8080/track/v2.2/".into(),
            ..TrackingConfig::default()
        };
        let client = Track17Client::new(&config).unwrap();

        assert_eq!(
            client.endpoint(REGISTER_PATH),
            "http://localhost:8080/track/v2.2/register"
        );
        assert_eq!(
            client.endpoint(STATUS_PATH),
            "http://localhost:8080/track/v2.2/gettrackinfo"
        );
    }
}
