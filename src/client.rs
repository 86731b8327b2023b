//! reqwestによるTransport実装

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ars_common::{ApiClient, ApiConfig, RawResponse, Transport};
use reqwest::header::ACCEPT;

use crate::error::{ArsError, Result};

/// CLI版のAPIクライアント
pub type CliClient = ApiClient<ReqwestTransport>;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ars-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ArsError::ClientBuild(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> ars_common::Result<RawResponse> {
        tracing::debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ars_common::Error::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ars_common::Error::Transport(e.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "response");

        Ok(RawResponse { status, body })
    }
}

pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

pub fn build_client(config: ApiConfig, timeout_seconds: u64) -> Result<CliClient> {
    let transport = ReqwestTransport::new(Duration::from_secs(timeout_seconds.max(1)))?;
    Ok(ApiClient::new(config, transport, system_clock))
}
