//! Guest registry stored in a JSONBin document.
//!
//! The bin holds `{"names": [...]}`. Reading `GET {url}/latest` wraps the
//! document as `{"record": {...}, "metadata": {...}}`; writing is a plain
//! `PUT {url}` of the document.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rsvp_core::RsvpError;
use rsvp_core::error::Result;
use rsvp_core::registry::RegistryGateway;
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MASTER_KEY_HEADER: &str = "X-Master-Key";

#[derive(Debug, Serialize)]
struct GuestListBody<'a> {
    names: &'a [String],
}

#[derive(Debug, Default, Deserialize)]
struct GuestListRecord {
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    record: GuestListRecord,
}

pub struct JsonBinRegistry {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl JsonBinRegistry {
    /// `url` is the bin address, e.g. `https://api.jsonbin.io/v3/b/<bin>`.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn latest_url(&self) -> String {
        format!("{}/latest", self.url)
    }

    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(MASTER_KEY_HEADER, key),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response, action: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(RsvpError::registry(format!(
            "JSONBin {action} failed ({status}): {body}"
        )))
    }
}

fn request_error(action: &str, err: reqwest::Error) -> RsvpError {
    if err.is_timeout() {
        RsvpError::registry(format!("JSONBin {action} timed out"))
    } else {
        RsvpError::registry(format!("JSONBin {action} failed: {err}"))
    }
}

#[async_trait]
impl RegistryGateway for JsonBinRegistry {
    async fn fetch_all(&self) -> Result<Vec<String>> {
        let request = self.auth_request(self.client.get(self.latest_url()).timeout(REQUEST_TIMEOUT));
        let response = request.send().await.map_err(|e| request_error("read", e))?;
        let response = Self::check_status(response, "read").await?;

        let latest: LatestResponse = response.json().await.map_err(|e| RsvpError::Serialization {
            format: "JSON".to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(count = latest.record.names.len(), "JSONBin registry loaded");
        Ok(latest.record.names)
    }

    async fn replace_all(&self, names: &[String]) -> Result<()> {
        let request = self.auth_request(
            self.client
                .put(&self.url)
                .json(&GuestListBody { names })
                .timeout(REQUEST_TIMEOUT),
        );
        let response = request.send().await.map_err(|e| request_error("write", e))?;
        Self::check_status(response, "write").await?;

        tracing::info!(count = names.len(), "JSONBin registry written");
        Ok(())
    }
}
