//! reqwest-based feed client.

use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::snapshot::ChannelSnapshot;

/// HTTP client for a channel feed endpoint.
///
/// Requests carry no timeout: an unresponsive endpoint stalls the current
/// poll cycle until the connection is dropped by the remote side.
#[derive(Debug, Clone)]
pub struct ChannelClient {
    client: Client,
    endpoint: String,
    results: u32,
}

impl ChannelClient {
    /// Create a new client for the given feed endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The channel feed URL
    ///   (e.g. "https://api.thingspeak.com/channels/1598577/fields/1.json")
    /// * `results` - How many recent records to request per fetch
    pub fn new(endpoint: &str, results: u32) -> Result<Self> {
        Self::with_client(endpoint, results, Client::new())
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(endpoint: &str, results: u32, client: Client) -> Result<Self> {
        // Normalize URL (remove trailing slash)
        let endpoint = endpoint.trim_end_matches('/').to_string();

        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(Error::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                endpoint
            )));
        }

        Ok(Self {
            client,
            endpoint,
            results,
        })
    }

    /// The configured feed endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one channel snapshot.
    pub async fn fetch_snapshot(&self) -> Result<ChannelSnapshot> {
        debug!("Fetching channel snapshot from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("results", self.results)])
            .send()
            .await
            .map_err(|source| Error::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let snapshot = response
            .json::<ChannelSnapshot>()
            .await
            .map_err(Error::Decode)?;

        debug!(
            "Snapshot for channel {} carried {} feed record(s)",
            snapshot.channel.id,
            snapshot.feeds.len()
        );

        Ok(snapshot)
    }
}
