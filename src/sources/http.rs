use crate::error::SourceError;
use crate::models::Room;
use crate::sources::traits::RoomSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Room source backed by the room list HTTP API
pub struct HttpRoomSource {
    client: Client,
    base_url: Url,
}

impl HttpRoomSource {
    /// Create a new source. Requests wait as long as the server takes.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, None)
    }

    /// Create a new source whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid room API URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Room API URL cannot take a path: {}", base_url);
        }

        Ok(Self { client, base_url })
    }

    /// Base URL with `segments` appended; each segment is percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Room API URL cannot take a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn rooms_url(&self) -> Result<Url> {
        self.endpoint(&["rooms"])
    }

    fn room_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&["rooms", id])
    }

    async fn get_body(&self, url: &Url) -> Result<Option<String>> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!("Room API returned status: {}", status);
            return Err(SourceError::Status(status.as_u16()).into());
        }

        let body = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes", body.len());
        Ok(Some(body))
    }
}

/// Decode a room list payload; any malformed record fails the whole list
pub fn decode_rooms(body: &str) -> Result<Vec<Room>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))
}

/// Decode a single room payload
pub fn decode_room(body: &str) -> Result<Room, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))
}

#[async_trait]
impl RoomSource for HttpRoomSource {
    async fn fetch_rooms(&self) -> Result<Vec<Room>> {
        let url = self.rooms_url()?;
        let body = self
            .get_body(&url)
            .await?
            .ok_or(SourceError::Status(StatusCode::NOT_FOUND.as_u16()))?;

        let rooms = decode_rooms(&body)?;
        info!("Fetched {} rooms from {}", rooms.len(), url);
        Ok(rooms)
    }

    async fn fetch_room_by_id(&self, id: &str) -> Result<Option<Room>> {
        let url = self.room_url(id)?;
        match self.get_body(&url).await? {
            Some(body) => Ok(Some(decode_room(&body)?)),
            None => {
                debug!("Room {} not found", id);
                Ok(None)
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "HTTP"
    }
}
