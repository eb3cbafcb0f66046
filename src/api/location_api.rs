use crate::api::client::ApiError;
use crate::api::save_response::SaveResponse;
use crate::domain::{LocationRecord, Position};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// The location server as seen by the tracker.
#[async_trait]
pub trait LocationApi: Debug + Send + Sync {
    async fn save_location(&self, position: Position) -> Result<SaveResponse, ApiError>;

    async fn locations(&self) -> Result<Vec<LocationRecord>, ApiError>;
}

#[derive(Debug)]
pub struct HttpLocationApi {
    client: Client,
    base_url: String,
}

impl HttpLocationApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        HttpLocationApi {
            client,
            base_url: base_url.into(),
        }
    }

    async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LocationApi for HttpLocationApi {
    #[instrument(skip(self))]
    async fn save_location(&self, position: Position) -> Result<SaveResponse, ApiError> {
        let response = self.client.post(format!("{}/save_location", self.base_url)).json(&position).send().await?;
        debug!(status = %response.status(), "📡 Saved location");

        Self::read_body(response).await
    }

    #[instrument(skip(self))]
    async fn locations(&self) -> Result<Vec<LocationRecord>, ApiError> {
        let response = self.client.get(format!("{}/locations", self.base_url)).send().await?;
        debug!(status = %response.status(), "📡 Retrieved locations");

        Self::read_body(response).await
    }
}
