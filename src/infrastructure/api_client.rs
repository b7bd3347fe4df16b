// AnimalDex API client - the one place that talks to the remote catalog
// Plain GETs, no auth headers, no pagination, no retry, no caching

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    models::{Animal, AnimalSummary, ConservationEffort, HabitatSummary},
};

/// Read-only access to the remote AnimalDex catalog.
#[async_trait]
pub trait AnimalDexApi: Send + Sync {
    async fn list_animals(&self) -> AppResult<Vec<AnimalSummary>>;
    async fn get_animal(&self, id: i64) -> AppResult<Animal>;
    async fn list_habitats(&self) -> AppResult<Vec<HabitatSummary>>;
    async fn list_conservation_efforts(&self) -> AppResult<Vec<ConservationEffort>>;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: Client,
}

impl HttpApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            AppError::from(e)
        })?;

        Self::handle_response(&url, response).await
    }

    async fn handle_response<T: DeserializeOwned>(url: &str, response: Response) -> AppResult<T> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            warn!("{} answered 404", url);
            return Err(AppError::NotFound(format!("{} was not found", url)));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} answered {}", url, status);
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("{} returned a body that does not decode: {}", url, e);
            AppError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl AnimalDexApi for HttpApiClient {
    async fn list_animals(&self) -> AppResult<Vec<AnimalSummary>> {
        self.get_json("/api/animals/").await
    }

    async fn get_animal(&self, id: i64) -> AppResult<Animal> {
        self.get_json(&format!("/api/animals/{}", id)).await
    }

    async fn list_habitats(&self) -> AppResult<Vec<HabitatSummary>> {
        self.get_json("/api/habitats/").await
    }

    async fn list_conservation_efforts(&self) -> AppResult<Vec<ConservationEffort>> {
        self.get_json("/api/conservation-efforts").await
    }
}
