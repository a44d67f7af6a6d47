//! Platform API adapter for the [`DatabaseCatalog`] port.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use turso_common::catalog::{CatalogError, DatabaseCatalog};
use turso_common::database::{Database, Instance};
use turso_common::settings::Settings;
use url::Url;

#[derive(Deserialize)]
struct DatabaseEnvelope {
    database: Database,
}

#[derive(Deserialize)]
struct InstancesEnvelope {
    #[serde(default)]
    instances: Vec<Instance>,
}

/// Bearer-token client for the platform's `/v1` API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            http: Client::new(),
            base_url,
            token: token.into(),
        })
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Builds a client from settings; fails early when no token is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let token: &str = settings
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(CatalogError::NotLoggedIn)?;
        Self::new(&settings.api_base_url, token)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url: Url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<Response, CatalogError> {
        debug!(%url, "platform API request");
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    match response.status() {
        status if status.is_success() => response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Request(e.to_string())),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CatalogError::Unauthorized),
        status => Err(CatalogError::UnexpectedStatus {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}

#[async_trait]
impl DatabaseCatalog for ApiClient {
    async fn get_database(&self, name: &str) -> Result<Database, CatalogError> {
        let url: Url = self.endpoint(&["databases", name])?;
        let response: Response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::DatabaseNotFound {
                name: name.to_string(),
            });
        }
        let envelope: DatabaseEnvelope = decode(response).await?;
        Ok(envelope.database)
    }

    async fn list_instances(&self, database_name: &str) -> Result<Vec<Instance>, CatalogError> {
        let url: Url = self.endpoint(&["databases", database_name, "instances"])?;
        let envelope: InstancesEnvelope = decode(self.get(url).await?).await?;
        Ok(envelope.instances)
    }
}
