//! Statistics API Client
//!
//! HTTP client for the real-estate statistics REST API. One GET per call,
//! no retries, no timeout, no caching.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::dto::{AffordablePlace, BlockValue, PropertyTypeStat};
use super::error::{FetchError, FetchResult};
use super::resource::Resource;

/// Default statistics API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Configuration for the report client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the statistics API (e.g., "http://127.0.0.1:8000")
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Source of report data consumed by the views
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Cheapest places by average listing price
    async fn top_affordable_places(&self) -> FetchResult<Vec<AffordablePlace>>;

    /// Average price and listing count per property type
    async fn property_type_comparison(&self) -> FetchResult<Vec<PropertyTypeStat>>;

    /// Raw block value records
    async fn block_values(&self) -> FetchResult<Vec<BlockValue>>;
}

/// Statistics API client
pub struct ReportClient {
    client: Client,
    base_url: String,
}

impl ReportClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("realty-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::FetchFailed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a resource
    pub fn url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// GET a resource and return the decoded JSON body
    pub async fn fetch_raw(&self, resource: Resource) -> FetchResult<serde_json::Value> {
        let url = self.url(resource);
        tracing::debug!(%url, "Fetching report");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Report request failed");
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Report request returned error status");
            return Err(FetchError::FetchFailed(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        Ok(response.json().await?)
    }

    /// GET a resource and decode the records under its response field
    pub async fn fetch_field<R: DeserializeOwned>(&self, resource: Resource) -> FetchResult<Vec<R>> {
        let mut body = self.fetch_raw(resource).await?;
        let field = resource.response_field();

        let records = body
            .get_mut(field)
            .map(serde_json::Value::take)
            .ok_or_else(|| FetchError::FetchFailed(format!("response missing field `{}`", field)))?;

        Ok(serde_json::from_value(records)?)
    }

    /// Price distribution per property type. No view renders this yet.
    pub async fn price_distribution_comparison(&self) -> FetchResult<serde_json::Value> {
        self.fetch_raw(Resource::PriceDistributionComparison).await
    }

    /// Cheapest areas report. No view renders this yet.
    pub async fn cheapest_areas(&self) -> FetchResult<serde_json::Value> {
        self.fetch_raw(Resource::CheapestAreas).await
    }
}

#[async_trait]
impl ReportSource for ReportClient {
    async fn top_affordable_places(&self) -> FetchResult<Vec<AffordablePlace>> {
        self.fetch_field(Resource::TopAffordablePlaces).await
    }

    async fn property_type_comparison(&self) -> FetchResult<Vec<PropertyTypeStat>> {
        self.fetch_field(Resource::PropertyTypeComparison).await
    }

    async fn block_values(&self) -> FetchResult<Vec<BlockValue>> {
        self.fetch_field(Resource::BlockValues).await
    }
}
