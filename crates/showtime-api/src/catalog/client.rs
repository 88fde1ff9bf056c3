//! `CatalogClient` - booking backend catalog client implementation.

use anyhow::{Context, Result, anyhow, bail};
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalCatalogApi;
use super::error::FetchError;
use super::kind::ResourceKind;

/// Default backend origin (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Catalog API client.
///
/// Stateless apart from the connection pool; concurrent calls do not
/// interact.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct CatalogClient {
    /// HTTP client.
    http_client: Client,
    /// Backend origin every collection path is appended to.
    base_url: Url,
}

/// Builder for `CatalogClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CatalogClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl CatalogClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the backend origin (config, env, or wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - The base URL cannot carry a path (e.g. `mailto:`).
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<CatalogClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot carry a path: {base_url}");
        }

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(CatalogClient {
            http_client,
            base_url,
        })
    }
}

impl CatalogClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::new()
    }

    /// Backend origin this client talks to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET request and parses the body as untyped JSON.
    ///
    /// Transport failures and non-successful statuses become `FetchError`;
    /// a body that is not JSON stays a plain decode error.
    #[instrument(skip_all, fields(kind = %kind))]
    async fn get_json(&self, kind: ResourceKind, segments: &[&str]) -> Result<Value> {
        let url = self.endpoint(segments)?;
        let path = String::from(url.path());

        tracing::debug!(%url, "catalog API request");

        let result = self.http_client.get(url).send().await;
        let response = result.context(FetchError::transport(kind))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, %path, "catalog API returned non-success status");
            return Err(FetchError::status(kind, status).into());
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let parsed: Value = serde_json::from_str(&body)
            .with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(parsed)
    }
}

impl LocalCatalogApi for CatalogClient {
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Value> {
        self.get_json(kind, &[kind.path()]).await
    }

    async fn fetch_item(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>> {
        // URL normalization drops `.`/`..` segments and `""` hits `/<kind>/`.
        if matches!(id, "" | "." | "..") {
            bail!("invalid {} id: {id:?}", kind.noun());
        }
        let value = self.get_json(kind, &[kind.path(), id]).await?;
        if value.is_null() {
            tracing::debug!(%kind, id, "catalog item not found");
            return Ok(None);
        }
        Ok(Some(value))
    }

    async fn fetch_movies(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::Movies).await
    }

    async fn fetch_events(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::Events).await
    }

    async fn fetch_plays(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::Plays).await
    }

    async fn fetch_sports(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::Sports).await
    }

    async fn fetch_activities(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::Activities).await
    }

    async fn fetch_offers(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::Offers).await
    }

    async fn fetch_giftcards(&self) -> Result<Value> {
        self.fetch_collection(ResourceKind::GiftCards).await
    }
}
