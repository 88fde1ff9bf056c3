//! In-memory catalog used by unit tests.

use std::collections::HashMap;

use anyhow::Result;
use serde_json::Value;
use showtime_api::catalog::{FetchError, LocalCatalogApi, ResourceKind};

/// Answers from fixed JSON. Collections that were never set fail with
/// `FetchError`; unknown item ids answer `None` like the backend's `null`.
#[derive(Debug, Default)]
pub struct StubCatalog {
    collections: HashMap<ResourceKind, Value>,
    items: HashMap<(ResourceKind, String), Value>,
}

impl StubCatalog {
    pub fn with_collection(mut self, kind: ResourceKind, value: Value) -> Self {
        self.collections.insert(kind, value);
        self
    }

    pub fn with_item(mut self, kind: ResourceKind, id: &str, value: Value) -> Self {
        self.items.insert((kind, String::from(id)), value);
        self
    }
}

impl LocalCatalogApi for StubCatalog {
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Value> {
        self.collections
            .get(&kind)
            .cloned()
            .ok_or_else(|| FetchError::transport(kind).into())
    }

    async fn fetch_item(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>> {
        Ok(self.items.get(&(kind, String::from(id))).cloned())
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
