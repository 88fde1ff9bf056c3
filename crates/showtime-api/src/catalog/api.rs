//! `CatalogApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;
use serde_json::Value;

use super::kind::ResourceKind;

/// Catalog API trait.
///
/// One operation per collection, all of the same shape: GET the fixed path,
/// fail with [`FetchError`](super::FetchError) on a non-successful status,
/// return the parsed JSON body as-is.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Fetches a whole collection (`GET /<kind>`).
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the request fails or the status is not
    /// successful, or a decode error if the body is not valid JSON.
    async fn fetch_collection(&self, kind: ResourceKind) -> Result<Value>;

    /// Fetches a single item (`GET /<kind>/<id>`).
    ///
    /// Returns `None` when the backend answers with JSON `null`.
    ///
    /// # Errors
    ///
    /// Fails without sending a request if `id` is empty, `.` or `..`
    /// (those would address the collection itself). Otherwise same as
    /// [`LocalCatalogApi::fetch_collection`].
    async fn fetch_item(&self, kind: ResourceKind, id: &str) -> Result<Option<Value>>;

    /// Fetches all movies.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch movies" on a non-successful response.
    async fn fetch_movies(&self) -> Result<Value>;

    /// Fetches all events.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch events" on a non-successful response.
    async fn fetch_events(&self) -> Result<Value>;

    /// Fetches all plays.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch plays" on a non-successful response.
    async fn fetch_plays(&self) -> Result<Value>;

    /// Fetches all sports.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch sports" on a non-successful response.
    async fn fetch_sports(&self) -> Result<Value>;

    /// Fetches all activities.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch activities" on a non-successful response.
    async fn fetch_activities(&self) -> Result<Value>;

    /// Fetches all offers.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch offers" on a non-successful response.
    async fn fetch_offers(&self) -> Result<Value>;

    /// Fetches all gift cards.
    ///
    /// # Errors
    ///
    /// Fails with "Failed to fetch giftcards" on a non-successful response.
    async fn fetch_giftcards(&self) -> Result<Value>;
}
