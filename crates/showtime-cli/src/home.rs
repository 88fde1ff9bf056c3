//! Home page feed: movies and events fetched side by side.

use anyhow::{Result, bail};
use serde_json::Value;
use showtime_api::catalog::LocalCatalogApi;
use tracing::instrument;

/// Results of the two home page fetches, each kept on its own.
#[derive(Debug)]
pub struct HomeFeed {
    /// `GET /movies` outcome.
    pub movies: Result<Value>,
    /// `GET /events` outcome.
    pub events: Result<Value>,
}

/// Fetches movies and events concurrently.
///
/// Neither fetch waits on or cancels the other.
#[instrument(skip_all)]
pub async fn load_home(client: &(impl LocalCatalogApi + Sync)) -> HomeFeed {
    let (movies, events) = tokio::join!(client.fetch_movies(), client.fetch_events());
    HomeFeed { movies, events }
}

impl HomeFeed {
    /// Logs each section, then fails only if no section loaded.
    ///
    /// # Errors
    ///
    /// Returns an error when both fetches failed.
    pub fn report(&self) -> Result<()> {
        let sections = [("movies", &self.movies), ("events", &self.events)];
        let mut loaded = 0usize;
        for (name, section) in sections {
            match section {
                Ok(value) => {
                    loaded = loaded.saturating_add(1);
                    tracing::info!("{name}: {}", describe(value));
                    for title in titles(value) {
                        tracing::info!("  - {title}");
                    }
                }
                Err(err) => tracing::error!("{name}: {err}"),
            }
        }
        if loaded == 0 {
            bail!("failed to load home page data");
        }
        Ok(())
    }
}

/// Shape of a collection body: item count for arrays, JSON type otherwise.
fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} item(s)", items.len()),
        Value::Null => String::from("no data (null)"),
        Value::Object(_) => String::from("an object, not a list"),
        Value::Bool(_) => String::from("a boolean, not a list"),
        Value::Number(_) => String::from("a number, not a list"),
        Value::String(_) => String::from("a string, not a list"),
    }
}

/// `title` (or `name`) of each item that has one.
fn titles(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    item.get("title")
                        .or_else(|| item.get("name"))
                        .and_then(Value::as_str)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;
    use showtime_api::catalog::{FetchError, ResourceKind};

    use super::*;
    use crate::test_support::StubCatalog;

    fn movies() -> Value {
        json!([{"id": "1", "title": "Inception"}])
    }

    #[tokio::test]
    async fn test_load_home_both_sections() {
        // Arrange
        let client = StubCatalog::default()
            .with_collection(ResourceKind::Movies, movies())
            .with_collection(
                ResourceKind::Events,
                json!([{"id": "e1", "name": "Sunburn Arena"}]),
            );

        // Act
        let feed = load_home(&client).await;

        // Assert
        assert_eq!(feed.movies.as_ref().unwrap()[0]["title"], "Inception");
        assert_eq!(feed.events.as_ref().unwrap()[0]["name"], "Sunburn Arena");
        assert!(feed.report().is_ok());
    }

    #[tokio::test]
    async fn test_load_home_one_failure_is_isolated() {
        // Arrange
        let client = StubCatalog::default().with_collection(ResourceKind::Movies, movies());

        // Act
        let feed = load_home(&client).await;

        // Assert
        assert!(feed.movies.is_ok());
        assert_eq!(
            feed.events.as_ref().unwrap_err().to_string(),
            "Failed to fetch events"
        );
        assert!(feed.report().is_ok());
    }

    #[test]
    fn test_report_fails_when_nothing_loaded() {
        // Arrange
        let feed = HomeFeed {
            movies: Err(FetchError::transport(ResourceKind::Movies).into()),
            events: Err(FetchError::transport(ResourceKind::Events).into()),
        };

        // Act
        let result = feed.report();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_titles() {
        // Arrange
        let value = json!([
            {"id": "1", "title": "Pathaan"},
            {"id": "2", "name": "Comedy Night"},
            {"id": "3"}
        ]);

        // Act & Assert
        assert_eq!(titles(&value), vec!["Pathaan", "Comedy Night"]);
        assert!(titles(&json!({"title": "Solo"})).is_empty());
    }

    #[test]
    fn test_describe_reports_shape_not_count() {
        assert_eq!(describe(&json!([{"id": "1"}, {"id": "2"}])), "2 item(s)");
        assert_eq!(describe(&json!([])), "0 item(s)");
        assert_eq!(describe(&Value::Null), "no data (null)");
        assert_eq!(describe(&json!({"id": "1"})), "an object, not a list");
        assert_eq!(describe(&json!("oops")), "a string, not a list");
    }
}
