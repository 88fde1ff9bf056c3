//! Catalog API client module.
//!
//! Issues GET requests against `<base_url>/<kind>` and returns the parsed
//! JSON body untouched. Non-successful responses surface as [`FetchError`].

mod api;
mod client;
mod error;
mod kind;

#[allow(clippy::module_name_repetitions)]
pub use api::{CatalogApi, LocalCatalogApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{CatalogClient, CatalogClientBuilder, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use kind::{ParseResourceKindError, ResourceKind};
