//! `FetchError` - the one typed failure of the catalog client.

use std::fmt;

use reqwest::StatusCode;

use super::kind::ResourceKind;

/// A catalog request that did not yield a successful response.
///
/// Raised for non-2xx statuses and for transport failures alike; callers
/// only learn which collection failed. The status, when one was received,
/// is kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct FetchError {
    kind: ResourceKind,
    status: Option<StatusCode>,
}

impl FetchError {
    /// Failure for a response that arrived with a non-successful status.
    #[must_use]
    pub const fn status(kind: ResourceKind, status: StatusCode) -> Self {
        Self {
            kind,
            status: Some(status),
        }
    }

    /// Failure for a request that never produced a response.
    #[must_use]
    pub const fn transport(kind: ResourceKind) -> Self {
        Self { kind, status: None }
    }

    /// Collection the request was for.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// HTTP status, if the backend answered at all.
    #[must_use]
    pub const fn http_status(&self) -> Option<StatusCode> {
        self.status
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to fetch {}", self.kind)
    }
}

impl std::error::Error for FetchError {}
