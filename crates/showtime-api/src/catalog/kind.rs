//! `ResourceKind` - content collections served by the backend.

use std::fmt;
use std::str::FromStr;

/// A named collection of backend content, mapped to a fixed URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::module_name_repetitions)]
pub enum ResourceKind {
    /// `/movies`
    Movies,
    /// `/events`
    Events,
    /// `/plays`
    Plays,
    /// `/sports`
    Sports,
    /// `/activities`
    Activities,
    /// `/offers`
    Offers,
    /// `/giftcards`
    GiftCards,
}

impl ResourceKind {
    /// Every kind, in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Movies,
        Self::Events,
        Self::Plays,
        Self::Sports,
        Self::Activities,
        Self::Offers,
        Self::GiftCards,
    ];

    /// Path segment under the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Events => "events",
            Self::Plays => "plays",
            Self::Sports => "sports",
            Self::Activities => "activities",
            Self::Offers => "offers",
            Self::GiftCards => "giftcards",
        }
    }

    /// Singular noun for a single item of this kind.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Movies => "movie",
            Self::Events => "event",
            Self::Plays => "play",
            Self::Sports => "sport",
            Self::Activities => "activity",
            Self::Offers => "offer",
            Self::GiftCards => "gift card",
        }
    }

    /// Plural noun as read by people (`gift cards`, not `giftcards`).
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::GiftCards => "gift cards",
            other => other.path(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Returned when a string names no known [`ResourceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResourceKindError(String);

impl fmt::Display for ParseResourceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ResourceKind::ALL.iter().map(|k| k.path()).collect();
        write!(
            f,
            "unknown resource kind '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for ParseResourceKindError {}

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.path() == lowered || kind.noun() == lowered || kind.plural() == lowered
            })
            .ok_or_else(|| ParseResourceKindError(String::from(s)))
    }
}
