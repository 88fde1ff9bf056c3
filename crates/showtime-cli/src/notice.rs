//! "Not found" notices shared by every resource kind.

use showtime_api::catalog::ResourceKind;

/// Parameters of the not-found notice for one resource kind.
///
/// Every kind renders through the same template; only the noun, icon and
/// back route differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundNotice {
    /// Singular noun, e.g. `movie`.
    noun: &'static str,
    /// Plural noun, e.g. `movies`.
    plural: &'static str,
    /// Icon name shown next to the heading.
    icon: &'static str,
    /// Route the back link points at.
    back_route: String,
}

impl NotFoundNotice {
    /// Builds the notice for `kind`.
    #[must_use]
    pub fn for_kind(kind: ResourceKind) -> Self {
        let icon = match kind {
            ResourceKind::Movies => "film",
            ResourceKind::Events => "calendar",
            ResourceKind::Plays => "theater",
            ResourceKind::Sports => "trophy",
            ResourceKind::Activities => "map-pin",
            ResourceKind::Offers => "tag",
            ResourceKind::GiftCards => "gift",
        };
        Self {
            noun: kind.noun(),
            plural: kind.plural(),
            icon,
            back_route: format!("/{}", kind.path()),
        }
    }

    /// Icon name.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.icon
    }

    /// Route of the back link.
    #[must_use]
    pub fn back_route(&self) -> &str {
        &self.back_route
    }

    /// e.g. "Movie Not Found".
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} Not Found", title_case(self.noun))
    }

    /// Explanation shown below the heading.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "The {} you're looking for doesn't exist or may have been removed.",
            self.noun
        )
    }

    /// e.g. "Back to Movies".
    #[must_use]
    pub fn back_label(&self) -> String {
        format!("Back to {}", title_case(self.plural))
    }

    /// e.g. "Or try searching for a different movie".
    #[must_use]
    pub fn hint(&self) -> String {
        format!("Or try searching for a different {}", self.noun)
    }

    /// Writes the notice to the log.
    pub fn log(&self) {
        tracing::warn!("[{}] {}", self.icon(), self.heading());
        tracing::info!("{}", self.message());
        tracing::info!("{} ({})", self.back_label(), self.back_route());
        tracing::info!("{}", self.hint());
    }
}

/// Upper-cases the first character of every word.
fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
