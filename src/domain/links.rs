//! External identifier providers and their canonical URL forms.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::MediaType;

/// Supported external metadata providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Imdb,
    Tmdb,
    Tvdb,
}

impl Provider {
    /// All providers in the order links are emitted
    pub const ALL: [Provider; 3] = [Provider::Imdb, Provider::Tmdb, Provider::Tvdb];

    /// Guid scheme prefix used by the remote catalog
    pub fn scheme(&self) -> &'static str {
        match self {
            Provider::Imdb => "imdb://",
            Provider::Tmdb => "tmdb://",
            Provider::Tvdb => "tvdb://",
        }
    }

    /// Check that an id string matches this provider's grammar.
    ///
    /// IMDb ids are `tt` followed by digits; TMDb and TVDB ids are
    /// plain numbers.
    pub fn is_valid_id(&self, id: &str) -> bool {
        match self {
            Provider::Imdb => {
                id.len() > 2
                    && id.starts_with("tt")
                    && id[2..].chars().all(|c| c.is_ascii_digit())
            }
            Provider::Tmdb | Provider::Tvdb => {
                !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Imdb => write!(f, "imdb"),
            Provider::Tmdb => write!(f, "tmdb"),
            Provider::Tvdb => write!(f, "tvdb"),
        }
    }
}

/// A resolved (provider, id) pair for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierLink {
    /// External database this id belongs to
    pub provider: Provider,

    /// Provider-local id, e.g. `tt0078748` or `348`
    pub id: String,
}

impl IdentifierLink {
    /// Create a new link
    pub fn new(provider: Provider, id: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
        }
    }

    /// Canonical URL for this link.
    ///
    /// TMDb uses a different path segment for movies and shows, so the
    /// media type is needed here.
    pub fn url(&self, media_type: MediaType) -> String {
        match self.provider {
            Provider::Imdb => format!("https://www.imdb.com/title/{}/", self.id),
            Provider::Tmdb => match media_type {
                MediaType::Movie => format!("https://www.themoviedb.org/movie/{}", self.id),
                MediaType::Show => format!("https://www.themoviedb.org/tv/{}", self.id),
            },
            Provider::Tvdb => format!("https://www.thetvdb.com/?tab=series&id={}", self.id),
        }
    }
}
