//! Catalog items as seen by the core.
//!
//! A `CatalogItem` is built at the catalog boundary from whatever the
//! remote server returns, read once per run, and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of library being exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// A movie library; one video file per item
    Movie,

    /// A TV library; items are represented at the show-root level
    Show,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Show => write!(f, "show"),
        }
    }
}

/// A single movie or show from the remote catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Human-readable title
    pub title: String,

    /// Kind of item
    pub media_type: MediaType,

    /// File path (movies) or show-root directory (shows) as the remote
    /// server reports it; None when the server has no location on record
    pub location: Option<String>,

    /// Provider-tagged external id strings, e.g. `imdb://tt0078748`
    #[serde(default)]
    pub guids: Vec<String>,
}

impl CatalogItem {
    /// Create a new item
    pub fn new(title: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            title: title.into(),
            media_type,
            location: None,
            guids: Vec::new(),
        }
    }

    /// Set the remote location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add external id strings
    pub fn with_guids(mut self, guids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.guids.extend(guids.into_iter().map(Into::into));
        self
    }
}
