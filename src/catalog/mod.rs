//! Remote catalog boundary.
//!
//! The processor only sees this trait and the typed records it
//! returns; the Plex HTTP details stay inside `plex`.

pub mod plex;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CatalogItem, MediaType};

// Re-export the Plex implementation
pub use plex::PlexCatalog;

/// Errors from the remote catalog.
///
/// All of these are fatal to the run: they mean the configuration is
/// wrong or the server is unreachable, not that one item is bad.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to reach server at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server rejected credentials (HTTP {status})")]
    Auth { status: u16 },

    #[error("library '{0}' not found on server")]
    LibraryNotFound(String),

    #[error("unexpected response from server: {0}")]
    Response(String),
}

/// Trait for remote media catalogs
#[async_trait]
pub trait Catalog: Send + Sync {
    /// List all items of the given type in the named library.
    async fn list_items(
        &self,
        library: &str,
        media_type: MediaType,
    ) -> Result<Vec<CatalogItem>, CatalogError>;
}
