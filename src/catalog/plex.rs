//! Plex HTTP API client.
//!
//! Talks to the `/library/sections` endpoints with token auth and maps
//! the MediaContainer payloads into [`CatalogItem`] records at this
//! boundary, so nothing Plex-shaped leaks into the core.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{CatalogItem, MediaType};

use super::{Catalog, CatalogError};

/// Plex media server client
pub struct PlexCatalog {
    /// Server base URL, e.g. `http://localhost:32400`
    base_url: String,
    /// Authentication token
    token: String,
    /// HTTP client
    client: reqwest::Client,
}

/// Top-level wrapper around every Plex response
#[derive(Debug, Deserialize)]
struct MediaContainerResponse<T> {
    #[serde(rename = "MediaContainer")]
    media_container: T,
}

/// Response body of `/library/sections`
#[derive(Debug, Deserialize)]
struct SectionList {
    #[serde(rename = "Directory", default)]
    directories: Vec<Section>,
}

/// One library section
#[derive(Debug, Deserialize)]
struct Section {
    key: String,
    title: String,
}

/// Response body of `/library/sections/{key}/all`
#[derive(Debug, Deserialize)]
struct ItemList {
    #[serde(rename = "Metadata", default)]
    metadata: Vec<Metadata>,
}

/// One item's metadata as Plex reports it
#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    title: String,

    #[serde(rename = "Guid", default)]
    guids: Vec<Guid>,

    /// Present on movies: media versions with their file parts
    #[serde(rename = "Media", default)]
    media: Vec<Media>,

    /// Present on shows: the show-root directories
    #[serde(rename = "Location", default)]
    locations: Vec<Location>,
}

#[derive(Debug, Deserialize)]
struct Guid {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Media {
    #[serde(rename = "Part", default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    file: String,
}

#[derive(Debug, Deserialize)]
struct Location {
    path: String,
}

impl Metadata {
    /// Map this entry into a typed catalog item.
    ///
    /// Movies take the file path of the first part of the first media
    /// version; shows take their first location directory.
    fn into_item(self, media_type: MediaType) -> CatalogItem {
        let location = match media_type {
            MediaType::Movie => self
                .media
                .into_iter()
                .next()
                .and_then(|m| m.parts.into_iter().next())
                .map(|p| p.file),
            MediaType::Show => self.locations.into_iter().next().map(|l| l.path),
        };

        CatalogItem {
            title: self.title,
            media_type,
            location,
            guids: self.guids.into_iter().map(|g| g.id).collect(),
        }
    }
}

impl PlexCatalog {
    /// Connect to a Plex server and verify the token.
    pub async fn connect(url: &str, token: &str) -> Result<Self, CatalogError> {
        let catalog = Self {
            base_url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client: reqwest::Client::new(),
        };

        info!(url = %catalog.base_url, "connecting to Plex server");

        // /identity answers without auth scopes but still validates the token
        let response = catalog
            .get("/identity")
            .send()
            .await
            .map_err(|source| CatalogError::Connection {
                url: catalog.base_url.clone(),
                source,
            })?;

        catalog.check_status(&response)?;

        Ok(catalog)
    }

    /// Build an authenticated request for an API path
    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header("X-Plex-Token", &self.token)
            .header("Accept", "application/json")
    }

    /// Map auth failures out of a response status
    fn check_status(&self, response: &reqwest::Response) -> Result<(), CatalogError> {
        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(CatalogError::Auth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            return Err(CatalogError::Response(format!("HTTP {}", status)));
        }
        Ok(())
    }

    /// Fetch a parsed MediaContainer payload
    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let response = self
            .get(path)
            .query(query)
            .send()
            .await
            .map_err(|source| CatalogError::Connection {
                url: self.base_url.clone(),
                source,
            })?;

        self.check_status(&response)?;

        let wrapper: MediaContainerResponse<T> = response
            .json()
            .await
            .map_err(|e| CatalogError::Response(e.to_string()))?;

        Ok(wrapper.media_container)
    }

    /// Look up a library section by title
    async fn find_section(&self, library: &str) -> Result<Section, CatalogError> {
        let sections: SectionList = self.fetch("/library/sections", &[]).await?;

        sections
            .directories
            .into_iter()
            .find(|s| s.title == library)
            .ok_or_else(|| CatalogError::LibraryNotFound(library.to_string()))
    }
}

#[async_trait]
impl Catalog for PlexCatalog {
    async fn list_items(
        &self,
        library: &str,
        media_type: MediaType,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let section = self.find_section(library).await?;
        debug!(library, key = %section.key, "resolved library section");

        // type=1 is movie, type=2 is show; includeGuids pulls the
        // external ids into the listing so no per-item fetch is needed
        let plex_type = match media_type {
            MediaType::Movie => "1",
            MediaType::Show => "2",
        };

        let items: ItemList = self
            .fetch(
                &format!("/library/sections/{}/all", section.key),
                &[("type", plex_type), ("includeGuids", "1")],
            )
            .await?;

        Ok(items
            .metadata
            .into_iter()
            .map(|m| m.into_item(media_type))
            .collect())
    }
}
