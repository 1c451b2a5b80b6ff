//! nfogen - NFO description-file exporter for Plex libraries
//!
//! Reads movie or TV show metadata from a Plex server and writes small
//! NFO files next to the local media so another media server (Jellyfin,
//! Kodi, Emby) can pick up the same IMDb/TMDb/TVDB identifiers without
//! a full metadata re-scan.
//!
//! # Architecture
//!
//! The core is a single sequential pass over one library:
//! - Remote metadata is mapped into typed [`domain`] records at the
//!   catalog boundary
//! - Path translation from server-reported paths to local paths is a
//!   pure computation with no filesystem probing
//! - Per-item failures are recorded and the run continues; only
//!   connection/configuration errors abort
//!
//! # Modules
//!
//! - `catalog`: Remote catalog boundary (Plex HTTP client)
//! - `domain`: Data structures (CatalogItem, IdentifierLink, RunResult)
//! - `pathmap`: Remote-to-local path translation
//! - `extract`: External identifier extraction from guid strings
//! - `writer`: NFO file rendering and policy-aware writing
//! - `processor`: Per-library orchestration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Export a movie library
//! nfogen --token TOKEN --library Movies --type movie \
//!     --remote-root 'D:\Movies' --local-root /data/movies
//!
//! # Simulate first
//! nfogen --token TOKEN --remote-root 'D:\Movies' --local-root /data/movies --dry-run
//! ```

pub mod catalog;
pub mod cli;
pub mod domain;
pub mod extract;
pub mod pathmap;
pub mod processor;
pub mod writer;

// Re-export main types at crate root for convenience
pub use catalog::{Catalog, CatalogError, PlexCatalog};
pub use domain::{
    CatalogItem, IdentifierLink, ItemOutcome, MediaType, Provider, RunResult, SkipReason,
};
pub use processor::{LibraryProcessor, ProcessOptions};
pub use writer::{WriteMode, WriteOutcome};
