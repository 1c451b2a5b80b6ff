//! Per-library orchestration.
//!
//! Fetches one library's items from the catalog and runs each through
//! map -> extract -> write, collecting outcomes in a [`RunResult`].
//! Only the fetch can abort the run; everything after it is caught at
//! the per-item boundary.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, instrument, warn};

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{CatalogItem, ItemOutcome, MediaType, RunResult, SkipReason};
use crate::writer::{self, WriteMode, WriteOutcome};
use crate::{extract, pathmap};

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Library name on the server
    pub library: String,

    /// Kind of library
    pub media_type: MediaType,

    /// Library root path as the server reports it
    pub remote_root: String,

    /// Local filesystem root of the same library
    pub local_root: PathBuf,

    /// Write policy (dry-run / overwrite)
    pub mode: WriteMode,
}

/// Sequential library processor
pub struct LibraryProcessor<C: Catalog> {
    /// Remote catalog to enumerate
    catalog: C,
}

impl<C: Catalog> LibraryProcessor<C> {
    /// Create a processor over a catalog
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Run one full pass over the configured library.
    ///
    /// Returns the aggregate result; per-item failures are recorded in
    /// it, not propagated. A `CatalogError` means the run never got
    /// past configuration and should abort with a non-zero exit.
    #[instrument(skip(self, options), fields(library = %options.library, media_type = %options.media_type))]
    pub async fn process(&self, options: &ProcessOptions) -> Result<RunResult, CatalogError> {
        let items = self
            .catalog
            .list_items(&options.library, options.media_type)
            .await?;

        info!(
            count = items.len(),
            dry_run = options.mode.dry_run,
            "processing library"
        );

        let mut result = RunResult::new();

        let progress = ProgressBar::new(items.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        for item in items {
            progress.set_message(item.title.clone());
            let outcome = self.process_item(&item, options).await;

            match &outcome {
                ItemOutcome::Written => {
                    info!(title = %item.title, "written");
                }
                ItemOutcome::Skipped(reason) => {
                    info!(title = %item.title, %reason, "skipped");
                }
                ItemOutcome::Failed(reason) => {
                    error!(title = %item.title, %reason, "failed");
                }
            }

            result.record(&item.title, &outcome);
            progress.inc(1);
        }

        progress.finish_and_clear();

        info!(
            processed = result.processed,
            written = result.written,
            skipped = result.skipped,
            failed = result.failed,
            "run complete"
        );

        Ok(result)
    }

    /// Process a single item: map its path, extract ids, write the NFO.
    async fn process_item(&self, item: &CatalogItem, options: &ProcessOptions) -> ItemOutcome {
        let Some(location) = item.location.as_deref() else {
            warn!(title = %item.title, "no location reported by server");
            return ItemOutcome::Skipped(SkipReason::NoLocation);
        };

        let local_path = match pathmap::map(location, &options.remote_root, &options.local_root) {
            Ok(path) => path,
            Err(e) => return ItemOutcome::Failed(e.to_string()),
        };

        let links = extract::extract(&item.guids);
        let nfo_path = nfo_target(&local_path, item.media_type);

        match writer::write(&nfo_path, &links, item.media_type, options.mode).await {
            Ok(WriteOutcome::Written) => ItemOutcome::Written,
            Ok(WriteOutcome::Skipped(reason)) => ItemOutcome::Skipped(reason),
            Err(e) => ItemOutcome::Failed(e.to_string()),
        }
    }
}

/// Where the description file belongs for a mapped local path.
///
/// Movies get a sibling file named after the video; shows get
/// `tvshow.nfo` inside the show-root directory.
fn nfo_target(local_path: &Path, media_type: MediaType) -> PathBuf {
    match media_type {
        MediaType::Movie => local_path.with_extension("nfo"),
        MediaType::Show => local_path.join("tvshow.nfo"),
    }
}
