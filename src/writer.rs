//! NFO file rendering and writing.
//!
//! The output format is deliberately minimal: one canonical provider
//! URL per line. Downstream servers scan the file for these links and
//! need nothing else. Existing files are left untouched unless
//! overwrite is requested, so manual edits survive re-runs.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{IdentifierLink, MediaType, SkipReason};

/// Write policy for one run
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteMode {
    /// Simulate only; never touch the filesystem
    pub dry_run: bool,

    /// Replace existing description files
    pub overwrite: bool,
}

/// What the writer did (or would have done) for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File written, or would be written in a dry run
    Written,

    /// No file produced
    Skipped(SkipReason),
}

/// Filesystem errors while writing a description file
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the NFO document body for a set of links.
pub fn render(links: &[IdentifierLink], media_type: MediaType) -> String {
    let mut content = String::new();
    for link in links {
        content.push_str(&link.url(media_type));
        content.push('\n');
    }
    content
}

/// Write (or simulate writing) the description file at `nfo_path`.
///
/// Dry runs perform the same existence check as real runs so the two
/// report identical outcomes over the same starting state.
pub async fn write(
    nfo_path: &Path,
    links: &[IdentifierLink],
    media_type: MediaType,
    mode: WriteMode,
) -> Result<WriteOutcome, WriteError> {
    if links.is_empty() {
        return Ok(WriteOutcome::Skipped(SkipReason::NoIdentifiers));
    }

    // An unreadable target falls through to the write, which reports
    // the underlying error itself
    let exists = tokio::fs::try_exists(nfo_path).await.unwrap_or(false);
    if exists && !mode.overwrite {
        debug!(path = %nfo_path.display(), "description file exists, skipping");
        return Ok(WriteOutcome::Skipped(SkipReason::AlreadyExists));
    }

    if mode.dry_run {
        info!(path = %nfo_path.display(), "[dry run] would write description file");
        return Ok(WriteOutcome::Written);
    }

    if let Some(parent) = nfo_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let content = render(links, media_type);
    tokio::fs::write(nfo_path, content)
        .await
        .map_err(|source| WriteError::Write {
            path: nfo_path.to_path_buf(),
            source,
        })?;

    info!(path = %nfo_path.display(), "wrote description file");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Provider;
    use tempfile::TempDir;

    fn alien_links() -> Vec<IdentifierLink> {
        vec![
            IdentifierLink::new(Provider::Imdb, "tt0078748"),
            IdentifierLink::new(Provider::Tmdb, "348"),
        ]
    }

    #[test]
    fn test_render_one_url_per_line() {
        let content = render(&alien_links(), MediaType::Movie);
        assert_eq!(
            content,
            "https://www.imdb.com/title/tt0078748/\nhttps://www.themoviedb.org/movie/348\n"
        );
    }

    #[tokio::test]
    async fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Alien.nfo");

        let outcome = write(&nfo, &alien_links(), MediaType::Movie, WriteMode::default())
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        let content = std::fs::read_to_string(&nfo).unwrap();
        assert!(content.contains("imdb.com/title/tt0078748"));
    }

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Show X").join("tvshow.nfo");

        let outcome = write(&nfo, &alien_links(), MediaType::Show, WriteMode::default())
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert!(nfo.exists());
    }

    #[tokio::test]
    async fn test_existing_file_skipped_by_default() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Alien.nfo");
        std::fs::write(&nfo, "manual edit").unwrap();

        let outcome = write(&nfo, &alien_links(), MediaType::Movie, WriteMode::default())
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped(SkipReason::AlreadyExists));
        assert_eq!(std::fs::read_to_string(&nfo).unwrap(), "manual edit");
    }

    #[tokio::test]
    async fn test_overwrite_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Alien.nfo");
        std::fs::write(&nfo, "stale").unwrap();

        let mode = WriteMode {
            overwrite: true,
            ..Default::default()
        };
        let outcome = write(&nfo, &alien_links(), MediaType::Movie, mode)
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert!(std::fs::read_to_string(&nfo)
            .unwrap()
            .contains("themoviedb.org/movie/348"));
    }

    #[tokio::test]
    async fn test_dry_run_never_mutates() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Alien.nfo");

        let mode = WriteMode {
            dry_run: true,
            ..Default::default()
        };
        let outcome = write(&nfo, &alien_links(), MediaType::Movie, mode)
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert!(!nfo.exists());
    }

    #[tokio::test]
    async fn test_dry_run_reports_existing_file_as_skipped() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Alien.nfo");
        std::fs::write(&nfo, "manual edit").unwrap();

        let mode = WriteMode {
            dry_run: true,
            ..Default::default()
        };
        let outcome = write(&nfo, &alien_links(), MediaType::Movie, mode)
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped(SkipReason::AlreadyExists));
    }

    #[tokio::test]
    async fn test_blocked_parent_directory_surfaces_create_dir_error() {
        let dir = TempDir::new().unwrap();
        // A regular file occupies the path where the show directory belongs
        std::fs::write(dir.path().join("Show X"), b"not a directory").unwrap();
        let nfo = dir.path().join("Show X").join("tvshow.nfo");

        let err = write(&nfo, &alien_links(), MediaType::Show, WriteMode::default())
            .await
            .unwrap_err();

        assert!(matches!(err, WriteError::CreateDir { .. }));
    }

    #[tokio::test]
    async fn test_no_links_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let nfo = dir.path().join("Alien.nfo");

        let outcome = write(&nfo, &[], MediaType::Movie, WriteMode::default())
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped(SkipReason::NoIdentifiers));
        assert!(!nfo.exists());
    }
}
