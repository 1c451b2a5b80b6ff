//! Command-line interface for nfogen.
//!
//! One command, one pass: connect to the server, process the named
//! library, print the summary. Per-item failures do not affect the
//! exit code; connection and configuration errors do.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::catalog::PlexCatalog;
use crate::domain::MediaType;
use crate::processor::{LibraryProcessor, ProcessOptions};
use crate::writer::WriteMode;

/// nfogen - Export NFO description files from Plex metadata
#[derive(Parser, Debug)]
#[command(name = "nfogen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Plex server URL
    #[arg(long, env = "PLEX_URL", default_value = "http://localhost:32400")]
    pub url: String,

    /// Plex authentication token
    #[arg(long, env = "PLEX_TOKEN")]
    pub token: String,

    /// Library name on the server
    #[arg(long, default_value = "Movies")]
    pub library: String,

    /// Library type
    #[arg(long = "type", value_enum, default_value_t = LibraryType::Movie)]
    pub media_type: LibraryType,

    /// Library root path as the server reports it (e.g. 'D:\Movies')
    #[arg(long)]
    pub remote_root: String,

    /// Local filesystem root of the same library
    #[arg(long)]
    pub local_root: PathBuf,

    /// Simulate the run without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite existing description files
    #[arg(long)]
    pub force: bool,
}

/// Library type for CLI (maps to MediaType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LibraryType {
    /// Movie library
    Movie,

    /// TV show library
    Tv,
}

impl From<LibraryType> for MediaType {
    fn from(t: LibraryType) -> Self {
        match t {
            LibraryType::Movie => MediaType::Movie,
            LibraryType::Tv => MediaType::Show,
        }
    }
}

impl Cli {
    /// Execute the export run
    pub async fn execute(self) -> Result<()> {
        let catalog = PlexCatalog::connect(&self.url, &self.token)
            .await
            .with_context(|| format!("failed to connect to Plex server at {}", self.url))?;

        let options = ProcessOptions {
            library: self.library.clone(),
            media_type: self.media_type.into(),
            remote_root: self.remote_root,
            local_root: self.local_root,
            mode: WriteMode {
                dry_run: self.dry_run,
                overwrite: self.force,
            },
        };

        let processor = LibraryProcessor::new(catalog);
        let result = processor
            .process(&options)
            .await
            .with_context(|| format!("failed to process library '{}'", self.library))?;

        if self.dry_run {
            println!("[dry run] {}", result);
        } else {
            println!("{}", result);
        }

        for failure in &result.failures {
            eprintln!("  failed: {} ({})", failure.title, failure.reason);
        }

        Ok(())
    }
}
