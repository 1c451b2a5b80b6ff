//! nfogen CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nfogen::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr and to nfogen.log in the working directory
    let file_appender = tracing_appender::rolling::never(".", "nfogen.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    // Parse and execute CLI
    let cli = Cli::parse();
    cli.execute().await
}
