use std::{
    io,
    path::{Path, PathBuf},
};

use clap::Parser;
use tabletidy::rewrite::{LineRewriter, RewriteStats};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "tabletidy",
    version,
    about = "Normalize dataframe HTML tables in exported markdown"
)]
struct Cli {
    /// Input text file to rewrite
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tabletidy=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let stats = run(&cli.path).inspect_err(|e| {
        tracing::debug!(code = e.error_code(), "Rewrite failed");
    })?;

    tracing::info!(
        lines_read = stats.lines_read,
        lines_written = stats.lines_written,
        markup_lines = stats.markup_lines,
        lines_suppressed = stats.lines_suppressed,
        "Rewrite finished"
    );

    Ok(())
}

fn run(path: &Path) -> tabletidy::Result<RewriteStats> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    LineRewriter::default().rewrite_file(path, &mut out)
}
