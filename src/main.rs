use anyhow::{Context, Result};
use clap::Parser;
use quote_index::{loader, Error, QuoteIndex, Shell, DEFAULT_CAPACITY};
use std::{
    io::{self, ErrorKind},
    path::PathBuf,
};
use tracing::{info, warn};

/// Interactive movie quote database backed by a chained hash table.
#[derive(Parser)]
#[command(name = "quote-index")]
#[command(version)]
struct Cli {
    /// Quote file to load at startup
    #[arg(
        short,
        long,
        env = "QUOTE_INDEX_FILE",
        default_value = "movie_quotes.csv"
    )]
    file: PathBuf,

    /// Number of hash table buckets
    #[arg(short, long, env = "QUOTE_INDEX_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut index = QuoteIndex::with_capacity(cli.capacity);

    match loader::load_file(&mut index, &cli.file) {
        Ok(summary) => info!(
            path = %cli.file.display(),
            records = summary.records,
            skipped = summary.skipped,
            "loaded quote file"
        ),
        Err(Error::Io(error)) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %cli.file.display(), "quote file not found");
            println!("Error, File not found.");
        }
        Err(error) => {
            warn!(path = %cli.file.display(), %error, "failed to load quote file");
        }
    }

    Shell::new(&mut index, io::stdin().lock(), io::stdout().lock())
        .run()
        .context("failed to run command shell")
}
