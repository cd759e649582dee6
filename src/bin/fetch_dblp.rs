use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fetch_dblp::{
    config::DblpConfig,
    fetcher::PublicationFetcher,
    format::Formatter
};

fn main() -> Result<()> {
    // diagnostics go to stderr; stdout only carries the summary line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let fetcher = PublicationFetcher::new(DblpConfig::from_env());
    let output_file = &fetcher.config().output_file;
    let count = fetcher.fetch_to_file(output_file)?;
    println!("{}", Formatter::to_summary(count, output_file));
    Ok(())
}
