mod crawl;
mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bookcat")]
#[command(about = "Extract the book catalog into a flat CSV file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl every listing and detail page, then replace the catalog file.
    Crawl(CrawlArgs),
    /// Check that an existing catalog file loads and has ids 1..=N.
    Verify {
        /// Catalog file to check. Defaults to `BOOKCAT_OUTPUT_PATH`.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct CrawlArgs {
    /// Site root to crawl. Overrides `BOOKCAT_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,
    /// Destination file. Overrides `BOOKCAT_OUTPUT_PATH`.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Listing page bound. Overrides `BOOKCAT_MAX_PAGES`.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_pages: Option<u64>,
    /// Detail fetches in flight per listing page. Overrides `BOOKCAT_DETAIL_CONCURRENCY`.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    detail_concurrency: Option<u64>,
    /// Crawl and report, but do not write the catalog file.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bookcat_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let result = match cli.command {
        Commands::Crawl(args) => {
            let dry_run = args.dry_run;
            let config = crawl::apply_overrides(config, args)?;
            crawl::run_crawl(&config, dry_run).await.map(|summary| {
                if summary.written {
                    println!(
                        "catalog written: {} books from {} listing pages to {}",
                        summary.rows,
                        summary.pages_visited,
                        config.output_path.display()
                    );
                } else {
                    println!(
                        "dry-run: would write {} books from {} listing pages to {}",
                        summary.rows,
                        summary.pages_visited,
                        config.output_path.display()
                    );
                }
            })
        }
        Commands::Verify { path } => {
            let path = path.unwrap_or(config.output_path);
            verify::run_verify(&path).map(|rows| {
                println!("{}: {rows} books, ids 1..={rows}", path.display());
            })
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "bookcat failed");
    }
    result
}
