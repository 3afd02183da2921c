//! The `crawl` command: one full extraction run.
//!
//! A run either completes and replaces the catalog file once, or fails and
//! leaves whatever file was there before untouched.

use anyhow::Context;

use bookcat_core::AppConfig;
use bookcat_scraper::{crawl_catalog, CatalogClient, CrawlOptions};

use crate::CrawlArgs;

/// What a finished run did.
#[derive(Debug)]
pub(crate) struct RunSummary {
    pub pages_visited: usize,
    pub rows: usize,
    /// `false` for dry runs.
    pub written: bool,
}

/// Layers command-line flags over the environment configuration.
pub(crate) fn apply_overrides(
    mut config: AppConfig,
    args: CrawlArgs,
) -> anyhow::Result<AppConfig> {
    if let Some(base_url) = args.base_url {
        config.base_url = bookcat_core::config::normalize_base_url(&base_url)
            .with_context(|| format!("--base-url \"{base_url}\" is not an absolute http(s) URL"))?;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(max_pages) = args.max_pages {
        config.max_pages = usize::try_from(max_pages).context("--max-pages is too large")?;
    }
    if let Some(detail_concurrency) = args.detail_concurrency {
        config.detail_concurrency =
            usize::try_from(detail_concurrency).context("--detail-concurrency is too large")?;
    }
    Ok(config)
}

/// Crawls the configured site and, unless `dry_run`, replaces the catalog
/// file with the result.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the crawl fails at any
/// point, or the catalog file cannot be written. Nothing is written unless
/// the crawl succeeded in full.
pub(crate) async fn run_crawl(config: &AppConfig, dry_run: bool) -> anyhow::Result<RunSummary> {
    let client = CatalogClient::new(
        &config.base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    tracing::info!(
        base_url = %config.base_url,
        output = %config.output_path.display(),
        max_pages = config.max_pages,
        detail_concurrency = config.detail_concurrency,
        dry_run,
        "starting catalog crawl"
    );

    let report = crawl_catalog(
        &client,
        CrawlOptions {
            max_pages: config.max_pages,
            detail_concurrency: config.detail_concurrency,
        },
    )
    .await
    .context("catalog crawl aborted; catalog file left unchanged")?;

    let rows = report.entries.len();
    if dry_run {
        return Ok(RunSummary {
            pages_visited: report.pages_visited,
            rows,
            written: false,
        });
    }

    bookcat_store::write_catalog(&config.output_path, report.entries).with_context(|| {
        format!(
            "failed to write catalog to {}",
            config.output_path.display()
        )
    })?;

    Ok(RunSummary {
        pages_visited: report.pages_visited,
        rows,
        written: true,
    })
}

#[cfg(test)]
#[path = "crawl_test.rs"]
mod tests;
