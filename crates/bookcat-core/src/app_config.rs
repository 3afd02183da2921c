use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Site root, always ending in `/`. Listing pages live under
    /// `{base_url}catalogue/`.
    pub base_url: String,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on listing pages visited in one run.
    pub max_pages: usize,
    /// Detail pages fetched concurrently per listing page. `1` is fully sequential.
    pub detail_concurrency: usize,
}
