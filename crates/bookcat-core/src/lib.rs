pub mod app_config;
pub mod books;
pub mod config;

pub use app_config::AppConfig;
pub use books::{assign_ids, CatalogEntry, CatalogRecord, Rating};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown rating label \"{0}\"")]
    UnknownRating(String),

    #[error("rating value {0} is outside 1..=5")]
    RatingOutOfRange(u8),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
