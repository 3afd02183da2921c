use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to replace {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected catalog header: {found}")]
    UnexpectedHeader { found: String },

    #[error("id sequence broken at row {row}: expected {expected}, found {found}")]
    IdSequence { row: usize, expected: u32, found: u32 },
}
