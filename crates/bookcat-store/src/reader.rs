use std::path::Path;

use bookcat_core::CatalogRecord;

use crate::error::StoreError;
use crate::CATALOG_COLUMNS;

/// Loads every row of the catalog at `path`.
///
/// # Errors
///
/// - [`StoreError::Io`] if the file cannot be opened.
/// - [`StoreError::UnexpectedHeader`] if the header row differs from
///   [`CATALOG_COLUMNS`].
/// - [`StoreError::Csv`] if a row does not deserialize (bad price, rating
///   outside 1..=5, wrong field count).
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogRecord>, StoreError> {
    let file = std::fs::File::open(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?;
    if !headers.iter().eq(CATALOG_COLUMNS) {
        return Err(StoreError::UnexpectedHeader {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    reader
        .deserialize::<CatalogRecord>()
        .map(|row| row.map_err(StoreError::from))
        .collect()
}

/// Checks that ids run `1, 2, …, N` in row order.
///
/// # Errors
///
/// Returns [`StoreError::IdSequence`] at the first row that breaks the run.
pub fn verify_ids(records: &[CatalogRecord]) -> Result<(), StoreError> {
    for (row, (record, expected)) in records.iter().zip(1u32..).enumerate() {
        if record.id != expected {
            return Err(StoreError::IdSequence {
                row: row + 1,
                expected,
                found: record.id,
            });
        }
    }
    Ok(())
}
