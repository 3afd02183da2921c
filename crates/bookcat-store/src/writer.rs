use std::path::Path;

use bookcat_core::{assign_ids, CatalogEntry};

use crate::error::StoreError;
use crate::CATALOG_COLUMNS;

/// Numbers `entries` 1..=N in the given order and replaces the file at
/// `path` with them.
///
/// Rows are written to a temporary file beside `path` and renamed over it,
/// so readers see either the previous catalog or the complete new one and a
/// failed write leaves the previous file untouched. Missing parent
/// directories are created.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// - [`StoreError::Io`] if the parent directory or temp file cannot be created.
/// - [`StoreError::Csv`] if a row cannot be serialized or flushed.
/// - [`StoreError::Persist`] if the temp file cannot be renamed over `path`.
pub fn write_catalog(path: &Path, entries: Vec<CatalogEntry>) -> Result<usize, StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source: std::io::Error| StoreError::Io {
        path: dir.display().to_string(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    let staged = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;

    let records = assign_ids(entries);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(staged.as_file());
    writer.write_record(CATALOG_COLUMNS)?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| StoreError::Csv(e.into()))?;
    drop(writer);

    staged
        .as_file()
        .sync_all()
        .map_err(|source| StoreError::Io {
            path: staged.path().display().to_string(),
            source,
        })?;

    staged.persist(path).map_err(|e| StoreError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;

    tracing::info!(path = %path.display(), rows = records.len(), "catalog written");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bookcat_core::Rating;
    use rust_decimal::Decimal;

    use super::*;

    fn entry(title: &str, price: &str) -> CatalogEntry {
        CatalogEntry {
            title: title.to_owned(),
            price: Decimal::from_str(price).unwrap(),
            rating: Rating::Four,
            availability: "In stock (19 available)".to_owned(),
            category: "Historical Fiction".to_owned(),
            image_url: "http://books.toscrape.com/media/cache/a.jpg".to_owned(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        let rows = write_catalog(&path, vec![entry("Tipping the Velvet", "53.74")]).unwrap();
        assert_eq!(rows, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("id,title,price,rating,availability,category,image_url")
        );
        assert_eq!(
            lines.next(),
            Some("1,Tipping the Velvet,53.74,4,In stock (19 available),Historical Fiction,http://books.toscrape.com/media/cache/a.jpg")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn quotes_text_containing_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        write_catalog(&path, vec![entry("Sapiens: A Brief History, Vol. 1", "54.23")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Sapiens: A Brief History, Vol. 1\""));
    }

    #[test]
    fn empty_catalog_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        assert_eq!(write_catalog(&path, Vec::new()).unwrap(), 0);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "id,title,price,rating,availability,category,image_url"
        );
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("books.csv");

        write_catalog(&path, vec![entry("a", "1.00")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn second_write_replaces_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        write_catalog(&path, vec![entry("a", "1.00"), entry("b", "2.00"), entry("c", "3.00")])
            .unwrap();
        write_catalog(&path, vec![entry("z", "9.00")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("1,z,9.00"));
        assert!(!content.contains(",a,"));
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");

        write_catalog(&path, vec![entry("a", "1.00")]).unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["books.csv".to_owned()]);
    }

    #[test]
    fn parent_that_is_a_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_catalog(&blocker.join("books.csv"), Vec::new()).unwrap_err();
        assert!(
            matches!(err, StoreError::Io { .. }),
            "expected Io error, got: {err:?}"
        );
    }
}
