use std::path::Path;

use anyhow::Context;

/// Loads the catalog at `path` and checks its id column.
///
/// Returns the number of rows.
pub(crate) fn run_verify(path: &Path) -> anyhow::Result<usize> {
    let records = bookcat_store::read_catalog(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    bookcat_store::verify_ids(&records)
        .with_context(|| format!("catalog {} has a broken id sequence", path.display()))?;
    tracing::info!(path = %path.display(), rows = records.len(), "catalog verified");
    Ok(records.len())
}
