// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{data::CatalogueItem, error::ExportError};

/// Write all records to `path` in one go, header first.
///
/// * `Ok(None)` – nothing to write; no file is created or touched.
/// * `Ok(Some(path))` – file written (an existing one is overwritten).
/// * `Err(_)` – the write itself failed.
pub fn write_items(path: &Path, items: &[CatalogueItem]) -> Result<Option<PathBuf>, ExportError> {
    if items.is_empty() {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    // Header comes from the serde field names: Name,Price,Rating,Stock,Description
    let mut out = csv::Writer::from_path(path)?; // truncate/overwrite
    for item in items {
        out.serialize(item)?;
    }
    out.flush()?;

    Ok(Some(path.to_path_buf()))
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
