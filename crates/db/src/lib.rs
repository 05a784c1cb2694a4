//! File-backed persistence for the display-stand service.
//!
//! Each store owns one JSON document in the data directory and keeps the
//! current value in memory. Mutations are applied to a copy, written to
//! disk, and only then swapped in.

pub mod error;
pub mod json_file;
pub mod seed;
pub mod stores;

use std::path::Path;

pub use error::StoreError;
pub use json_file::JsonFile;
pub use stores::{CatalogStore, SettingsStore, StandStore};

/// File holding the stand collection.
pub const STANDS_FILE: &str = "display-stands.json";

/// File holding the settings record.
pub const SETTINGS_FILE: &str = "display-stand-settings.json";

/// File holding the poster and publication catalogs.
pub const CATALOG_FILE: &str = "display-stand-catalog.json";

/// Verify the data directory exists and is writable.
///
/// Creates the directory when missing.
pub async fn health_check(data_dir: &Path) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|source| StoreError::Io {
            path: data_dir.to_path_buf(),
            source,
        })?;

    let metadata = tokio::fs::metadata(data_dir)
        .await
        .map_err(|source| StoreError::Io {
            path: data_dir.to_path_buf(),
            source,
        })?;

    if metadata.permissions().readonly() {
        return Err(StoreError::Io {
            path: data_dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "data directory is read-only",
            ),
        });
    }

    Ok(())
}
