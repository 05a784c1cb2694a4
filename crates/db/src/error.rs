use std::path::PathBuf;

use presentoir_core::error::CoreError;

/// Failure of a store operation.
///
/// Domain failures (unknown id, illegal transition) pass through as
/// [`StoreError::Core`]; the other variants mean the backing file could not
/// be read or written.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
