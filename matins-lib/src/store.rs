use std::io::Read;
use std::path::Path;

use matins_data::{FORMAT_VERSION, MaterialsStore};
use tracing::info;

use crate::dataset::Dataset;
use crate::error::{MatinsError, Result};

/// Decode a store blob: zstd frame around a postcard-encoded [`MaterialsStore`].
pub fn decode_store(compressed: &[u8]) -> Result<MaterialsStore> {
    let mut decoder = ruzstd::decoding::StreamingDecoder::new(compressed)
        .map_err(|e| MatinsError::DataError(format!("zstd: {e}")))?;
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| MatinsError::DataError(format!("zstd: {e}")))?;

    let store: MaterialsStore = postcard::from_bytes(&decompressed)
        .map_err(|e| MatinsError::DataError(format!("postcard: {e}")))?;
    if store.format_version != FORMAT_VERSION {
        return Err(MatinsError::DataError(format!(
            "unsupported store format {} (expected {FORMAT_VERSION})",
            store.format_version
        )));
    }
    Ok(store)
}

/// Read and decode a store file.
pub fn open_store(path: impl AsRef<Path>) -> Result<MaterialsStore> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let store = decode_store(&bytes)?;
    info!(path = %path.display(), tables = store.tables.len(), "opened materials store");
    Ok(store)
}

/// Materialize one table as a [`Dataset`] (the whole table, every column).
pub fn load_table(store: &MaterialsStore, name: &str) -> Result<Dataset> {
    let table = store
        .table(name)
        .ok_or_else(|| MatinsError::UnknownTable(name.to_string()))?;
    Dataset::try_from(table)
}
