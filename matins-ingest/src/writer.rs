use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use atomicwrites::{AllowOverwrite, AtomicFile};
use matins_data::{FORMAT_VERSION, MaterialsStore, TableRecord};
use tracing::info;

const ZSTD_LEVEL: i32 = 19;

/// Read an existing store, or start an empty one when the file is absent.
pub fn read_store(path: &Path) -> Result<MaterialsStore> {
    if !path.exists() {
        return Ok(MaterialsStore::new());
    }
    let compressed =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let raw = zstd::decode_all(&compressed[..]).context("zstd decompression failed")?;
    let store: MaterialsStore =
        postcard::from_bytes(&raw).context("postcard deserialization failed")?;
    if store.format_version != FORMAT_VERSION {
        bail!(
            "{} has store format {}, expected {FORMAT_VERSION}",
            path.display(),
            store.format_version
        );
    }
    Ok(store)
}

/// Drop and recreate `table` in the store at `path`, keeping other tables.
///
/// The file is replaced atomically; readers see either the old store or the
/// new one.
pub fn replace_table(path: &Path, table: TableRecord) -> Result<()> {
    let mut store = read_store(path)?;
    let name = table.name.clone();
    let rows = table.rows.len();
    if store.replace_table(table).is_some() {
        info!(table = %name, "dropped existing table");
    }

    let serialized = postcard::to_allocvec(&store).context("postcard serialization failed")?;
    let compressed =
        zstd::encode_all(&serialized[..], ZSTD_LEVEL).context("zstd compression failed")?;
    info!(
        serialized = serialized.len(),
        compressed = compressed.len(),
        "encoded store"
    );

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(&compressed))
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(table = %name, rows, path = %path.display(), "saved table");
    Ok(())
}
