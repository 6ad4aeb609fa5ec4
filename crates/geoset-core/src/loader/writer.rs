// crates/geoset-core/src/loader/writer.rs

use crate::error::{GeoSetError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `value` as compact JSON to `path`, all or nothing.
///
/// The bytes go to a temporary file next to the destination which is then
/// renamed over it, so `path` either keeps its previous state or holds the
/// complete document. Missing parent directories are created.
pub fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| GeoSetError::Io(e.error))?;
    Ok(())
}
