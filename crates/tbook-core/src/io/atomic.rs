//! Atomic write-then-rename file replacement

use crate::io::error::StoreError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write `contents` to `path` atomically.
///
/// The data goes to a sibling temp file first, is synced to disk, and
/// is then renamed over the destination. Readers see either the old
/// contents or the new, never a partial write, and a failed write
/// leaves any existing file intact.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");

    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(&tmp_path).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(io_err)
}
