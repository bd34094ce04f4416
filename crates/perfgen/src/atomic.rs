//! Whole-file writes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Write `contents` to `path` through a sibling temp file that is renamed
/// into place, so a failed write never leaves a partial file behind.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: impl AsRef<[u8]>) -> Result<(), Error> {
    let path = path.as_ref();
    let tmp = temp_sibling(path);

    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

/// `plate.dxf` -> `plate.dxf.tmp` in the same directory.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
