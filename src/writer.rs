//! Atomic artifact writer.
//!
//! The snapshot is written to `<path>.tmp` in the target directory, synced,
//! then renamed over the final path, so the viewer never observes a
//! half-written file and a failed run leaves the previous artifact intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Serialize the snapshot as pretty-printed JSON and atomically replace the
/// artifact at `path`.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(snapshot)?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    {
        let mut file = File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
