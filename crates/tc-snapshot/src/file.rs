//! Snapshot files.
//!
//! `save` writes to a temporary file in the destination directory and
//! renames it over the target, so readers only ever see a complete snapshot
//! or the previous one.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use tc_catalogue::TransportCatalogue;
use tc_core::RenderSettings;
use tc_router::TransportRouter;

use crate::codec::{Snapshot, decode, encode};
use crate::SnapshotResult;

pub fn save(
    path: &Path,
    catalogue: &TransportCatalogue,
    render_settings: &RenderSettings,
    router: &TransportRouter,
) -> SnapshotResult<()> {
    let bytes = encode(catalogue, render_settings, router);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), bytes = bytes.len(), "saved snapshot");
    Ok(())
}

pub fn load(path: &Path) -> SnapshotResult<Snapshot> {
    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "loading snapshot");
    decode(&bytes)
}
