//! File scanner for discovering and filtering files

use crate::config::ProjectifyConfig;
use crate::core::ScanEvent;
use crate::fs::{load_ignore_file, walk_directory};
use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use std::path::PathBuf;
use tracing::debug;

/// Notify helper for optional sender
pub(crate) fn notify(tx: &Option<Sender<ScanEvent>>, event: ScanEvent) {
    if let Some(tx) = tx {
        let _ = tx.send(event);
    }
}

/// Discover files according to configuration
///
/// Returns the canonical scan root and the sorted, absolute paths of every
/// file that survived `.gitignore`, `.projectifyignore` and configured globs.
pub fn discover_files(
    config: &ProjectifyConfig,
    tx: &Option<Sender<ScanEvent>>,
) -> Result<(PathBuf, Vec<PathBuf>)> {
    notify(tx, ScanEvent::StartScanning);

    let root_path = config
        .path
        .canonicalize()
        .with_context(|| format!("Failed to find directory: {:?}", config.path))?;

    let mut ignore_patterns = config.ignore_patterns.clone();
    let local = load_ignore_file(&root_path);
    debug!(count = local.len(), "loaded .projectifyignore patterns");
    ignore_patterns.extend(local);

    let files = walk_directory(&root_path, &ignore_patterns)?;
    notify(tx, ScanEvent::FilesFound(files.len()));

    Ok((root_path, files))
}
