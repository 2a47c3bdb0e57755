use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

mod ignore_file;

pub use ignore_file::load_ignore_file;

/// Walks `path` honoring `.gitignore` and hidden-file rules, skipping anything
/// matching one of `ignore_patterns`. Returns files only, sorted.
pub fn walk_directory(path: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(path);

    // Override globs whitelist by default; a leading "!" turns them into ignores.
    let mut override_builder = ignore::overrides::OverrideBuilder::new(path);
    for pattern in ignore_patterns {
        override_builder.add(&format!("!{}", pattern))?;
    }
    let overrides = override_builder.build()?;

    builder.overrides(overrides);
    builder.standard_filters(true);

    let walker = builder.build();
    let mut files = Vec::new();

    for result in walker {
        match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => warn!("Error walking directory: {}", err),
        }
    }

    files.sort();
    Ok(files)
}
