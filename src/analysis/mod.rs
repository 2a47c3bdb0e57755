//! Fact collection: per-file imports, declarations and manifest dependencies.
//!
//! JavaScript and TypeScript go through tree-sitter; Python is scanned line by
//! line with regexes. Everything else only gets a language tag and size.

pub mod javascript;
pub mod manifest;
pub mod python;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::scanner::notify;
use crate::core::{FileFacts, Language, ProjectAnalysis, ScanEvent};

/// Collects facts for a single file's content.
pub fn analyze_source(path: &Path, content: &str) -> FileFacts {
    let language = Language::from_path(path);
    let mut facts = match language {
        Language::JavaScript | Language::TypeScript => javascript::parse(content, path),
        Language::Python => python::parse(content),
        _ => FileFacts::default(),
    };
    facts.language = language;
    facts.size = content.len();
    facts
}

struct Collected {
    path: PathBuf,
    facts: FileFacts,
    dependencies: Option<BTreeMap<String, String>>,
}

/// Reads and analyzes `paths` in parallel.
///
/// Unreadable or non-UTF-8 files are logged and left out of the result; they
/// still count towards `file_count`.
pub fn analyze_files(paths: &[PathBuf], tx: &Option<Sender<ScanEvent>>) -> ProjectAnalysis {
    let collected: Vec<Collected> = paths
        .par_iter()
        .filter_map(|path| {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), "skipping unreadable file: {}", e);
                    return None;
                }
            };

            let facts = analyze_source(path, &content);
            let dependencies = manifest::parse_manifest(path, &content);
            debug!(
                path = %path.display(),
                imports = facts.imports.len(),
                "collected facts"
            );
            notify(tx, ScanEvent::FileAnalyzed(path.clone()));

            Some(Collected {
                path: path.clone(),
                facts,
                dependencies,
            })
        })
        .collect();

    let mut analysis = ProjectAnalysis {
        file_count: paths.len(),
        ..ProjectAnalysis::default()
    };

    // par_iter preserves input order, so manifests merge deterministically.
    for item in collected {
        if let Some(deps) = item.dependencies {
            analysis.dependencies.extend(deps);
        }
        analysis.files.insert(item.path, item.facts);
    }

    analysis
}

/// Drops repeated entries, keeping the first occurrence.
pub(crate) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_analyze_source_tags_language() {
        let facts = analyze_source(Path::new("notes.md"), "# title");
        assert_eq!(facts.language, Language::Markdown);
        assert_eq!(facts.size, 7);
        assert!(facts.imports.is_empty());

        let facts = analyze_source(Path::new("main.py"), "import app.core\n");
        assert_eq!(facts.language, Language::Python);
        assert_eq!(facts.imports, vec!["app.core"]);
    }

    #[test]
    fn test_analyze_files_skips_unreadable() -> anyhow::Result<()> {
        let temp = TempDir::new()?;
        let good = temp.path().join("a.py");
        let binary = temp.path().join("blob.txt");
        let missing = temp.path().join("gone.py");
        fs::write(&good, "import os\n")?;
        fs::write(&binary, [0xffu8, 0xfe, 0x00])?;
        fs::write(
            temp.path().join("requirements.txt"),
            "flask==2.0\n",
        )?;

        let paths = vec![
            good.clone(),
            binary,
            missing,
            temp.path().join("requirements.txt"),
        ];
        let analysis = analyze_files(&paths, &None);

        assert_eq!(analysis.file_count, 4);
        assert_eq!(analysis.files.len(), 2);
        assert!(analysis.files.contains_key(&good));
        assert_eq!(analysis.dependencies["flask"], "2.0");
        Ok(())
    }

    #[test]
    fn test_dedup_in_order() {
        let items = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(dedup_in_order(items), vec!["b", "a"]);
    }
}
