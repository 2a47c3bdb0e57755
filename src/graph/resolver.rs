//! Import path resolution against the set of known files.
//!
//! Only two import shapes are understood: relative paths (`./util`, `../lib`)
//! and dotted module names (`pkg.module`). Dotted names are probed relative to
//! the importing file's directory only; there is no project-root or search-path
//! lookup, so absolute Python packages imported from elsewhere stay unresolved.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Suffixes appended to an import when probing for a file, in priority order.
const CANDIDATE_SUFFIXES: [&str; 6] = ["", ".js", ".ts", ".jsx", ".tsx", ".py"];

/// Stem of directory entry-point files (`index.ts`, `index.js`, ...).
const INDEX_STEM: &str = "index";

/// Python package initializer.
const PACKAGE_INIT: &str = "__init__.py";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportStyle {
    Relative,
    Dotted,
    Unsupported,
}

impl ImportStyle {
    fn of(import_path: &str) -> Self {
        if import_path.starts_with('.') {
            Self::Relative
        } else if import_path.starts_with('/') || import_path.starts_with('@') {
            Self::Unsupported
        } else {
            Self::Dotted
        }
    }
}

/// Maps raw import strings to paths already present in the known file set.
///
/// The resolver never touches the file system: a candidate is a hit only if it
/// is a member of the set it was constructed with.
#[derive(Debug, Clone, Copy)]
pub struct ImportResolver<'a> {
    known: &'a HashSet<PathBuf>,
}

impl<'a> ImportResolver<'a> {
    pub fn new(known: &'a HashSet<PathBuf>) -> Self {
        Self { known }
    }

    /// Resolves `import_path` as written in `source_file`.
    ///
    /// Returns `None` for anything that does not land on a known file;
    /// external packages are the common case and are not an error.
    pub fn resolve(&self, source_file: &Path, import_path: &str) -> Option<PathBuf> {
        let dir = source_file.parent()?;

        match ImportStyle::of(import_path) {
            ImportStyle::Relative => self.probe_relative(dir, import_path),
            ImportStyle::Dotted => self.probe_dotted(dir, &import_path.replace('.', "/")),
            ImportStyle::Unsupported => None,
        }
    }

    fn probe_relative(&self, dir: &Path, import_path: &str) -> Option<PathBuf> {
        let target = dir.join(import_path);

        CANDIDATE_SUFFIXES.iter().find_map(|suffix| {
            self.lookup(&dir.join(format!("{import_path}{suffix}")))
                .or_else(|| self.lookup(&target.join(format!("{INDEX_STEM}{suffix}"))))
                .or_else(|| self.lookup(&target.join(PACKAGE_INIT)))
        })
    }

    fn probe_dotted(&self, dir: &Path, module_path: &str) -> Option<PathBuf> {
        let target = dir.join(module_path);

        CANDIDATE_SUFFIXES.iter().find_map(|suffix| {
            self.lookup(&dir.join(format!("{module_path}{suffix}")))
                .or_else(|| self.lookup(&target.join(PACKAGE_INIT)))
        })
    }

    fn lookup(&self, candidate: &Path) -> Option<PathBuf> {
        let normalized = normalize_path(candidate);
        self.known.get(&normalized).cloned()
    }
}

/// Lexically collapses `.` and `..` components without consulting the disk.
/// `..` above the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
