//! Core types shared across projectify modules

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

/// Events emitted while an analysis runs
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// Scanning has started
    StartScanning,
    /// Number of files discovered
    FilesFound(usize),
    /// Facts were collected for a file
    FileAnalyzed(PathBuf),
    /// Dependency graph is built
    GraphBuilt { nodes: usize, edges: usize },
    /// A report artifact was written
    ReportWritten(PathBuf),
    /// Analysis complete with message
    Complete(String),
    /// Error occurred
    Error(String),
}

/// Source language tag, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Json,
    Markdown,
    #[default]
    Text,
}

impl Language {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            "py" => Self::Python,
            "json" => Self::Json,
            "md" | "markdown" => Self::Markdown,
            _ => Self::Text,
        }
    }
}

/// Facts collected from a single file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFacts {
    pub language: Language,
    /// Import strings exactly as written, first occurrence order
    pub imports: Vec<String>,
    pub exports: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    /// Size of the file content in bytes
    pub size: usize,
}

/// Result of collecting facts over a scanned project
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    /// Number of files handed to the collector (including unreadable ones)
    pub file_count: usize,
    #[serde(serialize_with = "serialize_path_keys")]
    pub files: BTreeMap<PathBuf, FileFacts>,
    /// Third-party packages declared in package.json / requirements.txt
    pub dependencies: BTreeMap<String, String>,
}

/// Serializes a path as a string, replacing invalid UTF-8 with U+FFFD.
pub(crate) fn serialize_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Path-keyed map with keys written the way [`serialize_path`] writes them.
pub(crate) fn serialize_path_keys<V, S>(
    map: &BTreeMap<PathBuf, V>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_map(map.iter().map(|(path, value)| (path.to_string_lossy(), value)))
}
