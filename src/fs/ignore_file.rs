//! `.projectifyignore` support - project-specific ignore patterns

use std::fs;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".projectifyignore";

/// Load ignore patterns from `.projectifyignore` in the project root.
/// Returns an empty vec if the file doesn't exist.
pub fn load_ignore_file(root: &Path) -> Vec<String> {
    let ignore_file = root.join(IGNORE_FILE_NAME);
    if !ignore_file.exists() {
        return Vec::new();
    }

    fs::read_to_string(ignore_file)
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_ignore_file() {
        let temp = TempDir::new().unwrap();
        let ignore_path = temp.path().join(IGNORE_FILE_NAME);

        {
            let mut file = fs::File::create(&ignore_path).unwrap();
            writeln!(file, "# Comment line").unwrap();
            writeln!(file, "*.spec.ts").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "fixtures").unwrap();
            writeln!(file, "  # Indented comment  ").unwrap();
            writeln!(file, "  legacy/**  ").unwrap();
        }

        let patterns = load_ignore_file(temp.path());
        assert_eq!(patterns, vec!["*.spec.ts", "fixtures", "legacy/**"]);
    }

    #[test]
    fn test_missing_ignore_file() {
        let temp = TempDir::new().unwrap();
        assert!(load_ignore_file(temp.path()).is_empty());
    }
}
