//! Third-party dependency declarations from package manifests.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    peer_dependencies: BTreeMap<String, String>,
}

/// Returns the dependencies declared in `path` if it is a known manifest
/// (`package.json` or `requirements.txt`), `None` for any other file.
pub fn parse_manifest(path: &Path, content: &str) -> Option<BTreeMap<String, String>> {
    match path.file_name().and_then(|s| s.to_str())? {
        "package.json" => Some(parse_package_json(path, content)),
        "requirements.txt" => Some(parse_requirements(content)),
        _ => None,
    }
}

/// Later sections win on name clashes: peer over dev over regular.
fn parse_package_json(path: &Path, content: &str) -> BTreeMap<String, String> {
    let pkg: PackageJson = match serde_json::from_str(content) {
        Ok(pkg) => pkg,
        Err(e) => {
            warn!(path = %path.display(), "failed to parse package.json: {}", e);
            return BTreeMap::new();
        }
    };

    let mut deps = pkg.dependencies;
    deps.extend(pkg.dev_dependencies);
    deps.extend(pkg.peer_dependencies);
    deps
}

fn parse_requirements(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| {
            let mut parts = line.splitn(2, "==");
            let name = parts.next()?.trim();
            if name.is_empty() {
                return None;
            }
            let version = parts
                .next()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or("latest");
            Some((name.to_string(), version.to_string()))
        })
        .collect()
}
