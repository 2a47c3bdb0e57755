//! Dependency graph engine.
//!
//! Builds a file-level import graph from raw import strings, then ranks every
//! file by blast radius: the percentage of all known files that depend on it
//! directly or transitively. A graph is immutable once built.

mod builder;
mod metrics;
pub mod resolver;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::ProjectAnalysis;
use crate::error::GraphResult;

pub use metrics::blast_radius;
pub use resolver::{ImportResolver, normalize_path};

/// Per-file graph record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Canonical path of the file.
    #[serde(serialize_with = "crate::core::serialize_path")]
    pub id: PathBuf,
    /// Distinct known files this file imports.
    pub in_degree: usize,
    /// Distinct known files importing this file.
    pub out_degree: usize,
    /// Size of the transitive-dependent set.
    pub affected_files: usize,
    /// `affected_files` as a percentage of all files, in `[0, 100)`.
    pub blast_radius: f64,
}

impl GraphNode {
    fn new(id: PathBuf) -> Self {
        Self {
            id,
            in_degree: 0,
            out_degree: 0,
            affected_files: 0,
            blast_radius: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: HashMap<PathBuf, GraphNode>,
    edges: HashMap<PathBuf, HashSet<PathBuf>>,
    reverse_edges: HashMap<PathBuf, HashSet<PathBuf>>,
}

impl DependencyGraph {
    /// Builds the graph from collected file facts.
    pub fn build(analysis: &ProjectAnalysis) -> GraphResult<Self> {
        Self::from_imports(
            analysis
                .files
                .iter()
                .map(|(path, facts)| (path.clone(), facts.imports.as_slice())),
        )
    }

    /// Builds the graph from `(path, raw imports)` pairs. The paths form the
    /// complete set of known files; imports resolving elsewhere are dropped.
    ///
    /// Fails with [`GraphError::InvalidState`](crate::error::GraphError) when
    /// no files are given.
    pub fn from_imports<I, P, L, S>(files: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PathBuf>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files: Vec<(PathBuf, Vec<S>)> = files
            .into_iter()
            .map(|(path, imports)| (path.into(), imports.into_iter().collect()))
            .collect();

        let mut topology = builder::build_topology(&files);
        metrics::compute(&mut topology)?;

        let graph = Self {
            nodes: topology.nodes,
            edges: topology.edges,
            reverse_edges: topology.reverse_edges,
        };
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph ready"
        );
        Ok(graph)
    }

    /// All nodes keyed by path.
    pub fn nodes(&self) -> &HashMap<PathBuf, GraphNode> {
        &self.nodes
    }

    /// Forward adjacency: path -> paths it imports.
    pub fn edges(&self) -> &HashMap<PathBuf, HashSet<PathBuf>> {
        &self.edges
    }

    pub fn node(&self, path: &Path) -> Option<&GraphNode> {
        self.nodes.get(path)
    }

    /// Files importing `path` directly.
    pub fn imported_by(&self, path: &Path) -> Option<&HashSet<PathBuf>> {
        self.reverse_edges.get(path)
    }

    /// Every file depending on `path`, directly or not, sorted by path.
    pub fn dependents(&self, path: &Path) -> Vec<PathBuf> {
        let mut dependents: Vec<PathBuf> =
            metrics::transitive_dependents(&self.reverse_edges, path)
                .into_iter()
                .collect();
        dependents.sort();
        dependents
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }

    /// The `limit` nodes with the highest blast radius, highest first.
    /// Ties are broken by ascending path so the order is reproducible.
    pub fn top_blast_radius(&self, limit: usize) -> Vec<&GraphNode> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }

    /// All nodes in ranking order.
    pub fn ranked(&self) -> Vec<&GraphNode> {
        let mut ranked: Vec<&GraphNode> = self.nodes.values().collect();
        ranked.sort_by(|a, b| {
            b.blast_radius
                .total_cmp(&a.blast_radius)
                .then_with(|| a.id.as_os_str().cmp(b.id.as_os_str()))
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> DependencyGraph {
        DependencyGraph::from_imports(vec![
            ("/p/a.ts", vec!["./b"]),
            ("/p/b.ts", vec!["./c"]),
            ("/p/c.ts", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_query_surface() {
        let graph = chain();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let b = Path::new("/p/b.ts");
        assert!(graph.edges()[Path::new("/p/a.ts")].contains(b));
        assert!(graph.imported_by(b).unwrap().contains(Path::new("/p/a.ts")));
        assert_eq!(
            graph.dependents(Path::new("/p/c.ts")),
            vec![PathBuf::from("/p/a.ts"), PathBuf::from("/p/b.ts")]
        );
        assert_eq!(graph.node(b).map(|n| n.affected_files), Some(1));
    }

    #[test]
    fn test_top_blast_radius_limits() {
        let graph = chain();
        assert!(graph.top_blast_radius(0).is_empty());

        let ids: Vec<&Path> = graph
            .top_blast_radius(100)
            .iter()
            .map(|n| n.id.as_path())
            .collect();
        assert_eq!(
            ids,
            vec![
                Path::new("/p/c.ts"),
                Path::new("/p/b.ts"),
                Path::new("/p/a.ts")
            ]
        );
    }

    #[test]
    fn test_ties_break_by_path() {
        let graph = DependencyGraph::from_imports(vec![
            ("/p/z.ts", Vec::<&str>::new()),
            ("/p/m.ts", vec![]),
            ("/p/a.ts", vec![]),
        ])
        .unwrap();

        let ids: Vec<&Path> = graph
            .top_blast_radius(2)
            .iter()
            .map(|n| n.id.as_path())
            .collect();
        assert_eq!(ids, vec![Path::new("/p/a.ts"), Path::new("/p/m.ts")]);
    }

    #[test]
    fn test_node_serializes_camel_case() {
        let graph = chain();
        let json = serde_json::to_value(graph.node(Path::new("/p/c.ts")).unwrap()).unwrap();
        assert_eq!(json["affectedFiles"], 2);
        assert_eq!(json["outDegree"], 1);
        assert_eq!(json["inDegree"], 0);
    }
}
