//! Graph construction: one node per known file, deduplicated import edges.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use tracing::debug;

use super::GraphNode;
use super::resolver::ImportResolver;

/// Adjacency and degree counters before metrics are computed.
#[derive(Debug, Default)]
pub(super) struct Topology {
    pub nodes: HashMap<PathBuf, GraphNode>,
    /// importer -> imported
    pub edges: HashMap<PathBuf, HashSet<PathBuf>>,
    /// imported -> importers
    pub reverse_edges: HashMap<PathBuf, HashSet<PathBuf>>,
}

impl Topology {
    fn with_files<'a>(files: impl Iterator<Item = &'a PathBuf>) -> Self {
        let mut topology = Self::default();
        for file in files {
            topology
                .nodes
                .insert(file.clone(), GraphNode::new(file.clone()));
            topology.edges.insert(file.clone(), HashSet::new());
            topology.reverse_edges.insert(file.clone(), HashSet::new());
        }
        topology
    }

    /// Inserts `from -> to` unless already present. Degrees move with the
    /// adjacency sets so they can never drift apart.
    fn add_edge(&mut self, from: &PathBuf, to: &PathBuf) -> bool {
        let (Some(targets), Some(sources)) =
            (self.edges.get_mut(from), self.reverse_edges.get_mut(to))
        else {
            return false;
        };

        if !targets.insert(to.clone()) {
            return false;
        }
        sources.insert(from.clone());

        if let Some(node) = self.nodes.get_mut(from) {
            node.in_degree += 1;
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.out_degree += 1;
        }
        true
    }
}

/// Builds the adjacency for `files`, resolving every raw import against the
/// set of paths in `files` itself.
pub(super) fn build_topology<S: AsRef<str>>(files: &[(PathBuf, Vec<S>)]) -> Topology {
    let known: HashSet<PathBuf> = files.iter().map(|(path, _)| path.clone()).collect();
    let resolver = ImportResolver::new(&known);
    let mut topology = Topology::with_files(known.iter());

    let mut unresolved = 0usize;
    for (file, imports) in files {
        for import in imports {
            match resolver.resolve(file, import.as_ref()) {
                Some(target) => {
                    topology.add_edge(file, &target);
                }
                None => unresolved += 1,
            }
        }
    }

    debug!(
        nodes = topology.nodes.len(),
        unresolved, "dependency topology built"
    );
    topology
}
