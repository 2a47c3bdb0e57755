//! Transitive-dependent counts and blast radius.
//!
//! One breadth-first walk over the reverse adjacency per node. Walks only read
//! the shared adjacency, so they run in parallel on the rayon pool and the
//! results are written back once every walk has finished.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::builder::Topology;
use crate::error::{GraphError, GraphResult};

/// Every file that reaches `start` through "is imported by" edges.
/// `start` itself is never part of the result, even inside a cycle.
pub(super) fn transitive_dependents(
    reverse_edges: &HashMap<PathBuf, HashSet<PathBuf>>,
    start: &Path,
) -> HashSet<PathBuf> {
    let mut dependents = HashSet::new();
    let mut visited: HashSet<&Path> = HashSet::from([start]);
    let mut queue: VecDeque<&Path> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let Some(importers) = reverse_edges.get(current) else {
            continue;
        };
        for importer in importers {
            if visited.insert(importer.as_path()) {
                dependents.insert(importer.clone());
                queue.push_back(importer.as_path());
            }
        }
    }

    dependents
}

/// Share of `total` files affected, as a percentage.
pub fn blast_radius(affected_files: usize, total: usize) -> f64 {
    affected_files as f64 / total as f64 * 100.0
}

/// Fills `affected_files` and `blast_radius` on every node.
pub(super) fn compute(topology: &mut Topology) -> GraphResult<()> {
    let total = topology.nodes.len();
    if total == 0 {
        return Err(GraphError::InvalidState(
            "blast radius requires at least one file",
        ));
    }

    let reverse_edges = &topology.reverse_edges;
    let affected: Vec<(PathBuf, usize)> = topology
        .nodes
        .par_iter()
        .map(|(id, _)| (id.clone(), transitive_dependents(reverse_edges, id).len()))
        .collect();

    for (id, count) in affected {
        if let Some(node) = topology.nodes.get_mut(&id) {
            node.affected_files = count;
            node.blast_radius = blast_radius(count, total);
        }
    }
    Ok(())
}
