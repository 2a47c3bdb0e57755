use projectify::{DependencyGraph, GraphError};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

fn graph(files: &[(&str, &[&str])]) -> DependencyGraph {
    DependencyGraph::from_imports(
        files
            .iter()
            .map(|(path, imports)| (*path, imports.iter().copied())),
    )
    .unwrap()
}

#[test]
fn test_chain_scenario() {
    let g = graph(&[
        ("/p/a.ts", &["./b"]),
        ("/p/b.ts", &["./c"]),
        ("/p/c.ts", &[]),
    ]);

    let edges: HashSet<(PathBuf, PathBuf)> = g
        .edges()
        .iter()
        .flat_map(|(from, tos)| tos.iter().map(move |to| (from.clone(), to.clone())))
        .collect();
    assert_eq!(
        edges,
        HashSet::from([
            (PathBuf::from("/p/a.ts"), PathBuf::from("/p/b.ts")),
            (PathBuf::from("/p/b.ts"), PathBuf::from("/p/c.ts")),
        ])
    );

    let c = g.node(Path::new("/p/c.ts")).unwrap();
    assert_eq!(c.affected_files, 2);
    assert!((c.blast_radius - 200.0 / 3.0).abs() < 1e-9);

    let a = g.node(Path::new("/p/a.ts")).unwrap();
    assert_eq!(a.affected_files, 0);
    assert_eq!(a.blast_radius, 0.0);
}

#[test]
fn test_unresolved_import_produces_no_edge() {
    let g = graph(&[("/p/a.ts", &["left-pad", "./missing"])]);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.node(Path::new("/p/a.ts")).unwrap().in_degree, 0);
}

#[test]
fn test_mutual_imports() {
    let g = graph(&[("/p/a.ts", &["./b"]), ("/p/b.ts", &["./a"]), ("/p/c.ts", &[])]);

    assert_eq!(g.dependents(Path::new("/p/a.ts")), vec![PathBuf::from("/p/b.ts")]);
    assert_eq!(g.dependents(Path::new("/p/b.ts")), vec![PathBuf::from("/p/a.ts")]);
    for node in g.nodes().values() {
        assert!(node.blast_radius < 100.0);
    }
}

#[test]
fn test_degrees_match_distinct_resolutions() {
    let g = graph(&[
        ("/p/src/app.ts", &["./lib", "./lib/index", "../shared/util", "react"]),
        ("/p/src/lib/index.ts", &["../../shared/util.js"]),
        ("/p/shared/util.js", &[]),
        ("/p/tools/gen.py", &["helpers", "helpers"]),
        ("/p/tools/helpers.py", &[]),
    ]);

    let expect_in = HashMap::from([
        ("/p/src/app.ts", 2),
        ("/p/src/lib/index.ts", 1),
        ("/p/shared/util.js", 0),
        ("/p/tools/gen.py", 1),
        ("/p/tools/helpers.py", 0),
    ]);
    let expect_out = HashMap::from([
        ("/p/src/app.ts", 0),
        ("/p/src/lib/index.ts", 1),
        ("/p/shared/util.js", 2),
        ("/p/tools/gen.py", 0),
        ("/p/tools/helpers.py", 1),
    ]);

    for (path, node) in g.nodes() {
        let key = path.to_str().unwrap();
        assert_eq!(node.in_degree, expect_in[key], "in_degree of {key}");
        assert_eq!(node.out_degree, expect_out[key], "out_degree of {key}");
        assert_eq!(node.in_degree, g.edges()[path].len());
        assert_eq!(node.out_degree, g.imported_by(path).unwrap().len());
    }

    let util = g.node(Path::new("/p/shared/util.js")).unwrap();
    assert_eq!(util.affected_files, 2);
    assert!((util.blast_radius - 40.0).abs() < 1e-9);
}

#[test]
fn test_blast_radius_monotonic_in_affected_files() {
    let g = graph(&[
        ("/p/a.ts", &["./b", "./c"]),
        ("/p/b.ts", &["./c"]),
        ("/p/c.ts", &["./d"]),
        ("/p/d.ts", &[]),
        ("/p/e.ts", &[]),
    ]);

    let mut nodes: Vec<_> = g.nodes().values().collect();
    nodes.sort_by_key(|n| n.affected_files);
    for pair in nodes.windows(2) {
        assert!(pair[0].blast_radius <= pair[1].blast_radius);
    }
    assert!(nodes.iter().all(|n| (0.0..100.0).contains(&n.blast_radius)));
}

#[test]
fn test_rebuild_is_identical() {
    let input: &[(&str, &[&str])] = &[
        ("/p/a.ts", &["./b", "./c"]),
        ("/p/b.ts", &["./c"]),
        ("/p/c.ts", &["./a"]),
    ];
    let first = graph(input);
    let mut reversed = input.to_vec();
    reversed.reverse();
    let second = graph(&reversed);

    assert_eq!(first.edges(), second.edges());
    assert_eq!(first.nodes(), second.nodes());
}

#[test]
fn test_top_blast_radius_ordering() {
    let g = graph(&[
        ("/p/a.ts", &["./b"]),
        ("/p/b.ts", &["./c"]),
        ("/p/c.ts", &[]),
    ]);

    assert!(g.top_blast_radius(0).is_empty());
    let top: Vec<&str> = g
        .top_blast_radius(100)
        .iter()
        .map(|n| n.id.to_str().unwrap())
        .collect();
    assert_eq!(top, vec!["/p/c.ts", "/p/b.ts", "/p/a.ts"]);
}

#[test]
fn test_empty_file_set_is_invalid_state() {
    let result = DependencyGraph::from_imports(Vec::<(PathBuf, Vec<String>)>::new());
    assert!(matches!(result, Err(GraphError::InvalidState(_))));
}
