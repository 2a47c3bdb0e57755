//! Self-contained HTML page rendering the dependency graph with vis-network

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use super::{Formatter, ReportContext, relative};

const RISK_COLOR: &str = "#ef4444";
const SHARED_COLOR: &str = "#eab308";
const LEAF_COLOR: &str = "#3b82f6";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Projectify Analysis</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>
  body { margin: 0; display: flex; height: 100vh; background: #09090b; color: #fafafa; font-family: Inter, sans-serif; }
  aside { width: 20rem; border-right: 1px solid #27272a; padding: 1.5rem; overflow-y: auto; }
  aside h1 { font-size: 1.25rem; margin: 0 0 .25rem; }
  .muted { color: #a1a1aa; font-size: .75rem; word-break: break-all; }
  .stats { display: grid; grid-template-columns: 1fr 1fr; gap: .75rem; margin: 1.5rem 0; }
  .card { background: #18181b; border: 1px solid #27272a; border-radius: .75rem; padding: .75rem; }
  .card b { display: block; font-size: 1.5rem; }
  ol { padding-left: 1.25rem; font-size: .875rem; }
  #graph { flex: 1; }
  #detail dt { color: #a1a1aa; font-size: .75rem; margin-top: .5rem; }
  #detail dd { margin: 0; font-family: monospace; word-break: break-all; }
</style>
</head>
<body>
<aside>
  <h1>Projectify</h1>
  <div class="muted">{{ROOT}}</div>
  <div class="stats">
    <div class="card"><span class="muted">Files</span><b>{{FILE_COUNT}}</b></div>
    <div class="card"><span class="muted">Imports</span><b>{{EDGE_COUNT}}</b></div>
  </div>
  <h2>Top Blast Radius</h2>
  <ol>{{TOP_LIST}}</ol>
  <dl id="detail" hidden>
    <dt>File</dt><dd id="detail-path"></dd>
    <dt>Blast radius</dt><dd id="detail-blast"></dd>
    <dt>Affected files</dt><dd id="detail-affected"></dd>
    <dt>Imports</dt><dd id="detail-in"></dd>
    <dt>Imported by</dt><dd id="detail-out"></dd>
  </dl>
</aside>
<div id="graph"></div>
<script>
  const nodes = new vis.DataSet({{NODES}});
  const edges = new vis.DataSet({{EDGES}});
  const network = new vis.Network(document.getElementById('graph'), { nodes, edges }, {
    nodes: { shape: 'dot', font: { color: '#fafafa', size: 12 } },
    edges: { arrows: 'to', color: { color: '#71717a', opacity: 0.3 } },
    physics: { stabilization: { iterations: 200 } }
  });
  network.on('click', (params) => {
    if (params.nodes.length === 0) return;
    const node = nodes.get(params.nodes[0]);
    document.getElementById('detail').hidden = false;
    document.getElementById('detail-path').innerText = node.data.fullPath;
    document.getElementById('detail-blast').innerText = node.data.blastRadius + '%';
    document.getElementById('detail-affected').innerText = node.data.affectedFiles;
    document.getElementById('detail-in').innerText = node.data.inDegree;
    document.getElementById('detail-out').innerText = node.data.outDegree;
  });
</script>
</body>
</html>
"##;

pub struct HtmlFormatter;

/// Escapes text for element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl Formatter for HtmlFormatter {
    fn file_name(&self) -> &'static str {
        "analysis-report.html"
    }

    fn write_report(&self, output: &mut dyn Write, context: &ReportContext<'_>) -> Result<()> {
        let graph = context.graph;
        let top_risks = graph.top_blast_radius(context.html_top);
        let risk_ids: HashSet<&Path> = top_risks.iter().map(|n| n.id.as_path()).collect();

        let nodes: Vec<serde_json::Value> = graph
            .ranked()
            .into_iter()
            .map(|node| {
                let (color, size) = if risk_ids.contains(node.id.as_path()) {
                    (RISK_COLOR, 30.0 + node.blast_radius / 2.0)
                } else if node.affected_files > 0 {
                    (SHARED_COLOR, 25.0)
                } else {
                    (LEAF_COLOR, 20.0)
                };
                let name = label(&node.id);
                json!({
                    "id": node.id.to_string_lossy(),
                    "label": name,
                    "title": name,
                    "value": size,
                    "color": color,
                    "data": {
                        "fullPath": relative(&node.id, context.root).to_string_lossy(),
                        "blastRadius": format!("{:.2}", node.blast_radius),
                        "affectedFiles": node.affected_files,
                        "inDegree": node.in_degree,
                        "outDegree": node.out_degree,
                    }
                })
            })
            .collect();

        let mut edge_pairs: Vec<(&Path, &Path)> = graph
            .edges()
            .iter()
            .flat_map(|(from, targets)| {
                targets
                    .iter()
                    .map(move |to| (from.as_path(), to.as_path()))
            })
            .collect();
        edge_pairs.sort();
        let edges: Vec<serde_json::Value> = edge_pairs
            .into_iter()
            .map(|(from, to)| {
                json!({
                    "from": from.to_string_lossy(),
                    "to": to.to_string_lossy(),
                })
            })
            .collect();

        let top_list: String = top_risks
            .iter()
            .map(|n| {
                format!(
                    "<li>{} <span class=\"muted\">{:.0}%</span></li>",
                    escape_html(&label(&n.id)),
                    n.blast_radius
                )
            })
            .collect();

        let page = TEMPLATE
            .replace("{{ROOT}}", &escape_html(&context.root.display().to_string()))
            .replace("{{FILE_COUNT}}", &context.analysis.file_count.to_string())
            .replace("{{EDGE_COUNT}}", &graph.edge_count().to_string())
            .replace("{{TOP_LIST}}", &top_list)
            .replace("{{NODES}}", &script_json(&nodes)?)
            .replace("{{EDGES}}", &script_json(&edges)?);

        output.write_all(page.as_bytes())?;
        Ok(())
    }
}
