//! Report renderers for a finished analysis

pub mod console;
pub mod context;
pub mod html;
pub mod json;
pub mod prompts;

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::config::ReportKind;
use crate::core::ProjectAnalysis;
use crate::git::GitAnalysis;
use crate::graph::DependencyGraph;

/// Everything a report may draw on.
pub struct ReportContext<'a> {
    /// Canonical scan root, used to shorten displayed paths
    pub root: &'a Path,
    pub analysis: &'a ProjectAnalysis,
    pub graph: &'a DependencyGraph,
    pub git: Option<&'a GitAnalysis>,
    /// Ranking length for summaries
    pub top: usize,
    /// Nodes highlighted as risks in the HTML graph
    pub html_top: usize,
}

pub trait Formatter {
    /// File name the report is written under in the output directory.
    fn file_name(&self) -> &'static str;

    fn write_report(&self, output: &mut dyn Write, context: &ReportContext<'_>) -> Result<()>;
}

pub fn create_formatter(kind: ReportKind) -> Box<dyn Formatter> {
    match kind {
        ReportKind::Json => Box::new(json::JsonFormatter),
        ReportKind::Html => Box::new(html::HtmlFormatter),
        ReportKind::Context => Box::new(context::ContextFormatter),
        ReportKind::Prompts => Box::new(prompts::PromptsFormatter),
    }
}

/// `path` relative to `root`, or unchanged if it lies elsewhere.
pub(crate) fn relative<'p>(path: &'p Path, root: &Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::analysis::analyze_source;
    use std::path::PathBuf;

    /// A small TypeScript project: app -> service -> util, app -> util.
    pub fn sample() -> (PathBuf, ProjectAnalysis, DependencyGraph) {
        let root = PathBuf::from("/proj");
        let sources = [
            ("src/app.ts", "import { run } from './service';\nimport { u } from './util';\n"),
            ("src/service.ts", "import { u } from './util';\nexport function run() {}\n"),
            ("src/util.ts", "export const u = 1;\n"),
            ("scripts/tool.py", "import os\n"),
        ];

        let mut analysis = ProjectAnalysis {
            file_count: sources.len(),
            ..ProjectAnalysis::default()
        };
        for (rel, content) in sources {
            let path = root.join(rel);
            let facts = analyze_source(&path, content);
            analysis.files.insert(path, facts);
        }
        analysis
            .dependencies
            .insert("react".to_string(), "^18.0.0".to_string());

        let graph = DependencyGraph::build(&analysis).unwrap();
        (root, analysis, graph)
    }

    pub fn render(
        kind: ReportKind,
        root: &Path,
        analysis: &ProjectAnalysis,
        graph: &DependencyGraph,
    ) -> String {
        let context = ReportContext {
            root,
            analysis,
            graph,
            git: None,
            top: 5,
            html_top: 1,
        };
        let mut output = Vec::new();
        create_formatter(kind)
            .write_report(&mut output, &context)
            .unwrap();
        String::from_utf8(output).unwrap()
    }
}
