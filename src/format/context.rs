//! Markdown context file describing every file's imports, importers and impact

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{Formatter, ReportContext, relative};
use crate::core::Language;

/// Blast radius (percent) above which a file is a core utility.
const HIGH_IMPACT: f64 = 5.0;
/// Blast radius (percent) above which a file is a shared utility.
const SHARED: f64 = 2.0;
/// Importers named in the impact warning.
const WARNING_SAMPLE: usize = 5;

pub struct ContextFormatter;

fn describe(language: Option<Language>, blast_radius: f64) -> String {
    let base = match language {
        Some(Language::TypeScript) => "TypeScript Module",
        Some(Language::JavaScript) => "JavaScript Module",
        Some(Language::Python) => "Python Script",
        _ => "Module",
    };
    if blast_radius > HIGH_IMPACT {
        format!("{} (High Impact Core Utility)", base)
    } else if blast_radius > SHARED {
        format!("{} (Shared Utility)", base)
    } else {
        base.to_string()
    }
}

fn code_list(paths: &[PathBuf], root: &Path) -> String {
    paths
        .iter()
        .map(|p| relative(p, root).display().to_string())
        .collect::<Vec<_>>()
        .join("`, `")
}

impl Formatter for ContextFormatter {
    fn file_name(&self) -> &'static str {
        "ai-context.md"
    }

    fn write_report(&self, output: &mut dyn Write, context: &ReportContext<'_>) -> Result<()> {
        let graph = context.graph;
        let ranked = graph.ranked();
        let high_impact = ranked
            .iter()
            .filter(|n| n.blast_radius > HIGH_IMPACT)
            .count();

        writeln!(output, "# Project Codebase Context for AI Assistants")?;
        writeln!(output)?;
        writeln!(
            output,
            "> This file is auto-generated to provide context about the project structure, dependencies, and impact analysis."
        )?;
        writeln!(output)?;
        writeln!(output, "## System Overview")?;
        writeln!(output)?;
        writeln!(output, "- **Total Files**: {}", ranked.len())?;
        writeln!(output, "- **High Impact Files**: {}", high_impact)?;
        writeln!(output)?;
        writeln!(output, "## File Dependency & Impact Analysis")?;
        writeln!(output)?;

        for node in ranked {
            let language = context.analysis.files.get(&node.id).map(|f| f.language);

            let mut imports: Vec<PathBuf> = graph
                .edges()
                .get(&node.id)
                .map(|s| s.iter().cloned().collect())
                .unwrap_or_default();
            imports.sort();
            let mut importers: Vec<PathBuf> = graph
                .imported_by(&node.id)
                .map(|s| s.iter().cloned().collect())
                .unwrap_or_default();
            importers.sort();

            writeln!(output, "### `{}`", relative(&node.id, context.root).display())?;
            writeln!(output, "- **Type**: {}", describe(language, node.blast_radius))?;
            writeln!(
                output,
                "- **Blast Radius**: {:.2}% of codebase affected",
                node.blast_radius
            )?;

            if !imports.is_empty() {
                writeln!(output, "- **Imports**: `{}`", code_list(&imports, context.root))?;
            }

            if importers.is_empty() {
                writeln!(output, "- **Usage**: Leaf node (Entry point or unused).")?;
            } else {
                writeln!(output, "- **Used By**: `{}`", code_list(&importers, context.root))?;
                let sample: Vec<String> = importers
                    .iter()
                    .take(WARNING_SAMPLE)
                    .map(|p| relative(p, context.root).display().to_string())
                    .collect();
                let more = if importers.len() > WARNING_SAMPLE { "..." } else { "" };
                writeln!(
                    output,
                    "  > **Impact Warning**: Modifying this file will affect imports in: {}{}",
                    sample.join(", "),
                    more
                )?;
            }

            writeln!(output)?;
            writeln!(output, "---")?;
            writeln!(output)?;
        }

        Ok(())
    }
}
