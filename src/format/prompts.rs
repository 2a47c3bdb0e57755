use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

use super::{Formatter, ReportContext};
use crate::prompt;

/// Writes ready-to-send LLM prompts as markdown sections.
pub struct PromptsFormatter;

impl Formatter for PromptsFormatter {
    fn file_name(&self) -> &'static str {
        "projectify-prompts.md"
    }

    fn write_report(&self, output: &mut dyn Write, context: &ReportContext<'_>) -> Result<()> {
        let top_risks = context.graph.top_blast_radius(context.top);
        let files: Vec<PathBuf> = context.analysis.files.keys().cloned().collect();
        let prompts = prompt::build_all(
            context.root,
            context.analysis.file_count,
            &top_risks,
            &files,
            context.git,
        );

        writeln!(output, "# Projectify Prompts")?;
        for p in prompts {
            writeln!(output)?;
            writeln!(output, "## {}", p.title)?;
            writeln!(output)?;
            writeln!(output, "### System")?;
            writeln!(output)?;
            writeln!(output, "{}", p.system)?;
            writeln!(output)?;
            writeln!(output, "### User")?;
            writeln!(output)?;
            writeln!(output, "```text")?;
            writeln!(output, "{}", p.user)?;
            writeln!(output, "```")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ReportKind;
    use crate::format::test_support::{render, sample};

    #[test]
    fn test_prompts_output() {
        let (root, analysis, graph) = sample();
        let text = render(ReportKind::Prompts, &root, &analysis, &graph);

        assert!(text.contains("## Blast radius"));
        assert!(text.contains(
            "File: /proj/src/util.ts is imported by 2 other files (50.00% of the codebase)."
        ));
        assert!(text.contains("## Project summary"));
        assert!(!text.contains("## Git history"));
    }
}
