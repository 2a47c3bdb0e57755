use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::graph::GraphNode;

/// Prints the ranking as `name : NN.N% impact (N files)`, one line per file.
pub fn write_top_risks(output: &mut dyn Write, risks: &[&GraphNode]) -> Result<()> {
    writeln!(output, "Top Blast Radius Risks:")?;
    if risks.is_empty() {
        writeln!(output, "  (no files)")?;
        return Ok(());
    }
    for node in risks {
        writeln!(
            output,
            "{} : {:.1}% impact ({} files)",
            display_name(&node.id),
            node.blast_radius,
            node.affected_files
        )?;
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
