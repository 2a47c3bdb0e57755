//! Prompt construction for language-model insight generation.
//!
//! Only the text is produced here; sending it to a model is left to whoever
//! consumes the prompts file.

use std::path::{Path, PathBuf};

use crate::git::GitAnalysis;
use crate::graph::GraphNode;

/// Files listed in the project summary prompt.
const FILE_SAMPLE: usize = 50;
/// Authors listed in the git history prompt.
const TOP_AUTHORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub system: &'static str,
    pub user: String,
}

pub fn blast_radius(node: &GraphNode) -> Prompt {
    Prompt {
        title: "Blast radius",
        system: "You are an expert software architect. Explain why this file has a high blast radius and the risks involved.",
        user: format!(
            "File: {} is imported by {} other files ({:.2}% of the codebase).",
            node.id.display(),
            node.affected_files,
            node.blast_radius
        ),
    }
}

pub fn project_summary(file_count: usize, top_risks: &[&GraphNode], files: &[PathBuf]) -> Prompt {
    let mut lines = vec![
        "Project Statistics:".to_string(),
        format!("- Total Files: {}", file_count),
        String::new(),
        "Key Components (High Dependency/Risk):".to_string(),
    ];
    lines.extend(top_risks.iter().map(|node| {
        format!(
            "- {} (Impacts {} files)",
            node.id.display(),
            node.affected_files
        )
    }));
    lines.push(String::new());
    lines.push("File List Sample:".to_string());
    lines.extend(
        files
            .iter()
            .take(FILE_SAMPLE)
            .map(|file| file.display().to_string()),
    );
    lines.push(String::new());
    lines.push("Please provide:".to_string());
    lines.push("1. An estimated architecture type.".to_string());
    lines.push("2. Key risks.".to_string());
    lines.push("3. Recommendations.".to_string());
    let user = lines.join("\n");

    Prompt {
        title: "Project summary",
        system: "You are a technical lead. Provide a high-level summary of this project based on the file statistics and high-risk components.",
        user,
    }
}

pub fn git_history(stats: &GitAnalysis) -> Prompt {
    let mut lines = vec![
        "Git History Statistics:".to_string(),
        format!("- Total Commits: {}", stats.total_commits),
        format!("- Active Authors: {}", stats.author_stats.len()),
        String::new(),
        "Top Authors:".to_string(),
    ];
    lines.extend(
        stats
            .author_stats
            .iter()
            .take(TOP_AUTHORS)
            .map(|author| format!("- {}: {} commits", author.name, author.commits)),
    );
    lines.push(String::new());
    lines.push("Recent Activity:".to_string());
    lines.extend(stats.recent_activity.iter().cloned());
    let user = lines.join("\n");

    Prompt {
        title: "Git history",
        system: "You are a technical lead analyzing project evolution. Provide insights based on commit history.",
        user,
    }
}

/// Every prompt that applies to this analysis: the riskiest file, the
/// project overview and, when history is available, the git summary.
pub fn build_all(
    root: &Path,
    file_count: usize,
    top_risks: &[&GraphNode],
    files: &[PathBuf],
    git: Option<&GitAnalysis>,
) -> Vec<Prompt> {
    let mut prompts = Vec::new();
    if let Some(riskiest) = top_risks.first() {
        prompts.push(blast_radius(riskiest));
    }

    let relative: Vec<PathBuf> = files
        .iter()
        .map(|p| p.strip_prefix(root).unwrap_or(p).to_path_buf())
        .collect();
    prompts.push(project_summary(file_count, top_risks, &relative));

    if let Some(stats) = git {
        prompts.push(git_history(stats));
    }
    prompts
}
