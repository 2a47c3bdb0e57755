use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "projectify.toml";

/// Report artifacts an analysis can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    /// analysis-report.json
    Json,
    /// analysis-report.html (interactive graph)
    Html,
    /// ai-context.md
    Context,
    /// projectify-prompts.md
    Prompts,
}

/// Main configuration for projectify
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectifyConfig {
    /// Path to the project to analyze
    pub path: PathBuf,
    /// Directory where report files are written
    pub output_dir: PathBuf,
    /// List of glob patterns to ignore (e.g. "*.log")
    pub ignore_patterns: Vec<String>,
    /// Number of files printed in the blast radius ranking
    pub top: usize,
    /// Number of files highlighted as risks in the HTML graph
    pub html_top: usize,
    /// Write the JSON report
    pub json: bool,
    /// Write the HTML graph
    pub html: bool,
    /// Write the AI context markdown
    pub context: bool,
    /// Write LLM prompts for the top risks
    pub prompts: bool,
    /// Collect commit history statistics
    pub git: bool,
    /// Maximum number of commits walked for history statistics
    pub git_commit_limit: usize,
    /// Debug-level logging
    pub verbose: bool,
}

impl ProjectifyConfig {
    /// Validates the configuration, ensuring the path exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.path.exists() {
            anyhow::bail!("Path does not exist: {:?}", self.path);
        }
        Ok(())
    }

    /// Attempts to load configuration from `projectify.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string(CONFIG_FILE_NAME)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }

    /// Reports enabled by this configuration, in write order.
    pub fn enabled_reports(&self) -> Vec<ReportKind> {
        [
            (self.json, ReportKind::Json),
            (self.html, ReportKind::Html),
            (self.context, ReportKind::Context),
            (self.prompts, ReportKind::Prompts),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect()
    }
}

impl Default for ProjectifyConfig {
    fn default() -> Self {
        let defaults = vec![
            // Dependency / build output
            "node_modules",
            "dist",
            "build",
            "__pycache__",
            // Version control and secrets
            ".git",
            ".env*",
            // Binary
            "*.png",
            "*.jpg",
            "*.jpeg",
            "*.gif",
            "*.ico",
            "*.pdf",
            "*.exe",
            "*.bin",
            "*.pyc",
        ];

        Self {
            path: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            ignore_patterns: defaults.into_iter().map(String::from).collect(),
            top: 5,
            html_top: 10,
            json: true,
            html: true,
            context: false,
            prompts: false,
            git: true,
            git_commit_limit: 50,
            verbose: false,
        }
    }
}
