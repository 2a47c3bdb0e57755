//! JSON report: ranking, dependencies, history and per-file facts

use anyhow::Result;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use super::{Formatter, ReportContext};
use crate::core::{FileFacts, serialize_path_keys};
use crate::git::GitAnalysis;
use crate::graph::GraphNode;

pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport<'a> {
    timestamp: String,
    files: usize,
    top_risks: Vec<&'a GraphNode>,
    dependencies: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    git: Option<&'a GitAnalysis>,
    #[serde(serialize_with = "serialize_files")]
    full_analysis: &'a BTreeMap<PathBuf, FileFacts>,
}

fn serialize_files<S: Serializer>(
    files: &&BTreeMap<PathBuf, FileFacts>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serialize_path_keys(*files, serializer)
}

impl Formatter for JsonFormatter {
    fn file_name(&self) -> &'static str {
        "analysis-report.json"
    }

    fn write_report(&self, output: &mut dyn Write, context: &ReportContext<'_>) -> Result<()> {
        let report = AnalysisReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            files: context.analysis.file_count,
            top_risks: context.graph.top_blast_radius(context.top),
            dependencies: &context.analysis.dependencies,
            git: context.git,
            full_analysis: &context.analysis.files,
        };

        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
        Ok(())
    }
}
