pub mod analysis;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod fs;
pub mod git;
pub mod graph;
pub mod prompt;
pub mod runner;

// Re-export key items for convenience
pub use config::{ProjectifyConfig, ReportKind};
pub use core::{FileFacts, Language, ProjectAnalysis, ScanEvent};
pub use error::GraphError;
pub use graph::{DependencyGraph, GraphNode};
pub use runner::{AnalysisOutcome, run, run_analysis};
