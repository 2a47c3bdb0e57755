use crate::analysis::analyze_files;
use crate::config::ProjectifyConfig;
use crate::core::scanner::notify;
use crate::core::{ProjectAnalysis, ScanEvent, discover_files};
use crate::format::console::write_top_risks;
use crate::format::{ReportContext, create_formatter};
use crate::git::{GitAnalysis, analyze_history};
use crate::graph::DependencyGraph;
use anyhow::{Context, Result, anyhow};
use crossbeam_channel::Sender;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Everything one analysis run produced.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub root: PathBuf,
    pub analysis: ProjectAnalysis,
    pub graph: DependencyGraph,
    pub git: Option<GitAnalysis>,
    /// Report files written, in write order
    pub reports: Vec<PathBuf>,
}

/// Main entry point for projectify in CLI mode.
///
/// Runs the analysis on a background thread and consumes its events on the
/// calling thread, logging progress. Returns the outcome once the worker is
/// done, or the error that stopped it.
pub fn run(config: ProjectifyConfig) -> Result<AnalysisOutcome> {
    let (tx, rx) = crossbeam_channel::unbounded();

    let worker = std::thread::spawn(move || run_analysis(config, Some(tx)));

    for event in rx {
        match event {
            ScanEvent::StartScanning => info!("scanning files..."),
            ScanEvent::FilesFound(n) => info!("found {} files", n),
            ScanEvent::FileAnalyzed(p) => debug!("analyzed {}", p.display()),
            ScanEvent::GraphBuilt { nodes, edges } => {
                info!(nodes, edges, "dependency graph built")
            }
            ScanEvent::ReportWritten(p) => info!("report saved to {}", p.display()),
            ScanEvent::Complete(msg) => info!("{}", msg),
            ScanEvent::Error(e) => error!("{}", e),
        }
    }

    worker
        .join()
        .map_err(|_| anyhow!("analysis thread panicked"))?
}

/// Runs scan, fact collection, graph construction and reporting synchronously.
///
/// The ranking is printed to stdout; enabled reports go to `output_dir`.
pub fn run_analysis(
    config: ProjectifyConfig,
    tx: Option<Sender<ScanEvent>>,
) -> Result<AnalysisOutcome> {
    let result = analyze(&config, &tx);
    if let Err(ref e) = result {
        notify(&tx, ScanEvent::Error(format!("{:#}", e)));
    }
    result
}

fn analyze(config: &ProjectifyConfig, tx: &Option<Sender<ScanEvent>>) -> Result<AnalysisOutcome> {
    config.validate()?;

    // 1. Scan
    let (root, paths) = discover_files(config, tx)?;
    if paths.is_empty() {
        anyhow::bail!("No files found under {}", root.display());
    }

    // 2. Collect facts
    let analysis = analyze_files(&paths, tx);

    // 3. Build graph
    let graph = DependencyGraph::build(&analysis)
        .with_context(|| format!("Failed to build dependency graph for {}", root.display()))?;
    notify(
        tx,
        ScanEvent::GraphBuilt {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        },
    );

    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_top_risks(&mut out, &graph.top_blast_radius(config.top))?;
        out.flush()?;
    }

    // 4. History
    let git = if config.git {
        analyze_history(&root, config.git_commit_limit)
    } else {
        None
    };

    // 5. Reports
    let reports = write_reports(config, &root, &analysis, &graph, git.as_ref(), tx)?;

    notify(
        tx,
        ScanEvent::Complete(format!(
            "Analyzed {} files, {} reports written",
            analysis.file_count,
            reports.len()
        )),
    );

    Ok(AnalysisOutcome {
        root,
        analysis,
        graph,
        git,
        reports,
    })
}

fn write_reports(
    config: &ProjectifyConfig,
    root: &std::path::Path,
    analysis: &ProjectAnalysis,
    graph: &DependencyGraph,
    git: Option<&GitAnalysis>,
    tx: &Option<Sender<ScanEvent>>,
) -> Result<Vec<PathBuf>> {
    let kinds = config.enabled_reports();
    if kinds.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory {:?}", config.output_dir)
    })?;

    let context = ReportContext {
        root,
        analysis,
        graph,
        git,
        top: config.top,
        html_top: config.html_top,
    };

    let mut written = Vec::new();
    for kind in kinds {
        let formatter = create_formatter(kind);
        let path = config.output_dir.join(formatter.file_name());
        let file = File::create(&path)
            .with_context(|| format!("Failed to create report {:?}", path))?;
        let mut writer = BufWriter::new(file);
        formatter
            .write_report(&mut writer, &context)
            .with_context(|| format!("Failed to write report {:?}", path))?;
        writer.flush()?;

        notify(tx, ScanEvent::ReportWritten(path.clone()));
        written.push(path);
    }
    Ok(written)
}
