use anyhow::Result;
use clap::Parser;
use projectify::{ProjectifyConfig, run};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dependency graph and blast radius analysis", long_about = None)]
struct Args {
    /// Project directory to analyze
    path: Option<PathBuf>,

    /// Directory for report files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of files shown in the blast radius ranking
    #[arg(short, long)]
    top: Option<usize>,

    /// Add ignore pattern (glob)
    #[arg(long)]
    ignore: Vec<String>,

    /// Skip the JSON report
    #[arg(long)]
    no_json: bool,

    /// Skip the HTML graph
    #[arg(long)]
    no_html: bool,

    /// Write ai-context.md
    #[arg(long)]
    context: bool,

    /// Write LLM prompts for the top risks
    #[arg(long)]
    prompts: bool,

    /// Skip commit history statistics
    #[arg(long)]
    no_git: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "projectify=debug,warn"
    } else {
        "projectify=info,warn"
    };
    let filter =
        EnvFilter::try_from_env("PROJECTIFY_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = ProjectifyConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(p) = args.path {
        config.path = p;
    }
    if let Some(o) = args.output {
        config.output_dir = o;
    }
    if let Some(t) = args.top {
        config.top = t;
    }
    // CLI ignores ADD to config ignores
    config.ignore_patterns.extend(args.ignore);
    if args.no_json {
        config.json = false;
    }
    if args.no_html {
        config.html = false;
    }
    if args.context {
        config.context = true;
    }
    if args.prompts {
        config.prompts = true;
    }
    if args.no_git {
        config.git = false;
    }
    if args.verbose {
        config.verbose = true;
    }

    init_tracing(config.verbose);

    let outcome = run(config)?;
    for report in &outcome.reports {
        println!("Saved {}", report.display());
    }

    Ok(())
}
