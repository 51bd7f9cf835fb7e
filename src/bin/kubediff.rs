//! kubediff - Compare Kubernetes cluster state with declared configuration
//!
//! Exits with 0 when the cluster matches, 1 when differences were found and 2
//! when something could not be checked.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kubediff::cluster::DEFAULT_KUBECTL;
use kubediff::{Checker, Kubectl, ReportFormat};

const EXIT_DIFFERENCES: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "kubediff",
    version,
    about = "Check that objects running in a cluster match their YAML configuration"
)]
struct Cli {
    /// Files or directories holding declared objects (.yaml/.yml)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Path to the kubeconfig of the cluster to compare against
    #[arg(long)]
    kubeconfig: Option<PathBuf>,

    /// Output a JSON report once all objects have been checked
    #[arg(long)]
    json: bool,

    /// kubectl executable used to fetch live objects
    #[arg(long, default_value = DEFAULT_KUBECTL)]
    kubectl: PathBuf,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "kubediff=debug" } else { "kubediff=warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn main() -> ExitCode {
    // Usage errors exit with 2, the same status as other failures.
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };

    let fetcher = Kubectl::new()
        .with_program(cli.kubectl)
        .with_kubeconfig(cli.kubeconfig);
    let checker = Checker::new(fetcher);

    let stdout = io::stdout();
    let mut reporter = format.reporter(stdout.lock());
    let summary = checker.check_files(&mut reporter, cli.paths.as_slice())?;

    for error in &summary.errors {
        eprintln!("Error: {}", error);
    }

    Ok(if summary.has_differences() {
        ExitCode::from(EXIT_DIFFERENCES)
    } else if summary.has_errors() {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::SUCCESS
    })
}
