mod chat;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use sathi_core::Responder;
use sathi_harness::{Harness, TestSuite, builtin_suite};
use sathi_responder::{CannedResponder, ResponseTable};

#[derive(Debug, Parser)]
#[command(name = "sathi", version, about = "Scheme Sathi chatbot report runner")]
struct Cli {
    /// YAML response table to use instead of the built-in answers
    #[arg(long, global = true, value_name = "PATH")]
    responses: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a test suite and print the report (default)
    Report(ReportArgs),
    /// Answer queries read line by line from standard input
    Chat,
}

#[derive(Debug, Default, Args)]
struct ReportArgs {
    /// YAML test suite to run instead of the built-in one
    #[arg(long, value_name = "PATH")]
    suite: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    #[default]
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "sathi=debug" } else { "sathi=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()))
        .with_writer(std::io::stderr)
        .init();
}

fn load_responder(path: Option<&PathBuf>) -> Result<CannedResponder> {
    match path {
        Some(path) => {
            let table = ResponseTable::from_file(path)
                .with_context(|| format!("loading response table {}", path.display()))?;
            Ok(CannedResponder::new("custom", table))
        }
        None => Ok(CannedResponder::builtin()?),
    }
}

/// Runs the selected suite and writes the report to `out`.
/// Returns `false` when any expectation failed.
fn run_report<W: Write>(responder: &dyn Responder, args: &ReportArgs, out: &mut W) -> Result<bool> {
    let suite = match &args.suite {
        Some(path) => TestSuite::from_file(path)
            .with_context(|| format!("loading test suite {}", path.display()))?,
        None => builtin_suite(),
    };

    let harness = Harness::new(responder);
    let report = match args.format {
        ReportFormat::Text => harness.run_to(&suite, out).context("writing report")?,
        ReportFormat::Json => {
            let report = harness.run(&suite);
            let json = report.to_json().context("serializing report")?;
            writeln!(out, "{}", json).context("writing report")?;
            out.flush().context("writing report")?;
            report
        }
    };

    if report.has_failures() {
        info!(failed = report.summary.failed, "Report has failing cases");
        return Ok(false);
    }
    Ok(true)
}

fn print_report(responder: &dyn Responder, args: &ReportArgs) -> Result<ExitCode> {
    let mut out = std::io::stdout().lock();
    if run_report(responder, args, &mut out)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let responder = load_responder(cli.responses.as_ref())?;
    info!(
        responder = responder.responder_name(),
        entries = responder.table().len(),
        "Responder ready"
    );

    match cli.command {
        None => print_report(&responder, &ReportArgs::default()),
        Some(Command::Report(args)) => print_report(&responder, &args),
        Some(Command::Chat) => {
            let stdin = std::io::stdin();
            let mut out = std::io::stdout().lock();
            chat::run(&responder, stdin.lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
