//! Grid Tags CLI - capability resolution and session summaries.
//!
//! The main entry point for gt-core, handling:
//! - Capability descriptor classification (legacy, W3C, vendor grids)
//! - Canonical browser/platform tag resolution
//! - Session summary rendering in JSON, text, and HTML
//!
//! stdout carries command payloads; all diagnostics go to stderr.

use clap::{Args, Parser, Subcommand};
use gt_caps::{tag_set_for, CapabilityView};
use gt_core::exit_codes::ExitCode;
use gt_core::logging::init_logging;
use gt_model::OutputFormat;
use gt_report::{tag_badges, ReportError, SessionRecord, SessionSummary, SummaryOptions};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Grid Tags - canonical identity tags for WebDriver test sessions
#[derive(Parser)]
#[command(name = "gt-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, env = "GT_FORMAT", default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a capability descriptor into canonical browser/platform tags
    Tags(InputArgs),

    /// Print which capability dialect a descriptor uses (w3c or flat)
    Dialect(InputArgs),

    /// Render a session record (capabilities plus optional Gherkin document)
    Summary(SummaryArgs),
}

/// Arguments shared by commands reading one JSON input
#[derive(Args, Debug)]
struct InputArgs {
    /// Input file path; `-` reads from stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Heading override for text and HTML output
    #[arg(long)]
    title: Option<String>,

    /// Omit the scenario list from text and HTML output
    #[arg(long)]
    no_scenarios: bool,
}

/// Errors surfaced by command runners. Each maps to a stable exit code.
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to serialize output: {source}")]
    Render { source: serde_json::Error },
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Read { .. } => ExitCode::IoError,
            CliError::Parse { .. } => ExitCode::ParseError,
            CliError::Render { .. } => ExitCode::Internal,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap writes help/version to stdout and usage errors to stderr
            let is_usage_error = err.use_stderr();
            let _ = err.print();
            let code = if is_usage_error {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            std::process::exit(code.as_i32());
        }
    };

    init_logging(cli.global.verbose, cli.global.quiet);

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            eprintln!("gt-core: {err}");
            err.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Tags(args) => run_tags(&cli.global, args),
        Commands::Dialect(args) => run_dialect(&cli.global, args),
        Commands::Summary(args) => run_summary(&cli.global, args),
    }
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_tags(global: &GlobalOpts, args: &InputArgs) -> Result<(), CliError> {
    let capability = load_json(&args.input)?;
    let set = tag_set_for(&capability);
    debug!(
        browser = %set.browser.full_name(),
        platform = %set.platform.full_name(),
        "resolved capability tags"
    );

    match global.format {
        OutputFormat::Json => print_json(&set)?,
        OutputFormat::Text => {
            for tag in set.as_array() {
                println!("{:<9} {}", format!("{}:", tag.kind.name()), tag.full_name());
            }
        }
        OutputFormat::Html => println!("{}", tag_badges(&set)),
    }
    Ok(())
}

fn run_dialect(global: &GlobalOpts, args: &InputArgs) -> Result<(), CliError> {
    let capability = load_json(&args.input)?;
    let dialect = CapabilityView::classify(&capability).dialect();

    match global.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "dialect": dialect.name() }))?,
        _ => println!("{}", dialect.name()),
    }
    Ok(())
}

fn run_summary(global: &GlobalOpts, args: &SummaryArgs) -> Result<(), CliError> {
    let path = &args.input.input;
    let bytes = read_input(path)?;
    let record = SessionRecord::from_slice(&bytes).map_err(|err| match err {
        ReportError::Json(source) => CliError::Parse {
            path: display_path(path),
            source,
        },
        ReportError::Io(source) => CliError::Read {
            path: display_path(path),
            source,
        },
    })?;

    let summary = SessionSummary::resolve(&record);
    let options = SummaryOptions {
        title: args.title.clone(),
        include_scenarios: !args.no_scenarios,
    };

    match global.format {
        OutputFormat::Json => print_json(&summary)?,
        // to_text and to_html both end with a newline already
        OutputFormat::Text => print!("{}", summary.to_text(&options)),
        OutputFormat::Html => print!("{}", summary.to_html(&options)),
    }
    Ok(())
}

// ============================================================================
// Input / output helpers
// ============================================================================

fn display_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    let bytes = if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .map(|_| buffer)
    } else {
        std::fs::read(path)
    };
    bytes.map_err(|source| CliError::Read {
        path: display_path(path),
        source,
    })
}

fn load_json(path: &Path) -> Result<Value, CliError> {
    let bytes = read_input(path)?;
    serde_json::from_slice(&bytes).map_err(|source| CliError::Parse {
        path: display_path(path),
        source,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(value).map_err(|source| CliError::Render { source })?;
    println!("{payload}");
    Ok(())
}
