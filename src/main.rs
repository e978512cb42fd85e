use clap::{Args, Parser, Subcommand};
use reqflow::cli::{self, DriverOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reqflow")]
#[command(about = "Flow diagrams (Mermaid + HTML) from a requirements spreadsheet.")]
#[command(long_about = "ReqFlow - requirements spreadsheet to flow diagram

Reads the requirements workbook and writes a Mermaid diagram (.mmd) and a
standalone HTML page that renders it next to the source sheets.

COMMANDS:
  screens  - User flow: 'Screen Name' values pruning the fixed module map (default)
  sheets   - Sheet flow: every row read as 'source, target, target, ...'

INPUT (first existing file wins unless --input is given):
  docs/Requirment Document .xlsx
  Documentss/Requirment Document .xlsx
  docs/Requirement Document.xlsx        (sheets only)

OUTPUT:
  docs/flow-diagrams/user-flow-diagram.{mmd,html}   (screens)
  docs/flow-diagrams/flow-diagram.{mmd,html}        (sheets)

EXAMPLES:
  reqflow                                  # same as 'reqflow screens'
  reqflow sheets --verbose
  reqflow screens -i reqs.xlsx -o site/diagrams

Set RUST_LOG=debug for diagnostic logging.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Options for the default (screens) run
    #[command(flatten)]
    args: DriverArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// User flow over the fixed module topology, filtered by screen names
    Screens(DriverArgs),

    /// One subgraph per sheet, rows read as adjacency lists
    Sheets(DriverArgs),
}

#[derive(Args)]
struct DriverArgs {
    /// Input workbook (skips the default locations)
    #[arg(short, long, env = "REQFLOW_INPUT")]
    input: Option<PathBuf>,

    /// Directory for the generated .mmd and .html files
    #[arg(
        short,
        long,
        default_value = cli::commands::DEFAULT_OUTPUT_DIR,
        env = "REQFLOW_OUTPUT_DIR"
    )]
    output_dir: PathBuf,

    /// Show sheet details while reading
    #[arg(short, long)]
    verbose: bool,
}

impl From<DriverArgs> for DriverOptions {
    fn from(args: DriverArgs) -> Self {
        Self {
            input: args.input,
            output_dir: args.output_dir,
            verbose: args.verbose,
            ..DriverOptions::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Screens(args)) => cli::screens(args.into())?,
        Some(Commands::Sheets(args)) => cli::sheets(args.into())?,
        None => cli::screens(cli.args.into())?,
    }

    Ok(())
}
