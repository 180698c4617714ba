use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyclip_editor::EditorConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod clip;
mod error;
mod replay;

use error::{CliError, ErrorCode};

#[derive(Parser)]
#[command(name = "polyclip", version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted editing session and print the final scene as JSON
    Replay {
        /// Script file (YAML or JSON) with an `events` list
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Editor configuration, overriding the script's inline `config`
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Intersect the `primary` and `clip` polygon sets of an input file
    Clip {
        /// Input file (YAML or JSON)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version also arrive here.
            return if err.use_stderr() {
                ExitCode::from(ErrorCode::Usage as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Replay {
            script,
            config,
            pretty,
        } => {
            let script: replay::Script = load_document(&script)?;
            let config = config
                .as_deref()
                .map(|path| {
                    EditorConfig::from_path(path)
                        .with_context(|| format!("Failed to load config: {}", path.display()))
                })
                .transpose()?;
            let snapshot = replay::run(script, config)?;
            emit(&snapshot, pretty)
        }
        Commands::Clip { input, pretty } => {
            let input: clip::ClipInput = load_document(&input)?;
            let output = clip::run(&input)?;
            emit(&output, pretty)
        }
    }
}

/// Read a YAML or JSON document; `.json` files go through the JSON parser.
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML: {}", path.display()))
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|err| CliError::processing(format!("Failed to encode output: {err}")))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")
        .map_err(|err| CliError::processing(format!("Failed to write output: {err}")))
}
