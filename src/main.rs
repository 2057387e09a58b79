//! Command-line front end: validates a JSON request body the way the backend
//! routes do and prints the validation result.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use serde_json::Value;

use devconnect::{
    consts::{DEFAULT_LOG_FILTER, EXIT_FAILURE, EXIT_INVALID, EXIT_VALID, STDIN_PATH},
    EntityKind,
};

#[derive(Debug, Parser)]
#[command(name = "devconnect", about = "Validate a DevConnect request body")]
struct Cli {
    /// Kind of body: register, login, post, comment, profile, experience or education
    kind: EntityKind,

    /// JSON file to read, or `-` for standard input
    #[arg(default_value = STDIN_PATH)]
    input: PathBuf,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    // A .env file is optional
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    let outcome = run(&cli);

    match &outcome {
        Ok((rendered, _)) => println!("{rendered}"),
        Err(e) => error!("{:#}", e),
    }
    ExitCode::from(exit_code(&outcome))
}

fn run(cli: &Cli) -> Result<(String, u8)> {
    let raw = read_input(&cli.input)?;
    info!("Validating {} input from {}", cli.kind, cli.input.display());
    process(cli.kind, &raw, cli.compact)
        .with_context(|| format!("Failed to process {}", cli.input.display()))
}

/// Validates a raw JSON body and returns the rendered result with the exit
/// code it maps to.
fn process(kind: EntityKind, raw: &str, compact: bool) -> Result<(String, u8)> {
    let payload: Value = serde_json::from_str(raw).context("Input is not valid JSON")?;
    let result = kind.validate(&payload);

    let rendered = if compact {
        serde_json::to_string(&result)
    } else {
        serde_json::to_string_pretty(&result)
    }
    .context("Failed to serialize the validation result")?;

    let code = if result.is_valid() {
        EXIT_VALID
    } else {
        EXIT_INVALID
    };
    Ok((rendered, code))
}

fn exit_code(outcome: &Result<(String, u8)>) -> u8 {
    match outcome {
        Ok((_, code)) => *code,
        Err(_) => EXIT_FAILURE,
    }
}

fn reads_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn read_input(path: &Path) -> Result<String> {
    if reads_stdin(path) {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read standard input")?;
        return Ok(raw);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
