//! Command-line front end: Base58 / Base58Check conversion of hex input.
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "base58check")]
#[command(about = "Base58 and Base58Check encoder/decoder")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Encode hex bytes as Base58
    Encode {
        /// Hex input; one line of stdin when omitted
        input: Option<String>,
    },
    /// Decode Base58 to hex bytes
    Decode { input: Option<String> },
    /// Encode hex bytes as Base58Check (double-SHA256 checksum appended)
    CheckEncode { input: Option<String> },
    /// Decode and verify Base58Check, printing the payload as hex
    CheckDecode { input: Option<String> },
}

impl Command {
    fn input(&self) -> Option<&str> {
        match self {
            Command::Encode { input }
            | Command::Decode { input }
            | Command::CheckEncode { input }
            | Command::CheckDecode { input } => input.as_deref(),
        }
    }
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input from stdin")?;
    Ok(line.trim().to_string())
}

fn parse_hex(input: &str) -> Result<Vec<u8>> {
    hex::decode(input).with_context(|| format!("input is not valid hex: {input:?}"))
}

fn run(command: &Command, input: &str) -> Result<String> {
    let output = match command {
        Command::Encode { .. } => {
            let bytes = parse_hex(input)?;
            tracing::debug!(bytes = bytes.len(), "encoding");
            base58check::encode(&bytes)
        }
        Command::CheckEncode { .. } => {
            let bytes = parse_hex(input)?;
            tracing::debug!(bytes = bytes.len(), "encoding with checksum");
            base58check::check_encode(&bytes)
        }
        Command::Decode { .. } => {
            let bytes = base58check::decode(input).context("base58 decode failed")?;
            tracing::debug!(chars = input.len(), bytes = bytes.len(), "decoded");
            hex::encode(bytes)
        }
        Command::CheckDecode { .. } => {
            let bytes = base58check::check_decode(input).context("base58check decode failed")?;
            tracing::debug!(chars = input.len(), bytes = bytes.len(), "decoded and verified");
            hex::encode(bytes)
        }
    };
    Ok(output)
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Prints the result: output to `out`, a single error line to `err`.
fn report(result: Result<String>, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match result {
        Ok(output) => {
            let _ = writeln!(out, "{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(error = %format!("{error:#}"), "conversion failed");
            let _ = writeln!(err, "error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let result = match args.command.input() {
        Some(input) => Ok(input.to_string()),
        None => read_stdin_line(),
    }
    .and_then(|input| run(&args.command, &input));

    report(result, &mut io::stdout().lock(), &mut io::stderr().lock())
}
