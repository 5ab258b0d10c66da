//! ts2cs: convert TypeScript interfaces and classes to C# classes.

mod cli;
mod config;
mod error;

use std::fs;
use std::io::{self, Write};

use camino::Utf8Path;
use clap::Parser;
use cli::Args;
use config::Ts2csConfig;
use csharp_emitter::convert;
use error::CliError;
use miette::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(&args)?;
    Ok(())
}

/// Sends log output to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => Ts2csConfig::load(path)?,
        None => Ts2csConfig::discover(Utf8Path::new(".")),
    };
    let options = config::resolve_options(args, &config);
    debug!(?options, "resolved options");

    let name = args.input_name();
    let source = read_input(args)?;

    let output = if args.emit_declarations {
        let declarations = decl_parser::parse_all(&source, options.exported_only)
            .map_err(|e| CliError::parse(e, name, source.clone()))?;
        serde_json::to_string_pretty(&declarations).map_err(CliError::Json)?
    } else {
        convert(&source, &options).map_err(|e| CliError::parse(e, name, source.clone()))?
    };

    write_output(args, &output)?;
    info!(input = name, bytes = output.len(), "conversion finished");
    Ok(())
}

fn read_input(args: &Args) -> Result<String, CliError> {
    let result = match args.input_path() {
        Some(path) => fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    };
    result.map_err(|source| CliError::Read {
        name: args.input_name().to_string(),
        source,
    })
}

/// Writes the output, ending non-empty output with a newline.
fn write_output(args: &Args, output: &str) -> Result<(), CliError> {
    let mut text = output.to_string();
    if !text.is_empty() {
        text.push('\n');
    }

    match &args.output {
        Some(path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}
