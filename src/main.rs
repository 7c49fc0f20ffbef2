//! nbtoc: print or insert a table of contents for a Jupyter notebook.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use nbtoc::{config, emit, error::TocResult, generate_toc, notebook::Notebook};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nbtoc")]
#[command(about = "Table of contents generation for Jupyter notebooks", long_about = None)]
#[command(version)]
struct Args {
    /// File path to the notebook
    #[arg(long, short = 'f', value_name = "PATH")]
    file: PathBuf,

    /// Insert the TOC into the notebook instead of printing it to stdout
    #[arg(long, short = 'i')]
    insert: bool,

    /// Load settings from this file instead of nbtoc.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `-v` forces debug; otherwise `RUST_LOG` applies, falling back to warn.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn run(args: &Args) -> TocResult<()> {
    let cfg = config::Config::load(args.config.as_deref());
    let mut notebook = Notebook::read_from_file(&args.file)?;
    let toc = generate_toc(&notebook, &cfg);

    if args.insert {
        emit::insert_toc(
            &mut notebook,
            toc,
            &args.file,
            &cfg.summary_header,
            cfg.json_indent,
        )?;
    } else {
        emit::print_to_stdout(&toc)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
