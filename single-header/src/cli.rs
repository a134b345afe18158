//! # single-header CLI interface
//!
//! Command-line glue only: argument parsing, config resolution and reporting.
//! Include resolution, deduplication and artifact writing live in
//! [`single_header_core`].
//!
//! - For command-line users: run the `single-header` binary from the library
//!   root, optionally with `--config` and `--output`.
//! - For programmatic/integration use: call [`run`] with a constructed [`Cli`].

use crate::load_config::resolve_config;
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use single_header_core::{generate, FsSourceTree};
use std::path::PathBuf;

/// CLI for single-header: merge a header library into one distributable file.
#[derive(Parser, Debug)]
#[clap(
    name = "single-header",
    version,
    about = "Converts a multi-file header library into a single header file"
)]
pub struct Cli {
    /// Path to the output file (overrides `output` from the config)
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a YAML project file; the default library layout is used without one
    #[clap(short, long, value_name = "FILE", env = "SINGLE_HEADER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// CLI logic entrypoint for integration tests and main()
pub fn run(cli: Cli) -> Result<()> {
    tracing::info!(command = "generate", "Starting single header generation");

    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        tracing::info!(output = %output.display(), "Output path overridden on command line");
        config.output = output;
    }

    match generate(&config, FsSourceTree, Utc::now()) {
        Ok(report) => {
            tracing::info!(command = "generate", ?report, "Generation complete");
            println!(
                "Wrote {} ({} files inlined, {} external includes)",
                config.output.display(),
                report.files.len(),
                report.dependencies.len()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(command = "generate", error = %e, "Generation failed");
            Err(anyhow::Error::new(e).context("Failed to generate single header"))
        }
    }
}
