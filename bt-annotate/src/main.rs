//! # bt-annotate - Main Entry Point
//!
//! Reads a whole backtrace, then prints it back with every recognised
//! frame annotated by the resolver.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::io::{self, Read, Write};

use bt_annotate::annotator::Annotator;
use bt_annotate::cli::Args;
use bt_annotate::config::RunConfig;
use bt_annotate::domain::AnnotateError;
use bt_annotate::symbolization::Addr2LineTool;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_NOT_FOUND: i32 = 127;

const PROMPT: &str =
    "Paste backtrace here, and then input EOF(Ctrl-D or Ctrl-Z) to get annotated backtrace.";
const SEPARATOR: &str = "--------------------------------------";

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AnnotateError>() {
        Some(AnnotateError::ToolInvocation { source, .. })
            if source.kind() == io::ErrorKind::NotFound =>
        {
            EXIT_NOT_FOUND
        }
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = RunConfig::from(&args);

    info!(
        "resolver: {}, binary: {}, pattern: {}",
        config.annotator.resolver_path.display(),
        config.annotator.target_binary.display(),
        config.pattern
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !config.quiet && config.input.is_none() {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;
    }

    let input = read_input(&config)?;

    if !config.quiet {
        writeln!(out, "{SEPARATOR}")?;
    }

    let resolver = Addr2LineTool::new(config.annotator.clone());
    let mut annotator = Annotator::new(resolver, config.pattern)
        .with_policy(config.policy)
        .with_join(config.join);

    annotator.run(&input, &mut out)?;
    Ok(())
}

/// Read the entire backtrace before any processing starts
fn read_input(config: &RunConfig) -> Result<String> {
    let bytes = if let Some(ref path) = config.input {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).context("Failed to read stdin")?;
        buf
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
