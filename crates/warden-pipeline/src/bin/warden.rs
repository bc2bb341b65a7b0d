//! `warden`: run queries through the decision pipeline from the terminal.
//!
//! ```bash
//! # One-shot
//! warden --query "What is artificial intelligence?"
//!
//! # Interactive: one query per line, empty line exits
//! warden --config warden.toml
//!
//! # Re-rank with a different embedding model
//! warden --model my-embedding-model --query "define pattern recognition"
//! ```
//!
//! Each response is printed to stdout as one JSON object. Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use warden_core::WardenConfig;
use warden_observability::init_tracing;
use warden_pipeline::Pipeline;
use warden_retrieval::engine::DEGRADATION_COMPONENT;

/// Deterministic, auditable decision pipeline for LLM queries.
#[derive(Parser, Debug)]
#[command(name = "warden", version, about, long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Run a single query and exit.
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Embedding model override for re-ranking.
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Print decision counters to stderr on exit.
    #[arg(long, default_value_t = false)]
    metrics: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WardenConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => WardenConfig::default(),
    };
    init_tracing(&config.observability);

    let pipeline = Pipeline::new(&config).context("starting pipeline")?;
    let model = args.model.as_deref();

    match &args.query {
        Some(query) => run_one(&pipeline, query, model)?,
        None => repl(&pipeline, model)?,
    }

    pipeline.flush().context("flushing audit sink")?;
    if args.metrics {
        eprintln!("{}", serde_json::to_string_pretty(&pipeline.metrics().to_json())?);
        let degradations = pipeline.degradations();
        eprintln!(
            "re-rank degradations: {} active, {} in the last hour, {} total",
            degradations.active_degradations().len(),
            degradations.count_recent(DEGRADATION_COMPONENT, 3600),
            degradations.total(),
        );
    }
    Ok(())
}

fn run_one(pipeline: &Pipeline, query: &str, model: Option<&str>) -> Result<()> {
    let response = pipeline.handle(query, model)?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn repl(pipeline: &Pipeline, model: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("query> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let query = line.trim();
        if query.is_empty() {
            break;
        }
        run_one(pipeline, query, model)?;
    }
    Ok(())
}
