mod analyzer;
mod config;
mod ingest;
mod models;
mod report;
mod samples;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::analyzer::TransactionAnalyzer;
use crate::config::{AppConfig, USAGE};
use crate::ingest::AsyncLoader;
use crate::storage::SharedAnalyzer;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("{USAGE}");
        eprintln!("Without an input file the built-in sample dataset is analyzed.");
        eprintln!("Available log levels: off, error, warn, info, debug, trace (default: error)");
        return Ok(());
    }

    let config = AppConfig::from_args();

    setup_logging(config.log_level);

    let shared = match &config.input {
        Some(path) => {
            let shared = SharedAnalyzer::default();
            let timer = Instant::now();

            AsyncLoader::new(shared.clone()).run(path).await?;

            info!("Loaded dataset in: {:?}", timer.elapsed());
            shared
        }
        None => {
            info!("No input file given, analyzing the sample dataset");
            SharedAnalyzer::new(TransactionAnalyzer::new(samples::sample_transactions()))
        }
    };

    info!("Analyzing {} transactions", shared.len().await);

    let analyzer = shared.read().await;
    let mut output = BufWriter::new(stdout().lock());

    report::write_report(&analyzer, &mut output)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
