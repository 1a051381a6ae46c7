use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fio_summary::config::SummaryConfig;
use fio_summary::{error, run};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fio-summary", version)]
#[command(about = "Summarize per-job bandwidth and IOPS from an fio run log")]
struct Args {
    /// fio text report to summarize
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // an unusable settings file falls back to defaults
    let loaded = SummaryConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = &loaded {
        warn!("{}; using default settings", error::user_friendly_message(e));
    }

    match run(&args.file) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            ExitCode::FAILURE
        }
    }
}
