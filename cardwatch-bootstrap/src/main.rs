use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cardwatch_bootstrap::logging::{setup_logging, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "cardwatch")]
#[command(about = "Credit card fraud dashboard server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Log output format: compact or json
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,

    /// Also write daily rolling log files into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging(args.log_format, args.log_dir.as_deref());

    if let Some(config) = args.config {
        std::env::set_var("CARDWATCH_CONFIG", config);
    }

    cardwatch_bootstrap::run_standalone().await
}
