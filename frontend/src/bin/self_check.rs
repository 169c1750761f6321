use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use dashcam_landing::cli::{self, Args};

fn main() {
    dotenv().ok();

    // Logs go to stderr so stdout stays a clean report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(report) => std::process::exit(report.exit_code()),
        Err(e) => {
            tracing::error!("self-check could not run: {:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
    }
}
