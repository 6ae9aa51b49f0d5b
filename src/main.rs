//! taginfo CLI entry point

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use taginfo::config::{Cli, Settings};
use taginfo::pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli);

    // Build settings from CLI
    let settings = Settings::from_cli(&cli);

    // Validate inputs
    if !settings.source.exists() {
        eprintln!(
            "Error: source path does not exist: {}\n\n  Tip: Check the path is correct and accessible.\n  Example:\n    taginfo -s ~/Music --json --csv",
            settings.source.display()
        );
        return ExitCode::FAILURE;
    }

    println!(
        "🎵 Scanning: {}  (workers={})",
        settings.source.display(),
        settings.workers
    );
    let start = Instant::now();

    // Run the pipeline
    match pipeline::run(&settings) {
        Ok(_result) => {
            println!("⏱️  Elapsed: {:.2}s", start.elapsed().as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if cli.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}
