// openmeta/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug openmeta operations ... to see how the policy was resolved.
    // Logs go to stderr so `--format json` output stays parseable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: VALIDATE CONNECTOR CONFIG ---
        Commands::Check { config_dir, config } => {
            if let Err(e) = commands::check::execute(config_dir, config) {
                eprintln!("❌ Configuration check failed");
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }

        // --- USE CASE: OPERATION CATALOG ---
        Commands::Operations {
            family,
            policy,
            config_dir,
            format,
        } => {
            if let Err(e) = commands::operations::execute(family, policy, config_dir, format) {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
