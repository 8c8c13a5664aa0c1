// openmeta/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "openmeta")]
#[command(about = "Synchronization-gated exchange services for integration connectors", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🩺 Loads and validates a connector configuration
    Check {
        /// Directory holding openmeta.yaml or connector.yaml
        #[arg(long, default_value = ".", conflicts_with = "config")]
        config_dir: PathBuf,

        /// Explicit configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// 📋 Lists exchange operations and whether the policy permits them
    Operations {
        /// Only this family: connection | glossary | lineage | stewardship | infrastructure | governance
        #[arg(long, short)]
        family: Option<String>,

        /// Permitted synchronization to evaluate (overrides the configured one)
        #[arg(long, short)]
        policy: Option<String>,

        /// Read the policy from the connector configuration in this directory
        #[arg(long)]
        config_dir: Option<PathBuf>,

        /// Output format: table | json
        #[arg(long, default_value = "table")]
        format: String,
    },
}
