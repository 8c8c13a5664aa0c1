// openmeta/src/commands/check.rs
//
// USE CASE: Load a connector configuration and report what it allows.

use std::path::PathBuf;

use openmeta_core::infrastructure::config::{load_connector_config, load_connector_config_file};
use openmeta_core::infrastructure::error::InfrastructureError;

/// Errors are returned as is so `main` can render their miette diagnostic.
pub fn execute(config_dir: PathBuf, config: Option<PathBuf>) -> Result<(), InfrastructureError> {
    println!("⚙️  Loading connector configuration...");

    let connector = match &config {
        Some(path) => load_connector_config_file(path)?,
        None => load_connector_config(&config_dir)?,
    };
    let guard = connector.guard();

    println!("   Connector: {}", connector.connector_name);
    println!("   User:      {}", connector.user_id);
    match (&connector.external_source.guid, &connector.external_source.name) {
        (None, None) => println!("   Source:    (local cohort)"),
        (guid, name) => println!(
            "   Source:    {} [{}]",
            name.as_deref().unwrap_or("-"),
            guid.as_deref().unwrap_or("-")
        ),
    }
    println!(
        "   Policy:    {} ({})",
        guard.permitted(),
        guard.permitted().description()
    );
    println!("   Refresh:   every {}s", connector.refresh_interval_secs);

    if guard.allows_updates() {
        println!("✅ Mutating exchange calls are permitted.");
    } else {
        println!(
            "⛔ Mutating exchange calls are blocked (policy {}); read-only calls still work.",
            guard.blocked()
        );
    }

    Ok(())
}
