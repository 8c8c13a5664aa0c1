// openmeta/src/commands/operations.rs
//
// USE CASE: Show which exchange operations a policy lets through.

use comfy_table::Table;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use openmeta_core::application::{OperationCatalog, OperationKind};
use openmeta_core::domain::{ExchangeFamily, PermittedSynchronization, SynchronizationGuard};
use openmeta_core::infrastructure::config::load_connector_config;

pub fn execute(
    family: Option<String>,
    policy: Option<String>,
    config_dir: Option<PathBuf>,
    format: String,
) -> anyhow::Result<()> {
    // 1. Resolve the guard
    let guard = resolve_guard(policy.as_deref(), config_dir.as_deref())?;

    debug!(policy = %guard.permitted(), blocked = %guard.blocked(), "Evaluating operation catalog");

    // 2. Select operations
    let operations = match &family {
        Some(f) => OperationCatalog::operations(ExchangeFamily::from_str(f)?),
        None => OperationCatalog::all(),
    };

    // 3. Output
    match format.as_str() {
        "json" => {
            let rows: Vec<_> = operations
                .iter()
                .map(|op| {
                    serde_json::json!({
                        "family": op.family,
                        "service": op.family.service_name(),
                        "name": op.name,
                        "kind": op.kind,
                        "permitted": op.is_permitted(&guard),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Service", "Operation", "Kind", "Status"]);
            for op in &operations {
                let status = if op.is_permitted(&guard) {
                    "✅ permitted"
                } else {
                    "⛔ blocked"
                };
                table.add_row(vec![
                    op.family.service_name().to_string(),
                    op.name.to_string(),
                    op.kind.to_string(),
                    status.to_string(),
                ]);
            }
            println!("{table}");

            let blocked = operations
                .iter()
                .filter(|op| op.kind == OperationKind::Mutating && !op.is_permitted(&guard))
                .count();
            println!(
                "📊 {} operations under policy {} ({} blocked)",
                operations.len(),
                guard.permitted(),
                blocked
            );
        }
    }

    Ok(())
}

/// An explicit policy only replaces the permitted direction; the blocked
/// direction still comes from the configuration when there is one.
fn resolve_guard(
    policy: Option<&str>,
    config_dir: Option<&Path>,
) -> anyhow::Result<SynchronizationGuard> {
    let policy = policy.map(PermittedSynchronization::from_str).transpose()?;

    let guard = match config_dir {
        Some(dir) => {
            let mut connector = load_connector_config(dir)?;
            if let Some(permitted) = policy {
                connector.permitted_synchronization = permitted;
            }
            connector.guard()
        }
        None => policy.map(SynchronizationGuard::new).unwrap_or_default(),
    };
    Ok(guard)
}
