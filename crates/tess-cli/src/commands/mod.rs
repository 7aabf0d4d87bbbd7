use std::path::Path;

use anyhow::Context;
use tess_config::TesseraConfig;
use tess_core::snapshot::TableSnapshot;
use tess_grid::GridInputs;

use crate::cli::root_commands::TableArgs;
use crate::cli::{Commands, GlobalFlags};

pub mod cells;
pub mod columns;
pub mod grid;
pub mod schema;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &TesseraConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Columns(args) => columns::handle(args, config, flags),
        Commands::Cells(args) => cells::handle(args, config, flags),
        Commands::Grid(args) => grid::handle(args, config, flags),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}

/// Read and validate a table snapshot file.
pub fn load_snapshot(path: &Path) -> anyhow::Result<TableSnapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table snapshot {}", path.display()))?;
    let snapshot = TableSnapshot::from_json(&json)
        .with_context(|| format!("invalid table snapshot {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        fields = snapshot.fields.len(),
        records = snapshot.records.len(),
        "loaded table snapshot"
    );
    Ok(snapshot)
}

/// Projection inputs for a snapshot. `--view` wins over the snapshot's view,
/// and `readonly` removes edit permission.
pub fn grid_inputs(
    snapshot: &TableSnapshot,
    args: &TableArgs,
    readonly: bool,
    no_menu: bool,
) -> GridInputs {
    let mut inputs = GridInputs::new(snapshot.fields.clone(), snapshot.permission);
    if let Some(view_id) = args.view.as_ref().or(snapshot.view_id.as_ref()) {
        inputs = inputs.with_view(view_id.clone());
    }
    if readonly {
        inputs.editable = false;
    }
    if no_menu {
        inputs = inputs.with_menu(false);
    }
    inputs
}
