use serde::Serialize;
use tess_config::TesseraConfig;
use tess_core::view_model::ColumnDescriptor;
use tess_grid::GridColumns;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GridArgs;
use crate::commands::cells::{RowCells, project_row};
use crate::commands::{grid_inputs, load_snapshot};
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
    pub editable: bool,
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<RowCells>,
}

/// Handle `tessera grid`.
pub fn handle(args: &GridArgs, config: &TesseraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(args, config)?;
    output(&response, flags.format)
}

pub fn build(args: &GridArgs, config: &TesseraConfig) -> anyhow::Result<GridResponse> {
    let snapshot = load_snapshot(&args.table.table)?;
    let inputs = grid_inputs(&snapshot, &args.table, args.readonly, args.no_menu);
    let view_id = inputs.view_id.clone();
    let editable = inputs.editable;

    let mut grid = GridColumns::new(config);
    let projection = grid.compute(inputs);
    let rows = snapshot
        .memory_records()
        .iter()
        .map(|record| project_row(&projection, record))
        .collect();

    Ok(GridResponse {
        view_id,
        editable,
        columns: projection.columns.clone(),
        rows,
    })
}
