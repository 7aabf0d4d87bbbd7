use tess_config::TesseraConfig;
use tess_core::view_model::ColumnDescriptor;
use tess_grid::GridColumns;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ColumnsArgs;
use crate::commands::{grid_inputs, load_snapshot};
use crate::output::output;

/// Handle `tessera columns`.
pub fn handle(
    args: &ColumnsArgs,
    config: &TesseraConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let columns = build(args, config)?;
    output(&columns, flags.format)
}

pub fn build(args: &ColumnsArgs, config: &TesseraConfig) -> anyhow::Result<Vec<ColumnDescriptor>> {
    let snapshot = load_snapshot(&args.table.table)?;
    let mut grid = GridColumns::new(config);
    let projection = grid.compute(grid_inputs(&snapshot, &args.table, false, args.no_menu));
    Ok(projection.columns.clone())
}
