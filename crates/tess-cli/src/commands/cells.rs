use serde::Serialize;
use tess_config::TesseraConfig;
use tess_core::record::Record;
use tess_core::view_model::CellViewModel;
use tess_grid::{GridColumns, GridProjection};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CellsArgs;
use crate::commands::{grid_inputs, load_snapshot};
use crate::output::output;

/// Projected cells of one record, in column order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCells {
    pub record_id: String,
    pub cells: Vec<CellViewModel>,
}

/// Handle `tessera cells`.
pub fn handle(args: &CellsArgs, config: &TesseraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = build(args, config)?;
    output(&rows, flags.format)
}

pub fn build(args: &CellsArgs, config: &TesseraConfig) -> anyhow::Result<Vec<RowCells>> {
    let snapshot = load_snapshot(&args.table.table)?;
    let mut grid = GridColumns::new(config);
    let projection = grid.compute(grid_inputs(&snapshot, &args.table, args.readonly, false));

    let records = snapshot.memory_records();
    let selected: Vec<_> = match args.record.as_deref() {
        Some(id) => {
            let found: Vec<_> = records.iter().filter(|r| r.id() == id).collect();
            if found.is_empty() {
                anyhow::bail!(
                    "record '{id}' not found in {}",
                    args.table.table.display()
                );
            }
            found
        }
        None => records.iter().collect(),
    };

    Ok(selected
        .into_iter()
        .map(|record| project_row(&projection, record))
        .collect())
}

pub fn project_row(projection: &GridProjection, record: &dyn Record) -> RowCells {
    RowCells {
        record_id: record.id().to_string(),
        cells: projection.cells.project_row(record),
    }
}
