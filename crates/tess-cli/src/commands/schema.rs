use schemars::schema_for;
use tess_core::snapshot::TableSnapshot;
use tess_core::view_model::{CellViewModel, ColumnDescriptor};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `tessera schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(args.target)?, flags.format)
}

pub fn build(target: SchemaTarget) -> anyhow::Result<serde_json::Value> {
    let schema = match target {
        SchemaTarget::Table => schema_for!(TableSnapshot),
        SchemaTarget::Column => schema_for!(ColumnDescriptor),
        SchemaTarget::Cell => schema_for!(CellViewModel),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_are_objects_with_titles() {
        for (target, title) in [
            (SchemaTarget::Table, "TableSnapshot"),
            (SchemaTarget::Column, "ColumnDescriptor"),
            (SchemaTarget::Cell, "CellViewModel"),
        ] {
            let schema = build(target).expect("schema should serialize");
            assert_eq!(schema["title"], title);
        }
    }
}
