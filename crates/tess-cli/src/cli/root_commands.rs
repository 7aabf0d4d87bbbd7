use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Project the table's fields into grid columns.
    Columns(ColumnsArgs),
    /// Project record values into cell view models.
    Cells(CellsArgs),
    /// Columns and cells together.
    Grid(GridArgs),
    /// Print the JSON Schema of an input or output document.
    Schema(SchemaArgs),
}

/// Snapshot selection shared by the projection commands.
#[derive(Clone, Debug, Args)]
pub struct TableArgs {
    /// Table snapshot JSON file
    #[arg(short, long)]
    pub table: PathBuf,

    /// View whose column widths apply (defaults to the snapshot's view)
    #[arg(long)]
    pub view: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Render column headers without a menu
    #[arg(long)]
    pub no_menu: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CellsArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Project as if the table were not editable
    #[arg(long)]
    pub readonly: bool,

    /// Only this record
    #[arg(long)]
    pub record: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Project as if the table were not editable
    #[arg(long)]
    pub readonly: bool,

    /// Render column headers without a menu
    #[arg(long)]
    pub no_menu: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    /// Table snapshot input
    Table,
    /// Column descriptor output
    Column,
    /// Cell view model output
    Cell,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub target: SchemaTarget,
}
