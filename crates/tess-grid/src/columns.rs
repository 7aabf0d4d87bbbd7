//! Field → column projection.

use tess_config::GridConfig;
use tess_core::field::FieldDescriptor;
use tess_core::view_model::{ColumnDescriptor, ColumnTheme};

/// Project fields into grid columns.
///
/// `None` entries are skipped; the remaining fields keep their order.
#[must_use]
pub fn project_columns(
    fields: &[Option<FieldDescriptor>],
    view_id: Option<&str>,
    has_menu: bool,
    config: &GridConfig,
) -> Vec<ColumnDescriptor> {
    fields
        .iter()
        .flatten()
        .map(|field| project_column(field, view_id, has_menu, config))
        .collect()
}

#[must_use]
pub fn project_column(
    field: &FieldDescriptor,
    view_id: Option<&str>,
    has_menu: bool,
    config: &GridConfig,
) -> ColumnDescriptor {
    ColumnDescriptor {
        id: field.id.clone(),
        name: field.name.clone(),
        width: field
            .column_width(view_id)
            .unwrap_or(config.default_column_width),
        description: field.description.clone(),
        custom_theme: field.has_error.then(|| ColumnTheme {
            column_header_bg: config.error_header_color.clone(),
        }),
        has_menu,
        icon: field.field_type().icon(field.is_lookup),
    }
}
