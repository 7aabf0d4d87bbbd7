//! Column and cell view models handed to the presentation layer.
//!
//! These carry everything needed for read-only rendering. Interactive
//! behavior is described, not embedded: an [`EditorCapability`] names the
//! editor to open and what it is bound to, and a [`ClickAction`] names what a
//! click on the cell content should do.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ChartType, EditorPosition, NumberDisplayType, RatingIcon, TextShowAsType};
use crate::field::NumberFormatting;
use crate::value::CellValue;

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Header theme override for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnTheme {
    pub column_header_bg: String,
}

/// Grid column derived from a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub id: String,
    pub name: String,
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<ColumnTheme>,
    pub has_menu: bool,
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Interaction descriptors
// ---------------------------------------------------------------------------

/// Editor the presentation layer should mount for a cell, with its bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EditorCapability {
    /// Date picker bound to a field and record.
    #[serde(rename_all = "camelCase")]
    Date { field_id: String, record_id: String },

    /// Numeric input. Changes commit through `Record::update_cell`.
    #[serde(rename_all = "camelCase")]
    Number {
        field_id: String,
        record_id: String,
        value: Option<f64>,
        formatting: NumberFormatting,
    },

    /// Linked-record picker.
    #[serde(rename_all = "camelCase")]
    Link { field_id: String, record_id: String },

    /// Attachment manager.
    #[serde(rename_all = "camelCase")]
    Attachment { field_id: String, record_id: String },
}

impl EditorCapability {
    #[must_use]
    pub fn field_id(&self) -> &str {
        match self {
            Self::Date { field_id, .. }
            | Self::Number { field_id, .. }
            | Self::Link { field_id, .. }
            | Self::Attachment { field_id, .. } => field_id,
        }
    }

    #[must_use]
    pub fn record_id(&self) -> &str {
        match self {
            Self::Date { record_id, .. }
            | Self::Number { record_id, .. }
            | Self::Link { record_id, .. }
            | Self::Attachment { record_id, .. } => record_id,
        }
    }
}

/// What clicking a piece of cell content does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClickAction {
    /// Open the clicked text as a url, email address or phone number.
    #[serde(rename_all = "camelCase")]
    OpenReference { show_as: TextShowAsType },
}

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// A select option as rendered, with resolved colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectChoiceView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Number show-as with its color token resolved to hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumberShowAsView {
    #[serde(rename = "type")]
    pub kind: NumberDisplayType,
    pub color: String,
    pub show_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

/// Thumbnail entry of an image cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageItem {
    pub id: String,
    pub url: String,
}

/// Presentation model of one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CellViewModel {
    Loading,

    #[serde(rename_all = "camelCase")]
    Text {
        data: String,
        display_data: String,
        readonly: bool,
        #[serde(default)]
        is_wrap: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        editor_position: Option<EditorPosition>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        editor: Option<EditorCapability>,
    },

    #[serde(rename_all = "camelCase")]
    Link {
        data: Vec<CellValue>,
        display_data: String,
        readonly: bool,
        on_click: ClickAction,
    },

    #[serde(rename_all = "camelCase")]
    Boolean {
        data: bool,
        readonly: bool,
        is_multiple: bool,
    },

    #[serde(rename_all = "camelCase")]
    Number {
        data: Option<f64>,
        display_data: String,
        readonly: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_as: Option<NumberShowAsView>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        editor: Option<EditorCapability>,
    },

    #[serde(rename_all = "camelCase")]
    Select {
        data: Vec<String>,
        choices: Vec<SelectChoiceView>,
        readonly: bool,
        is_multiple: bool,
        editor_position: EditorPosition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        editor: Option<EditorCapability>,
    },

    #[serde(rename_all = "camelCase")]
    Chart {
        data: Vec<f64>,
        display_data: Vec<String>,
        readonly: bool,
        chart_type: ChartType,
        color: String,
    },

    #[serde(rename_all = "camelCase")]
    Image {
        data: Vec<ImageItem>,
        display_data: Vec<String>,
        readonly: bool,
        editor: Option<EditorCapability>,
    },

    #[serde(rename_all = "camelCase")]
    Rating {
        data: f64,
        readonly: bool,
        icon: RatingIcon,
        color: String,
        max: u8,
    },
}

/// Discriminant of a [`CellViewModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    Loading,
    Text,
    Link,
    Boolean,
    Number,
    Select,
    Chart,
    Image,
    Rating,
}

impl CellViewModel {
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        match self {
            Self::Loading => CellKind::Loading,
            Self::Text { .. } => CellKind::Text,
            Self::Link { .. } => CellKind::Link,
            Self::Boolean { .. } => CellKind::Boolean,
            Self::Number { .. } => CellKind::Number,
            Self::Select { .. } => CellKind::Select,
            Self::Chart { .. } => CellKind::Chart,
            Self::Image { .. } => CellKind::Image,
            Self::Rating { .. } => CellKind::Rating,
        }
    }

    /// `None` for loading cells, which have no editability.
    #[must_use]
    pub const fn readonly(&self) -> Option<bool> {
        match self {
            Self::Loading => None,
            Self::Text { readonly, .. }
            | Self::Link { readonly, .. }
            | Self::Boolean { readonly, .. }
            | Self::Number { readonly, .. }
            | Self::Select { readonly, .. }
            | Self::Chart { readonly, .. }
            | Self::Image { readonly, .. }
            | Self::Rating { readonly, .. } => Some(*readonly),
        }
    }

    #[must_use]
    pub const fn editor(&self) -> Option<&EditorCapability> {
        match self {
            Self::Text { editor, .. }
            | Self::Number { editor, .. }
            | Self::Select { editor, .. }
            | Self::Image { editor, .. } => editor.as_ref(),
            _ => None,
        }
    }
}
