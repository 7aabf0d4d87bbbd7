//! Field descriptors: column schema definitions with per-type options.
//!
//! The declared type and its options travel together in [`FieldKind`], which
//! serializes as `{"type": "...", "options": {...}}` flattened into the field
//! object. Types without options carry no payload; unrecognized type tags
//! deserialize to [`FieldKind::Unknown`].

use std::collections::{BTreeMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorFamily, ColorShade};
use crate::enums::{
    CellValueType, FieldType, NumberDisplayType, NumberFormattingType, RatingIcon, Relationship,
    TextShowAsType, TimeFormatting,
};
use crate::errors::CoreError;

/// Largest rating scale a field may declare.
pub const MAX_RATING: u8 = 10;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Show-as override for string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextShowAs {
    #[serde(rename = "type")]
    pub kind: TextShowAsType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_as: Option<TextShowAs>,
}

/// How a date value is turned into display text.
///
/// `date` is a pattern built from `YYYY`, `MM`, `M`, `DD`, `D` tokens and
/// literal separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateFormatting {
    pub date: String,
    pub time: TimeFormatting,
    pub time_zone: String,
}

impl Default for DateFormatting {
    fn default() -> Self {
        Self {
            date: "YYYY-MM-DD".to_string(),
            time: TimeFormatting::None,
            time_zone: "utc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateOptions {
    #[serde(default)]
    pub formatting: DateFormatting,
}

const fn default_precision() -> u8 {
    2
}

/// How a number is turned into display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NumberFormatting {
    #[serde(rename = "type")]
    pub kind: NumberFormattingType,
    #[serde(default = "default_precision")]
    pub precision: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Default for NumberFormatting {
    fn default() -> Self {
        Self {
            kind: NumberFormattingType::Decimal,
            precision: default_precision(),
            symbol: None,
        }
    }
}

/// Show-as override for numeric values: bar, ring or line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumberShowAs {
    #[serde(rename = "type")]
    pub kind: NumberDisplayType,
    pub color: Color,
    #[serde(default)]
    pub show_value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumberOptions {
    #[serde(default)]
    pub formatting: NumberFormatting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_as: Option<NumberShowAs>,
}

/// Formatting of a computed field, shaped by its result type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ComputedFormatting {
    Date(DateFormatting),
    Number(NumberFormatting),
}

/// Show-as override of a computed field, shaped by its result type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ComputedShowAs {
    Text(TextShowAs),
    Number(NumberShowAs),
}

/// Options shared by rollup and formula fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputedOptions {
    #[serde(default)]
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting: Option<ComputedFormatting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_as: Option<ComputedShowAs>,
}

/// One option of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub color: Color,
}

impl Choice {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            id: None,
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectOptions {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkOptions {
    #[serde(default)]
    pub foreign_table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_field_id: Option<String>,
}

const fn default_rating_max() -> u8 {
    5
}

const fn default_rating_color() -> Color {
    Color::new(ColorFamily::Yellow, ColorShade::Bright)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RatingOptions {
    #[serde(default)]
    pub icon: RatingIcon,
    #[serde(default = "default_rating_color")]
    pub color: Color,
    #[serde(default = "default_rating_max")]
    pub max: u8,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            icon: RatingIcon::default(),
            color: default_rating_color(),
            max: default_rating_max(),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// Declared field type together with the options that type understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    SingleLineText {
        #[serde(default)]
        options: TextOptions,
    },
    LongText,
    Date {
        #[serde(default)]
        options: DateOptions,
    },
    Number {
        #[serde(default)]
        options: NumberOptions,
    },
    Rollup {
        #[serde(default)]
        options: ComputedOptions,
    },
    Formula {
        #[serde(default)]
        options: ComputedOptions,
    },
    SingleSelect {
        #[serde(default)]
        options: SelectOptions,
    },
    MultipleSelect {
        #[serde(default)]
        options: SelectOptions,
    },
    Link {
        #[serde(default)]
        options: LinkOptions,
    },
    Attachment,
    Checkbox,
    Rating {
        #[serde(default)]
        options: RatingOptions,
    },
    User,
    AutoNumber,
    CreatedTime,
    LastModifiedTime,
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::SingleLineText { .. } => FieldType::SingleLineText,
            Self::LongText => FieldType::LongText,
            Self::Date { .. } => FieldType::Date,
            Self::Number { .. } => FieldType::Number,
            Self::Rollup { .. } => FieldType::Rollup,
            Self::Formula { .. } => FieldType::Formula,
            Self::SingleSelect { .. } => FieldType::SingleSelect,
            Self::MultipleSelect { .. } => FieldType::MultipleSelect,
            Self::Link { .. } => FieldType::Link,
            Self::Attachment => FieldType::Attachment,
            Self::Checkbox => FieldType::Checkbox,
            Self::Rating { .. } => FieldType::Rating,
            Self::User => FieldType::User,
            Self::AutoNumber => FieldType::AutoNumber,
            Self::CreatedTime => FieldType::CreatedTime,
            Self::LastModifiedTime => FieldType::LastModifiedTime,
            Self::Unknown => FieldType::Unknown,
        }
    }

    /// Value classification a field of this kind has unless told otherwise.
    #[must_use]
    pub const fn default_cell_value_type(&self) -> CellValueType {
        match self {
            Self::Date { .. } | Self::CreatedTime | Self::LastModifiedTime => {
                CellValueType::DateTime
            }
            Self::Number { .. }
            | Self::Rollup { .. }
            | Self::Formula { .. }
            | Self::Rating { .. }
            | Self::AutoNumber => CellValueType::Number,
            Self::Checkbox => CellValueType::Boolean,
            Self::SingleLineText { .. }
            | Self::LongText
            | Self::SingleSelect { .. }
            | Self::MultipleSelect { .. }
            | Self::Link { .. }
            | Self::Attachment
            | Self::User
            | Self::Unknown => CellValueType::String,
        }
    }
}

// ---------------------------------------------------------------------------
// FieldDescriptor
// ---------------------------------------------------------------------------

/// Per-view layout of a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// A column-schema definition as seen by the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub cell_value_type: CellValueType,
    #[serde(default)]
    pub is_computed: bool,
    #[serde(default)]
    pub is_lookup: bool,
    #[serde(default)]
    pub is_multiple_cell_value: bool,
    /// Layout metadata keyed by view id.
    #[serde(default)]
    pub column_meta: BTreeMap<String, ColumnMeta>,
    #[serde(default)]
    pub has_error: bool,
}

impl FieldDescriptor {
    /// Plain, editable, single-valued field of the given kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        let cell_value_type = kind.default_cell_value_type();
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            kind,
            cell_value_type,
            is_computed: false,
            is_lookup: false,
            is_multiple_cell_value: false,
            column_meta: BTreeMap::new(),
            has_error: false,
        }
    }

    #[must_use]
    pub fn with_cell_value_type(mut self, cell_value_type: CellValueType) -> Self {
        self.cell_value_type = cell_value_type;
        self
    }

    #[must_use]
    pub fn computed(mut self) -> Self {
        self.is_computed = true;
        self
    }

    #[must_use]
    pub fn lookup(mut self) -> Self {
        self.is_lookup = true;
        self.is_computed = true;
        self
    }

    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.is_multiple_cell_value = true;
        self
    }

    #[must_use]
    pub fn with_error(mut self) -> Self {
        self.has_error = true;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, view_id: impl Into<String>, width: u32) -> Self {
        self.column_meta.insert(
            view_id.into(),
            ColumnMeta {
                width: Some(width),
            },
        );
        self
    }

    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Stored column width for a view. Zero counts as unset.
    #[must_use]
    pub fn column_width(&self, view_id: Option<&str>) -> Option<u32> {
        view_id
            .and_then(|id| self.column_meta.get(id))
            .and_then(|meta| meta.width)
            .filter(|width| *width > 0)
    }

    #[must_use]
    pub const fn text_show_as(&self) -> Option<&TextShowAs> {
        match &self.kind {
            FieldKind::SingleLineText { options } => options.show_as.as_ref(),
            FieldKind::Rollup { options } | FieldKind::Formula { options } => {
                match &options.show_as {
                    Some(ComputedShowAs::Text(show_as)) => Some(show_as),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn number_show_as(&self) -> Option<&NumberShowAs> {
        match &self.kind {
            FieldKind::Number { options } => options.show_as.as_ref(),
            FieldKind::Rollup { options } | FieldKind::Formula { options } => {
                match &options.show_as {
                    Some(ComputedShowAs::Number(show_as)) => Some(show_as),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn date_formatting(&self) -> Option<&DateFormatting> {
        match &self.kind {
            FieldKind::Date { options } => Some(&options.formatting),
            FieldKind::Rollup { options } | FieldKind::Formula { options } => {
                match &options.formatting {
                    Some(ComputedFormatting::Date(formatting)) => Some(formatting),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn number_formatting(&self) -> Option<&NumberFormatting> {
        match &self.kind {
            FieldKind::Number { options } => Some(&options.formatting),
            FieldKind::Rollup { options } | FieldKind::Formula { options } => {
                match &options.formatting {
                    Some(ComputedFormatting::Number(formatting)) => Some(formatting),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            FieldKind::SingleSelect { options } | FieldKind::MultipleSelect { options } => {
                &options.choices
            }
            _ => &[],
        }
    }

    /// Check invariants the projector relies on.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for an empty id and
    /// [`CoreError::InvalidFieldOptions`] for a rating scale outside
    /// `1..=10` or duplicate select choice names.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "field '{}' has an empty id",
                self.name
            )));
        }

        match &self.kind {
            FieldKind::Rating { options } if !(1..=MAX_RATING).contains(&options.max) => {
                Err(CoreError::InvalidFieldOptions {
                    field_id: self.id.clone(),
                    reason: format!("rating max {} outside 1..={MAX_RATING}", options.max),
                })
            }
            FieldKind::SingleSelect { options } | FieldKind::MultipleSelect { options } => {
                let mut seen = HashSet::new();
                for choice in &options.choices {
                    if !seen.insert(choice.name.as_str()) {
                        return Err(CoreError::InvalidFieldOptions {
                            field_id: self.id.clone(),
                            reason: format!("duplicate choice '{}'", choice.name),
                        });
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
