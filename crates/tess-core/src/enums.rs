//! Field types, cell value classifications, and presentation enums for Tessera.
//!
//! Field-level enums serialize in `camelCase` to match the table schema wire
//! shape. Every enum exposes `as_str()` for the token used in icons and cache
//! keys, and `Display` delegates to it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// Declared type of a field.
///
/// Only a subset of types has a grid cell projection. The rest
/// (`User`, `AutoNumber`, `CreatedTime`, `LastModifiedTime`, `Unknown`)
/// project to a loading cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    SingleLineText,
    LongText,
    Date,
    Number,
    Rollup,
    Formula,
    SingleSelect,
    MultipleSelect,
    Link,
    Attachment,
    Checkbox,
    Rating,
    User,
    AutoNumber,
    CreatedTime,
    LastModifiedTime,
    Unknown,
}

impl FieldType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleLineText => "singleLineText",
            Self::LongText => "longText",
            Self::Date => "date",
            Self::Number => "number",
            Self::Rollup => "rollup",
            Self::Formula => "formula",
            Self::SingleSelect => "singleSelect",
            Self::MultipleSelect => "multipleSelect",
            Self::Link => "link",
            Self::Attachment => "attachment",
            Self::Checkbox => "checkbox",
            Self::Rating => "rating",
            Self::User => "user",
            Self::AutoNumber => "autoNumber",
            Self::CreatedTime => "createdTime",
            Self::LastModifiedTime => "lastModifiedTime",
            Self::Unknown => "unknown",
        }
    }

    /// Icon token for a column header. Lookup fields get a `_lookup` suffix.
    #[must_use]
    pub fn icon(self, is_lookup: bool) -> String {
        if is_lookup {
            format!("{}_lookup", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CellValueType
// ---------------------------------------------------------------------------

/// Runtime classification of a field's values, independent of its declared
/// type. Computed fields (rollup, formula) pick their projection branch by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CellValueType {
    Boolean,
    DateTime,
    String,
    Number,
}

impl CellValueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::DateTime => "dateTime",
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for CellValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TextShowAsType
// ---------------------------------------------------------------------------

/// Alternate presentation for string values: render as a clickable reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TextShowAsType {
    Url,
    Email,
    Phone,
}

impl TextShowAsType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for TextShowAsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NumberDisplayType / ChartType
// ---------------------------------------------------------------------------

/// Alternate presentation for numeric values.
///
/// `Bar` and `Ring` apply to single numbers, `Bar` and `Line` to
/// multi-value charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum NumberDisplayType {
    Bar,
    Ring,
    Line,
}

impl NumberDisplayType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Ring => "ring",
            Self::Line => "line",
        }
    }

    /// Chart used when the value is a list of numbers.
    #[must_use]
    pub const fn chart_type(self) -> ChartType {
        match self {
            Self::Line => ChartType::Line,
            Self::Bar | Self::Ring => ChartType::Bar,
        }
    }
}

impl fmt::Display for NumberDisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart kind for multi-value numeric cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    Line,
}

// ---------------------------------------------------------------------------
// NumberFormattingType
// ---------------------------------------------------------------------------

/// How a number is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum NumberFormattingType {
    #[default]
    Decimal,
    Percent,
    Currency,
}

impl NumberFormattingType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Percent => "percent",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for NumberFormattingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TimeFormatting
// ---------------------------------------------------------------------------

/// Time-of-day portion of a date display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum TimeFormatting {
    #[serde(rename = "HH:mm")]
    Hour24,
    #[serde(rename = "hh:mm A")]
    Hour12,
    #[default]
    #[serde(rename = "None")]
    None,
}

impl TimeFormatting {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour24 => "HH:mm",
            Self::Hour12 => "hh:mm A",
            Self::None => "None",
        }
    }
}

impl fmt::Display for TimeFormatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RatingIcon
// ---------------------------------------------------------------------------

/// Glyph used by rating cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RatingIcon {
    #[default]
    Star,
    Moon,
    Sun,
    Zap,
    Flame,
    Heart,
    Apple,
    ThumbUp,
}

impl RatingIcon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Moon => "moon",
            Self::Sun => "sun",
            Self::Zap => "zap",
            Self::Flame => "flame",
            Self::Heart => "heart",
            Self::Apple => "apple",
            Self::ThumbUp => "thumbUp",
        }
    }
}

impl fmt::Display for RatingIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Relationship
// ---------------------------------------------------------------------------

/// Cardinality of a link field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    OneOne,
    ManyOne,
    OneMany,
    ManyMany,
}

// ---------------------------------------------------------------------------
// EditorPosition
// ---------------------------------------------------------------------------

/// Where the presentation layer places an inline editor relative to the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum EditorPosition {
    Below,
}
