//! Raw cell values as stored on records.
//!
//! A value is a scalar, a structured link/attachment object, or a list of
//! those. Absent values are modeled as `Option<CellValue>::None` by callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reference to a record in a linked table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LinkRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A stored file attached to a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentItem {
    pub id: String,
    pub name: String,
    pub mimetype: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Raw value of one cell.
///
/// Deserialization is untagged and tries variants in declaration order.
/// Serde also accepts a JSON array for a struct, so `List` must precede the
/// object variants, and attachments (which require `mimetype` and `url`) are
/// matched before links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<CellValue>),
    Attachment(AttachmentItem),
    Link(LinkRef),
}

impl CellValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Empty strings, zero, `false` and empty lists count as "no value".
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Attachment(_) | Self::Link(_) | Self::List(_) => true,
        }
    }

    /// Numeric items of a list value. Non-numeric items are skipped.
    #[must_use]
    pub fn numbers(&self) -> Option<Vec<f64>> {
        match self {
            Self::List(items) => Some(items.iter().filter_map(Self::as_number).collect()),
            _ => None,
        }
    }

    /// Textual token used when a raw value takes part in a cache key.
    ///
    /// Never fails: structured values contribute their id.
    #[must_use]
    pub fn key_fragment(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => number_token(*n),
            Self::Text(s) => s.clone(),
            Self::Attachment(a) => a.id.clone(),
            Self::Link(l) => l.id.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::key_fragment)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Coerce an optional raw value into a list.
///
/// Lists pass through, other truthy values are wrapped, and falsy or absent
/// values yield an empty list.
#[must_use]
pub fn to_list(value: Option<&CellValue>) -> Vec<CellValue> {
    match value {
        Some(CellValue::List(items)) => items.clone(),
        Some(v) if v.is_truthy() => vec![v.clone()],
        _ => Vec::new(),
    }
}

/// Render a number without a trailing `.0` when it is integral.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn number_token(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
