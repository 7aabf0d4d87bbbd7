//! Grid presentation defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Column width used when a field has no width stored for the active view.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Header background for columns whose field reports an error (rose-100).
pub const DEFAULT_ERROR_HEADER_COLOR: &str = "#ffe4e6";

/// Display name for linked records without a title.
pub const DEFAULT_UNTITLED_LABEL: &str = "Untitled";

const fn default_column_width() -> u32 {
    DEFAULT_COLUMN_WIDTH
}

fn default_error_header_color() -> String {
    DEFAULT_ERROR_HEADER_COLOR.to_string()
}

fn default_untitled_label() -> String {
    DEFAULT_UNTITLED_LABEL.to_string()
}

const fn default_has_menu() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridConfig {
    #[serde(default = "default_column_width")]
    pub default_column_width: u32,

    /// Hex color for the header of a column whose field has an error.
    #[serde(default = "default_error_header_color")]
    pub error_header_color: String,

    #[serde(default = "default_untitled_label")]
    pub untitled_label: String,

    /// Whether column headers open a menu unless the caller says otherwise.
    #[serde(default = "default_has_menu")]
    pub has_menu: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_column_width: default_column_width(),
            error_header_color: default_error_header_color(),
            untitled_label: default_untitled_label(),
            has_menu: default_has_menu(),
        }
    }
}

impl GridConfig {
    /// # Errors
    ///
    /// Rejects a zero default width and a header color that is not `#rrggbb`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_column_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "grid.default_column_width".into(),
                reason: "must be greater than zero".into(),
            });
        }

        let color = &self.error_header_color;
        let well_formed = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !well_formed {
            return Err(ConfigError::InvalidValue {
                field: "grid.error_header_color".into(),
                reason: format!("'{color}' is not a #rrggbb color"),
            });
        }
        Ok(())
    }
}
