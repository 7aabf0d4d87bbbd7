//! Display-value cache sizing.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Entries kept by the formatted display-value cache.
pub const DEFAULT_DISPLAY_CAPACITY: usize = 1000;

const fn default_display_capacity() -> usize {
    DEFAULT_DISPLAY_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_display_capacity")]
    pub display_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            display_capacity: default_display_capacity(),
        }
    }
}

impl CacheConfig {
    /// # Errors
    ///
    /// Rejects a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.display_capacity".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
