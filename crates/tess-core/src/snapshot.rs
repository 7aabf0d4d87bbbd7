//! Serialized table snapshots: schema, rows and permissions in one document.
//!
//! Snapshots feed the CLI and integration tests. `fields` may contain `null`
//! entries, which the grid skips.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::field::FieldDescriptor;
use crate::record::{MemoryRecord, TablePermission};
use crate::value::CellValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecordSnapshot {
    pub id: String,
    #[serde(default)]
    pub fields: BTreeMap<String, CellValue>,
}

impl RecordSnapshot {
    #[must_use]
    pub fn to_record(&self) -> MemoryRecord {
        MemoryRecord::from_cells(self.id.clone(), self.fields.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
    pub fields: Vec<Option<FieldDescriptor>>,
    #[serde(default)]
    pub records: Vec<RecordSnapshot>,
    #[serde(default)]
    pub permission: TablePermission,
}

impl TableSnapshot {
    /// Parse and validate a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] for malformed JSON and the validation
    /// error of the first invalid field or duplicated record id.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// # Errors
    ///
    /// See [`FieldDescriptor::validate`]; also rejects duplicate record ids.
    pub fn validate(&self) -> Result<(), CoreError> {
        for field in self.fields.iter().flatten() {
            field.validate()?;
        }

        let mut seen = std::collections::HashSet::new();
        for record in &self.records {
            if !seen.insert(record.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate record id '{}'",
                    record.id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn memory_records(&self) -> Vec<MemoryRecord> {
        self.records.iter().map(RecordSnapshot::to_record).collect()
    }
}
