//! Record access and mutation as seen by the grid.
//!
//! The grid reads one cell at a time and hands edits back through
//! [`Record::update_cell`]. Persisting those edits (network, retries,
//! conflicts) belongs to whoever implements the trait.

use std::cell::RefCell;
use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// A row of table data.
pub trait Record {
    fn id(&self) -> &str;

    /// Raw value stored for a field, if any.
    fn cell_value(&self, field_id: &str) -> Option<CellValue>;

    /// Queue a cell edit. `None` clears the cell. Fire-and-forget.
    fn update_cell(&self, field_id: &str, value: Option<CellValue>);
}

/// One edit submitted through [`Record::update_cell`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellUpdate {
    pub field_id: String,
    pub value: Option<CellValue>,
}

/// In-memory record that applies edits immediately and keeps a log of them.
///
/// Uses interior mutability so edits can flow through a shared reference;
/// it is meant for a single thread.
#[derive(Debug, Default)]
pub struct MemoryRecord {
    id: String,
    cells: RefCell<BTreeMap<String, CellValue>>,
    updates: RefCell<Vec<CellUpdate>>,
}

impl MemoryRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn from_cells(id: impl Into<String>, cells: BTreeMap<String, CellValue>) -> Self {
        Self {
            id: id.into(),
            cells: RefCell::new(cells),
            updates: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_cell(self, field_id: impl Into<String>, value: CellValue) -> Self {
        self.cells.borrow_mut().insert(field_id.into(), value);
        self
    }

    /// Edits received so far, oldest first.
    #[must_use]
    pub fn updates(&self) -> Vec<CellUpdate> {
        self.updates.borrow().clone()
    }

    /// Snapshot of the current cell values.
    #[must_use]
    pub fn cells(&self) -> BTreeMap<String, CellValue> {
        self.cells.borrow().clone()
    }
}

impl Record for MemoryRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn cell_value(&self, field_id: &str) -> Option<CellValue> {
        self.cells.borrow().get(field_id).cloned()
    }

    fn update_cell(&self, field_id: &str, value: Option<CellValue>) {
        {
            let mut cells = self.cells.borrow_mut();
            match &value {
                Some(v) => {
                    cells.insert(field_id.to_string(), v.clone());
                }
                None => {
                    cells.remove(field_id);
                }
            }
        }
        self.updates.borrow_mut().push(CellUpdate {
            field_id: field_id.to_string(),
            value,
        });
    }
}

/// Table-level permissions relevant to the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TablePermission {
    #[serde(rename = "record|update", default)]
    pub record_update: bool,
}

impl TablePermission {
    #[must_use]
    pub const fn editable() -> Self {
        Self {
            record_update: true,
        }
    }

    #[must_use]
    pub const fn read_only() -> Self {
        Self {
            record_update: false,
        }
    }

    #[must_use]
    pub const fn can_update_record(self) -> bool {
        self.record_update
    }
}
