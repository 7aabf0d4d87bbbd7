//! Toggle semantics of the select editor.
//!
//! Selecting a chosen option removes it; selecting any other option adds it.
//! In single mode only the most recent choice is kept.

use tess_core::record::Record;
use tess_core::value::CellValue;
use tess_core::view_model::{CellViewModel, SelectChoiceView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEditor {
    values: Vec<String>,
    choices: Vec<SelectChoiceView>,
    is_multiple: bool,
}

impl SelectEditor {
    #[must_use]
    pub fn new(values: Vec<String>, choices: Vec<SelectChoiceView>, is_multiple: bool) -> Self {
        Self {
            values,
            choices,
            is_multiple,
        }
    }

    /// Editor state for a select cell; `None` for any other cell kind.
    #[must_use]
    pub fn from_cell(cell: &CellViewModel) -> Option<Self> {
        match cell {
            CellViewModel::Select {
                data,
                choices,
                is_multiple,
                ..
            } => Some(Self::new(data.clone(), choices.clone(), *is_multiple)),
            _ => None,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn choices(&self) -> &[SelectChoiceView] {
        &self.choices
    }

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.is_multiple
    }

    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.values.iter().any(|value| value == name)
    }

    /// Replace the current selection, e.g. after the cell value changed.
    pub fn set_value(&mut self, values: Vec<String>) {
        self.values = values;
    }

    /// Choices whose name contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SelectChoiceView> {
        let query = query.trim().to_lowercase();
        self.choices
            .iter()
            .filter(|choice| query.is_empty() || choice.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Toggle `name` and return the value to store.
    ///
    /// Single mode yields a text value, multiple mode a list; both yield
    /// `None` once nothing is selected.
    pub fn select(&mut self, name: &str) -> Option<CellValue> {
        let mut next: Vec<String> = if self.is_selected(name) {
            self.values.iter().filter(|v| *v != name).cloned().collect()
        } else {
            let mut next = self.values.clone();
            next.push(name.to_string());
            next
        };

        if !self.is_multiple {
            let last = next.pop();
            self.values = last.iter().cloned().collect();
            return last.map(CellValue::Text);
        }

        self.values = next;
        if self.values.is_empty() {
            None
        } else {
            Some(CellValue::List(
                self.values.iter().cloned().map(CellValue::Text).collect(),
            ))
        }
    }

    /// Toggle `name` and write the result to `field_id` of `record`.
    pub fn commit_select_edit(&mut self, record: &dyn Record, field_id: &str, name: &str) {
        let value = self.select(name);
        record.update_cell(field_id, value);
    }
}
