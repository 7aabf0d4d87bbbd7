//! Memoized composition of column and cell projection.
//!
//! [`GridColumns`] owns the display cache for its grid and rebuilds the
//! projection only when its inputs change by value.

use std::cell::RefCell;
use std::rc::Rc;

use tess_config::{GridConfig, TesseraConfig};
use tess_core::field::FieldDescriptor;
use tess_core::record::TablePermission;
use tess_core::view_model::ColumnDescriptor;

use crate::cache::DisplayValueCache;
use crate::cells::CellValueProjector;
use crate::collaborators::Collaborators;
use crate::columns::project_columns;

/// Everything a projection depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct GridInputs {
    pub fields: Vec<Option<FieldDescriptor>>,
    pub view_id: Option<String>,
    pub editable: bool,
    /// Overrides `grid.has_menu` from configuration.
    pub has_menu: Option<bool>,
}

impl GridInputs {
    #[must_use]
    pub fn new(fields: Vec<Option<FieldDescriptor>>, permission: TablePermission) -> Self {
        Self {
            fields,
            view_id: None,
            editable: permission.can_update_record(),
            has_menu: None,
        }
    }

    #[must_use]
    pub fn with_view(mut self, view_id: impl Into<String>) -> Self {
        self.view_id = Some(view_id.into());
        self
    }

    #[must_use]
    pub fn with_menu(mut self, has_menu: bool) -> Self {
        self.has_menu = Some(has_menu);
        self
    }
}

/// Columns and the projector for their cells.
#[derive(Debug)]
pub struct GridProjection {
    pub columns: Vec<ColumnDescriptor>,
    pub cells: CellValueProjector,
}

#[derive(Debug)]
pub struct GridColumns {
    config: GridConfig,
    cache: Rc<RefCell<DisplayValueCache>>,
    collaborators: Collaborators,
    memo: Option<(GridInputs, Rc<GridProjection>)>,
}

impl GridColumns {
    #[must_use]
    pub fn new(config: &TesseraConfig) -> Self {
        Self::with_collaborators(config, Collaborators::default())
    }

    #[must_use]
    pub fn with_collaborators(config: &TesseraConfig, collaborators: Collaborators) -> Self {
        Self {
            config: config.grid.clone(),
            cache: Rc::new(RefCell::new(DisplayValueCache::new(
                config.cache.display_capacity,
            ))),
            collaborators,
            memo: None,
        }
    }

    /// The display cache shared by every projection of this grid.
    #[must_use]
    pub fn cache(&self) -> Rc<RefCell<DisplayValueCache>> {
        Rc::clone(&self.cache)
    }

    /// Projection for `inputs`, reusing the previous one when equal.
    pub fn compute(&mut self, inputs: GridInputs) -> Rc<GridProjection> {
        if let Some((previous, projection)) = &self.memo {
            if *previous == inputs {
                tracing::debug!("grid inputs unchanged, reusing projection");
                return Rc::clone(projection);
            }
        }

        tracing::debug!(
            fields = inputs.fields.len(),
            view_id = inputs.view_id.as_deref(),
            editable = inputs.editable,
            "recomputing grid projection"
        );

        let has_menu = inputs.has_menu.unwrap_or(self.config.has_menu);
        let projection = Rc::new(GridProjection {
            columns: project_columns(
                &inputs.fields,
                inputs.view_id.as_deref(),
                has_menu,
                &self.config,
            ),
            cells: CellValueProjector::new(
                &inputs.fields,
                inputs.editable,
                self.config.untitled_label.clone(),
                Rc::clone(&self.cache),
                self.collaborators.clone(),
            ),
        });
        self.memo = Some((inputs, Rc::clone(&projection)));
        projection
    }
}
