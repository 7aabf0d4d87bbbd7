//! # tess-grid
//!
//! Projection of table schema and record values into grid view models.
//!
//! - [`columns`]: fields to column descriptors (width, icon, header theme)
//! - [`cells`]: raw cell values to typed cell view models
//! - [`cache`]: bounded LRU memo for formatted date strings
//! - [`select`]: toggle semantics of the select editor
//! - [`facade`]: [`GridColumns`], which recomputes both projections only
//!   when the field list, view, or edit permission change
//!
//! Everything here runs on one thread; shared state uses `Rc<RefCell<_>>`.

pub mod cache;
pub mod cells;
pub mod collaborators;
pub mod columns;
pub mod facade;
pub mod format;
pub mod select;

pub use cache::DisplayValueCache;
pub use cells::{CellValueProjector, commit_number_edit};
pub use collaborators::{CellFormatter, Collaborators, CoverResolver, ReferenceOpener};
pub use columns::{project_column, project_columns};
pub use facade::{GridColumns, GridInputs, GridProjection};
pub use format::DefaultFormatter;
pub use select::SelectEditor;
