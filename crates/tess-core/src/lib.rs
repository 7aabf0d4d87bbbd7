//! # tess-core
//!
//! Core types shared across all Tessera crates:
//! - Field descriptors with per-type option payloads
//! - Raw cell values and the `Record` access trait
//! - Color tokens and their hex/contrast rules
//! - Column and cell view models handed to the presentation layer
//! - Table snapshots used as fixtures and CLI input
//! - Cross-cutting error types

pub mod color;
pub mod enums;
pub mod errors;
pub mod field;
pub mod record;
pub mod snapshot;
pub mod value;
pub mod view_model;

pub use errors::CoreError;
