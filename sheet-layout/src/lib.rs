//! FILENAME: sheet-layout/src/lib.rs
//! PURPOSE: Layout and styling engine for spreadsheet export.
//! CONTEXT: Maps logical table structure — hierarchical indices, merged
//! regions, grouped rows, repeated header bands — onto a flat list of styled,
//! collision-checked cell records a writer collaborator can encode into any
//! format that supports cell styling and merged ranges.
//!
//! Layers:
//! - `spans`: hierarchical index planning (which header cells merge)
//! - `pattern`: structural predicates + style overrides (the rule set)
//! - `element`: positionable tables, text blocks and header bands
//! - `layout`: absolute coordinates, collision detection, style resolution
//! - `group`: repeated header + body sequences per row group
//! - `compose`: vertical stacking helper for assembling a sheet
//! - `source`: collaborator seams (data in, records out)

pub mod compose;
pub mod element;
pub mod error;
pub mod group;
pub mod layout;
pub mod pattern;
pub mod source;
pub mod spans;

// Re-export commonly used types at the crate root
pub use compose::SheetComposer;
pub use element::{BandElement, Element, ElementKind, PlacedCell, TableElement, TextElement, TextPreset};
pub use error::LayoutError;
pub use group::{render_groups, Group};
pub use layout::{CellRecord, LayoutConfig, LayoutEngine};
pub use pattern::{CellIdentity, CellRole, RuleSet, Selector, StyleRule};
pub use source::{CellSink, DocumentDefaults, GridData, RecordingSink, TableSource};
pub use spans::{HeaderCell, IndexLevels};
