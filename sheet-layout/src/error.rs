//! FILENAME: sheet-layout/src/error.rs

use sheet_model::{CellCoord, StyleError};
use thiserror::Error;

/// Errors surfaced by layout, planning and grouping. Every error is the
/// synchronous result of the call that detected it; callers receive either a
/// complete record sequence or one of these, never both.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid style attribute: {0}")]
    Style(#[from] StyleError),

    #[error("layout collision at {at}: two anchors claim the same cell")]
    Collision { at: CellCoord },

    #[error("group set is empty but at least one group was required")]
    EmptyGroupSet,

    #[error("index level {level} has {actual} labels, expected {expected}")]
    IndexLevelMismatch {
        level: usize,
        expected: usize,
        actual: usize,
    },

    #[error("data row {row} has {actual} cells, expected {expected}")]
    RaggedData {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid label pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("style rule targets {at}, outside the laid-out region ({rows} rows x {cols} cols)")]
    RuleOutOfRange { at: CellCoord, rows: u32, cols: u32 },
}
