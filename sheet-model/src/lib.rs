//! FILENAME: sheet-model/src/lib.rs
//! PURPOSE: Shared vocabulary types for the sheetcast layout engine.
//! CONTEXT: Coordinates, cell values, merge spans and the style model live
//! here so that both the layout engine and writer collaborators can speak the
//! same types without depending on each other.

pub mod coord;
pub mod merge;
pub mod style;
pub mod value;

// Re-export commonly used types at the crate root
pub use coord::{col_to_index, index_to_col, CellCoord};
pub use merge::MergeSpan;
pub use style::{
    resolve_style, BorderLineStyle, BorderPatch, Borders, CellStyle, Color, StyleError,
    StylePatch, TextAlign, TextRotation, VerticalAlign,
};
pub use value::CellValue;
