//! FILENAME: sheet-model/src/merge.rs
//! Merged-region spans. A span is anchored at one cell; the anchor owns the
//! value and style, the remaining covered coordinates are empty placeholders.

use crate::coord::CellCoord;
use serde::{Deserialize, Serialize};

/// The extent of a merged region, attached to its anchor cell.
/// Both dimensions are at least 1; a 1x1 span is equivalent to no span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeSpan {
    pub rows: u16,
    pub cols: u16,
}

impl MergeSpan {
    pub fn new(rows: u16, cols: u16) -> Self {
        MergeSpan {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// A span covering `cols` columns in a single row.
    pub fn across(cols: u16) -> Self {
        MergeSpan::new(1, cols)
    }

    /// A span covering `rows` rows in a single column.
    pub fn down(rows: u16) -> Self {
        MergeSpan::new(rows, 1)
    }

    pub fn is_unit(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// The bottom-right coordinate covered when anchored at `anchor`.
    pub fn bottom_right(&self, anchor: CellCoord) -> CellCoord {
        anchor.offset(self.rows as u32 - 1, self.cols as u32 - 1)
    }

    /// Iterates every coordinate covered by this span, anchor included.
    pub fn covered(&self, anchor: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        let (rows, cols) = (self.rows as u32, self.cols as u32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| anchor.offset(r, c)))
    }
}

impl Default for MergeSpan {
    fn default() -> Self {
        MergeSpan { rows: 1, cols: 1 }
    }
}
