//! FILENAME: sheet-layout/src/compose.rs
//! Placement bookkeeping for stacking independent elements on one sheet.

use crate::element::Element;
use sheet_model::CellCoord;

/// Accumulates (offset, element) placements the way a report sheet is
/// assembled top to bottom: explicit positions when needed, "below whatever
/// is there already" otherwise. Purely bookkeeping — overlap is still checked
/// by the layout engine.
#[derive(Debug, Default)]
pub struct SheetComposer {
    placements: Vec<(CellCoord, Element)>,
    bottom: u32,
}

impl SheetComposer {
    pub fn new() -> Self {
        SheetComposer::default()
    }

    /// Places an element at an explicit offset.
    pub fn push_at(&mut self, at: CellCoord, element: Element) {
        let (_, height) = element.footprint();
        self.bottom = self.bottom.max(at.row + height);
        self.placements.push((at, element));
    }

    /// Places an element in column 0, `spacing` rows below the lowest element
    /// placed so far. The first element lands at row 0 regardless of spacing.
    pub fn push_below(&mut self, element: Element, spacing: u32) {
        let row = if self.placements.is_empty() {
            0
        } else {
            self.bottom + spacing
        };
        self.push_at(CellCoord::new(row, 0), element);
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// The row just below everything placed so far.
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    pub fn into_placements(self) -> Vec<(CellCoord, Element)> {
        self.placements
    }
}
