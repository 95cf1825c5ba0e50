//! FILENAME: sheet-layout/src/layout.rs
//! PURPOSE: The layout engine — absolute coordinates, collision detection and
//! style resolution for a tree of elements.
//! CONTEXT: Placement is strictly sequential (root elements in caller order,
//! children before grandchildren) because later elements may depend on
//! earlier footprints. The engine either returns a complete, internally
//! consistent record list or a single error; it never emits partial output.

use crate::element::{Element, PlacedCell};
use crate::error::LayoutError;
use crate::pattern::{CellIdentity, CellRole, RuleSet};
use crate::source::{CellSink, DocumentDefaults};
use serde::{Deserialize, Serialize};
use sheet_model::{resolve_style, CellCoord, CellStyle, CellValue, MergeSpan};
use std::collections::HashSet;

/// One fully-resolved output cell: what the writer collaborator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    pub coord: CellCoord,
    pub value: CellValue,
    pub style: CellStyle,
    pub span: Option<MergeSpan>,
    pub role: CellRole,
}

/// Read-only configuration for one export job: the base style every cell
/// starts from, plus the ordered pattern rules. Supplied wholesale before
/// layout; never mutated mid-job.
#[derive(Debug, Default)]
pub struct LayoutConfig {
    pub base_style: CellStyle,
    pub rules: RuleSet,
}

impl LayoutConfig {
    pub fn new(base_style: CellStyle, rules: RuleSet) -> Self {
        LayoutConfig { base_style, rules }
    }
}

/// Assigns absolute coordinates to placed elements and resolves every cell's
/// style. Pure computation: no I/O, no shared mutable state, so independent
/// jobs can run concurrently with the same configuration.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        LayoutEngine { config }
    }

    /// Lays out the given root elements at their offsets and returns the flat
    /// record list, sorted row-major. Ordering is deterministic for diffing
    /// and testing; the writer treats the sequence as an unordered set.
    pub fn layout(
        &self,
        roots: &[(CellCoord, Element)],
    ) -> Result<Vec<CellRecord>, LayoutError> {
        // Place and flatten, in caller-declared order.
        let mut cells: Vec<PlacedCell> = Vec::new();
        for (offset, element) in roots {
            cells.extend(element.place(*offset));
        }
        log::debug!(
            "flattened {} cells from {} root elements",
            cells.len(),
            roots.len()
        );

        // Collision check: every contribution claims its whole covered
        // region (the anchor plus any merged placeholders). A coordinate
        // claimed twice signals a caller offset bug and is always fatal —
        // silently keeping the last write would hide it.
        let mut claimed: HashSet<CellCoord> = HashSet::with_capacity(cells.len());
        let mut extent_rows = 0u32;
        let mut extent_cols = 0u32;
        for cell in &cells {
            let span = cell.span.unwrap_or_default();
            for covered in span.covered(cell.coord) {
                if !claimed.insert(covered) {
                    return Err(LayoutError::Collision { at: covered });
                }
            }
            let corner = span.bottom_right(cell.coord);
            extent_rows = extent_rows.max(corner.row + 1);
            extent_cols = extent_cols.max(corner.col + 1);
        }

        // A rule aimed at a coordinate no layout cell can ever occupy is a
        // configuration bug; a rule that merely matches nothing is fine.
        self.config.rules.check_bounds(extent_rows, extent_cols)?;

        // Resolve styles: base <- pattern rules (declaration order) <- the
        // cell's own patch. Manual per-cell overrides have the last word.
        let mut records = Vec::with_capacity(cells.len());
        for cell in cells {
            let identity = CellIdentity {
                coord: cell.coord,
                role: cell.role,
                labels: cell.labels,
                table_row: cell.table_row,
                table_col: cell.table_col,
            };
            let rule_patch = self.config.rules.style_for(&identity);
            let style = resolve_style(&self.config.base_style, &[rule_patch, cell.patch])?;
            records.push(CellRecord {
                coord: cell.coord,
                value: cell.value,
                style,
                span: cell.span,
                role: cell.role,
            });
        }

        records.sort_by_key(|r| r.coord);
        log::debug!(
            "layout produced {} records over {} rows x {} cols",
            records.len(),
            extent_rows,
            extent_cols
        );
        Ok(records)
    }

    /// Lays out and streams the result into a writer collaborator, handing it
    /// the document defaults first. The sink sees nothing on error.
    pub fn render_to(
        &self,
        roots: &[(CellCoord, Element)],
        defaults: &DocumentDefaults,
        sink: &mut impl CellSink,
    ) -> Result<(), LayoutError> {
        let records = self.layout(roots)?;
        sink.begin(defaults);
        for record in &records {
            sink.cell(record);
        }
        Ok(())
    }
}
