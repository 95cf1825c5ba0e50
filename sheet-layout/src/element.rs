//! FILENAME: sheet-layout/src/element.rs
//! PURPOSE: Positionable, sizeable layout units and their cell contributions.
//! CONTEXT: An element knows its own footprint and yields relative cell
//! contributions; placing it at an offset shifts those to absolute
//! coordinates and recursively places its children. Elements never check
//! overlap against siblings — they cannot know about them until composed, so
//! global collision detection belongs to the layout engine.

use crate::error::LayoutError;
use crate::pattern::CellRole;
use crate::source::TableSource;
use crate::spans::IndexLevels;
use sheet_model::{BorderLineStyle, CellCoord, CellValue, MergeSpan, StylePatch};
use std::collections::BTreeSet;

// ============================================================================
// PLACED CELL
// ============================================================================

/// One cell contribution. Relative to the element until `place` shifts it to
/// an absolute coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub coord: CellCoord,
    pub value: CellValue,
    pub role: CellRole,
    /// Hierarchical label path from root to this cell.
    pub labels: Vec<String>,
    /// Zero-based position within the immediate table grid, if any.
    pub table_row: Option<usize>,
    pub table_col: Option<usize>,
    /// Merge span anchored at this cell (1x1 spans are omitted).
    pub span: Option<MergeSpan>,
    /// Per-cell override patch; applied after all pattern rules.
    pub patch: StylePatch,
}

impl PlacedCell {
    pub fn new(coord: CellCoord, value: CellValue, role: CellRole) -> Self {
        PlacedCell {
            coord,
            value,
            role,
            labels: Vec::new(),
            table_row: None,
            table_col: None,
            span: None,
            patch: StylePatch::new(),
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_table_pos(mut self, row: usize, col: usize) -> Self {
        self.table_row = Some(row);
        self.table_col = Some(col);
        self
    }

    pub fn with_span(mut self, span: MergeSpan) -> Self {
        if !span.is_unit() {
            self.span = Some(span);
        }
        self
    }

    pub fn with_patch(mut self, patch: StylePatch) -> Self {
        self.patch = patch;
        self
    }

    fn shifted(mut self, offset: CellCoord) -> Self {
        self.coord = self.coord + offset;
        self
    }
}

// ============================================================================
// ELEMENT TREE
// ============================================================================

/// A composable layout unit: a tagged kind plus child elements at relative
/// offsets.
#[derive(Debug, Clone)]
pub struct Element {
    kind: ElementKind,
    children: Vec<(CellCoord, Element)>,
}

/// The element variants the engine lays out.
#[derive(Debug, Clone)]
pub enum ElementKind {
    /// A table: data grid with optional hierarchical row/column indices.
    Table(TableElement),
    /// A one-row text block (title, caption).
    Text(TextElement),
    /// A one-row group-header band.
    Band(BandElement),
}

impl Element {
    /// Footprint in cells as (width, height), children included.
    pub fn footprint(&self) -> (u32, u32) {
        let (mut width, mut height) = match &self.kind {
            ElementKind::Table(t) => t.footprint(),
            ElementKind::Text(t) => t.footprint(),
            ElementKind::Band(b) => b.footprint(),
        };
        for (offset, child) in &self.children {
            let (cw, ch) = child.footprint();
            width = width.max(offset.col + cw);
            height = height.max(offset.row + ch);
        }
        (width, height)
    }

    /// Adds a child element at an offset relative to this element.
    pub fn add_child(&mut self, child: Element, at: CellCoord) {
        self.children.push((at, child));
    }

    pub fn with_child(mut self, child: Element, at: CellCoord) -> Self {
        self.add_child(child, at);
        self
    }

    /// Places this element at an absolute offset: shifts its own
    /// contributions, then places children at `offset + relative`,
    /// depth-first in insertion order.
    pub fn place(&self, offset: CellCoord) -> Vec<PlacedCell> {
        let mut cells: Vec<PlacedCell> = match &self.kind {
            ElementKind::Table(t) => t.contributions(),
            ElementKind::Text(t) => t.contributions(),
            ElementKind::Band(b) => b.contributions(),
        }
        .into_iter()
        .map(|c| c.shifted(offset))
        .collect();

        for (relative, child) in &self.children {
            cells.extend(child.place(offset + *relative));
        }
        cells
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }
}

impl From<TableElement> for Element {
    fn from(table: TableElement) -> Self {
        Element { kind: ElementKind::Table(table), children: Vec::new() }
    }
}

impl From<TextElement> for Element {
    fn from(text: TextElement) -> Self {
        Element { kind: ElementKind::Text(text), children: Vec::new() }
    }
}

impl From<BandElement> for Element {
    fn from(band: BandElement) -> Self {
        Element { kind: ElementKind::Band(band), children: Vec::new() }
    }
}

// ============================================================================
// TABLE ELEMENT
// ============================================================================

/// A data grid with optional hierarchical row and column indices.
///
/// Region geometry: the column header band sits on top, offset right by the
/// row-index width; an index-names row (when level names are present) sits
/// between the header band and the data; data starts below both and right of
/// the row index.
#[derive(Debug, Clone, Default)]
pub struct TableElement {
    data: Vec<Vec<CellValue>>,
    rows: usize,
    cols: usize,
    row_index: Option<IndexLevels>,
    col_index: Option<IndexLevels>,
    cell_patches: Vec<((usize, usize), StylePatch)>,
    extra_merges: Vec<(CellCoord, MergeSpan)>,
    separators: bool,
}

impl TableElement {
    /// Builds a table from a rectangular value grid.
    pub fn new(data: Vec<Vec<CellValue>>) -> Result<Self, LayoutError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |r| r.len());
        for (row, cells) in data.iter().enumerate() {
            if cells.len() != cols {
                return Err(LayoutError::RaggedData {
                    row,
                    expected: cols,
                    actual: cells.len(),
                });
            }
        }
        Ok(TableElement {
            data,
            rows,
            cols,
            ..TableElement::default()
        })
    }

    /// Builds a table from a data collaborator, indices included.
    pub fn from_source(source: &impl TableSource) -> Result<Self, LayoutError> {
        let (rows, cols) = source.shape();
        let data = (0..rows)
            .map(|r| (0..cols).map(|c| source.value(r, c)).collect())
            .collect();
        let mut table = TableElement::new(data)?;
        if let Some(index) = source.row_index() {
            table = table.with_row_index(index.clone())?;
        }
        if let Some(index) = source.col_index() {
            table = table.with_col_index(index.clone())?;
        }
        Ok(table)
    }

    /// Attaches a hierarchical row index; its extent must equal the row count.
    pub fn with_row_index(mut self, index: IndexLevels) -> Result<Self, LayoutError> {
        if !index.is_empty() && index.len() != self.rows {
            return Err(LayoutError::IndexLevelMismatch {
                level: 0,
                expected: self.rows,
                actual: index.len(),
            });
        }
        self.row_index = Some(index);
        Ok(self)
    }

    /// Attaches a hierarchical column index; its extent must equal the column
    /// count.
    pub fn with_col_index(mut self, index: IndexLevels) -> Result<Self, LayoutError> {
        if !index.is_empty() && index.len() != self.cols {
            return Err(LayoutError::IndexLevelMismatch {
                level: 0,
                expected: self.cols,
                actual: index.len(),
            });
        }
        self.col_index = Some(index);
        Ok(self)
    }

    /// Manual override for one data cell; wins over every pattern rule.
    pub fn with_cell_patch(mut self, row: usize, col: usize, patch: StylePatch) -> Self {
        self.cell_patches.push(((row, col), patch));
        self
    }

    /// Declares an explicit merged region, anchored element-relative.
    pub fn with_merge(mut self, at: CellCoord, span: MergeSpan) -> Self {
        self.extra_merges.push((at, span));
        self
    }

    /// Enables structural separator borders: a divider between index and
    /// data, a divider between headers and data, and rules at outer-level
    /// index boundaries.
    pub fn with_separators(mut self) -> Self {
        self.separators = true;
        self
    }

    fn index_width(&self) -> usize {
        self.row_index.as_ref().map_or(0, |i| i.depth())
    }

    fn header_height(&self) -> usize {
        self.col_index.as_ref().map_or(0, |i| i.depth())
    }

    fn names_rows(&self) -> usize {
        match &self.row_index {
            Some(index) if index.has_names() => 1,
            _ => 0,
        }
    }

    fn data_origin(&self) -> CellCoord {
        CellCoord::new(
            (self.header_height() + self.names_rows()) as u32,
            self.index_width() as u32,
        )
    }

    fn footprint(&self) -> (u32, u32) {
        (
            (self.index_width() + self.cols) as u32,
            (self.header_height() + self.names_rows() + self.rows) as u32,
        )
    }

    /// Data rows that need a top separator rule (divider below headers plus
    /// outer-level row boundaries).
    fn separator_rows(&self) -> (bool, BTreeSet<usize>) {
        let divider = self.separators && (self.header_height() + self.names_rows()) > 0;
        let mut boundaries = BTreeSet::new();
        if self.separators {
            if let Some(index) = &self.row_index {
                for level in 0..index.depth().saturating_sub(1) {
                    for run in index.plan_level(level) {
                        if run.start > 0 {
                            boundaries.insert(run.start);
                        }
                    }
                }
            }
        }
        (divider, boundaries)
    }

    /// Data columns that need a left separator rule (divider after the row
    /// index plus outer-level column boundaries).
    fn separator_cols(&self) -> (bool, BTreeSet<usize>) {
        let divider = self.separators && self.index_width() > 0;
        let mut boundaries = BTreeSet::new();
        if self.separators {
            if let Some(index) = &self.col_index {
                for level in 0..index.depth().saturating_sub(1) {
                    for run in index.plan_level(level) {
                        if run.start > 0 {
                            boundaries.insert(run.start);
                        }
                    }
                }
            }
        }
        (divider, boundaries)
    }

    fn contributions(&self) -> Vec<PlacedCell> {
        let mut cells = Vec::new();
        let origin = self.data_origin();
        let index_width = self.index_width();

        let (row_divider, row_bounds) = self.separator_rows();
        let (col_divider, col_bounds) = self.separator_cols();
        let top_border = |data_row: usize| {
            if row_divider && data_row == 0 {
                Some(BorderLineStyle::Medium)
            } else if row_bounds.contains(&data_row) {
                Some(BorderLineStyle::Thin)
            } else {
                None
            }
        };
        let left_border = |data_col: usize| {
            if col_divider && data_col == 0 {
                Some(BorderLineStyle::Medium)
            } else if col_bounds.contains(&data_col) {
                Some(BorderLineStyle::Thin)
            } else {
                None
            }
        };

        // Column header band: one cell per planned run, merged across its span.
        if let Some(index) = &self.col_index {
            for run in index.plan() {
                let coord = CellCoord::new(run.level as u32, (index_width + run.start) as u32);
                let mut patch = StylePatch::new();
                if let Some(line) = left_border(run.start) {
                    patch = patch.with_border_left(line);
                }
                cells.push(
                    PlacedCell::new(coord, CellValue::text(run.label.clone()), CellRole::Header)
                        .with_labels(index.path_to(run.start, run.level))
                        .with_table_pos(run.level, run.start)
                        .with_span(MergeSpan::across(run.span as u16))
                        .with_patch(patch),
                );
            }

            // Column-level names down the corner column, when there is room.
            if index.has_names() && index_width > 0 {
                for level in 0..index.depth() {
                    if let Some(name) = index.name(level) {
                        let coord = CellCoord::new(level as u32, (index_width - 1) as u32);
                        cells.push(
                            PlacedCell::new(coord, CellValue::text(name), CellRole::Header)
                                .with_labels(vec![name.to_string()]),
                        );
                    }
                }
            }
        }

        // Row-index names row, directly above the data rows.
        if let Some(index) = &self.row_index {
            if index.has_names() {
                let names_row = (self.header_height()) as u32;
                for level in 0..index.depth() {
                    if let Some(name) = index.name(level) {
                        cells.push(
                            PlacedCell::new(
                                CellCoord::new(names_row, level as u32),
                                CellValue::text(name),
                                CellRole::Index,
                            )
                            .with_labels(vec![name.to_string()]),
                        );
                    }
                }
            }

            // Row index cells: one per planned run, merged down its span.
            for run in index.plan() {
                let coord = CellCoord::new(origin.row + run.start as u32, run.level as u32);
                let mut patch = StylePatch::new();
                if let Some(line) = top_border(run.start) {
                    patch = patch.with_border_top(line);
                }
                cells.push(
                    PlacedCell::new(coord, CellValue::text(run.label.clone()), CellRole::Index)
                        .with_labels(index.path_to(run.start, run.level))
                        .with_table_pos(run.start, run.level)
                        .with_span(MergeSpan::down(run.span as u16))
                        .with_patch(patch),
                );
            }
        }

        // Data cells.
        for i in 0..self.rows {
            let row_path = self.row_index.as_ref().map_or(Vec::new(), |idx| idx.path(i));
            for j in 0..self.cols {
                let mut labels = row_path.clone();
                if let Some(idx) = &self.col_index {
                    labels.extend(idx.path(j));
                }

                let mut patch = StylePatch::new();
                if let Some(line) = top_border(i) {
                    patch = patch.with_border_top(line);
                }
                if let Some(line) = left_border(j) {
                    patch = patch.with_border_left(line);
                }
                for ((row, col), manual) in &self.cell_patches {
                    if *row == i && *col == j {
                        patch.merge(manual);
                    }
                }

                cells.push(
                    PlacedCell::new(
                        origin.offset(i as u32, j as u32),
                        self.data[i][j].clone(),
                        CellRole::Body,
                    )
                    .with_labels(labels)
                    .with_table_pos(i, j)
                    .with_patch(patch),
                );
            }
        }

        // Explicit user-declared merges: attach to the matching cell, or
        // claim an empty region when nothing was contributed there.
        for (anchor, span) in &self.extra_merges {
            if let Some(cell) = cells.iter_mut().find(|c| c.coord == *anchor) {
                cell.span = if span.is_unit() { None } else { Some(*span) };
            } else {
                cells.push(
                    PlacedCell::new(*anchor, CellValue::Empty, CellRole::Body).with_span(*span),
                );
            }
        }

        cells
    }
}

// ============================================================================
// TEXT ELEMENT
// ============================================================================

/// Style presets for text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPreset {
    #[default]
    Plain,
    Title,
    Subtitle,
    Caption,
}

impl TextPreset {
    fn patch(&self) -> StylePatch {
        match self {
            TextPreset::Plain => StylePatch::new(),
            TextPreset::Title => StylePatch::new()
                .with_bold(true)
                .with_font_size(16)
                .with_text_align(sheet_model::TextAlign::Left),
            TextPreset::Subtitle => StylePatch::new()
                .with_bold(true)
                .with_font_size(14)
                .with_text_align(sheet_model::TextAlign::Left),
            TextPreset::Caption => StylePatch::new()
                .with_italic(true)
                .with_font_size(11)
                .with_text_align(sheet_model::TextAlign::Left),
        }
    }
}

/// A one-row text block, merged across its width when wider than one column.
#[derive(Debug, Clone)]
pub struct TextElement {
    text: String,
    width: u16,
    preset: TextPreset,
    patch: StylePatch,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        TextElement {
            text: text.into(),
            width: 1,
            preset: TextPreset::Plain,
            patch: StylePatch::new(),
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        TextElement::new(text).with_preset(TextPreset::Title)
    }

    pub fn subtitle(text: impl Into<String>) -> Self {
        TextElement::new(text).with_preset(TextPreset::Subtitle)
    }

    pub fn caption(text: impl Into<String>) -> Self {
        TextElement::new(text).with_preset(TextPreset::Caption)
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn with_preset(mut self, preset: TextPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Extra overrides on top of the preset.
    pub fn with_patch(mut self, patch: StylePatch) -> Self {
        self.patch = patch;
        self
    }

    fn footprint(&self) -> (u32, u32) {
        (self.width as u32, 1)
    }

    fn contributions(&self) -> Vec<PlacedCell> {
        let mut patch = self.preset.patch();
        patch.merge(&self.patch);
        vec![
            PlacedCell::new(CellCoord::new(0, 0), CellValue::text(self.text.as_str()), CellRole::Header)
                .with_span(MergeSpan::across(self.width))
                .with_patch(patch),
        ]
    }
}

// ============================================================================
// BAND ELEMENT
// ============================================================================

/// A one-row group-header band: a single label merged across the band width.
#[derive(Debug, Clone)]
pub struct BandElement {
    label: CellValue,
    width: u16,
    patch: StylePatch,
}

impl BandElement {
    pub fn new(label: impl Into<CellValue>, width: u16) -> Self {
        BandElement {
            label: label.into(),
            width: width.max(1),
            // Group bands read as section headings.
            patch: StylePatch::new()
                .with_bold(true)
                .with_font_size(13)
                .with_text_align(sheet_model::TextAlign::Left)
                .with_vertical_align(sheet_model::VerticalAlign::Bottom),
        }
    }

    pub fn with_patch(mut self, patch: StylePatch) -> Self {
        self.patch.merge(&patch);
        self
    }

    fn footprint(&self) -> (u32, u32) {
        (self.width as u32, 1)
    }

    fn contributions(&self) -> Vec<PlacedCell> {
        vec![
            PlacedCell::new(CellCoord::new(0, 0), self.label.clone(), CellRole::GroupHeader)
                .with_labels(vec![self.label.display()])
                .with_span(MergeSpan::across(self.width))
                .with_patch(self.patch.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn numbers(rows: usize, cols: usize) -> Vec<Vec<CellValue>> {
        (0..rows)
            .map(|i| (0..cols).map(|j| CellValue::from((i * cols + j) as f64)).collect())
            .collect()
    }

    #[test]
    fn test_plain_table_footprint() {
        let table = TableElement::new(numbers(3, 2)).unwrap();
        let element = Element::from(table);
        assert_eq!(element.footprint(), (2, 3));
    }

    #[test]
    fn test_indexed_table_footprint() {
        let table = TableElement::new(numbers(2, 3))
            .unwrap()
            .with_row_index(IndexLevels::new(vec![strs(&["a", "b"])]).unwrap())
            .unwrap()
            .with_col_index(
                IndexLevels::new(vec![strs(&["X", "X", "Y"]), strs(&["1", "2", "3"])]).unwrap(),
            )
            .unwrap();
        // 1 index column + 3 data columns; 2 header rows + 2 data rows.
        assert_eq!(Element::from(table).footprint(), (4, 4));
    }

    #[test]
    fn test_names_row_shifts_data() {
        let index = IndexLevels::new(vec![strs(&["a", "b"])])
            .unwrap()
            .with_names(vec![Some("key".to_string())]);
        let table = TableElement::new(numbers(2, 1))
            .unwrap()
            .with_row_index(index)
            .unwrap()
            .with_col_index(IndexLevels::single(vec!["v"]))
            .unwrap();

        let cells = Element::from(table).place(CellCoord::new(0, 0));
        // Names row sits between header (row 0) and data (rows 2..).
        let names_cell = cells.iter().find(|c| c.value == CellValue::text("key")).unwrap();
        assert_eq!(names_cell.coord, CellCoord::new(1, 0));
        let first_data = cells
            .iter()
            .find(|c| c.role == CellRole::Body && c.table_row == Some(0))
            .unwrap();
        assert_eq!(first_data.coord, CellCoord::new(2, 1));
    }

    #[test]
    fn test_header_runs_merge() {
        let table = TableElement::new(numbers(1, 3))
            .unwrap()
            .with_col_index(IndexLevels::new(vec![strs(&["A", "A", "B"])]).unwrap())
            .unwrap();

        let cells = Element::from(table).place(CellCoord::new(0, 0));
        let merged: Vec<_> = cells.iter().filter(|c| c.span.is_some()).collect();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].value, CellValue::text("A"));
        assert_eq!(merged[0].span, Some(MergeSpan::across(2)));
    }

    #[test]
    fn test_index_extent_mismatch() {
        let err = TableElement::new(numbers(3, 1))
            .unwrap()
            .with_row_index(IndexLevels::single(vec!["a", "b"]))
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::IndexLevelMismatch { level: 0, expected: 3, actual: 2 }
        );
    }

    #[test]
    fn test_ragged_data_rejected() {
        let data = vec![
            vec![CellValue::from(1.0), CellValue::from(2.0)],
            vec![CellValue::from(3.0)],
        ];
        let err = TableElement::new(data).unwrap_err();
        assert_eq!(err, LayoutError::RaggedData { row: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn test_placement_shifts_children() {
        let mut parent = Element::from(TextElement::title("Report"));
        let table = TableElement::new(numbers(1, 1)).unwrap();
        parent.add_child(Element::from(table), CellCoord::new(2, 0));

        let cells = parent.place(CellCoord::new(3, 1));
        let title = cells.iter().find(|c| c.value == CellValue::text("Report")).unwrap();
        let data = cells.iter().find(|c| c.role == CellRole::Body).unwrap();
        assert_eq!(title.coord, CellCoord::new(3, 1));
        assert_eq!(data.coord, CellCoord::new(5, 1));
    }

    #[test]
    fn test_separator_borders() {
        let table = TableElement::new(numbers(4, 2))
            .unwrap()
            .with_row_index(
                IndexLevels::new(vec![strs(&["A", "A", "B", "B"]), strs(&["x", "y", "x", "y"])])
                    .unwrap(),
            )
            .unwrap()
            .with_col_index(IndexLevels::single(vec!["u", "v"]))
            .unwrap()
            .with_separators();

        let cells = Element::from(table).place(CellCoord::new(0, 0));

        // First data row gets the header divider.
        let cell = cells
            .iter()
            .find(|c| c.role == CellRole::Body && c.table_row == Some(0) && c.table_col == Some(0))
            .unwrap();
        assert_eq!(cell.patch.borders.top, Some(BorderLineStyle::Medium));

        // First data column gets the index divider.
        assert_eq!(cell.patch.borders.left, Some(BorderLineStyle::Medium));

        // Outer-level boundary (row 2) gets a thin rule.
        let cell = cells
            .iter()
            .find(|c| c.role == CellRole::Body && c.table_row == Some(2) && c.table_col == Some(1))
            .unwrap();
        assert_eq!(cell.patch.borders.top, Some(BorderLineStyle::Thin));

        // Non-boundary rows are untouched.
        let cell = cells
            .iter()
            .find(|c| c.role == CellRole::Body && c.table_row == Some(1) && c.table_col == Some(1))
            .unwrap();
        assert_eq!(cell.patch.borders.top, None);
    }

    #[test]
    fn test_manual_cell_patch_carried() {
        let table = TableElement::new(numbers(1, 1))
            .unwrap()
            .with_cell_patch(0, 0, StylePatch::new().with_bold(true));
        let cells = Element::from(table).place(CellCoord::new(0, 0));
        assert_eq!(cells[0].patch.bold, Some(true));
    }

    #[test]
    fn test_explicit_merge_on_empty_region() {
        let table = TableElement::new(numbers(1, 1))
            .unwrap()
            .with_merge(CellCoord::new(3, 0), MergeSpan::new(1, 2));
        let cells = Element::from(table).place(CellCoord::new(0, 0));
        let merged = cells.iter().find(|c| c.coord == CellCoord::new(3, 0)).unwrap();
        assert_eq!(merged.span, Some(MergeSpan::new(1, 2)));
        assert!(merged.value.is_empty());
    }

    #[test]
    fn test_text_element_merges_across_width() {
        let text = TextElement::subtitle("Quarterly").with_width(4);
        let cells = Element::from(text).place(CellCoord::new(1, 1));
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].span, Some(MergeSpan::across(4)));
        assert_eq!(cells[0].patch.bold, Some(true));
        assert_eq!(cells[0].patch.font_size, Some(14));
    }

    #[test]
    fn test_band_role_and_label() {
        let band = BandElement::new("North", 3);
        let cells = Element::from(band).place(CellCoord::new(0, 0));
        assert_eq!(cells[0].role, CellRole::GroupHeader);
        assert_eq!(cells[0].labels, vec!["North".to_string()]);
        assert_eq!(cells[0].span, Some(MergeSpan::across(3)));
    }

    #[test]
    fn test_body_labels_combine_row_and_col_paths() {
        let table = TableElement::new(numbers(1, 1))
            .unwrap()
            .with_row_index(IndexLevels::single(vec!["north"]))
            .unwrap()
            .with_col_index(IndexLevels::single(vec!["sales"]))
            .unwrap();
        let cells = Element::from(table).place(CellCoord::new(0, 0));
        let body = cells.iter().find(|c| c.role == CellRole::Body).unwrap();
        assert_eq!(body.labels, strs(&["north", "sales"]));
    }
}
