//! FILENAME: sheet-layout/src/group.rs
//! PURPOSE: Grouped rendering — repeated header bands over bundles of rows.
//! CONTEXT: Groups are computed once from input order (stable, first
//! appearance wins; the data is not sorted) and consumed to emit one header
//! element plus one body element per member row, stacked vertically with no
//! gaps. The elements are discarded after layout like any other.

use crate::element::Element;
use crate::error::LayoutError;
use sheet_model::CellCoord;

/// A key plus the ordered row positions sharing that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub rows: Vec<usize>,
}

impl Group {
    /// Partitions row keys into groups. Rows sharing a key are gathered in
    /// input order; groups are ordered by first occurrence. No sorting.
    pub fn partition(keys: &[String]) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        for (row, key) in keys.iter().enumerate() {
            match groups.iter_mut().find(|g| g.key == *key) {
                Some(group) => group.rows.push(row),
                None => groups.push(Group {
                    key: key.clone(),
                    rows: vec![row],
                }),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renders groups into placed elements: for each group in input order, one
/// header element immediately followed by one body element per member row,
/// stacked vertically with no gaps.
///
/// An empty group list yields an empty placement list (a valid, empty export
/// region) unless `require_non_empty` is set, in which case it is an error.
pub fn render_groups<H, B>(
    groups: &[Group],
    mut header: H,
    mut body: B,
    require_non_empty: bool,
) -> Result<Vec<(CellCoord, Element)>, LayoutError>
where
    H: FnMut(&Group) -> Element,
    B: FnMut(&Group, usize) -> Element,
{
    if groups.is_empty() {
        if require_non_empty {
            return Err(LayoutError::EmptyGroupSet);
        }
        return Ok(Vec::new());
    }

    let mut placements = Vec::new();
    let mut row = 0u32;
    for group in groups {
        let header_element = header(group);
        let (_, height) = header_element.footprint();
        placements.push((CellCoord::new(row, 0), header_element));
        row += height;

        for &source_row in &group.rows {
            let body_element = body(group, source_row);
            let (_, height) = body_element.footprint();
            placements.push((CellCoord::new(row, 0), body_element));
            row += height;
        }
    }

    log::debug!(
        "rendered {} groups into {} placed elements",
        groups.len(),
        placements.len()
    );
    Ok(placements)
}
