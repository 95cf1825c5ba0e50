//! FILENAME: sheet-layout/src/spans.rs
//! PURPOSE: Hierarchical index planning — which adjacent header cells merge.
//! CONTEXT: An index is an ordered list of levels, each an ordered list of
//! labels aligned to the data extent. Runs of equal labels at a level collapse
//! into one spanning header cell, but a run never crosses a boundary of any
//! outer level: runs are computed over the full label *prefix* down to the
//! level in question, which yields a strict tree of merges with no overlap.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// One planned header cell: a run of equal labels at one level.
///
/// `start` and `span` are positions along the indexed axis (rows for a row
/// index, columns for a column index); `level` is the depth, 0 = outermost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub level: usize,
    pub start: usize,
    pub span: usize,
    pub label: String,
}

/// A hierarchical index: per-level label sequences plus optional level names.
/// All levels have the same length, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IndexLevels {
    levels: Vec<Vec<String>>,
    names: Vec<Option<String>>,
}

impl IndexLevels {
    /// Builds an index from per-level label sequences. Every level must have
    /// the same number of labels; the first mismatching level is reported.
    pub fn new(levels: Vec<Vec<String>>) -> Result<Self, LayoutError> {
        if let Some(expected) = levels.first().map(|l| l.len()) {
            for (level, labels) in levels.iter().enumerate() {
                if labels.len() != expected {
                    return Err(LayoutError::IndexLevelMismatch {
                        level,
                        expected,
                        actual: labels.len(),
                    });
                }
            }
        }
        Ok(IndexLevels {
            levels,
            names: Vec::new(),
        })
    }

    /// Convenience constructor for a single-level index.
    pub fn single(labels: Vec<impl Into<String>>) -> Self {
        IndexLevels {
            levels: vec![labels.into_iter().map(Into::into).collect()],
            names: Vec::new(),
        }
    }

    /// Attaches per-level names (rendered in a names band when present).
    pub fn with_names(mut self, names: Vec<Option<String>>) -> Self {
        self.names = names;
        self
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Extent along the indexed axis (0 for an empty index).
    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, |l| l.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_names(&self) -> bool {
        self.names.iter().any(|n| n.is_some())
    }

    pub fn name(&self, level: usize) -> Option<&str> {
        self.names.get(level).and_then(|n| n.as_deref())
    }

    pub fn label(&self, level: usize, pos: usize) -> &str {
        &self.levels[level][pos]
    }

    /// The label path from the outermost level down to `pos` at `level`.
    pub fn path_to(&self, pos: usize, level: usize) -> Vec<String> {
        self.levels[..=level]
            .iter()
            .map(|labels| labels[pos].clone())
            .collect()
    }

    /// The full label path (all levels) at `pos`.
    pub fn path(&self, pos: usize) -> Vec<String> {
        if self.levels.is_empty() {
            return Vec::new();
        }
        self.path_to(pos, self.depth() - 1)
    }

    /// Plans the header layout: one `HeaderCell` per label run per level,
    /// outermost level first, runs left to right. A run splits wherever any
    /// outer level changes, even if this level's labels are equal across the
    /// boundary. An empty index yields no cells.
    pub fn plan(&self) -> Vec<HeaderCell> {
        let extent = self.len();
        let mut cells = Vec::new();

        for level in 0..self.depth() {
            let mut start = 0;
            for pos in 1..=extent {
                let boundary = pos == extent || self.prefix_differs(level, pos);
                if boundary {
                    cells.push(HeaderCell {
                        level,
                        start,
                        span: pos - start,
                        label: self.levels[level][start].clone(),
                    });
                    start = pos;
                }
            }
        }

        cells
    }

    /// Plans a single level (used for structural border rules).
    pub fn plan_level(&self, level: usize) -> Vec<HeaderCell> {
        self.plan().into_iter().filter(|c| c.level == level).collect()
    }

    /// True when any label in levels 0..=level differs between pos-1 and pos.
    fn prefix_differs(&self, level: usize, pos: usize) -> bool {
        self.levels[..=level]
            .iter()
            .any(|labels| labels[pos - 1] != labels[pos])
    }
}
