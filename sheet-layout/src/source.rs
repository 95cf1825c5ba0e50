//! FILENAME: sheet-layout/src/source.rs
//! PURPOSE: Collaborator seams — the data source feeding the engine and the
//! writer receiving the resolved records.
//! CONTEXT: The engine makes no assumption about where data comes from or
//! what file format it ends up in beyond "supports cell styling and merged
//! ranges"; both ends are traits.

use crate::error::LayoutError;
use crate::layout::CellRecord;
use crate::spans::IndexLevels;
use serde::{Deserialize, Serialize};
use sheet_model::CellValue;

/// An ordered rectangular grid of values with optional hierarchical indices,
/// as supplied by the data collaborator.
pub trait TableSource {
    /// (rows, cols) of the data grid.
    fn shape(&self) -> (usize, usize);

    /// The value at a 0-based position inside the grid.
    fn value(&self, row: usize, col: usize) -> CellValue;

    fn row_index(&self) -> Option<&IndexLevels> {
        None
    }

    fn col_index(&self) -> Option<&IndexLevels> {
        None
    }
}

/// An owned in-memory table source, for tests and simple callers.
#[derive(Debug, Clone, Default)]
pub struct GridData {
    data: Vec<Vec<CellValue>>,
    cols: usize,
    row_index: Option<IndexLevels>,
    col_index: Option<IndexLevels>,
}

impl GridData {
    /// Builds a source from a rectangular value grid.
    pub fn new(data: Vec<Vec<CellValue>>) -> Result<Self, LayoutError> {
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
        Ok(GridData {
            data,
            cols,
            row_index: None,
            col_index: None,
        })
    }

    pub fn with_row_index(mut self, index: IndexLevels) -> Result<Self, LayoutError> {
        if !index.is_empty() && index.len() != self.data.len() {
            return Err(LayoutError::IndexLevelMismatch {
                level: 0,
                expected: self.data.len(),
                actual: index.len(),
            });
        }
        self.row_index = Some(index);
        Ok(self)
    }

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
}

impl TableSource for GridData {
    fn shape(&self) -> (usize, usize) {
        (self.data.len(), self.cols)
    }

    fn value(&self, row: usize, col: usize) -> CellValue {
        self.data[row][col].clone()
    }

    fn row_index(&self) -> Option<&IndexLevels> {
        self.row_index.as_ref()
    }

    fn col_index(&self) -> Option<&IndexLevels> {
        self.col_index.as_ref()
    }
}

/// Document-level defaults handed to the writer once per export job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    pub font_family: String,
    pub font_size: u8,
    pub number_format: String,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        DocumentDefaults {
            font_family: "Calibri".to_string(),
            font_size: 11,
            number_format: "General".to_string(),
        }
    }
}

/// The writer collaborator. Receives document defaults once, then every
/// resolved cell record; encoding into a concrete spreadsheet format is
/// entirely its concern.
pub trait CellSink {
    fn begin(&mut self, _defaults: &DocumentDefaults) {}

    fn cell(&mut self, record: &CellRecord);
}

/// A sink that collects records in memory; useful for tests and for callers
/// that post-process the record list themselves.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub defaults: Option<DocumentDefaults>,
    pub records: Vec<CellRecord>,
}

impl CellSink for RecordingSink {
    fn begin(&mut self, defaults: &DocumentDefaults) {
        self.defaults = Some(defaults.clone());
    }

    fn cell(&mut self, record: &CellRecord) {
        self.records.push(record.clone());
    }
}
