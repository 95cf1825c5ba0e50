//! FILENAME: tests/common/mod.rs
//! Shared fixtures for sheet-layout integration tests.

use sheet_layout::{Element, GridData, IndexLevels, TableElement};
use sheet_model::CellValue;

pub fn strs(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// A 4x3 quarterly sales grid: two row-index levels (region, quarter) and one
/// column-index level (metric).
pub fn sales_source() -> GridData {
    let data = vec![
        vec![CellValue::from(100.0), CellValue::from(10.0), CellValue::from(0.10)],
        vec![CellValue::from(120.0), CellValue::from(12.0), CellValue::from(0.12)],
        vec![CellValue::from(90.0), CellValue::from(9.0), CellValue::from(0.09)],
        vec![CellValue::from(80.0), CellValue::from(8.0), CellValue::from(0.08)],
    ];
    GridData::new(data)
        .unwrap()
        .with_row_index(
            IndexLevels::new(vec![
                strs(&["North", "North", "South", "South"]),
                strs(&["Q1", "Q2", "Q1", "Q2"]),
            ])
            .unwrap(),
        )
        .unwrap()
        .with_col_index(IndexLevels::single(vec!["sales", "units", "margin"]))
        .unwrap()
}

pub fn sales_table() -> Element {
    Element::from(TableElement::from_source(&sales_source()).unwrap())
}

/// A single-row, two-column body table for grouped rendering tests.
pub fn body_row(values: (f64, f64)) -> Element {
    Element::from(
        TableElement::new(vec![vec![
            CellValue::from(values.0),
            CellValue::from(values.1),
        ]])
        .unwrap(),
    )
}

