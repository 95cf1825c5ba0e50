//! FILENAME: tests/test_grouping.rs
//! Integration tests for grouped rendering: repeated header bands over row
//! bundles, end to end through the layout engine.

mod common;

use common::body_row;
use sheet_layout::{
    render_groups, BandElement, CellRole, Element, Group, LayoutConfig, LayoutEngine,
    LayoutError, RuleSet, Selector, StyleRule,
};
use sheet_model::{CellCoord, CellStyle, CellValue, MergeSpan, StylePatch};

fn keys(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn sample_rows() -> Vec<(f64, f64)> {
    vec![(1.0, 10.0), (2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]
}

#[test]
fn test_grouped_report_end_to_end() {
    let rows = sample_rows();
    let groups = Group::partition(&keys(&["West", "West", "East", "West"]));

    let placements = render_groups(
        &groups,
        |group| Element::from(BandElement::new(group.key.clone(), 2)),
        |_, row| body_row(rows[row]),
        false,
    )
    .unwrap();

    let engine = LayoutEngine::default();
    let records = engine.layout(&placements).unwrap();

    // Bands appear in first-occurrence order; West gathers rows 0, 1 and 3.
    let bands: Vec<_> = records
        .iter()
        .filter(|r| r.role == CellRole::GroupHeader)
        .collect();
    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].value, CellValue::text("West"));
    assert_eq!(bands[0].coord, CellCoord::new(0, 0));
    assert_eq!(bands[0].span, Some(MergeSpan::across(2)));
    assert_eq!(bands[1].value, CellValue::text("East"));
    assert_eq!(bands[1].coord, CellCoord::new(4, 0));

    // Band styling reads as a section heading.
    assert!(bands[0].style.bold);
    assert_eq!(bands[0].style.font_size, 13);

    // Body rows sit directly under their band, in input order, no gaps.
    let body_values: Vec<_> = records
        .iter()
        .filter(|r| r.role == CellRole::Body && r.coord.col == 0)
        .map(|r| (r.coord.row, r.value.clone()))
        .collect();
    assert_eq!(
        body_values,
        vec![
            (1, CellValue::Number(1.0)),
            (2, CellValue::Number(2.0)),
            (3, CellValue::Number(4.0)),
            (5, CellValue::Number(3.0)),
        ]
    );
}

#[test]
fn test_group_band_styles_compose_with_rules() {
    let rules = RuleSet::new(vec![StyleRule::new(
        Selector::Role(CellRole::GroupHeader),
        StylePatch::new().with_underline(true),
    )])
    .unwrap();
    let engine = LayoutEngine::new(LayoutConfig::new(CellStyle::new(), rules));

    let rows = sample_rows();
    let groups = Group::partition(&keys(&["A"]));
    let placements = render_groups(
        &groups,
        |group| Element::from(BandElement::new(group.key.clone(), 2)),
        |_, row| body_row(rows[row]),
        false,
    )
    .unwrap();

    let records = engine.layout(&placements).unwrap();
    let band = records.iter().find(|r| r.role == CellRole::GroupHeader).unwrap();
    // The rule's underline composes with the band's own bold patch, and the
    // band patch (a per-cell override) still wins where both set a value.
    assert!(band.style.underline);
    assert!(band.style.bold);
}

#[test]
fn test_group_count_matches_band_count() {
    let rows = sample_rows();
    let key_list = keys(&["a", "b", "b", "c"]);
    let groups = Group::partition(&key_list);

    let placements = render_groups(
        &groups,
        |group| Element::from(BandElement::new(group.key.clone(), 2)),
        |_, row| body_row(rows[row]),
        false,
    )
    .unwrap();

    // One header per group plus one body per source row.
    assert_eq!(placements.len(), groups.len() + key_list.len());
}

#[test]
fn test_empty_group_set_is_a_valid_empty_region() {
    let placements = render_groups(
        &[],
        |group: &Group| Element::from(BandElement::new(group.key.clone(), 2)),
        |_, _| body_row((0.0, 0.0)),
        false,
    )
    .unwrap();
    assert!(placements.is_empty());

    let engine = LayoutEngine::default();
    assert!(engine.layout(&placements).unwrap().is_empty());
}

#[test]
fn test_empty_group_set_rejected_on_request() {
    let err = render_groups(
        &[],
        |group: &Group| Element::from(BandElement::new(group.key.clone(), 2)),
        |_, _| body_row((0.0, 0.0)),
        true,
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::EmptyGroupSet);
}
