//! FILENAME: sheet-layout/src/pattern.rs
//! PURPOSE: Pattern-matched style overrides.
//! CONTEXT: A rule pairs a structural predicate (selector) with a sparse
//! style patch. Rules are evaluated in declaration order against a cell's
//! identity; every matching rule's patch is folded in, later matches
//! overriding earlier ones attribute by attribute, never wholesale.

use crate::error::LayoutError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sheet_model::{CellCoord, StylePatch};

// ============================================================================
// CELL IDENTITY
// ============================================================================

/// The structural role of a cell within its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellRole {
    /// Column header label (including titles and header bands).
    Header,
    /// Data cell.
    Body,
    /// Repeated group header band.
    GroupHeader,
    /// Row index label.
    Index,
}

/// Everything a selector may ask about a cell: where it is, what role it
/// plays, its hierarchical label path and its position within its own table.
#[derive(Debug, Clone, PartialEq)]
pub struct CellIdentity {
    /// Absolute coordinate after placement.
    pub coord: CellCoord,
    pub role: CellRole,
    /// Labels from the outermost index level down to this cell's position.
    /// For body cells this is the row path followed by the column path.
    pub labels: Vec<String>,
    /// Zero-based data row within the immediate table (None outside a table
    /// grid, e.g. text or band cells).
    pub table_row: Option<usize>,
    /// Zero-based data column within the immediate table.
    pub table_col: Option<usize>,
}

// ============================================================================
// SELECTORS AND RULES
// ============================================================================

/// A predicate over a cell's structural identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selector {
    /// Exactly this absolute coordinate.
    At(CellCoord),
    /// Any coordinate in the inclusive rectangle.
    Range { start: CellCoord, end: CellCoord },
    /// Any cell with this role.
    Role(CellRole),
    /// Any cell whose label path contains this exact label.
    Label(String),
    /// Any cell with a label matching this regular expression.
    LabelRegex(String),
    /// Body cells on even data rows (0, 2, ...) of their table.
    EvenRows,
    /// Body cells on odd data rows of their table.
    OddRows,
    /// Body cells in even data columns of their table.
    EvenColumns,
    /// Body cells in odd data columns of their table.
    OddColumns,
}

/// A selector paired with the patch to apply when it matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: Selector,
    pub patch: StylePatch,
}

impl StyleRule {
    pub fn new(selector: Selector, patch: StylePatch) -> Self {
        StyleRule { selector, patch }
    }
}

// ============================================================================
// COMPILED RULE SET
// ============================================================================

/// An ordered rule list with label regexes compiled up front. Supplied
/// wholesale by the caller before a layout call; read-only afterwards.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<StyleRule>,
    // One slot per rule; Some only for LabelRegex selectors.
    regexes: Vec<Option<Regex>>,
}

impl RuleSet {
    /// Compiles the rule list. Fails fast on an uncompilable label regex or a
    /// patch with an unsupported attribute value, so layout never starts with
    /// a bad configuration.
    pub fn new(rules: Vec<StyleRule>) -> Result<Self, LayoutError> {
        let mut regexes = Vec::with_capacity(rules.len());
        for rule in &rules {
            rule.patch.validate()?;
            match &rule.selector {
                Selector::LabelRegex(pattern) => {
                    let compiled = Regex::new(pattern).map_err(|e| LayoutError::InvalidPattern {
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    })?;
                    regexes.push(Some(compiled));
                }
                _ => regexes.push(None),
            }
        }
        log::debug!("compiled rule set with {} rules", rules.len());
        Ok(RuleSet { rules, regexes })
    }

    pub fn empty() -> Self {
        RuleSet::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Folds the patches of every matching rule, in declaration order, into
    /// one combined patch. Deterministic; a cell matching no rule gets an
    /// empty patch.
    pub fn style_for(&self, identity: &CellIdentity) -> StylePatch {
        let mut folded = StylePatch::new();
        for (rule, regex) in self.rules.iter().zip(&self.regexes) {
            if self.matches(&rule.selector, regex.as_ref(), identity) {
                folded.merge(&rule.patch);
            }
        }
        folded
    }

    fn matches(&self, selector: &Selector, regex: Option<&Regex>, id: &CellIdentity) -> bool {
        match selector {
            Selector::At(coord) => id.coord == *coord,
            Selector::Range { start, end } => {
                id.coord.row >= start.row
                    && id.coord.row <= end.row
                    && id.coord.col >= start.col
                    && id.coord.col <= end.col
            }
            Selector::Role(role) => id.role == *role,
            Selector::Label(label) => id.labels.iter().any(|l| l == label),
            Selector::LabelRegex(_) => match regex {
                Some(re) => id.labels.iter().any(|l| re.is_match(l)),
                None => false,
            },
            // Parity applies to body cells only: banding "every even data
            // row" must not restripe header bands.
            Selector::EvenRows => id.role == CellRole::Body && parity_is(id.table_row, 0),
            Selector::OddRows => id.role == CellRole::Body && parity_is(id.table_row, 1),
            Selector::EvenColumns => id.role == CellRole::Body && parity_is(id.table_col, 0),
            Selector::OddColumns => id.role == CellRole::Body && parity_is(id.table_col, 1),
        }
    }

    /// Verifies every coordinate-targeted rule lies inside the laid-out
    /// region. A rule matching nothing is fine; a rule that cannot possibly
    /// match because its coordinates are out of range is a caller bug.
    pub(crate) fn check_bounds(&self, rows: u32, cols: u32) -> Result<(), LayoutError> {
        let out = |at: CellCoord| LayoutError::RuleOutOfRange { at, rows, cols };
        for rule in &self.rules {
            match &rule.selector {
                Selector::At(coord) => {
                    if coord.row >= rows || coord.col >= cols {
                        return Err(out(*coord));
                    }
                }
                Selector::Range { end, .. } => {
                    if end.row >= rows || end.col >= cols {
                        return Err(out(*end));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn parity_is(index: Option<usize>, want: usize) -> bool {
    index.map_or(false, |i| i % 2 == want)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_model::Color;

    fn body_identity(row: u32, col: u32) -> CellIdentity {
        CellIdentity {
            coord: CellCoord::new(row, col),
            role: CellRole::Body,
            labels: Vec::new(),
            table_row: Some(row as usize),
            table_col: Some(col as usize),
        }
    }

    #[test]
    fn test_role_selector() {
        let rules = RuleSet::new(vec![StyleRule::new(
            Selector::Role(CellRole::Header),
            StylePatch::new().with_bold(true),
        )])
        .unwrap();

        let header = CellIdentity {
            coord: CellCoord::new(0, 0),
            role: CellRole::Header,
            labels: vec!["sales".to_string()],
            table_row: Some(0),
            table_col: Some(0),
        };
        let body = body_identity(1, 0);

        assert_eq!(rules.style_for(&header).bold, Some(true));
        assert_eq!(rules.style_for(&body).bold, None);
    }

    #[test]
    fn test_declaration_order_fold() {
        let rules = RuleSet::new(vec![
            StyleRule::new(
                Selector::Role(CellRole::Body),
                StylePatch::new().with_bold(true).with_font_size(10),
            ),
            StyleRule::new(
                Selector::EvenRows,
                StylePatch::new().with_bold(false),
            ),
        ])
        .unwrap();

        // Even row: both rules match, the later wins on bold only.
        let patch = rules.style_for(&body_identity(2, 0));
        assert_eq!(patch.bold, Some(false));
        assert_eq!(patch.font_size, Some(10));

        // Odd row: only the first rule matches.
        let patch = rules.style_for(&body_identity(1, 0));
        assert_eq!(patch.bold, Some(true));
    }

    #[test]
    fn test_label_equality_matches_any_path_entry() {
        let rules = RuleSet::new(vec![StyleRule::new(
            Selector::Label("Total".to_string()),
            StylePatch::new().with_bold(true),
        )])
        .unwrap();

        let mut id = body_identity(3, 1);
        id.labels = vec!["North".to_string(), "Total".to_string()];
        assert_eq!(rules.style_for(&id).bold, Some(true));

        id.labels = vec!["North".to_string(), "Q1".to_string()];
        assert!(rules.style_for(&id).is_empty());
    }

    #[test]
    fn test_label_regex() {
        let rules = RuleSet::new(vec![StyleRule::new(
            Selector::LabelRegex("^Q[0-9]$".to_string()),
            StylePatch::new().with_number_format("#,##0"),
        )])
        .unwrap();

        let mut id = body_identity(0, 0);
        id.labels = vec!["Q3".to_string()];
        assert!(rules.style_for(&id).number_format.is_some());

        id.labels = vec!["Quarter".to_string()];
        assert!(rules.style_for(&id).number_format.is_none());
    }

    #[test]
    fn test_bad_regex_rejected_at_compile() {
        let err = RuleSet::new(vec![StyleRule::new(
            Selector::LabelRegex("[unclosed".to_string()),
            StylePatch::new(),
        )])
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidPattern { .. }));
    }

    #[test]
    fn test_bad_patch_rejected_at_compile() {
        let err = RuleSet::new(vec![StyleRule::new(
            Selector::Role(CellRole::Body),
            StylePatch::new().with_font_size(0),
        )])
        .unwrap_err();
        assert!(matches!(err, LayoutError::Style(_)));
    }

    #[test]
    fn test_parity_ignores_non_body_cells() {
        let rules = RuleSet::new(vec![StyleRule::new(
            Selector::EvenRows,
            StylePatch::new().with_fill(Color::new(240, 240, 240)),
        )])
        .unwrap();

        let mut header = body_identity(0, 0);
        header.role = CellRole::Header;
        assert!(rules.style_for(&header).is_empty());

        let mut band = body_identity(0, 0);
        band.role = CellRole::GroupHeader;
        band.table_row = None;
        assert!(rules.style_for(&band).is_empty());

        assert!(!rules.style_for(&body_identity(0, 0)).is_empty());
        assert!(rules.style_for(&body_identity(1, 0)).is_empty());
    }

    #[test]
    fn test_coordinate_selectors() {
        let rules = RuleSet::new(vec![
            StyleRule::new(
                Selector::At(CellCoord::new(1, 1)),
                StylePatch::new().with_bold(true),
            ),
            StyleRule::new(
                Selector::Range {
                    start: CellCoord::new(0, 0),
                    end: CellCoord::new(0, 5),
                },
                StylePatch::new().with_italic(true),
            ),
        ])
        .unwrap();

        assert_eq!(rules.style_for(&body_identity(1, 1)).bold, Some(true));
        assert_eq!(rules.style_for(&body_identity(0, 3)).italic, Some(true));
        assert!(rules.style_for(&body_identity(2, 2)).is_empty());
    }

    #[test]
    fn test_bounds_check() {
        let rules = RuleSet::new(vec![StyleRule::new(
            Selector::At(CellCoord::new(10, 0)),
            StylePatch::new().with_bold(true),
        )])
        .unwrap();

        assert!(rules.check_bounds(11, 1).is_ok());
        let err = rules.check_bounds(5, 5).unwrap_err();
        assert!(matches!(err, LayoutError::RuleOutOfRange { .. }));
    }

    #[test]
    fn test_rule_serde_roundtrip() {
        let rule = StyleRule::new(
            Selector::LabelRegex("^total".to_string()),
            StylePatch::new().with_bold(true),
        );
        let json = serde_json::to_string(&rule).unwrap();
        let back: StyleRule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, back);
    }
}
