//! FILENAME: sheet-model/src/style.rs
//! PURPOSE: Cell style data structures and the cascading resolve operation.
//! CONTEXT: Two representations exist side by side. `CellStyle` is dense:
//! every attribute has a concrete value and it is what the writer collaborator
//! receives. `StylePatch` is sparse: every attribute is optional, and unset
//! attributes fall through to whatever they are layered on top of — never to
//! sibling cells. Style resolution is a pure fold of patches over a base style.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ATTRIBUTE ENUMS
// ============================================================================

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextAlign {
    #[default]
    General, // Auto: numbers right, text left
    Left,
    Center,
    Right,
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Text rotation, in degrees counter-clockwise from horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextRotation {
    #[default]
    None,
    Rotate90,
    Rotate270,
    Custom(i16), // Custom angle: -90 to +90 degrees
}

/// Line style for a border edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
}

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn black() -> Self {
        Color::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Color::new(255, 255, 255)
    }

    /// Render as a hex string, e.g. "#ff0000".
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse from a hex string (e.g. "#FF0000" or "FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::new(r, g, b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

/// Border line styles for all four edges of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Borders {
    pub top: BorderLineStyle,
    pub right: BorderLineStyle,
    pub bottom: BorderLineStyle,
    pub left: BorderLineStyle,
}

// ============================================================================
// DENSE STYLE
// ============================================================================

/// A fully-resolved cell style. This is what the writer collaborator receives;
/// every attribute has a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    pub font_family: String,
    pub font_size: u16, // Font size in points
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_color: Color,
    pub fill: Color,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub number_format: String,
    pub borders: Borders,
    pub wrap_text: bool,
    pub rotation: TextRotation,
    pub indent: u8, // Number of indent levels
}

impl CellStyle {
    pub fn new() -> Self {
        CellStyle {
            font_family: "Calibri".to_string(),
            font_size: 11,
            bold: false,
            italic: false,
            underline: false,
            font_color: Color::black(),
            fill: Color::white(),
            text_align: TextAlign::General,
            vertical_align: VerticalAlign::Middle,
            number_format: "General".to_string(),
            borders: Borders::default(),
            wrap_text: false,
            rotation: TextRotation::None,
            indent: 0,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = color;
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    pub fn with_number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = format.into();
        self
    }

    pub fn with_wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle::new()
    }
}

// ============================================================================
// SPARSE PATCH
// ============================================================================

/// Optional border overrides per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BorderPatch {
    pub top: Option<BorderLineStyle>,
    pub right: Option<BorderLineStyle>,
    pub bottom: Option<BorderLineStyle>,
    pub left: Option<BorderLineStyle>,
}

impl BorderPatch {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// A sparse style override. Unset attributes are untouched when the patch is
/// applied; they inherit from the style underneath, never from sibling cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StylePatch {
    pub font_family: Option<String>,
    pub font_size: Option<u16>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub font_color: Option<Color>,
    pub fill: Option<Color>,
    pub text_align: Option<TextAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub number_format: Option<String>,
    pub borders: BorderPatch,
    pub wrap_text: Option<bool>,
    pub rotation: Option<TextRotation>,
    pub indent: Option<u8>,
}

impl StylePatch {
    pub fn new() -> Self {
        StylePatch::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &StylePatch::default()
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    pub fn with_number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = Some(format.into());
        self
    }

    pub fn with_wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = Some(wrap);
        self
    }

    pub fn with_rotation(mut self, rotation: TextRotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn with_border_top(mut self, style: BorderLineStyle) -> Self {
        self.borders.top = Some(style);
        self
    }

    pub fn with_border_right(mut self, style: BorderLineStyle) -> Self {
        self.borders.right = Some(style);
        self
    }

    pub fn with_border_bottom(mut self, style: BorderLineStyle) -> Self {
        self.borders.bottom = Some(style);
        self
    }

    pub fn with_border_left(mut self, style: BorderLineStyle) -> Self {
        self.borders.left = Some(style);
        self
    }

    /// Overlays `other` on top of this patch, attribute by attribute.
    /// Attributes set in `other` win; attributes unset in `other` keep
    /// whatever this patch already has.
    pub fn merge(&mut self, other: &StylePatch) {
        if other.font_family.is_some() {
            self.font_family = other.font_family.clone();
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.italic.is_some() {
            self.italic = other.italic;
        }
        if other.underline.is_some() {
            self.underline = other.underline;
        }
        if other.font_color.is_some() {
            self.font_color = other.font_color;
        }
        if other.fill.is_some() {
            self.fill = other.fill;
        }
        if other.text_align.is_some() {
            self.text_align = other.text_align;
        }
        if other.vertical_align.is_some() {
            self.vertical_align = other.vertical_align;
        }
        if other.number_format.is_some() {
            self.number_format = other.number_format.clone();
        }
        if other.borders.top.is_some() {
            self.borders.top = other.borders.top;
        }
        if other.borders.right.is_some() {
            self.borders.right = other.borders.right;
        }
        if other.borders.bottom.is_some() {
            self.borders.bottom = other.borders.bottom;
        }
        if other.borders.left.is_some() {
            self.borders.left = other.borders.left;
        }
        if other.wrap_text.is_some() {
            self.wrap_text = other.wrap_text;
        }
        if other.rotation.is_some() {
            self.rotation = other.rotation;
        }
        if other.indent.is_some() {
            self.indent = other.indent;
        }
    }

    /// Applies every set attribute of this patch onto a dense style.
    pub fn apply_to(&self, style: &mut CellStyle) {
        if let Some(ref family) = self.font_family {
            style.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            style.font_size = size;
        }
        if let Some(bold) = self.bold {
            style.bold = bold;
        }
        if let Some(italic) = self.italic {
            style.italic = italic;
        }
        if let Some(underline) = self.underline {
            style.underline = underline;
        }
        if let Some(color) = self.font_color {
            style.font_color = color;
        }
        if let Some(fill) = self.fill {
            style.fill = fill;
        }
        if let Some(align) = self.text_align {
            style.text_align = align;
        }
        if let Some(align) = self.vertical_align {
            style.vertical_align = align;
        }
        if let Some(ref format) = self.number_format {
            style.number_format = format.clone();
        }
        if let Some(line) = self.borders.top {
            style.borders.top = line;
        }
        if let Some(line) = self.borders.right {
            style.borders.right = line;
        }
        if let Some(line) = self.borders.bottom {
            style.borders.bottom = line;
        }
        if let Some(line) = self.borders.left {
            style.borders.left = line;
        }
        if let Some(wrap) = self.wrap_text {
            style.wrap_text = wrap;
        }
        if let Some(rotation) = self.rotation {
            style.rotation = rotation;
        }
        if let Some(indent) = self.indent {
            style.indent = indent;
        }
    }

    /// Checks every set attribute against the supported value ranges.
    /// Reported here, at resolve time, so a layout job can abort before any
    /// records are produced.
    pub fn validate(&self) -> Result<(), StyleError> {
        if let Some(size) = self.font_size {
            if !(1..=409).contains(&size) {
                return Err(StyleError::FontSize(size));
            }
        }
        if let Some(TextRotation::Custom(angle)) = self.rotation {
            if !(-90..=90).contains(&angle) {
                return Err(StyleError::Rotation(angle));
            }
        }
        if let Some(indent) = self.indent {
            if indent > 15 {
                return Err(StyleError::Indent(indent));
            }
        }
        if let Some(ref format) = self.number_format {
            validate_number_format(format)?;
        }
        Ok(())
    }
}

// ============================================================================
// VALIDATION & RESOLUTION
// ============================================================================

/// An attribute/value combination outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("unsupported font size {0} (expected 1..=409 points)")]
    FontSize(u16),

    #[error("unsupported text rotation {0} (expected -90..=90 degrees)")]
    Rotation(i16),

    #[error("unsupported indent level {0} (expected 0..=15)")]
    Indent(u8),

    #[error("invalid number format {format:?}: {reason}")]
    NumberFormat { format: String, reason: String },
}

/// Minimal structural check of a number format string: it must be non-empty
/// with balanced quoted literals and bracket sections.
fn validate_number_format(format: &str) -> Result<(), StyleError> {
    let invalid = |reason: &str| StyleError::NumberFormat {
        format: format.to_string(),
        reason: reason.to_string(),
    };

    if format.is_empty() {
        return Err(invalid("empty format string"));
    }

    let mut in_quote = false;
    let mut in_bracket = false;
    for c in format.chars() {
        match c {
            '"' => in_quote = !in_quote,
            '[' if !in_quote => {
                if in_bracket {
                    return Err(invalid("nested '[' section"));
                }
                in_bracket = true;
            }
            ']' if !in_quote => {
                if !in_bracket {
                    return Err(invalid("']' without matching '['"));
                }
                in_bracket = false;
            }
            _ => {}
        }
    }
    if in_quote {
        return Err(invalid("unterminated quoted literal"));
    }
    if in_bracket {
        return Err(invalid("unterminated '[' section"));
    }
    Ok(())
}

/// Resolves a base style plus an ordered sequence of overrides into one dense
/// style. Later overrides win per attribute; unset attributes fall through to
/// `base`. Pure function: no hidden state, safe to call concurrently.
pub fn resolve_style(base: &CellStyle, overrides: &[StylePatch]) -> Result<CellStyle, StyleError> {
    let mut resolved = base.clone();
    for patch in overrides {
        patch.validate()?;
        patch.apply_to(&mut resolved);
    }
    Ok(resolved)
}
