//! Text payloads

use crate::geom::{LengthAdjust, Method, Spacing, TextLength};

/// `<text>`
///
/// `dx`, `dy` and `rotate` are written out only when non-zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub rotate: f64,
    pub text_length: Option<TextLength>,
    pub length_adjust: Option<LengthAdjust>,
    /// Character data; empty means the element has no content
    pub contents: String,
}

impl Text {
    pub fn new(x: f64, y: f64, contents: impl Into<String>) -> Self {
        Self {
            x,
            y,
            contents: contents.into(),
            ..Default::default()
        }
    }
}

/// `<textpath>`: text laid out along the path referenced by `href`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextPath {
    pub href: Option<String>,
    pub length_adjust: Option<LengthAdjust>,
    pub method: Option<Method>,
    pub spacing: Option<Spacing>,
    pub start_offset: Option<TextLength>,
    pub text_length: Option<TextLength>,
    pub contents: String,
}

impl TextPath {
    pub fn new(href: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            contents: contents.into(),
            ..Default::default()
        }
    }
}
