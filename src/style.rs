//! Style record and the inline `style` attribute grammar
//!
//! The grammar is a CSS declaration list, `name:value;name:value`. Parsing
//! is best effort: a declaration that is malformed or names an unknown
//! property is skipped and the rest of the list is still read.

use std::fmt;

use compact_str::CompactString;

use crate::number::{self, Scanner};

// =============================================================================
// Keyword enums
// =============================================================================

keyword_enum! {
    /// `fill-rule`
    #[derive(Default)]
    pub enum FillRule {
        #[default]
        NonZero => "nonzero",
        EvenOdd => "evenodd",
    }
}

keyword_enum! {
    /// `stroke-linecap`
    #[derive(Default)]
    pub enum LineCap {
        #[default]
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
}

keyword_enum! {
    /// `stroke-linejoin`
    #[derive(Default)]
    pub enum LineJoin {
        Arcs => "arcs",
        Bevel => "bevel",
        #[default]
        Miter => "miter",
        MiterClip => "miter-clip",
        Round => "round",
    }
}

keyword_enum! {
    /// `font-weight`
    #[derive(Default)]
    pub enum FontWeight {
        #[default]
        Normal => "normal",
        Bolder => "bolder",
        Bold => "bold",
        Lighter => "lighter",
        W100 => "100",
        W200 => "200",
        W300 => "300",
        W400 => "400",
        W500 => "500",
        W600 => "600",
        W700 => "700",
        W800 => "800",
        W900 => "900",
    }
}

keyword_enum! {
    /// `font-stretch`
    #[derive(Default)]
    pub enum FontStretch {
        #[default]
        Normal => "normal",
        UltraCondensed => "ultra-condensed",
        ExtraCondensed => "extra-condensed",
        Condensed => "condensed",
        SemiCondensed => "semi-condensed",
        SemiExpanded => "semi-expanded",
        Expanded => "expanded",
        ExtraExpanded => "extra-expanded",
        UltraExpanded => "ultra-expanded",
    }
}

keyword_enum! {
    /// `font-style`
    #[derive(Default)]
    pub enum FontStyle {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

// =============================================================================
// Style
// =============================================================================

/// Default `stroke-width`; this value is never written out
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Presentation properties attachable to the document or any element.
///
/// Every property except `stroke_width` is optional; `None` means the
/// property was never set and is not written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Option<CompactString>,
    pub fill_opacity: Option<f64>,
    pub fill_rule: Option<FillRule>,
    pub stroke: Option<CompactString>,
    pub stroke_width: f64,
    pub stroke_opacity: Option<f64>,
    pub stroke_linecap: Option<LineCap>,
    pub stroke_dasharray: Option<CompactString>,
    pub stroke_linejoin: Option<LineJoin>,
    pub background_color: Option<CompactString>,
    pub font_family: Option<CompactString>,
    pub font_weight: Option<FontWeight>,
    pub font_stretch: Option<FontStretch>,
    pub font_style: Option<FontStyle>,
    pub font_size: Option<CompactString>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            fill_opacity: None,
            fill_rule: None,
            stroke: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_opacity: None,
            stroke_linecap: None,
            stroke_dasharray: None,
            stroke_linejoin: None,
            background_color: None,
            font_family: None,
            font_weight: None,
            font_stretch: None,
            font_style: None,
            font_size: None,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline style declaration list. See [`parse_style`].
    pub fn parse(s: &str) -> Self {
        parse_style(s)
    }

    /// Builder: set `fill`
    pub fn with_fill(mut self, fill: impl Into<CompactString>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Builder: set `stroke`
    pub fn with_stroke(mut self, stroke: impl Into<CompactString>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Builder: set `stroke-width`
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Builder: set `background-color`
    pub fn with_background_color(mut self, color: impl Into<CompactString>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Check if no property differs from its unset state
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply one declaration. Returns `false` if it was not recognised.
    pub fn apply(&mut self, name: &str, value: &str) -> bool {
        match name {
            "fill" => self.fill = Some(value.into()),
            "fill-opacity" => match read_number(value) {
                Some(n) => self.fill_opacity = Some(n),
                None => return false,
            },
            "fill-rule" => self.fill_rule = Some(keyword_or_default(value)),
            "stroke" => self.stroke = Some(value.into()),
            "stroke-width" => match read_number(value) {
                Some(n) => self.stroke_width = n,
                None => return false,
            },
            "stroke-opacity" => match read_number(value) {
                Some(n) => self.stroke_opacity = Some(n),
                None => return false,
            },
            "stroke-linecap" => self.stroke_linecap = Some(keyword_or_default(value)),
            "stroke-dasharray" => self.stroke_dasharray = Some(value.into()),
            "stroke-linejoin" => self.stroke_linejoin = Some(keyword_or_default(value)),
            "background-color" => self.background_color = Some(value.into()),
            "font-family" => self.font_family = Some(value.into()),
            "font-weight" => self.font_weight = Some(keyword_or_default(value)),
            "font-stretch" => self.font_stretch = Some(keyword_or_default(value)),
            "font-style" => self.font_style = Some(keyword_or_default(value)),
            "font-size" => self.font_size = Some(value.into()),
            _ => return false,
        }
        true
    }

    /// Render as a declaration list, `name:value` pairs joined by `;`.
    ///
    /// Unset properties and a `stroke-width` of 1 are omitted.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<(&str, String)> = Vec::new();

        if let Some(v) = &self.fill {
            decls.push(("fill", v.to_string()));
        }
        if let Some(v) = self.fill_opacity {
            decls.push(("fill-opacity", number::format(v)));
        }
        if let Some(v) = self.fill_rule {
            decls.push(("fill-rule", v.to_string()));
        }
        if let Some(v) = &self.stroke {
            decls.push(("stroke", v.to_string()));
        }
        if self.stroke_width != DEFAULT_STROKE_WIDTH {
            decls.push(("stroke-width", number::format(self.stroke_width)));
        }
        if let Some(v) = self.stroke_opacity {
            decls.push(("stroke-opacity", number::format(v)));
        }
        if let Some(v) = self.stroke_linecap {
            decls.push(("stroke-linecap", v.to_string()));
        }
        if let Some(v) = &self.stroke_dasharray {
            decls.push(("stroke-dasharray", v.to_string()));
        }
        if let Some(v) = self.stroke_linejoin {
            decls.push(("stroke-linejoin", v.to_string()));
        }
        if let Some(v) = &self.background_color {
            decls.push(("background-color", v.to_string()));
        }
        if let Some(v) = &self.font_family {
            decls.push(("font-family", v.to_string()));
        }
        if let Some(v) = self.font_weight {
            decls.push(("font-weight", v.to_string()));
        }
        if let Some(v) = self.font_stretch {
            decls.push(("font-stretch", v.to_string()));
        }
        if let Some(v) = self.font_style {
            decls.push(("font-style", v.to_string()));
        }
        if let Some(v) = &self.font_size {
            decls.push(("font-size", v.to_string()));
        }

        decls
            .into_iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// Parse an inline style attribute into a [`Style`].
///
/// Each declaration runs up to the next `;`. It is split at its first `:`
/// and both halves are trimmed. Declarations with no `:`, an empty name or
/// value, an unknown property, or a non-numeric value for a numeric property
/// are skipped without error.
pub fn parse_style(s: &str) -> Style {
    let mut style = Style::default();

    for decl in s.split(';') {
        let decl = decl.trim_start();
        if decl.is_empty() {
            continue;
        }
        let Some((name, value)) = decl.split_once(':') else {
            tracing::trace!(decl, "style declaration without ':' skipped");
            continue;
        };
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() || value.is_empty() {
            tracing::trace!(decl, "empty style declaration skipped");
            continue;
        }
        if !style.apply(name, value) {
            tracing::trace!(name, value, "unrecognised style declaration skipped");
        }
    }

    style
}

fn read_number(value: &str) -> Option<f64> {
    Scanner::new(value).number_with_exponent()
}

/// Keyword lookup that falls back to the property's initial value
fn keyword_or_default<K>(value: &str) -> K
where
    K: Keyword + Default,
{
    K::lookup(value).unwrap_or_default()
}

/// Lookup shared by the style keyword enums
trait Keyword: Sized {
    fn lookup(s: &str) -> Option<Self>;
}

macro_rules! impl_keyword {
    ($($ty:ty),* $(,)?) => {
        $(impl Keyword for $ty {
            fn lookup(s: &str) -> Option<Self> {
                Self::from_keyword(s)
            }
        })*
    };
}

impl_keyword!(FillRule, LineCap, LineJoin, FontWeight, FontStretch, FontStyle);
