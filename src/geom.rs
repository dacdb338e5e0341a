//! Geometry and scalar value types
//!
//! Small value types shared by the element payloads: points, point lists,
//! lengths with units, marker orientation and the text layout keywords.

use std::fmt;
use std::ops::Index;

use crate::number::{self, Scanner};

// =============================================================================
// Point / Points
// =============================================================================

/// A coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered list of points, used by polygon and polyline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Points(Vec<Point>);

impl Points {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a point
    pub fn push(&mut self, point: impl Into<Point>) {
        self.0.push(point.into());
    }

    /// Remove the point at `index`, returning it if the index was valid
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
}

impl Index<usize> for Points {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

impl<P: Into<Point>> FromIterator<P> for Points {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Points {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&number::format_points(self))
    }
}

// =============================================================================
// TextLength
// =============================================================================

keyword_enum! {
    /// Unit suffix of a [`TextLength`]
    #[derive(Default)]
    pub enum LengthUnit {
        /// Unitless user units
        #[default]
        None => "",
        Em => "em",
        Ex => "ex",
        Px => "px",
        Cm => "cm",
        Mm => "mm",
        In => "in",
        Pc => "pc",
        Pt => "pt",
        Percentage => "%",
    }
}

impl LengthUnit {
    /// Look up a unit suffix, also accepting the legacy `ems`/`exs` spellings
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ems" => Some(Self::Em),
            "exs" => Some(Self::Ex),
            other => Self::from_keyword(other),
        }
    }
}

/// A length with a unit, used by `textLength` and `startOffset`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextLength {
    pub value: f64,
    pub unit: LengthUnit,
}

impl TextLength {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse `"<number><unit>"`.
    ///
    /// An unrecognised suffix leaves the unit as [`LengthUnit::None`]; a
    /// missing number reads as 0, matching `strtod`.
    pub fn parse(s: &str) -> Self {
        let mut scanner = Scanner::new(s.trim());
        let value = scanner.number_with_exponent().unwrap_or(0.0);
        let unit = LengthUnit::from_suffix(scanner.rest().trim()).unwrap_or_default();
        Self { value, unit }
    }
}

impl fmt::Display for TextLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", number::format(self.value), self.unit)
    }
}

// =============================================================================
// Orient
// =============================================================================

keyword_enum! {
    /// Unit of an orientation angle
    #[derive(Default)]
    pub enum AngleUnit {
        #[default]
        Degrees => "deg",
        Radians => "rad",
        Gradians => "grad",
        Turns => "turn",
    }
}

/// Marker orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orient {
    #[default]
    Auto,
    AutoStartReverse,
    Angle { value: f64, unit: AngleUnit },
}

impl Orient {
    pub const fn degrees(value: f64) -> Self {
        Self::Angle {
            value,
            unit: AngleUnit::Degrees,
        }
    }

    /// Parse an `orient` attribute value.
    ///
    /// A bare number is in degrees. Returns `None` when the value is neither
    /// a keyword nor starts with a number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s {
            "auto" => return Some(Self::Auto),
            "auto-start-reverse" => return Some(Self::AutoStartReverse),
            _ => {}
        }

        let mut scanner = Scanner::new(s);
        let value = scanner.number_with_exponent()?;
        let unit = AngleUnit::from_keyword(scanner.rest().trim()).unwrap_or_default();
        Some(Self::Angle { value, unit })
    }
}

impl fmt::Display for Orient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::AutoStartReverse => f.write_str("auto-start-reverse"),
            Self::Angle { value, unit } => write!(f, "{}{}", number::format(*value), unit),
        }
    }
}

// =============================================================================
// Text layout keywords
// =============================================================================

keyword_enum! {
    /// `lengthAdjust` on text and textpath
    #[derive(Default)]
    pub enum LengthAdjust {
        #[default]
        Spacing => "spacing",
        SpacingAndGlyphs => "spacingAndGlyphs",
    }
}

keyword_enum! {
    /// `method` on textpath
    #[derive(Default)]
    pub enum Method {
        #[default]
        Align => "align",
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// `spacing` on textpath
    #[derive(Default)]
    pub enum Spacing {
        Auto => "auto",
        #[default]
        Exact => "exact",
    }
}
