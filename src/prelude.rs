//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_svg::prelude::*;
//! ```

// Document and elements
pub use crate::document::{Document, Stats};
pub use crate::element::{
    Circle, Element, ElementKind, ElementType, Elements, Ellipse, Image, Line, Link, Marker, Path,
    Polygon, Polyline, Rect, Text, TextPath,
};

// Value types
pub use crate::geom::{
    AngleUnit, LengthAdjust, LengthUnit, Method, Orient, Point, Points, Spacing, TextLength,
};
pub use crate::style::{FillRule, FontStretch, FontStyle, FontWeight, LineCap, LineJoin, Style};
pub use crate::transform::{Transform, Transforms};

// Grammars
pub use crate::number::{format_points, parse_points};
pub use crate::style::parse_style;
pub use crate::transform::parse_transforms;

// XML layer
pub use crate::xml::{RenderConfig, XmlDocument, XmlElement};

// Error
pub use crate::error::{SvgError, SvgResult};
