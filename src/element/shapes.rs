//! Basic shape payloads
//!
//! Numeric geometry that is absent from the source reads as 0.

use crate::geom::{Point, Points};

/// `<rect>`; `rx`/`ry` of 0 mean square corners and are not written out
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            x,
            y,
            rx: 0.0,
            ry: 0.0,
        }
    }

    /// Builder: set corner radii
    pub const fn with_radii(mut self, rx: f64, ry: f64) -> Self {
        self.rx = rx;
        self.ry = ry;
        self
    }
}

/// `<circle>`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub r: f64,
    pub cx: f64,
    pub cy: f64,
}

impl Circle {
    pub const fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { r, cx, cy }
    }
}

/// `<ellipse>`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    pub rx: f64,
    pub ry: f64,
    pub cx: f64,
    pub cy: f64,
}

impl Ellipse {
    pub const fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { rx, ry, cx, cy }
    }
}

/// `<line>`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        let (from, to) = (from.into(), to.into());
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

/// `<polygon>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Points,
}

/// `<polyline>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Points,
}

impl Polygon {
    pub fn new(points: Points) -> Self {
        Self { points }
    }
}

impl Polyline {
    pub fn new(points: Points) -> Self {
        Self { points }
    }
}

/// `<path>`. The path data is kept verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub d: Option<String>,
}

impl Path {
    pub fn new(d: impl Into<String>) -> Self {
        Self { d: Some(d.into()) }
    }
}

/// `<image>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub href: Option<String>,
}

impl Image {
    pub fn new(href: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            href: Some(href.into()),
            ..Default::default()
        }
    }

    /// Builder: set position
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let r = Rect::new(1.0, 2.0, 5.0, 3.0);
        assert_eq!((r.x, r.y, r.width, r.height, r.rx), (1.0, 2.0, 5.0, 3.0, 0.0));
        assert_eq!(r.with_radii(1.0, 2.0).ry, 2.0);

        let l = Line::new((0.0, 1.0), Point::new(2.0, 3.0));
        assert_eq!((l.x1, l.y1, l.x2, l.y2), (0.0, 1.0, 2.0, 3.0));

        let img = Image::new("a.png", 4.0, 4.0).at(1.0, 1.0);
        assert_eq!(img.href.as_deref(), Some("a.png"));
        assert_eq!((img.x, img.y), (1.0, 1.0));

        assert_eq!(Path::default().d, None);
    }
}
