//! Transform lists and the `transform` attribute grammar
//!
//! A transform list is a sequence of function calls such as
//! `translate(10,20) rotate(45)`. The model only preserves their order;
//! composing them into a matrix is left to the consumer.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use crate::number::{self, Scanner};

// =============================================================================
// Transform
// =============================================================================

/// One transform function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Matrix {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
    Translate {
        x: f64,
        y: f64,
    },
    Scale {
        x: f64,
        y: f64,
    },
    Rotate {
        angle: f64,
        cx: f64,
        cy: f64,
    },
    SkewX(f64),
    SkewY(f64),
}

impl Transform {
    pub const IDENTITY: Self = Self::Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub const fn matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self::Matrix { a, b, c, d, e, f }
    }

    pub const fn translate(x: f64, y: f64) -> Self {
        Self::Translate { x, y }
    }

    pub const fn scale(x: f64, y: f64) -> Self {
        Self::Scale { x, y }
    }

    /// Rotation about the origin
    pub const fn rotate(angle: f64) -> Self {
        Self::Rotate {
            angle,
            cx: 0.0,
            cy: 0.0,
        }
    }

    /// Rotation about `(cx, cy)`
    pub const fn rotate_about(angle: f64, cx: f64, cy: f64) -> Self {
        Self::Rotate { angle, cx, cy }
    }

    /// Function name as written in the attribute
    pub fn name(&self) -> &'static str {
        match self {
            Self::Matrix { .. } => "matrix",
            Self::Translate { .. } => "translate",
            Self::Scale { .. } => "scale",
            Self::Rotate { .. } => "rotate",
            Self::SkewX(_) => "skewX",
            Self::SkewY(_) => "skewY",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = number::format;
        match *self {
            Self::Matrix { a, b, c, d, e, f: ff } => write!(
                f,
                "matrix({},{},{},{},{},{})",
                n(a),
                n(b),
                n(c),
                n(d),
                n(e),
                n(ff)
            ),
            Self::Translate { x, y } => write!(f, "translate({},{})", n(x), n(y)),
            Self::Scale { x, y } => write!(f, "scale({},{})", n(x), n(y)),
            Self::Rotate { angle, cx, cy } if cx == 0.0 && cy == 0.0 => {
                write!(f, "rotate({})", n(angle))
            }
            Self::Rotate { angle, cx, cy } => write!(f, "rotate({},{},{})", n(angle), n(cx), n(cy)),
            Self::SkewX(angle) => write!(f, "skewX({})", n(angle)),
            Self::SkewY(angle) => write!(f, "skewY({})", n(angle)),
        }
    }
}

// =============================================================================
// Transforms
// =============================================================================

/// Ordered transform list attached to an element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transforms(SmallVec<[Transform; 2]>);

impl Transforms {
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Parse a transform attribute. See [`parse_transforms`].
    pub fn parse(s: &str) -> Self {
        parse_transforms(s)
    }

    pub fn push(&mut self, transform: Transform) {
        self.0.push(transform);
    }

    /// Remove the transform at `index`, returning it if the index was valid
    pub fn remove(&mut self, index: usize) -> Option<Transform> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Transform> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transform> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Transform] {
        &self.0
    }
}

impl Index<usize> for Transforms {
    type Output = Transform;

    fn index(&self, index: usize) -> &Transform {
        &self.0[index]
    }
}

impl FromIterator<Transform> for Transforms {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Transforms {
    type Item = Transform;
    type IntoIter = smallvec::IntoIter<[Transform; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Transforms {
    type Item = &'a Transform;
    type IntoIter = std::slice::Iter<'a, Transform>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Transforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// Function keywords with their accepted argument counts
const FUNCTIONS: &[(&str, usize, usize)] = &[
    ("matrix", 1, 6),
    ("translate", 1, 2),
    ("scale", 1, 2),
    ("rotate", 1, 3),
    ("skewX", 1, 1),
    ("skewY", 1, 1),
];

/// Parse a transform list.
///
/// Functions are separated by whitespace and/or commas, as are their
/// arguments. Numbers are a sign, digits and a decimal point; exponents are
/// not accepted. On the first malformed function the remaining input is
/// abandoned and the transforms read so far are returned.
///
/// Omitted arguments: matrix entries default to 0, `translate` y to 0,
/// `scale` y to x. `rotate` takes one or three arguments.
pub fn parse_transforms(s: &str) -> Transforms {
    let mut out = Transforms::new();
    let mut scanner = Scanner::new(s);

    loop {
        scanner.skip_separators();
        if scanner.is_eof() {
            break;
        }
        match parse_function(&mut scanner) {
            Some(t) => out.push(t),
            None => {
                tracing::debug!(
                    input = s,
                    offset = scanner.pos(),
                    parsed = out.len(),
                    "transform list abandoned"
                );
                break;
            }
        }
    }

    out
}

fn parse_function(scanner: &mut Scanner<'_>) -> Option<Transform> {
    let &(name, min, max) = FUNCTIONS
        .iter()
        .find(|(name, _, _)| scanner.eat_keyword(name))?;

    scanner.skip_whitespace();
    if !scanner.eat(b'(') {
        return None;
    }

    let mut args: SmallVec<[f64; 6]> = SmallVec::new();
    loop {
        scanner.skip_separators();
        if scanner.eat(b')') {
            break;
        }
        if args.len() == max {
            return None;
        }
        args.push(scanner.number()?);
    }

    if args.len() < min {
        return None;
    }
    build(name, &args)
}

fn build(name: &str, args: &[f64]) -> Option<Transform> {
    let arg = |i: usize| args.get(i).copied();
    let t = match name {
        "matrix" => Transform::Matrix {
            a: arg(0).unwrap_or(0.0),
            b: arg(1).unwrap_or(0.0),
            c: arg(2).unwrap_or(0.0),
            d: arg(3).unwrap_or(0.0),
            e: arg(4).unwrap_or(0.0),
            f: arg(5).unwrap_or(0.0),
        },
        "translate" => Transform::Translate {
            x: args[0],
            y: arg(1).unwrap_or(0.0),
        },
        "scale" => Transform::Scale {
            x: args[0],
            y: arg(1).unwrap_or(args[0]),
        },
        "rotate" => match *args {
            [angle] => Transform::rotate(angle),
            [angle, cx, cy] => Transform::rotate_about(angle, cx, cy),
            _ => return None,
        },
        "skewX" => Transform::SkewX(args[0]),
        "skewY" => Transform::SkewY(args[0]),
        _ => return None,
    };
    Some(t)
}
