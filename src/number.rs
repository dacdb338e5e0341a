//! Number scanning and formatting shared by the attribute grammars
//!
//! [`Scanner`] is the low-level cursor used by the transform grammar, the
//! point-list grammar and the length/angle readers. It works on bytes: every
//! token these grammars accept is ASCII, so slicing at scanner positions
//! always lands on a char boundary.

use crate::geom::{Point, Points};

// =============================================================================
// Scanner
// =============================================================================

/// Cursor over an attribute value
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Byte offset of the cursor
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed input
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    /// Skip spaces, tabs and line breaks
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and commas between list items
    pub fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r' | b',')) {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is next
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `keyword` if the input continues with it (exact prefix match)
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.rest().starts_with(keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    /// Read a plain number: optional sign, then digits and `.`.
    ///
    /// Exponents are not part of this grammar. Extra decimal points are
    /// consumed with the token but ignored for the value, so `1.2.3` reads
    /// as 1.2. Returns `None` without moving when no digit is present.
    pub fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        self.mantissa(start)
    }

    /// Read a number that may carry an `e`/`E` exponent, as `strtod` would
    pub fn number_with_exponent(&mut self) -> Option<f64> {
        let start = self.pos;
        let value = self.mantissa(start)?;

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mut offset = 1;
            if matches!(self.peek_at(offset), Some(b'+' | b'-')) {
                offset += 1;
            }
            if self.peek_at(offset).is_some_and(|b| b.is_ascii_digit()) {
                self.pos += offset;
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
                return self.src[start..self.pos]
                    .parse()
                    .ok()
                    .or(Some(value));
            }
        }

        Some(value)
    }

    fn mantissa(&mut self, start: usize) -> Option<f64> {
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => digits = true,
                b'.' => {}
                _ => break,
            }
            self.pos += 1;
        }
        if !digits {
            self.pos = start;
            return None;
        }
        Some(parse_mantissa(&self.src[start..self.pos]))
    }
}

/// Value of a sign/digits/dots token, cut at the second decimal point
fn parse_mantissa(token: &str) -> f64 {
    let cut = token
        .match_indices('.')
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token[..cut].parse().unwrap_or(0.0)
}

// =============================================================================
// Free functions
// =============================================================================

/// Read the leading number of an attribute value, `atof`-style.
///
/// Leading whitespace is skipped and trailing garbage ignored; a value with
/// no numeric prefix reads as 0. The result never depends on the locale.
pub fn parse_leading(s: &str) -> f64 {
    let mut scanner = Scanner::new(s);
    scanner.skip_whitespace();
    scanner.number_with_exponent().unwrap_or(0.0)
}

/// Format a number for attribute output.
///
/// Shortest representation that reads back to the same value, without
/// trailing zeros or exponent: `5.0` is `"5"`, `0.25` is `"0.25"`.
/// Negative zero and non-finite values are written as `"0"`.
pub fn format(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    format!("{value}")
}

/// Parse a point list such as `"0,0 10,0 10,10"`.
///
/// Coordinates may be separated by commas and/or whitespace. Parsing stops
/// at the first pair that is incomplete or not numeric; the pairs read so
/// far are kept.
pub fn parse_points(s: &str) -> Points {
    let mut points = Points::new();
    let mut scanner = Scanner::new(s);

    loop {
        scanner.skip_separators();
        if scanner.is_eof() {
            break;
        }
        let Some(x) = scanner.number_with_exponent() else { break };
        scanner.skip_separators();
        let Some(y) = scanner.number_with_exponent() else { break };
        points.push(Point::new(x, y));
    }

    points
}

/// Render a point list as `"x,y x,y ..."`
pub fn format_points(points: &Points) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format(p.x));
        out.push(',');
        out.push_str(&format(p.y));
    }
    out
}
