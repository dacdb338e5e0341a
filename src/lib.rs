//! tola-svg - Typed SVG document model with XML round-tripping
//!
//! ## Core Concepts
//!
//! **Typed elements**: every supported SVG element is one variant of
//! [`ElementKind`], carrying a payload struct with the attributes of that
//! kind. Links and markers own nested element lists.
//!
//! **Attribute grammars**: the `style`, `transform` and `points` attributes
//! are parsed into structured values and rendered back. The parsers are
//! best effort and never fail a whole document over one bad attribute.
//!
//! ## Modules
//! - `document`: [`Document`], queries and file I/O
//! - `element`: element kinds and payloads
//! - `style`, `transform`, `geom`, `number`: value types and grammars
//! - `convert`: XML tree ↔ typed model
//! - `xml`: generic XML tree, parsing and rendering
//! - `batch`: bulk processing of files
//!
//! ## Usage
//!
//! ```
//! use tola_svg::prelude::*;
//!
//! let mut doc = Document::with_size(100.0, 100.0);
//! doc.push(
//!     Element::new(Rect::new(10.0, 10.0, 80.0, 80.0))
//!         .with_style(parse_style("fill:red;stroke:black"))
//!         .with_transforms(parse_transforms("rotate(45 50 50)")),
//! );
//!
//! let text = doc.render(&RenderConfig::COMPACT);
//! assert_eq!(Document::parse(&text).unwrap(), doc);
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Error types
pub mod error;

/// Ordered attribute lists
pub mod attr;

/// Number scanning and formatting, point lists
pub mod number;

/// Points, lengths, orientation and layout keywords
pub mod geom;

/// Style record and `style` attribute grammar
pub mod style;

/// Transform lists and `transform` attribute grammar
pub mod transform;

/// Typed elements
pub mod element;

/// Document type, queries and file I/O
pub mod document;

/// XML tree ↔ typed model
pub mod convert;

/// Generic XML tree
pub mod xml;

/// Bulk file processing
pub mod batch;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use document::{DEFAULT_XMLNS, Descendants, Document, Stats};
pub use element::{Element, ElementKind, ElementType, Elements};
pub use error::{SvgError, SvgResult};
pub use geom::{Orient, Point, Points, TextLength};
pub use style::{Style, parse_style};
pub use transform::{Transform, Transforms, parse_transforms};
pub use xml::RenderConfig;

// =============================================================================
// Tests
// =============================================================================
