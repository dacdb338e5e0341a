//! Document type and related utilities
//!
//! The root container of the typed model, with parse/render entry points and
//! query and traversal APIs over the element tree.

use std::fmt;
use std::io::Write as _;
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::convert::{document_from_xml, document_to_xml};
use crate::element::{Element, ElementType, Elements};
use crate::error::{SvgError, SvgResult};
use crate::style::Style;
use crate::xml::{self, RenderConfig, XmlDocument};

/// Namespace given to new documents and to parsed ones that declare none
pub const DEFAULT_XMLNS: &str = "http://www.w3.org/2000/svg";

// =============================================================================
// Document
// =============================================================================

/// An SVG document: root attributes plus the top-level element list
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    /// Value of the root `xmlns` attribute
    pub xmlns: String,
    /// Document-level style; only `background-color` is serialized
    pub style: Option<Style>,
    pub elements: Elements,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            xmlns: DEFAULT_XMLNS.to_string(),
            style: None,
            elements: Elements::new(),
        }
    }
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document of the given size
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Append a top-level element
    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element);
    }

    /// Replace the top-level element list, returning the previous one
    pub fn set_elements(&mut self, elements: Elements) -> Elements {
        std::mem::replace(&mut self.elements, elements)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Parse SVG text.
    ///
    /// Fails on malformed XML or a root other than `<svg>`; no partial
    /// document is returned.
    pub fn parse(text: &str) -> SvgResult<Self> {
        document_from_xml(&xml::parse_document(text)?)
    }

    /// Build from an already parsed XML tree
    pub fn from_xml(xml: &XmlDocument) -> SvgResult<Self> {
        document_from_xml(xml)
    }

    /// Convert to a generic XML tree
    pub fn to_xml(&self) -> XmlDocument {
        document_to_xml(self)
    }

    /// Render to text with the given configuration
    pub fn render(&self, config: &RenderConfig) -> String {
        xml::render_document(&self.to_xml(), config)
    }

    /// Read and parse a file
    pub fn read(path: impl AsRef<Path>) -> SvgResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SvgError::io(path, e))?;
        Self::parse(&text)
    }

    /// Write the document to a file with [`RenderConfig::PRETTY`]
    pub fn write(&self, path: impl AsRef<Path>) -> SvgResult<()> {
        self.write_with(path, &RenderConfig::PRETTY)
    }

    /// Write the document to a file.
    ///
    /// The text goes to a temporary file in the target directory which is
    /// then renamed over `path`, so a failed write leaves no partial file.
    pub fn write_with(&self, path: impl AsRef<Path>, config: &RenderConfig) -> SvgResult<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| SvgError::io(path, e))?;
        tmp.write_all(self.render(config).as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| SvgError::io(path, e))?;
        tmp.persist(path).map_err(|e| SvgError::io(path, e.error))?;

        tracing::debug!(path = %path.display(), elements = self.element_count(), "wrote document");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Iterate over all elements depth-first, descending into links and
    /// markers. The iterator borrows the document and may be restarted by
    /// calling this again.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.elements)
    }

    /// Find first element matching predicate (depth-first search)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants().find(|el| predicate(el))
    }

    /// Find all elements matching predicate
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants().filter(|el| predicate(el)).collect()
    }

    /// Find the element with the given `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|el| el.id.as_deref() == Some(id))
    }

    /// Find the element with the given `id` (mutable)
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        Self::find_in_mut(&mut self.elements, &|el: &Element| el.id.as_deref() == Some(id))
    }

    fn find_in_mut<'a, F>(elements: &'a mut Elements, predicate: &F) -> Option<&'a mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        for el in elements.iter_mut() {
            if predicate(el) {
                return Some(el);
            }
            if let Some(children) = el.children_mut()
                && let Some(found) = Self::find_in_mut(children, predicate)
            {
                return Some(found);
            }
        }
        None
    }

    /// Visit every element mutably, depth-first
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        Self::visit_mut(&mut self.elements, &mut f);
    }

    fn visit_mut<F>(elements: &mut Elements, f: &mut F)
    where
        F: FnMut(&mut Element),
    {
        for el in elements.iter_mut() {
            f(el);
            if let Some(children) = el.children_mut() {
                Self::visit_mut(children, f);
            }
        }
    }

    /// Count all elements, nested ones included
    pub fn element_count(&self) -> usize {
        self.descendants().count()
    }

    /// Collect statistics about the document
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        for el in self.descendants() {
            stats.record(el.element_type());
        }
        stats.max_depth = max_depth(&self.elements);
        stats
    }
}

fn max_depth(elements: &Elements) -> usize {
    elements
        .iter()
        .map(|el| 1 + el.children().map_or(0, max_depth))
        .max()
        .unwrap_or(0)
}

impl FromStr for Document {
    type Err = SvgError;

    fn from_str(s: &str) -> SvgResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::PRETTY))
    }
}

// =============================================================================
// Descendants - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Descendants<'a> {
    fn new(elements: &'a Elements) -> Self {
        Self {
            stack: elements.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        if let Some(children) = elem.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(elem)
    }
}

// =============================================================================
// Stats - document statistics
// =============================================================================

/// Document statistics collected from traversal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Elements per kind; kinds that do not occur are absent
    pub by_type: FxHashMap<ElementType, usize>,
    pub element_count: usize,
    /// Deepest container nesting; 1 when there are only top-level elements
    pub max_depth: usize,
}

impl Stats {
    fn record(&mut self, ty: ElementType) {
        *self.by_type.entry(ty).or_default() += 1;
        self.element_count += 1;
    }

    /// Number of elements of the given kind
    pub fn count(&self, ty: ElementType) -> usize {
        self.by_type.get(&ty).copied().unwrap_or(0)
    }

    /// Number of link and marker elements
    pub fn container_count(&self) -> usize {
        self.count(ElementType::Link) + self.count(ElementType::Marker)
    }

    pub fn has_text(&self) -> bool {
        self.count(ElementType::Text) + self.count(ElementType::TextPath) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Circle, Link, Marker, Path, Rect, Text};
    use crate::geom::Orient;

    fn nested() -> Document {
        let mut doc = Document::with_size(10.0, 10.0);
        doc.push(Element::new(Rect::new(0.0, 0.0, 1.0, 1.0)).with_id("r"));
        doc.push(
            Marker::new(3.0, 3.0).with_orient(Orient::Auto).with_children(vec![
                Element::new(Link::new("#r").with_children(vec![
                    Element::new(Circle::default()).with_id("c"),
                ])),
                Element::new(Path::new("M0 0")),
            ]),
        );
        doc.push(Text::new(1.0, 1.0, "label"));
        doc
    }

    #[test]
    fn test_defaults() {
        let doc = Document::new();
        assert_eq!((doc.width, doc.height), (0.0, 0.0));
        assert_eq!(doc.xmlns, DEFAULT_XMLNS);
        assert!(doc.style.is_none());
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_descendants_order() {
        let doc = nested();
        let types: Vec<_> = doc.descendants().map(Element::element_type).collect();
        assert_eq!(
            types,
            [
                ElementType::Rect,
                ElementType::Marker,
                ElementType::Link,
                ElementType::Circle,
                ElementType::Path,
                ElementType::Text,
            ]
        );
        // Restartable
        assert_eq!(doc.descendants().count(), 6);
        assert_eq!(doc.element_count(), 6);
    }

    #[test]
    fn test_queries() {
        let mut doc = nested();
        assert_eq!(doc.find_by_id("c").map(Element::element_type), Some(ElementType::Circle));
        assert!(doc.find_by_id("missing").is_none());
        assert_eq!(doc.find_all(|el| el.element_type().is_container()).len(), 2);
        assert!(doc.find(|el| el.kind.is_text()).is_some());

        if let Some(circle) = doc.find_by_id_mut("c") {
            circle.class = Some("hit".into());
        }
        assert_eq!(
            doc.find_by_id("c").and_then(|el| el.class.as_deref()),
            Some("hit")
        );

        doc.for_each_mut(|el| el.id = None);
        assert!(doc.find(|el| el.id.is_some()).is_none());
    }

    #[test]
    fn test_stats() {
        let stats = nested().stats();
        assert_eq!(stats.element_count, 6);
        assert_eq!(stats.count(ElementType::Circle), 1);
        assert_eq!(stats.count(ElementType::Ellipse), 0);
        assert_eq!(stats.container_count(), 2);
        assert_eq!(stats.max_depth, 3);
        assert!(stats.has_text());
        assert_eq!(Document::new().stats(), Stats::default());
    }

    #[test]
    fn test_set_elements_returns_previous() {
        let mut doc = nested();
        let old = doc.set_elements(Elements::new());
        assert_eq!(old.len(), 3);
        assert_eq!(doc.element_count(), 0);
    }

    #[test]
    fn test_parse_failures_yield_no_document() {
        assert!(matches!(Document::parse("<svg"), Err(SvgError::Xml(_))));
        assert!(matches!(
            Document::parse("<html/>"),
            Err(SvgError::UnexpectedRoot { .. })
        ));
        assert!("<svg/>".parse::<Document>().is_ok());
    }

    #[test]
    fn test_parse_and_display() {
        let doc = Document::parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
<rect width="5" height="3" x="1" y="2" rx="0"/></svg>"#,
        )
        .unwrap();
        let text = doc.to_string();
        assert!(text.starts_with("<?xml"));
        assert!(text.contains(r#"<rect width="5" height="3" x="1" y="2"/>"#));
        assert_eq!(Document::parse(&text).unwrap(), doc);
    }

    #[test]
    fn test_write_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");

        let doc = nested();
        doc.write(&path).unwrap();
        assert_eq!(Document::read(&path).unwrap(), doc);

        doc.write_with(&path, &RenderConfig::COMPACT).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(Document::read(&path).unwrap(), doc);
    }

    #[test]
    fn test_io_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.svg");
        assert!(matches!(Document::read(&missing), Err(SvgError::Io { .. })));

        let bad_dir = dir.path().join("no/such/dir/out.svg");
        assert!(matches!(
            Document::new().write(&bad_dir),
            Err(SvgError::Io { .. })
        ));
        assert!(!bad_dir.exists());
    }

    #[test]
    fn test_document_is_send_sync() {
        static_assertions::assert_impl_all!(Document: Send, Sync, Clone);
        static_assertions::assert_impl_all!(Element: Send, Sync, Clone);
    }
}
