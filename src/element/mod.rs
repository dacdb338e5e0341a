//! Typed SVG elements
//!
//! An [`Element`] carries the attributes every kind shares (id, class, style
//! and transform list) plus exactly one kind-specific payload in
//! [`ElementKind`]. The kind is the payload's enum tag, so the two can never
//! disagree.
//!
//! Every element exclusively owns its payload and, for containers, its
//! children. Setters take their argument by value; a caller that wants to
//! keep its copy clones first. `Clone` is a deep copy of the whole subtree.

mod container;
mod shapes;
mod text;

pub use container::{Link, Marker};
pub use shapes::{Circle, Ellipse, Image, Line, Path, Polygon, Polyline, Rect};
pub use text::{Text, TextPath};

use std::ops::{Index, IndexMut};

use compact_str::CompactString;

use crate::style::Style;
use crate::transform::Transforms;

// =============================================================================
// ElementType
// =============================================================================

keyword_enum! {
    /// Element kind discriminant; the keyword is the tag name
    pub enum ElementType {
        Rect => "rect",
        Circle => "circle",
        Ellipse => "ellipse",
        Line => "line",
        Polygon => "polygon",
        Polyline => "polyline",
        Path => "path",
        Text => "text",
        TextPath => "textpath",
        Link => "link",
        Image => "image",
        Marker => "marker",
    }
}

impl ElementType {
    /// Tag name written by the serializer
    pub fn tag(self) -> &'static str {
        self.as_str()
    }

    /// Look up a tag name.
    ///
    /// Besides the canonical names, the standard SVG spellings `a` and
    /// `textPath` are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(Self::Link),
            "textPath" => Some(Self::TextPath),
            other => Self::from_keyword(other),
        }
    }

    /// Check if elements of this kind own child elements
    pub fn is_container(self) -> bool {
        matches!(self, Self::Link | Self::Marker)
    }
}

// =============================================================================
// ElementKind
// =============================================================================

/// Kind-specific payload of an element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Rect(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Polygon(Polygon),
    Polyline(Polyline),
    Path(Path),
    Text(Text),
    TextPath(TextPath),
    Link(Link),
    Image(Image),
    Marker(Marker),
}

impl ElementKind {
    /// Discriminant of this payload
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Rect(_) => ElementType::Rect,
            Self::Circle(_) => ElementType::Circle,
            Self::Ellipse(_) => ElementType::Ellipse,
            Self::Line(_) => ElementType::Line,
            Self::Polygon(_) => ElementType::Polygon,
            Self::Polyline(_) => ElementType::Polyline,
            Self::Path(_) => ElementType::Path,
            Self::Text(_) => ElementType::Text,
            Self::TextPath(_) => ElementType::TextPath,
            Self::Link(_) => ElementType::Link,
            Self::Image(_) => ElementType::Image,
            Self::Marker(_) => ElementType::Marker,
        }
    }

    /// Child list of a link or marker
    pub fn children(&self) -> Option<&Elements> {
        match self {
            Self::Link(link) => Some(&link.children),
            Self::Marker(marker) => Some(&marker.children),
            _ => None,
        }
    }

    /// Mutable child list of a link or marker
    pub fn children_mut(&mut self) -> Option<&mut Elements> {
        match self {
            Self::Link(link) => Some(&mut link.children),
            Self::Marker(marker) => Some(&mut marker.children),
            _ => None,
        }
    }

    impl_kind_accessors!(
        rect, circle, ellipse, line, polygon, polyline, path, text, text_path, link, image,
        marker,
    );
}

macro_rules! impl_from_payload {
    ($($payload:ident),* $(,)?) => {
        $(
            impl From<$payload> for ElementKind {
                fn from(payload: $payload) -> Self {
                    Self::$payload(payload)
                }
            }

            impl From<$payload> for Element {
                fn from(payload: $payload) -> Self {
                    Element::new(payload)
                }
            }
        )*
    };
}

impl_from_payload!(
    Rect, Circle, Ellipse, Line, Polygon, Polyline, Path, Text, TextPath, Link, Image, Marker,
);

// =============================================================================
// Element
// =============================================================================

/// One element of the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<CompactString>,
    pub class: Option<CompactString>,
    pub style: Option<Style>,
    pub transforms: Option<Transforms>,
    pub kind: ElementKind,
}

impl Element {
    /// Create an element with no common attributes set
    pub fn new(kind: impl Into<ElementKind>) -> Self {
        Self {
            id: None,
            class: None,
            style: None,
            transforms: None,
            kind: kind.into(),
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Replace the payload, returning the previous one.
    ///
    /// The kind may change; common attributes are kept.
    pub fn set_kind(&mut self, kind: impl Into<ElementKind>) -> ElementKind {
        std::mem::replace(&mut self.kind, kind.into())
    }

    /// Child list, for links and markers
    pub fn children(&self) -> Option<&Elements> {
        self.kind.children()
    }

    pub fn children_mut(&mut self) -> Option<&mut Elements> {
        self.kind.children_mut()
    }

    /// Replace the child list of a container.
    ///
    /// Returns the previous list, or gives `children` back as `Err` when this
    /// element is not a container.
    pub fn set_children(&mut self, children: Elements) -> Result<Elements, Elements> {
        match self.kind.children_mut() {
            Some(slot) => Ok(std::mem::replace(slot, children)),
            None => Err(children),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builders
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_id(mut self, id: impl Into<CompactString>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<CompactString>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_transforms(mut self, transforms: Transforms) -> Self {
        self.transforms = Some(transforms);
        self
    }
}

// =============================================================================
// Elements
// =============================================================================

/// Ordered, exclusively owned list of elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Elements(Vec<Element>);

impl Elements {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an element
    pub fn push(&mut self, element: impl Into<Element>) {
        self.0.push(element.into());
    }

    /// Remove the element at `index`, returning it if the index was valid
    pub fn remove(&mut self, index: usize) -> Option<Element> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.0.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Element> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.0
    }
}

impl Index<usize> for Elements {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.0[index]
    }
}

impl IndexMut<usize> for Elements {
    fn index_mut(&mut self, index: usize) -> &mut Element {
        &mut self.0[index]
    }
}

impl From<Vec<Element>> for Elements {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl<E: Into<Element>> FromIterator<E> for Elements {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<E: Into<Element>> Extend<E> for Elements {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Elements {
    type Item = &'a mut Element;
    type IntoIter = std::slice::IterMut<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Orient;

    #[test]
    fn test_kind_and_payload_agree() {
        let el = Element::new(Circle::new(1.0, 2.0, 3.0));
        assert_eq!(el.element_type(), ElementType::Circle);
        assert!(el.kind.is_circle());
        assert!(!el.kind.is_rect());
        assert_eq!(el.kind.as_circle().map(|c| c.r), Some(3.0));
        assert!(el.kind.as_text_path().is_none());
    }

    #[test]
    fn test_set_kind_replaces_payload() {
        let mut el = Element::new(Rect::new(0.0, 0.0, 1.0, 1.0)).with_id("shape");
        let old = el.set_kind(Ellipse::new(0.0, 0.0, 2.0, 1.0));
        assert!(old.is_rect());
        assert_eq!(el.element_type(), ElementType::Ellipse);
        assert_eq!(el.id.as_deref(), Some("shape"));

        if let Some(e) = el.kind.as_ellipse_mut() {
            e.ry = 4.0;
        }
        assert_eq!(el.kind.as_ellipse().map(|e| e.ry), Some(4.0));
    }

    #[test]
    fn test_containers_own_children() {
        let circle = Element::new(Circle::new(0.0, 0.0, 1.0));
        let link = Link::new("#target").with_children(vec![circle.clone()]);
        let mut marker = Element::new(Marker::new(3.0, 3.0).with_orient(Orient::Auto));
        marker.children_mut().unwrap().push(link);

        assert!(marker.element_type().is_container());
        let inner = &marker.children().unwrap()[0];
        assert_eq!(inner.element_type(), ElementType::Link);
        assert_eq!(inner.children().unwrap()[0], circle);

        let mut rect = Element::new(Rect::default());
        assert!(rect.children().is_none());
        assert!(rect.set_children(Elements::new()).is_err());

        let previous = marker.set_children(Elements::new()).unwrap();
        assert_eq!(previous.len(), 1);
        assert!(marker.children().unwrap().is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let original =
            Element::new(Link::new("a").with_children(vec![Element::new(Path::new("M0 0"))]));
        let mut copy = original.clone();
        copy.children_mut().unwrap()[0].set_kind(Path::new("M1 1"));

        let orig_path = original.children().unwrap()[0].kind.as_path().unwrap();
        assert_eq!(orig_path.d.as_deref(), Some("M0 0"));
    }

    #[test]
    fn test_elements_collection() {
        let mut els: Elements = [Rect::default(), Rect::new(1.0, 1.0, 1.0, 1.0)]
            .into_iter()
            .collect();
        els.push(Circle::default());
        assert_eq!(els.len(), 3);
        assert_eq!(els.remove(3), None);
        assert_eq!(els.remove(0).map(|e| e.element_type()), Some(ElementType::Rect));

        let types: Vec<_> = els.iter().map(Element::element_type).collect();
        assert_eq!(types, [ElementType::Rect, ElementType::Circle]);
    }

    #[test]
    fn test_tag_lookup() {
        for ty in ElementType::ALL {
            assert_eq!(ElementType::from_tag(ty.tag()), Some(*ty));
        }
        assert_eq!(ElementType::from_tag("a"), Some(ElementType::Link));
        assert_eq!(ElementType::from_tag("textPath"), Some(ElementType::TextPath));
        assert_eq!(ElementType::from_tag("g"), None);
    }
}
