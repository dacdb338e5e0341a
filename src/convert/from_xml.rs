//! XML tree → typed model
//!
//! Each recognised tag has a reader that picks out only the attributes of
//! its kind. Missing numeric attributes read as 0 and unknown keywords are
//! treated as absent. Unknown tags are skipped along with their subtree.

use compact_str::CompactString;

use crate::attr::AttrsExt;
use crate::document::{DEFAULT_XMLNS, Document};
use crate::element::{
    Circle, Element, ElementKind, ElementType, Elements, Ellipse, Image, Line, Link, Marker, Path,
    Polygon, Polyline, Rect, Text, TextPath,
};
use crate::error::{SvgError, SvgResult};
use crate::geom::{LengthAdjust, Method, Orient, Spacing, TextLength};
use crate::number::parse_points;
use crate::style::parse_style;
use crate::transform::parse_transforms;
use crate::xml::{XmlDocument, XmlElement};

/// Build a document from a parsed XML tree.
///
/// Fails when the root element is not `<svg>`.
pub fn document_from_xml(xml: &XmlDocument) -> SvgResult<Document> {
    let root = &xml.root;
    if local_name(&root.name) != "svg" {
        return Err(SvgError::UnexpectedRoot {
            found: root.name.clone(),
        });
    }

    Ok(Document {
        width: number(root, "width"),
        height: number(root, "height"),
        xmlns: root.attr("xmlns").unwrap_or(DEFAULT_XMLNS).to_string(),
        style: root.attr("style").map(parse_style),
        elements: elements_from_xml(&root.children),
    })
}

/// Convert a list of XML nodes, skipping those that are not elements of a
/// known kind.
pub fn elements_from_xml(nodes: &[XmlElement]) -> Elements {
    nodes.iter().filter_map(element_from_xml).collect()
}

/// Convert one XML node. Returns `None` for an unrecognised tag.
pub fn element_from_xml(node: &XmlElement) -> Option<Element> {
    let Some(ty) = ElementType::from_tag(local_name(&node.name)) else {
        tracing::debug!(tag = %node.name, "skipping unsupported element");
        return None;
    };
    tracing::trace!(tag = %node.name, kind = %ty, "reading element");

    let kind = match ty {
        ElementType::Rect => ElementKind::Rect(read_rect(node)),
        ElementType::Circle => ElementKind::Circle(Circle {
            r: number(node, "r"),
            cx: number(node, "cx"),
            cy: number(node, "cy"),
        }),
        ElementType::Ellipse => ElementKind::Ellipse(Ellipse {
            rx: number(node, "rx"),
            ry: number(node, "ry"),
            cx: number(node, "cx"),
            cy: number(node, "cy"),
        }),
        ElementType::Line => ElementKind::Line(Line {
            x1: number(node, "x1"),
            y1: number(node, "y1"),
            x2: number(node, "x2"),
            y2: number(node, "y2"),
        }),
        ElementType::Polygon => ElementKind::Polygon(Polygon {
            points: node.attr("points").map(parse_points).unwrap_or_default(),
        }),
        ElementType::Polyline => ElementKind::Polyline(Polyline {
            points: node.attr("points").map(parse_points).unwrap_or_default(),
        }),
        ElementType::Path => ElementKind::Path(Path {
            d: string(node, "d"),
        }),
        ElementType::Text => ElementKind::Text(read_text(node)),
        ElementType::TextPath => ElementKind::TextPath(read_text_path(node)),
        ElementType::Link => ElementKind::Link(read_link(node)),
        ElementType::Image => ElementKind::Image(Image {
            width: number(node, "width"),
            height: number(node, "height"),
            x: number(node, "x"),
            y: number(node, "y"),
            href: href(node),
        }),
        ElementType::Marker => ElementKind::Marker(read_marker(node)),
    };

    Some(Element {
        id: compact(node, "id"),
        class: compact(node, "class"),
        style: node.attr("style").map(parse_style),
        transforms: node.attr("transform").map(parse_transforms),
        kind,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Kind readers
// ─────────────────────────────────────────────────────────────────────────────

fn read_rect(node: &XmlElement) -> Rect {
    Rect {
        width: number(node, "width"),
        height: number(node, "height"),
        x: number(node, "x"),
        y: number(node, "y"),
        rx: number(node, "rx"),
        ry: number(node, "ry"),
    }
}

fn read_text(node: &XmlElement) -> Text {
    Text {
        x: number(node, "x"),
        y: number(node, "y"),
        dx: number(node, "dx"),
        dy: number(node, "dy"),
        rotate: number(node, "rotate"),
        text_length: node.attr("textLength").map(TextLength::parse),
        length_adjust: keyword(node, "lengthAdjust", LengthAdjust::from_keyword),
        contents: node.text.clone().unwrap_or_default(),
    }
}

fn read_text_path(node: &XmlElement) -> TextPath {
    TextPath {
        href: href(node),
        length_adjust: keyword(node, "lengthAdjust", LengthAdjust::from_keyword),
        method: keyword(node, "method", Method::from_keyword),
        spacing: keyword(node, "spacing", Spacing::from_keyword),
        start_offset: node.attr("startOffset").map(TextLength::parse),
        text_length: node.attr("textLength").map(TextLength::parse),
        contents: node.text.clone().unwrap_or_default(),
    }
}

fn read_link(node: &XmlElement) -> Link {
    Link {
        href: href(node),
        download: string(node, "download"),
        hreflang: string(node, "hreflang"),
        referrer_policy: string(node, "referrerpolicy"),
        rel: string(node, "rel"),
        target: string(node, "target"),
        mime_type: string(node, "type"),
        children: elements_from_xml(&node.children),
    }
}

fn read_marker(node: &XmlElement) -> Marker {
    Marker {
        marker_width: number(node, "markerWidth"),
        marker_height: number(node, "markerHeight"),
        ref_x: number(node, "refX"),
        ref_y: number(node, "refY"),
        orient: keyword(node, "orient", Orient::parse),
        children: elements_from_xml(&node.children),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Attribute helpers
// ─────────────────────────────────────────────────────────────────────────────

fn number(node: &XmlElement, name: &str) -> f64 {
    node.attrs.get_number(name).unwrap_or(0.0)
}

fn string(node: &XmlElement, name: &str) -> Option<String> {
    node.attr(name).map(str::to_string)
}

fn compact(node: &XmlElement, name: &str) -> Option<CompactString> {
    node.attr(name).map(CompactString::from)
}

/// `href`, falling back to the SVG 1.1 `xlink:href`
fn href(node: &XmlElement) -> Option<String> {
    string(node, "href").or_else(|| string(node, "xlink:href"))
}

fn keyword<T>(node: &XmlElement, name: &str, lookup: impl Fn(&str) -> Option<T>) -> Option<T> {
    let value = node.attr(name)?;
    let parsed = lookup(value.trim());
    if parsed.is_none() {
        tracing::trace!(name, value, "ignoring unrecognised attribute value");
    }
    parsed
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{LengthUnit, Point};
    use crate::transform::Transform;
    use crate::xml::parse_document;

    fn read(text: &str) -> SvgResult<Document> {
        document_from_xml(&parse_document(text)?)
    }

    #[test]
    fn test_root_attributes() {
        let doc = read(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100px"
                 style="background-color: white"/>"#,
        )
        .unwrap();
        assert_eq!(doc.width, 200.0);
        assert_eq!(doc.height, 100.0);
        assert_eq!(doc.xmlns, "http://www.w3.org/2000/svg");
        assert_eq!(
            doc.style.and_then(|s| s.background_color).as_deref(),
            Some("white")
        );
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let err = read("<html><rect/></html>").unwrap_err();
        assert!(matches!(err, SvgError::UnexpectedRoot { ref found } if found == "html"));
    }

    #[test]
    fn test_shapes() {
        let doc = read(
            r#"<svg>
  <rect width="5" height="3" x="1" y="2"/>
  <circle r="4" cx="1"/>
  <ellipse rx="3" ry="2" cx="1" cy="1"/>
  <line x1="0" y1="1" x2="2" y2="3"/>
  <polygon points="0,0 10,0 10,10"/>
  <polyline points="1 2 3 4"/>
  <path d="M0 0 L10 10"/>
  <image href="a.png" width="4" height="4"/>
</svg>"#,
        )
        .unwrap();

        let els = &doc.elements;
        assert_eq!(els.len(), 8);
        assert_eq!(els[0].kind.as_rect(), Some(&Rect::new(1.0, 2.0, 5.0, 3.0)));
        assert_eq!(els[1].kind.as_circle(), Some(&Circle::new(1.0, 0.0, 4.0)));
        assert_eq!(els[2].kind.as_ellipse(), Some(&Ellipse::new(1.0, 1.0, 3.0, 2.0)));
        assert_eq!(els[3].kind.as_line().map(|l| l.y2), Some(3.0));
        assert_eq!(els[4].kind.as_polygon().map(|p| p.points.len()), Some(3));
        assert_eq!(
            els[5].kind.as_polyline().map(|p| p.points[1]),
            Some(Point::new(3.0, 4.0))
        );
        assert_eq!(
            els[6].kind.as_path().and_then(|p| p.d.as_deref()),
            Some("M0 0 L10 10")
        );
        assert_eq!(els[7].kind.as_image().and_then(|i| i.href.as_deref()), Some("a.png"));
    }

    #[test]
    fn test_common_attributes() {
        let doc = read(
            r#"<svg><circle id="c1" class="dot" style="fill:red"
                 transform="translate(1,2) scale(3)" r="1"/></svg>"#,
        )
        .unwrap();
        let el = &doc.elements[0];
        assert_eq!(el.id.as_deref(), Some("c1"));
        assert_eq!(el.class.as_deref(), Some("dot"));
        assert_eq!(el.style.as_ref().and_then(|s| s.fill.as_deref()), Some("red"));
        let ts = el.transforms.as_ref().unwrap();
        assert_eq!(
            ts.as_slice(),
            &[Transform::translate(1.0, 2.0), Transform::scale(3.0, 3.0)]
        );
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let doc = read(r#"<svg><g><rect/></g><defs/><circle r="1"/></svg>"#).unwrap();
        assert_eq!(doc.elements.len(), 1);
        assert_eq!(doc.elements[0].element_type(), ElementType::Circle);
    }

    #[test]
    fn test_text_elements() {
        let doc = read(
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink">
  <text x="1" y="2" dx="3" textLength="10em" lengthAdjust="spacingAndGlyphs">Hello</text>
  <textpath xlink:href="#p" method="stretch" spacing="auto" startOffset="50%">Along</textpath>
</svg>"##,
        )
        .unwrap();

        let text = doc.elements[0].kind.as_text().unwrap();
        assert_eq!((text.x, text.y, text.dx, text.dy), (1.0, 2.0, 3.0, 0.0));
        assert_eq!(text.text_length, Some(TextLength::new(10.0, LengthUnit::Em)));
        assert_eq!(text.length_adjust, Some(LengthAdjust::SpacingAndGlyphs));
        assert_eq!(text.contents, "Hello");

        let tp = doc.elements[1].kind.as_text_path().unwrap();
        assert_eq!(tp.href.as_deref(), Some("#p"));
        assert_eq!(tp.method, Some(Method::Stretch));
        assert_eq!(tp.spacing, Some(Spacing::Auto));
        assert_eq!(tp.start_offset, Some(TextLength::new(50.0, LengthUnit::Percentage)));
        assert_eq!(tp.length_adjust, None);
        assert_eq!(tp.contents, "Along");
    }

    #[test]
    fn test_nested_containers() {
        let doc = read(
            r#"<svg>
  <marker markerWidth="4" markerHeight="3" refX="1" refY="2" orient="auto-start-reverse">
    <link href="https://example.com" target="_blank" type="text/html">
      <circle r="2"/>
      <unknown/>
    </link>
  </marker>
</svg>"#,
        )
        .unwrap();

        let marker = doc.elements[0].kind.as_marker().unwrap();
        assert_eq!((marker.marker_width, marker.ref_y), (4.0, 2.0));
        assert_eq!(marker.orient, Some(Orient::AutoStartReverse));

        let link = marker.children[0].kind.as_link().unwrap();
        assert_eq!(link.href.as_deref(), Some("https://example.com"));
        assert_eq!(link.target.as_deref(), Some("_blank"));
        assert_eq!(link.mime_type.as_deref(), Some("text/html"));
        assert_eq!(link.children.len(), 1);
        assert!(link.children[0].kind.is_circle());
    }

    #[test]
    fn test_unknown_keywords_read_as_absent() {
        let doc = read(r#"<svg><textpath method="wiggle" orient="x"/></svg>"#).unwrap();
        let tp = doc.elements[0].kind.as_text_path().unwrap();
        assert_eq!(tp.method, None);
        assert!(tp.contents.is_empty());
    }
}
