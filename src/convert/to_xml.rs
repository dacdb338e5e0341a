//! Typed model → XML tree
//!
//! Attributes are emitted kind-specific first, then `id`, `class`,
//! `transform` and `style`. Optional values that are unset are left out,
//! as are rect corner radii and text offsets that are 0.

use crate::attr::{Attrs, AttrsExt};
use crate::document::Document;
use crate::element::{Element, ElementKind, Elements, Link, Marker, Rect, Text, TextPath};
use crate::number::format_points;
use crate::xml::{XmlDocument, XmlElement};

/// Build the XML tree of a document.
///
/// The root always carries `width`, `height` and `xmlns`. Of the document
/// style only `background-color` is written.
pub fn document_to_xml(doc: &Document) -> XmlDocument {
    let mut root = XmlElement::new("svg");
    root.attrs.set_number("width", doc.width);
    root.attrs.set_number("height", doc.height);
    root.attrs.set_attr("xmlns", doc.xmlns.as_str());
    if let Some(color) = doc.style.as_ref().and_then(|s| s.background_color.as_ref()) {
        root.attrs
            .set_attr("style", format!("background-color: {color}"));
    }
    root.children = elements_to_xml(&doc.elements);
    XmlDocument::new(root)
}

pub fn elements_to_xml(elements: &Elements) -> Vec<XmlElement> {
    elements.iter().map(element_to_xml).collect()
}

/// Convert one element and its subtree.
pub fn element_to_xml(element: &Element) -> XmlElement {
    let mut node = XmlElement::new(element.element_type().tag());
    let attrs = &mut node.attrs;

    match &element.kind {
        ElementKind::Rect(rect) => write_rect(rect, attrs),
        ElementKind::Circle(c) => {
            attrs.set_number("r", c.r);
            attrs.set_number("cx", c.cx);
            attrs.set_number("cy", c.cy);
        }
        ElementKind::Ellipse(e) => {
            attrs.set_number("rx", e.rx);
            attrs.set_number("ry", e.ry);
            attrs.set_number("cx", e.cx);
            attrs.set_number("cy", e.cy);
        }
        ElementKind::Line(l) => {
            attrs.set_number("x1", l.x1);
            attrs.set_number("y1", l.y1);
            attrs.set_number("x2", l.x2);
            attrs.set_number("y2", l.y2);
        }
        ElementKind::Polygon(p) => attrs.set_attr("points", format_points(&p.points)),
        ElementKind::Polyline(p) => attrs.set_attr("points", format_points(&p.points)),
        ElementKind::Path(p) => set_opt(attrs, "d", p.d.as_deref()),
        ElementKind::Text(text) => {
            write_text(text, attrs);
            node.text = content(&text.contents);
        }
        ElementKind::TextPath(tp) => {
            write_text_path(tp, attrs);
            node.text = content(&tp.contents);
        }
        ElementKind::Link(link) => {
            write_link(link, attrs);
            node.children = elements_to_xml(&link.children);
        }
        ElementKind::Image(img) => {
            attrs.set_number("width", img.width);
            attrs.set_number("height", img.height);
            attrs.set_number("x", img.x);
            attrs.set_number("y", img.y);
            set_opt(attrs, "href", img.href.as_deref());
        }
        ElementKind::Marker(marker) => {
            write_marker(marker, attrs);
            node.children = elements_to_xml(&marker.children);
        }
    }

    let attrs = &mut node.attrs;
    set_opt(attrs, "id", element.id.as_deref());
    set_opt(attrs, "class", element.class.as_deref());
    if let Some(transforms) = &element.transforms {
        attrs.set_attr("transform", transforms.to_string());
    }
    if let Some(style) = &element.style {
        attrs.set_attr("style", style.to_css());
    }

    node
}

// ─────────────────────────────────────────────────────────────────────────────
// Kind writers
// ─────────────────────────────────────────────────────────────────────────────

fn write_rect(rect: &Rect, attrs: &mut Attrs) {
    attrs.set_number("width", rect.width);
    attrs.set_number("height", rect.height);
    attrs.set_number("x", rect.x);
    attrs.set_number("y", rect.y);
    set_nonzero(attrs, "rx", rect.rx);
    set_nonzero(attrs, "ry", rect.ry);
}

fn write_text(text: &Text, attrs: &mut Attrs) {
    attrs.set_number("x", text.x);
    attrs.set_number("y", text.y);
    set_nonzero(attrs, "dx", text.dx);
    set_nonzero(attrs, "dy", text.dy);
    set_nonzero(attrs, "rotate", text.rotate);
    set_display(attrs, "textLength", text.text_length);
    set_display(attrs, "lengthAdjust", text.length_adjust);
}

fn write_text_path(tp: &TextPath, attrs: &mut Attrs) {
    set_opt(attrs, "href", tp.href.as_deref());
    set_display(attrs, "lengthAdjust", tp.length_adjust);
    set_display(attrs, "method", tp.method);
    set_display(attrs, "spacing", tp.spacing);
    set_display(attrs, "startOffset", tp.start_offset);
    set_display(attrs, "textLength", tp.text_length);
}

fn write_link(link: &Link, attrs: &mut Attrs) {
    set_opt(attrs, "href", link.href.as_deref());
    set_opt(attrs, "download", link.download.as_deref());
    set_opt(attrs, "hreflang", link.hreflang.as_deref());
    set_opt(attrs, "referrerpolicy", link.referrer_policy.as_deref());
    set_opt(attrs, "rel", link.rel.as_deref());
    set_opt(attrs, "target", link.target.as_deref());
    set_opt(attrs, "type", link.mime_type.as_deref());
}

fn write_marker(marker: &Marker, attrs: &mut Attrs) {
    attrs.set_number("markerWidth", marker.marker_width);
    attrs.set_number("markerHeight", marker.marker_height);
    attrs.set_number("refX", marker.ref_x);
    attrs.set_number("refY", marker.ref_y);
    set_display(attrs, "orient", marker.orient);
}

// ─────────────────────────────────────────────────────────────────────────────
// Attribute helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Empty character data is written as an empty element
fn content(contents: &str) -> Option<String> {
    (!contents.is_empty()).then(|| contents.to_string())
}

fn set_opt(attrs: &mut Attrs, name: &str, value: Option<&str>) {
    if let Some(v) = value {
        attrs.set_attr(name, v);
    }
}

fn set_nonzero(attrs: &mut Attrs, name: &str, value: f64) {
    if value != 0.0 {
        attrs.set_number(name, value);
    }
}

fn set_display<T: std::fmt::Display>(attrs: &mut Attrs, name: &str, value: Option<T>) {
    if let Some(v) = value {
        attrs.set_attr(name, v.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::from_xml::{document_from_xml, element_from_xml};
    use crate::element::{Circle, ElementType, Path};
    use crate::geom::{
        AngleUnit, LengthAdjust, LengthUnit, Method, Orient, Points, Spacing, TextLength,
    };
    use crate::style::{LineJoin, Style};
    use crate::transform::{Transform, Transforms};
    use crate::xml::{RenderConfig, parse_document, render_document};

    fn names(node: &XmlElement) -> Vec<&str> {
        node.attrs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_rect_zero_radius_is_omitted() {
        let el = Element::new(Rect::new(1.0, 2.0, 5.0, 3.0));
        let node = element_to_xml(&el);
        assert_eq!(node.name, "rect");
        assert_eq!(names(&node), ["width", "height", "x", "y"]);
        assert_eq!(node.attr("width"), Some("5"));

        let back = element_from_xml(&node).unwrap();
        assert_eq!(back.kind.as_rect().map(|r| r.rx), Some(0.0));
        assert_eq!(back, el);
    }

    #[test]
    fn test_common_attributes_come_last() {
        let el = Element::new(Circle::new(1.0, 1.0, 0.5))
            .with_id("c")
            .with_class("dot")
            .with_transforms([Transform::rotate(45.0)].into_iter().collect())
            .with_style(Style::new().with_fill("red"));
        let node = element_to_xml(&el);
        assert_eq!(names(&node), ["r", "cx", "cy", "id", "class", "transform", "style"]);
        assert_eq!(node.attr("transform"), Some("rotate(45)"));
        assert_eq!(node.attr("style"), Some("fill:red"));
    }

    #[test]
    fn test_unset_optionals_are_omitted() {
        let node = element_to_xml(&Element::new(Path::default()));
        assert!(node.attrs.is_empty());

        // Points are always written, even when empty
        let node = element_to_xml(&Element::new(crate::element::Polygon::default()));
        assert_eq!(node.attr("points"), Some(""));

        let node = element_to_xml(&Element::new(Text::new(0.0, 0.0, "hi")));
        assert_eq!(names(&node), ["x", "y"]);
        assert_eq!(node.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_root_attributes() {
        let mut doc = Document::with_size(100.0, 50.5);
        doc.style = Some(Style::new().with_fill("red").with_background_color("#fff"));
        let xml = document_to_xml(&doc);
        assert_eq!(names(&xml.root), ["width", "height", "xmlns", "style"]);
        assert_eq!(xml.root.attr("height"), Some("50.5"));
        assert_eq!(xml.root.attr("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(xml.root.attr("style"), Some("background-color: #fff"));

        doc.style = Some(Style::new().with_fill("red"));
        assert!(document_to_xml(&doc).root.attr("style").is_none());
    }

    #[test]
    fn test_container_nesting_round_trip() {
        let marker = Marker::new(4.0, 4.0)
            .with_ref(2.0, 2.0)
            .with_orient(Orient::Angle { value: 0.25, unit: AngleUnit::Turns })
            .with_children(vec![Element::new(
                Link::new("#x").with_children(vec![Element::new(Circle::new(0.0, 0.0, 1.0))]),
            )]);
        let mut doc = Document::new();
        doc.push(marker);

        let xml = document_to_xml(&doc);
        let m = &xml.root.children[0];
        assert_eq!(m.name, "marker");
        assert_eq!(m.attr("orient"), Some("0.25turn"));
        assert_eq!(m.children[0].name, "link");
        assert_eq!(m.children[0].children[0].name, "circle");

        let back = document_from_xml(&xml).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_full_document_round_trip_through_text() {
        let mut style = Style::new().with_stroke("black").with_stroke_width(0.5);
        style.stroke_opacity = Some(0.0);
        style.stroke_linejoin = Some(LineJoin::MiterClip);

        let mut doc = Document::with_size(640.0, 480.0);
        doc.style = Some(Style::new().with_background_color("white"));
        doc.push(
            Element::new(Rect::new(1.0, 2.0, 5.0, 3.0).with_radii(1.5, 0.0))
                .with_id("r")
                .with_style(style),
        );
        doc.push(Element::new(crate::element::Polyline::new(
            [(0.0, 0.0), (10.0, -2.5)].into_iter().collect::<Points>(),
        )));
        doc.push(
            Element::new(Text {
                dx: 2.0,
                rotate: -15.0,
                text_length: Some(TextLength::new(3.0, LengthUnit::Em)),
                length_adjust: Some(LengthAdjust::SpacingAndGlyphs),
                ..Text::new(5.0, 6.0, "a < b")
            })
            .with_transforms(Transforms::parse("translate(1,2) skewX(5)")),
        );
        doc.push(TextPath {
            method: Some(Method::Stretch),
            spacing: Some(Spacing::Auto),
            start_offset: Some(TextLength::new(10.0, LengthUnit::Percentage)),
            ..TextPath::new("#curve", "along")
        });
        doc.push(Link {
            download: Some("file.svg".into()),
            rel: Some("nofollow".into()),
            mime_type: Some("image/svg+xml".into()),
            ..Link::new("https://example.com").with_target("_top")
        });
        doc.push(crate::element::Image::new("pic.png", 8.0, 8.0).at(1.0, 1.0));

        let text = render_document(&document_to_xml(&doc), &RenderConfig::PRETTY);
        let back = document_from_xml(&parse_document(&text).unwrap()).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.elements[0].element_type(), ElementType::Rect);
    }

    fn round_trip(doc: &Document, config: &RenderConfig) -> Document {
        let text = render_document(&document_to_xml(doc), config);
        document_from_xml(&parse_document(&text).unwrap()).unwrap()
    }

    #[test]
    fn test_character_data_survives_round_trip() {
        let mut doc = Document::new();
        doc.push(Text::new(0.0, 0.0, "  "));
        doc.push(Text::new(1.0, 1.0, ""));
        doc.push(Text::new(2.0, 2.0, "a\r\nb"));
        doc.push(TextPath::new("#p", " \t "));
        doc.push(Link::new("#l").with_children(vec![Element::new(Text::new(3.0, 3.0, " "))]));
        doc.push(Path::new("M0 0\rL1 1"));

        for config in [RenderConfig::PRETTY, RenderConfig::COMPACT] {
            assert_eq!(round_trip(&doc, &config), doc, "{config:?}");
        }
    }

    #[test]
    fn test_empty_contents_is_written_as_empty_element() {
        let node = element_to_xml(&Element::new(Text::new(0.0, 0.0, "")));
        assert_eq!(node.text, None);
        assert_eq!(
            crate::xml::render_element(&node, &RenderConfig::COMPACT),
            r#"<text x="0" y="0"/>"#
        );
    }
}
