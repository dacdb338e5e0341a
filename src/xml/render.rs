//! Rendering an [`XmlDocument`] back to text

use super::{XmlDocument, XmlElement};
use crate::attr::Attrs;

// =============================================================================
// RenderConfig
// =============================================================================

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Configuration for XML rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Put each element on its own line, indented by depth.
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,
    /// Whether to emit the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl RenderConfig {
    /// Indented output with an XML declaration.
    pub const PRETTY: Self = Self {
        pretty: true,
        indent: 2,
        declaration: true,
    };

    /// Single-line output without a declaration.
    pub const COMPACT: Self = Self {
        pretty: false,
        indent: 0,
        declaration: false,
    };

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PRETTY
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a document to a string.
pub fn render_document(doc: &XmlDocument, config: &RenderConfig) -> String {
    let mut output = String::new();
    if config.declaration {
        output.push_str(XML_DECLARATION);
        if config.pretty {
            output.push('\n');
        }
    }
    render_into(&doc.root, config, 0, &mut output);
    if config.pretty {
        output.push('\n');
    }
    output
}

/// Render a single element subtree to a string.
pub fn render_element(elem: &XmlElement, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_into(elem, config, 0, &mut output);
    output
}

fn render_into(elem: &XmlElement, config: &RenderConfig, depth: usize, output: &mut String) {
    if config.pretty {
        output.extend(std::iter::repeat_n(' ', depth * config.indent));
    }

    output.push('<');
    output.push_str(&elem.name);
    render_attrs(&elem.attrs, output);

    if elem.is_empty() {
        output.push_str("/>");
        return;
    }
    output.push('>');

    match &elem.text {
        // Mixed content is written inline so no whitespace is added to it
        Some(text) if !text.is_empty() => {
            output.push_str(&escape_text(text));
            for child in &elem.children {
                render_into(child, &RenderConfig::COMPACT, 0, output);
            }
        }
        _ => {
            for child in &elem.children {
                if config.pretty {
                    output.push('\n');
                }
                render_into(child, config, depth + 1, output);
            }
            if config.pretty {
                output.push('\n');
                output.extend(std::iter::repeat_n(' ', depth * config.indent));
            }
        }
    }

    output.push_str("</");
    output.push_str(&elem.name);
    output.push('>');
}

fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape character data.
fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\r' => result.push_str("&#13;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    fn sample() -> XmlDocument {
        XmlDocument::new(
            XmlElement::new("svg")
                .with_attr("width", "10")
                .with_child(XmlElement::new("rect").with_attr("x", "1"))
                .with_child(
                    XmlElement::new("link")
                        .with_child(XmlElement::new("text").with_text("a < b & \"c\"")),
                ),
        )
    }

    #[test]
    fn test_compact() {
        let out = render_document(&sample(), &RenderConfig::COMPACT);
        assert_eq!(
            out,
            r#"<svg width="10"><rect x="1"/><link><text>a &lt; b &amp; "c"</text></link></svg>"#
        );
    }

    #[test]
    fn test_pretty() {
        let out = render_document(&sample(), &RenderConfig::PRETTY);
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg width=\"10\">\n",
            "  <rect x=\"1\"/>\n",
            "  <link>\n",
            "    <text>a &lt; b &amp; \"c\"</text>\n",
            "  </link>\n",
            "</svg>\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_attribute_escaping() {
        let el = XmlElement::new("path").with_attr("d", "M0 0\n\"<&>\"");
        assert_eq!(
            render_element(&el, &RenderConfig::COMPACT),
            r#"<path d="M0 0&#10;&quot;&lt;&amp;&gt;&quot;"/>"#
        );
    }

    #[test]
    fn test_carriage_return_is_escaped() {
        let el = XmlElement::new("text").with_attr("d", "a\rb").with_text("c\r\nd");
        let out = render_element(&el, &RenderConfig::COMPACT);
        assert_eq!(out, "<text d=\"a&#13;b\">c&#13;\nd</text>");

        let back = parse_document(&out).unwrap().root;
        assert_eq!(back, el);
    }

    #[test]
    fn test_rendered_text_parses_back() {
        for config in [RenderConfig::PRETTY, RenderConfig::COMPACT.with_indent(4)] {
            let text = render_document(&sample(), &config);
            assert_eq!(parse_document(&text).unwrap(), sample());
        }
    }
}
