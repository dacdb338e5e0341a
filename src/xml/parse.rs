//! Reading XML text into an [`XmlDocument`] with roxmltree

use roxmltree::{Node, ParsingOptions};

use super::{XmlDocument, XmlElement};
use crate::attr::Attrs;
use crate::error::{SvgError, SvgResult};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse XML text into a generic element tree.
///
/// A DOCTYPE is accepted, as SVG files exported by editors commonly carry
/// one. Namespace declarations are kept as `xmlns`/`xmlns:*` attributes on
/// the element that introduces them; prefixed names keep their prefix.
pub fn parse_document(text: &str) -> SvgResult<XmlDocument> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = match roxmltree::Document::parse_with_options(text, options) {
        Ok(doc) => doc,
        // roxmltree also reports a truncated start tag as NoRootNode
        Err(roxmltree::Error::NoRootNode) if is_prolog_only(text) => {
            return Err(SvgError::MissingRoot);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(XmlDocument::new(convert_node(doc.root_element())))
}

fn convert_node(node: Node<'_, '_>) -> XmlElement {
    let mut attrs = Attrs::new();
    push_namespace_decls(node, &mut attrs);
    for attr in node.attributes() {
        attrs.push((
            qualified_name(node, attr.namespace(), attr.name()),
            attr.value().to_string(),
        ));
    }

    let mut text = String::new();
    let mut children = Vec::new();
    for child in node.children() {
        if child.is_element() {
            children.push(convert_node(child));
        } else if let Some(t) = child.is_text().then(|| child.text()).flatten() {
            text.push_str(t);
        }
    }

    XmlElement {
        name: qualified_name(node, node.tag_name().namespace(), node.tag_name().name()),
        attrs,
        // Whitespace between child elements is layout, not content
        text: if children.is_empty() {
            (!text.is_empty()).then_some(text)
        } else {
            (!text.trim().is_empty()).then_some(text)
        },
        children,
    }
}

/// Whether `text` holds nothing but whitespace, comments, processing
/// instructions and a DOCTYPE. An unterminated construct counts as markup.
fn is_prolog_only(text: &str) -> bool {
    let mut rest = text.trim_start_matches('\u{feff}');
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return true;
        }
        let end = if rest.starts_with("<?") {
            rest.find("?>").map(|i| i + 2)
        } else if rest.starts_with("<!--") {
            rest[4..].find("-->").map(|i| i + 4 + 3)
        } else if rest.starts_with("<!") {
            doctype_end(rest)
        } else {
            None
        };
        match end {
            Some(i) => rest = &rest[i..],
            None => return false,
        }
    }
}

/// Byte offset just past a `<!...>` declaration, skipping an internal subset
fn doctype_end(decl: &str) -> Option<usize> {
    let mut in_subset = false;
    for (i, c) in decl.char_indices() {
        match c {
            '[' => in_subset = true,
            ']' => in_subset = false,
            '>' if !in_subset => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Emit the namespace declarations that `node` adds to its parent's scope
fn push_namespace_decls(node: Node<'_, '_>, attrs: &mut Attrs) {
    let parent = node.parent_element();
    for ns in node.namespaces() {
        if ns.name() == Some("xml") {
            continue;
        }
        let inherited = parent.is_some_and(|p| {
            p.namespaces()
                .any(|pns| pns.name() == ns.name() && pns.uri() == ns.uri())
        });
        if inherited {
            continue;
        }
        let name = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        attrs.push((name, ns.uri().to_string()));
    }
}

fn qualified_name(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    let prefix = match namespace {
        Some(XML_NAMESPACE) => Some("xml"),
        Some(uri) => node.lookup_prefix(uri),
        None => None,
    };
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}:{local}"),
        _ => local.to_string(),
    }
}
