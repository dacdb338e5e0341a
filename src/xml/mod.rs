//! Generic XML tree
//!
//! The typed SVG model is converted to and from this tree; the tree in turn
//! is read from text by [`parse`] (roxmltree) and written by [`render`].
//!
//! Only elements, attributes and character data are kept. Comments,
//! processing instructions and the DOCTYPE are dropped on reading.

pub mod parse;
pub mod render;

pub use parse::parse_document;
pub use render::{RenderConfig, render_document, render_element};

use crate::attr::{Attrs, AttrsExt};

/// An XML element with ordered attributes, optional text and child elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    /// Tag name, including any namespace prefix
    pub name: String,
    pub attrs: Attrs,
    /// Concatenated character data of the element, if any
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Builder: set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if this element has neither text nor children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.as_deref().is_none_or(str::is_empty)
    }
}

/// A parsed XML document: its single root element
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }
}
