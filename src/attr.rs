//! Attribute list for generic XML elements
//!
//! Attributes keep document order so a rendered element lists them in the
//! order the serializer attached them.

use crate::number;

/// Element attributes as ordered name/value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Get an attribute as a number, `None` when the attribute is absent
    ///
    /// The value is read with [`number::parse_leading`], so `"12px"` is 12
    /// and a value with no numeric prefix is 0.
    fn get_number(&self, name: &str) -> Option<f64>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Set a numeric attribute using the document number format
    fn set_number(&mut self, name: impl Into<String>, value: f64);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn get_number(&self, name: &str) -> Option<f64> {
        self.get_attr(name).map(number::parse_leading)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn set_number(&mut self, name: impl Into<String>, value: f64) {
        self.set_attr(name, number::format(value));
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}
