//! Container payloads
//!
//! Links and markers own an ordered list of child elements, which may in
//! turn contain further links and markers.

use super::Elements;
use crate::geom::Orient;

/// `<link>`: a hyperlink wrapping its children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub href: Option<String>,
    pub download: Option<String>,
    pub hreflang: Option<String>,
    pub referrer_policy: Option<String>,
    pub rel: Option<String>,
    pub target: Option<String>,
    /// MIME type of the linked resource (`type` attribute)
    pub mime_type: Option<String>,
    pub children: Elements,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    /// Builder: set the target browsing context
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Builder: replace the child list
    pub fn with_children(mut self, children: impl Into<Elements>) -> Self {
        self.children = children.into();
        self
    }
}

/// `<marker>`: graphics drawn at path vertices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Marker {
    pub marker_width: f64,
    pub marker_height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
    pub orient: Option<Orient>,
    pub children: Elements,
}

impl Marker {
    pub fn new(marker_width: f64, marker_height: f64) -> Self {
        Self {
            marker_width,
            marker_height,
            ..Default::default()
        }
    }

    /// Builder: set the reference point
    pub fn with_ref(mut self, ref_x: f64, ref_y: f64) -> Self {
        self.ref_x = ref_x;
        self.ref_y = ref_y;
        self
    }

    /// Builder: set the orientation
    pub fn with_orient(mut self, orient: Orient) -> Self {
        self.orient = Some(orient);
        self
    }

    /// Builder: replace the child list
    pub fn with_children(mut self, children: impl Into<Elements>) -> Self {
        self.children = children.into();
        self
    }
}
