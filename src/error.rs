//! Error types for tola-svg.
//!
//! Only structural and I/O failures are errors. Malformed style or transform
//! fragments are skipped by their parsers and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing SVG documents.
#[derive(Debug, Error)]
pub enum SvgError {
    /// Input is not well-formed XML
    #[error("malformed xml: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Input has no root element
    #[error("document has no root element")]
    MissingRoot,

    /// Root element is something other than `<svg>`
    #[error("unexpected root element: expected <svg>, found <{found}>")]
    UnexpectedRoot {
        /// Tag name of the root that was found
        found: String,
    },

    /// File could not be read or written
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// Path of the file involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Result type alias for SVG operations.
pub type SvgResult<T> = Result<T, SvgError>;

impl SvgError {
    /// Create an I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this is a structural failure (bad XML or wrong root).
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
