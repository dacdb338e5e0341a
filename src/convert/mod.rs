//! Conversion between the generic XML tree and the typed model
//!
//! | Direction | Module | Entry point |
//! |-----------|--------|-------------|
//! | XML → model | [`from_xml`] | [`document_from_xml()`] |
//! | model → XML | [`to_xml`] | [`document_to_xml()`] |
//!
//! Both directions dispatch exhaustively on [`ElementType`](crate::element::ElementType),
//! so a new element kind has to be handled in each before the crate builds.

pub mod from_xml;
pub mod to_xml;

pub use self::from_xml::{document_from_xml, element_from_xml, elements_from_xml};
pub use self::to_xml::{document_to_xml, element_to_xml, elements_to_xml};
